use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http::StatusCode;
use quizdesk_core::status::get_sea_orm_db_status;
use quizdesk_model::status::ComponentStatus;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::instrument;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/status", get(get_status)).with_state(())
}

#[derive(Debug, Clone)]
struct Status {
    database: ComponentStatus,
}

impl Status {
    pub(crate) fn status_code(&self) -> StatusCode {
        if self.database.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<Status> for quizdesk_model::status::Status {
    fn from(val: Status) -> Self {
        quizdesk_model::status::Status {
            database: val.database.into_message(),
        }
    }
}

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let status: quizdesk_model::status::Status = self.into();
        (status_code, Json(status)).into_response()
    }
}

#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    Status {
        database: get_sea_orm_db_status(&conn, None).await,
    }
}
