use crate::views::ViewError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum AdminError {
    #[error(transparent)]
    ViewError(#[from] ViewError),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            AdminError::ViewError(e) => {
                tracing::error!(error = &e as &dyn std::error::Error, "failed to render admin page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Admin page could not be rendered").into_response()
            }
        }
    }
}
