use crate::AppConfig;
use crate::admin::RequireAdmin;
use crate::routes::admin::error::AdminError;
use crate::routes::form::{CORRECT_ANSWER, FormFields, OPTIONS, QUESTION_TEXT};
use crate::views::View;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use http::StatusCode;
use quizdesk_core::question::validate_question;
use quizdesk_db::question;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use serde::Serialize;

pub(crate) mod error;

const ADDED: &str = "Question added successfully!";
const STORE_FAILED: &str = "An error occurred while adding the question.";

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/admin/add-question", get(add_question_form))
        .route("/add-question", post(add_question))
        .with_state(())
}

#[derive(Debug, Default, Serialize)]
struct AdminPage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<&'a str>,
}

fn render(app_config: &AppConfig, status: StatusCode, page: &AdminPage<'_>) -> Result<Response, AdminError> {
    let page = app_config.views().render(View::Admin, page)?;
    Ok((status, page).into_response())
}

async fn add_question_form(
    _admin: RequireAdmin,
    Extension(app_config): Extension<AppConfig>,
) -> Result<Response, AdminError> {
    render(&app_config, StatusCode::OK, &AdminPage::default())
}

async fn add_question(
    _admin: RequireAdmin,
    Extension(app_config): Extension<AppConfig>,
    Extension(conn): Extension<Arc<DatabaseConnection>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AdminError> {
    let fields = FormFields::from(fields);
    let new_question = match validate_question(
        fields.first(QUESTION_TEXT),
        &fields.list(OPTIONS),
        fields.first(CORRECT_ANSWER),
    ) {
        Ok(new_question) => new_question,
        Err(error) => {
            tracing::debug!(%error, "rejected question");
            let message = error.to_string();
            return render(
                &app_config,
                StatusCode::BAD_REQUEST,
                &AdminPage {
                    error: Some(&message),
                    ..AdminPage::default()
                },
            );
        }
    };

    match question::Mutation::create_question(
        &*conn,
        &new_question.question_text,
        &new_question.options,
        &new_question.correct_answer,
    )
    .await
    {
        Ok(created) => {
            tracing::info!(question = %created.id, "question added");
            render(
                &app_config,
                StatusCode::OK,
                &AdminPage {
                    success: Some(ADDED),
                    ..AdminPage::default()
                },
            )
        }
        Err(error) => {
            tracing::error!(error = &error as &dyn std::error::Error, "error adding question");
            render(
                &app_config,
                StatusCode::INTERNAL_SERVER_ERROR,
                &AdminPage {
                    error: Some(STORE_FAILED),
                    ..AdminPage::default()
                },
            )
        }
    }
}
