use crate::views::ViewError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum QuizError {
    #[error(transparent)]
    SeaOrmError(#[from] sea_orm::DbErr),

    #[error("Stored quiz data could not be read: {0}")]
    ConversionError(#[from] quizdesk_model_tools::error::Error),

    #[error(transparent)]
    ViewError(#[from] ViewError),
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        match self {
            QuizError::SeaOrmError(e) => {
                tracing::error!(error = &e as &dyn std::error::Error, "database error while serving the quiz");
            }
            QuizError::ConversionError(e) => {
                tracing::error!(error = &e as &dyn std::error::Error, "failed to convert stored quiz data");
            }
            QuizError::ViewError(e) => {
                tracing::error!(error = &e as &dyn std::error::Error, "failed to render quiz page");
            }
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "An error occurred, please try again later.").into_response()
    }
}
