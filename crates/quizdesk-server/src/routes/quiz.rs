use crate::AppConfig;
use crate::routes::form::FormFields;
use crate::routes::quiz::error::QuizError;
use crate::views::View;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use quizdesk_core::scoring;
use quizdesk_db::{question, respondent};
use quizdesk_model::question::{PublicQuestion, Question};
use quizdesk_model::respondent::{Contact, Respondent, Submission};
use quizdesk_model_tools::convert::{TryFromDbModel, TryIntoModel};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use serde::Serialize;

pub(crate) mod error;

const MISSING_FIELDS: &str = "All fields are required";

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/start-test", post(start_test))
        .route("/submit-test", post(submit_test))
        .with_state(())
}

#[derive(Debug, Default, Serialize)]
struct IndexPage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<&'a Contact>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestQuestion<'a> {
    number: usize,
    #[serde(flatten)]
    question: PublicQuestion<'a>,
}

#[derive(Debug, Serialize)]
struct TestPage<'a> {
    contact: &'a Contact,
    questions: Vec<TestQuestion<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultPage<'a> {
    contact: &'a Contact,
    score: u32,
    total: usize,
}

async fn load_questions(conn: &DatabaseConnection) -> Result<Vec<Question>, QuizError> {
    let questions = question::Query::list_all(conn)
        .await?
        .into_iter()
        .map(Question::try_from_db_model)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(questions)
}

async fn home(Extension(app_config): Extension<AppConfig>) -> Result<Response, QuizError> {
    let page = app_config.views().render(View::Index, &IndexPage::default())?;
    Ok(page.into_response())
}

async fn start_test(
    Extension(app_config): Extension<AppConfig>,
    Extension(conn): Extension<Arc<DatabaseConnection>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, QuizError> {
    let contact = FormFields::from(fields).contact();
    if !contact.is_complete() {
        tracing::debug!("start-test rejected, contact details incomplete");
        let page = app_config.views().render(
            View::Index,
            &IndexPage {
                error: Some(MISSING_FIELDS),
                contact: Some(&contact),
            },
        )?;
        return Ok(page.into_response());
    }

    let questions = load_questions(&conn).await?;
    tracing::info!(questions = questions.len(), "starting test");

    let page = app_config.views().render(
        View::Test,
        &TestPage {
            contact: &contact,
            questions: questions
                .iter()
                .enumerate()
                .map(|(index, question)| TestQuestion {
                    number: index + 1,
                    question: question.public(),
                })
                .collect(),
        },
    )?;
    Ok(page.into_response())
}

/// Scores and stores a submission. The contact details are stored as sent, even when empty.
async fn submit_test(
    Extension(app_config): Extension<AppConfig>,
    Extension(conn): Extension<Arc<DatabaseConnection>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, QuizError> {
    let Submission { contact, answers } = FormFields::from(fields).submission();

    let questions = load_questions(&conn).await?;
    let score = scoring::score_submission(&questions, &answers);
    let recorded = scoring::align_answers(&questions, &answers);

    let stored = respondent::Mutation::create_respondent(
        &*conn,
        &contact.full_name,
        &contact.email,
        &contact.phone_number,
        score,
        &recorded,
    )
    .await?;
    let result: Respondent = stored.try_into_model()?;
    tracing::info!(respondent = %result.id, score = result.score, total = questions.len(), "stored test result");

    let page = app_config.views().render(
        View::Result,
        &ResultPage {
            contact: &result.contact,
            score: result.score,
            total: questions.len(),
        },
    )?;
    Ok(page.into_response())
}
