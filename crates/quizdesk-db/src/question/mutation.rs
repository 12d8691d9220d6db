use quizdesk_entity::question;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_question<C: ConnectionTrait>(
        db: &C,
        question_text: &str,
        options: &[String],
        correct_answer: &str,
    ) -> Result<question::Model, DbErr> {
        let options = serde_json::to_string(options).map_err(|error| DbErr::Json(error.to_string()))?;

        let question = question::ActiveModel {
            id: Set(Uuid::new_v4()),
            question_text: Set(question_text.to_string()),
            options: Set(options),
            correct_answer: Set(correct_answer.to_string()),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        question.insert(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to insert question");
        })
    }
}
