use quizdesk_entity::respondent;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_respondent<C: ConnectionTrait>(
        db: &C,
        full_name: &str,
        email: &str,
        phone_number: &str,
        score: u32,
        answers: &[String],
    ) -> Result<respondent::Model, DbErr> {
        let score = i32::try_from(score).map_err(|_| DbErr::Custom(format!("score {score} out of range")))?;
        let answers = serde_json::to_string(answers).map_err(|error| DbErr::Json(error.to_string()))?;

        let respondent = respondent::ActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(full_name.to_string()),
            email: Set(email.to_string()),
            phone_number: Set(phone_number.to_string()),
            score: Set(score),
            answers: Set(answers),
            submitted_at: Set(chrono::Utc::now().naive_utc()),
        };
        respondent.insert(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to insert respondent result");
        })
    }
}
