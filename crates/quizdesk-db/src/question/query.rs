use quizdesk_entity::question::{self, Entity as Question, Model as QuestionModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder};
use std::error::Error;

pub struct Query;

impl Query {
    /// Loads every question, oldest first. Ties on `created_at` are broken by id so two
    /// calls always agree on the order.
    pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<QuestionModel>, DbErr> {
        Question::find()
            .order_by_asc(question::Column::CreatedAt)
            .order_by_asc(question::Column::Id)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load questions");
            })
    }

    pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
        Question::find().count(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to count questions");
        })
    }
}
