use quizdesk_entity::respondent::{self, Entity as Respondent, Model as RespondentModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<RespondentModel>, DbErr> {
        Respondent::find_by_id(id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading respondent");
        })
    }

    pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<RespondentModel>, DbErr> {
        Respondent::find()
            .order_by_asc(respondent::Column::SubmittedAt)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading respondents");
            })
    }
}
