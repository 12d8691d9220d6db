use sea_orm::entity::prelude::*;

/// A completed quiz submission. The table keeps the historic `users` name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[sea_orm(column_type = "Integer")]
    pub score: i32,
    /// JSON encoded list of answers, one per question in the order they were scored.
    pub answers: String,
    pub submitted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
