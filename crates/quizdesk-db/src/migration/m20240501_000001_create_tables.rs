use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Question::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Question::QuestionText).text().not_null())
                    .col(ColumnDef::new(Question::Options).text().not_null())
                    .col(ColumnDef::new(Question::CorrectAnswer).text().not_null())
                    .col(ColumnDef::new(Question::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Results keep the historic `users` table name
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::FullName).text().not_null())
                    .col(ColumnDef::new(Users::Email).text().not_null())
                    .col(ColumnDef::new(Users::PhoneNumber).text().not_null())
                    .col(ColumnDef::new(Users::Score).integer().not_null())
                    .col(ColumnDef::new(Users::Answers).text().not_null())
                    .col(ColumnDef::new(Users::SubmittedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Question::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Question {
    Table,
    Id,
    QuestionText,
    Options,
    CorrectAnswer,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FullName,
    Email,
    PhoneNumber,
    Score,
    Answers,
    SubmittedAt,
}
