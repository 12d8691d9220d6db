use chrono::NaiveDate;
use quizdesk_db::question::Query;
use quizdesk_db::respondent::Mutation;
use quizdesk_entity::{question, respondent};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use test_log::test;
use uuid::Uuid;

fn timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test(tokio::test)]
async fn test_list_questions() -> Result<(), DbErr> {
    let models = [
        question::Model {
            id: Uuid::new_v4(),
            question_text: "2+2?".to_owned(),
            options: r#"["3","4"]"#.to_owned(),
            correct_answer: "4".to_owned(),
            created_at: timestamp(),
        },
        question::Model {
            id: Uuid::new_v4(),
            question_text: "1+1?".to_owned(),
            options: r#"["2"]"#.to_owned(),
            correct_answer: "2".to_owned(),
            created_at: timestamp(),
        },
    ];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([models.clone()])
        .into_connection();

    assert_eq!(Query::list_all(&db).await?, Vec::from(models));

    Ok(())
}

#[test(tokio::test)]
async fn test_create_respondent_issues_single_insert() -> Result<(), DbErr> {
    let model = respondent::Model {
        id: Uuid::new_v4(),
        full_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        phone_number: "1".to_owned(),
        score: 2,
        answers: r#"["x","y"]"#.to_owned(),
        submitted_at: timestamp(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[model.clone()]])
        .into_connection();

    let created = Mutation::create_respondent(&db, "Ada", "ada@example.com", "1", 2, &["x".to_owned(), "y".to_owned()])
        .await?;
    assert_eq!(created, model);
    assert_eq!(db.into_transaction_log().len(), 1);

    Ok(())
}
