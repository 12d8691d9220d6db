mod common;

use crate::common::setup_db;
use quizdesk_db::question;
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_create_and_list_questions() {
    let db = &setup_db().await;

    let first = question::Mutation::create_question(db, "2+2?", &["3".to_owned(), "4".to_owned()], "4")
        .await
        .unwrap();
    let second = question::Mutation::create_question(db, "Capital of France?", &["Paris".to_owned()], "Paris")
        .await
        .unwrap();

    let questions = question::Query::list_all(db).await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, first.id);
    assert_eq!(questions[1].id, second.id);
    assert_eq!(questions[0].options, r#"["3","4"]"#);
    assert_eq!(questions[0].correct_answer, "4");
}

#[test(tokio::test)]
async fn test_list_order_is_stable() {
    let db = &setup_db().await;

    for i in 0..5 {
        question::Mutation::create_question(db, &format!("q{i}"), &["a".to_owned()], "a")
            .await
            .unwrap();
    }

    let first: Vec<Uuid> = question::Query::list_all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    let second: Vec<Uuid> = question::Query::list_all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(first, second);
    assert_eq!(question::Query::count(db).await.unwrap(), 5);
}

#[test(tokio::test)]
async fn test_empty_store_lists_nothing() {
    let db = &setup_db().await;
    assert!(question::Query::list_all(db).await.unwrap().is_empty());
}
