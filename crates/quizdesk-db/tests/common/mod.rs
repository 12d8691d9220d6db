use quizdesk_db::migration;
use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::run(&db).await.unwrap();
    db
}
