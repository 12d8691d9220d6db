pub mod migration;
pub mod question;
pub mod respondent;

pub use sea_orm;
