pub mod question;
pub mod respondent;
