pub mod question;
pub mod respondent;
pub mod status;
