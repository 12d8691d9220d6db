pub mod question;
pub mod scoring;
pub mod status;
