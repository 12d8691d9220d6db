use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
}

impl Contact {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.full_name, &self.email, &self.phone_number]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Respondent {
    pub id: Uuid,
    #[serde(flatten)]
    pub contact: Contact,
    pub score: u32,
    pub answers: Vec<String>,
    pub submitted_at: chrono::NaiveDateTime,
}

/// Answers as they arrive with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedAnswers {
    /// Each answer names the question it belongs to.
    Keyed(HashMap<Uuid, String>),
    /// Answer `i` belongs to question `i` of the list the respondent was shown.
    Positional(Vec<String>),
}

/// No answers at all, every question counts as unanswered.
impl Default for SubmittedAnswers {
    fn default() -> Self {
        Self::Keyed(HashMap::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub contact: Contact,
    pub answers: SubmittedAnswers,
}
