use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub created_at: chrono::NaiveDateTime,
}

impl Question {
    /// The view of a question handed to respondents. The correct answer is left out.
    #[must_use]
    pub fn public(&self) -> PublicQuestion<'_> {
        PublicQuestion {
            id: self.id,
            question_text: &self.question_text,
            options: &self.options,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion<'a> {
    pub id: Uuid,
    pub question_text: &'a str,
    pub options: &'a [String],
}

/// A question that passed validation and can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}
