//! Access to url-encoded form bodies where a key may repeat.
//!
//! The bodies are deserialized as plain key/value pairs so lists keep the order in which the
//! browser sent them.

use quizdesk_model::respondent::{Contact, Submission, SubmittedAnswers};
use std::collections::HashMap;
use uuid::Uuid;

pub(crate) const FULL_NAME: &str = "fullName";
pub(crate) const EMAIL: &str = "email";
pub(crate) const PHONE_NUMBER: &str = "phoneNumber";
pub(crate) const ANSWERS: &str = "answers";
pub(crate) const ANSWER_PREFIX: &str = "answer.";
pub(crate) const QUESTION_TEXT: &str = "questionText";
pub(crate) const OPTIONS: &str = "options";
pub(crate) const CORRECT_ANSWER: &str = "correctAnswer";

#[derive(Debug, Default)]
pub(crate) struct FormFields(Vec<(String, String)>);

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FormFields {
    /// First value sent for `name`.
    pub(crate) fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All values sent as `name`, `name[]` or `name[<index>]`.
    ///
    /// Unindexed values come first in the order they were sent, indexed ones follow sorted by
    /// their index.
    pub(crate) fn list(&self, name: &str) -> Vec<&str> {
        let mut entries: Vec<(Option<usize>, &str)> = self
            .0
            .iter()
            .filter_map(|(key, value)| list_index(key, name).map(|index| (index, value.as_str())))
            .collect();
        entries.sort_by_key(|(index, _)| *index);
        entries.into_iter().map(|(_, value)| value).collect()
    }

    /// Contact details exactly as sent.
    pub(crate) fn contact(&self) -> Contact {
        let text = |name: &str| self.first(name).unwrap_or_default().to_owned();
        Contact {
            full_name: text(FULL_NAME),
            email: text(EMAIL),
            phone_number: text(PHONE_NUMBER),
        }
    }

    /// Answers keyed as `answer.<question id>` win over positional `answers` lists. A form
    /// without either leaves every question unanswered.
    pub(crate) fn submitted_answers(&self) -> SubmittedAnswers {
        let keyed: HashMap<Uuid, String> = self
            .0
            .iter()
            .filter_map(|(key, value)| {
                let id = key.strip_prefix(ANSWER_PREFIX)?;
                match Uuid::parse_str(id) {
                    Ok(id) => Some((id, value.clone())),
                    Err(error) => {
                        tracing::debug!(%error, %key, "ignoring answer with malformed question id");
                        None
                    }
                }
            })
            .collect();

        if !keyed.is_empty() {
            return SubmittedAnswers::Keyed(keyed);
        }
        let positional = self.list(ANSWERS);
        if positional.is_empty() {
            SubmittedAnswers::default()
        } else {
            SubmittedAnswers::Positional(positional.into_iter().map(str::to_owned).collect())
        }
    }

    pub(crate) fn submission(&self) -> Submission {
        Submission {
            contact: self.contact(),
            answers: self.submitted_answers(),
        }
    }
}

fn list_index(key: &str, name: &str) -> Option<Option<usize>> {
    let rest = key.strip_prefix(name)?;
    if rest.is_empty() || rest == "[]" {
        return Some(None);
    }
    rest.strip_prefix('[')?
        .strip_suffix(']')?
        .parse()
        .ok()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_list_keeps_order() {
        let form = fields(&[("options", "3"), ("questionText", "2+2?"), ("options", "4")]);
        assert_eq!(form.list(OPTIONS), vec!["3", "4"]);
        assert_eq!(form.first(QUESTION_TEXT), Some("2+2?"));
        assert_eq!(form.first(CORRECT_ANSWER), None);
    }

    #[test]
    fn test_list_accepts_bracket_notation() {
        let form = fields(&[("answers[1]", "C"), ("answers[0]", "A")]);
        assert_eq!(form.list(ANSWERS), vec!["A", "C"]);

        let form = fields(&[("options[]", "x"), ("options[]", "y")]);
        assert_eq!(form.list(OPTIONS), vec!["x", "y"]);
    }

    #[test]
    fn test_list_ignores_similar_names() {
        let form = fields(&[("optionsExtra", "x"), ("options[a]", "y"), ("options", "z")]);
        assert_eq!(form.list(OPTIONS), vec!["z"]);
    }

    #[test]
    fn test_contact_is_kept_as_sent() {
        let form = fields(&[("fullName", " Ada "), ("email", "ada@example.com"), ("phoneNumber", " ")]);
        let contact = form.contact();
        assert_eq!(contact.full_name, " Ada ");
        assert_eq!(contact.phone_number, " ");
        assert!(!contact.is_complete());
    }

    #[test]
    fn test_keyed_answers() {
        let id = Uuid::new_v4();
        let key = format!("answer.{id}");
        let form = fields(&[("answers", "ignored"), (key.as_str(), "B"), ("answer.not-a-uuid", "C")]);
        assert_eq!(
            form.submitted_answers(),
            SubmittedAnswers::Keyed(HashMap::from([(id, "B".to_owned())]))
        );
    }

    #[test]
    fn test_positional_answers() {
        let form = fields(&[("answers", "A"), ("answers", "C")]);
        assert_eq!(
            form.submitted_answers(),
            SubmittedAnswers::Positional(vec!["A".to_owned(), "C".to_owned()])
        );
    }

    #[test]
    fn test_no_answers_leave_every_question_unanswered() {
        let form = fields(&[("fullName", "Ada"), ("email", "ada@example.com"), ("phoneNumber", "1")]);
        assert_eq!(form.submitted_answers(), SubmittedAnswers::Keyed(HashMap::new()));
    }
}
