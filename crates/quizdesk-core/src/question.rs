use quizdesk_model::question::NewQuestion;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("All fields are required!")]
    MissingFields,

    #[error("The correct answer must be one of the options.")]
    CorrectAnswerNotInOptions,
}

/// Checks an admin submission and normalizes it into a [`NewQuestion`].
///
/// Surrounding whitespace is trimmed from every value and blank options are dropped. The
/// correct answer has to match one of the remaining options exactly.
pub fn validate_question<S: AsRef<str>>(
    question_text: Option<&str>,
    options: &[S],
    correct_answer: Option<&str>,
) -> Result<NewQuestion, QuestionError> {
    let question_text = non_empty(question_text).ok_or(QuestionError::MissingFields)?;
    let correct_answer = non_empty(correct_answer).ok_or(QuestionError::MissingFields)?;
    let options: Vec<String> = options
        .iter()
        .filter_map(|option| non_empty(Some(option.as_ref())))
        .collect();
    if options.is_empty() {
        return Err(QuestionError::MissingFields);
    }

    if !options.contains(&correct_answer) {
        return Err(QuestionError::CorrectAnswerNotInOptions);
    }

    Ok(NewQuestion {
        question_text,
        options,
        correct_answer,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|value| !value.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_question() {
        let question = validate_question(Some("2+2?"), &["3", "4"], Some("4")).unwrap();
        assert_eq!(question.question_text, "2+2?");
        assert_eq!(question.options, vec!["3", "4"]);
        assert_eq!(question.correct_answer, "4");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate_question(None, &["3", "4"], Some("4")),
            Err(QuestionError::MissingFields)
        );
        assert_eq!(
            validate_question(Some("2+2?"), &["3", "4"], None),
            Err(QuestionError::MissingFields)
        );
        assert_eq!(
            validate_question(Some("2+2?"), &["3", "4"], Some("  ")),
            Err(QuestionError::MissingFields)
        );
        assert_eq!(
            validate_question::<&str>(Some("2+2?"), &[], Some("4")),
            Err(QuestionError::MissingFields)
        );
        assert_eq!(
            validate_question(Some("2+2?"), &["", " "], Some("4")),
            Err(QuestionError::MissingFields)
        );
    }

    #[test]
    fn test_correct_answer_must_be_an_option() {
        assert_eq!(
            validate_question(Some("2+2?"), &["3", "5"], Some("4")),
            Err(QuestionError::CorrectAnswerNotInOptions)
        );
    }

    #[test]
    fn test_values_are_trimmed_and_blank_options_dropped() {
        let question = validate_question(Some(" 2+2? "), &[" 3", "", "4 "], Some(" 4")).unwrap();
        assert_eq!(question.question_text, "2+2?");
        assert_eq!(question.options, vec!["3", "4"]);
        assert_eq!(question.correct_answer, "4");
    }
}
