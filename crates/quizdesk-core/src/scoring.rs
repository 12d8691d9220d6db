//! Scoring of submitted answers against the stored correct answers.
//!
//! Answers are compared with exact, case-sensitive string equality. Missing answers never match
//! and surplus answers are ignored.

use quizdesk_model::question::Question;
use quizdesk_model::respondent::SubmittedAnswers;
use std::collections::HashMap;
use uuid::Uuid;

/// Counts the questions whose answer at the same index equals the correct answer.
#[must_use]
pub fn score(questions: &[Question], answers: &[String]) -> u32 {
    count_matches(
        questions
            .iter()
            .enumerate()
            .map(|(index, question)| (question, answers.get(index))),
    )
}

/// Counts the questions whose answer, looked up by question id, equals the correct answer.
#[must_use]
pub fn score_by_id(questions: &[Question], answers: &HashMap<Uuid, String>) -> u32 {
    count_matches(questions.iter().map(|question| (question, answers.get(&question.id))))
}

/// Scores a submission in whichever shape it arrived.
#[must_use]
pub fn score_submission(questions: &[Question], answers: &SubmittedAnswers) -> u32 {
    match answers {
        SubmittedAnswers::Keyed(answers) => score_by_id(questions, answers),
        SubmittedAnswers::Positional(answers) => score(questions, answers),
    }
}

/// The answers to record for a submission.
///
/// Keyed answers are put in question order with an empty entry for every unanswered question.
/// Positional answers already are in question order and are recorded as sent.
#[must_use]
pub fn align_answers(questions: &[Question], answers: &SubmittedAnswers) -> Vec<String> {
    match answers {
        SubmittedAnswers::Keyed(answers) => questions
            .iter()
            .map(|question| answers.get(&question.id).cloned().unwrap_or_default())
            .collect(),
        SubmittedAnswers::Positional(answers) => answers.clone(),
    }
}

fn count_matches<'a>(pairs: impl Iterator<Item = (&'a Question, Option<&'a String>)>) -> u32 {
    let matches = pairs
        .filter(|(question, answer)| answer.is_some_and(|answer| *answer == question.correct_answer))
        .count();
    u32::try_from(matches).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn question(correct_answer: &str) -> Question {
        Question {
            id: Uuid::new_v4(),
            question_text: format!("pick {correct_answer}"),
            options: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            correct_answer: correct_answer.to_owned(),
            created_at: NaiveDateTime::default(),
        }
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn test_counts_positional_matches() {
        let questions = [question("A"), question("B")];
        assert_eq!(score(&questions, &answers(&["A", "C"])), 1);
        assert_eq!(score(&questions, &answers(&["A", "B"])), 2);
        assert_eq!(score(&questions, &answers(&["B", "A"])), 0);
    }

    #[test]
    fn test_matches_equal_brute_force_count() {
        let questions = [question("A"), question("B"), question("C"), question("A")];
        let submitted = answers(&["A", "A", "C", "a"]);
        let expected = questions
            .iter()
            .zip(&submitted)
            .filter(|(q, a)| q.correct_answer == **a)
            .count();
        assert_eq!(score(&questions, &submitted) as usize, expected);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let questions = [question("Paris")];
        assert_eq!(score(&questions, &answers(&["paris"])), 0);
        assert_eq!(score(&questions, &answers(&["Paris "])), 0);
    }

    #[test]
    fn test_short_answer_list_counts_missing_as_wrong() {
        let questions = [question("A"), question("B"), question("C")];
        assert_eq!(score(&questions, &answers(&["A"])), 1);
        assert_eq!(score(&questions, &[]), 0);
    }

    #[test]
    fn test_extra_answers_are_ignored() {
        let questions = [question("A")];
        assert_eq!(score(&questions, &answers(&["A", "B", "C"])), 1);
        assert_eq!(score(&[], &answers(&["A", "B"])), 0);
    }

    #[test]
    fn test_score_is_pure() {
        let questions = vec![question("A"), question("B")];
        let submitted = answers(&["A", "B"]);
        let before = (questions.clone(), submitted.clone());

        let first = score(&questions, &submitted);
        let second = score(&questions, &submitted);

        assert_eq!(first, second);
        assert_eq!((questions, submitted), before);
    }

    #[test]
    fn test_keyed_answers_ignore_order() {
        let questions = [question("A"), question("B")];
        let keyed = HashMap::from([
            (questions[1].id, "B".to_owned()),
            (questions[0].id, "A".to_owned()),
            (Uuid::new_v4(), "A".to_owned()),
        ]);
        assert_eq!(score_by_id(&questions, &keyed), 2);
        assert_eq!(score_submission(&questions, &SubmittedAnswers::Keyed(keyed)), 2);
    }

    #[test]
    fn test_align_keyed_answers() {
        let questions = [question("A"), question("B"), question("C")];
        let keyed = HashMap::from([(questions[2].id, "C".to_owned()), (questions[0].id, "A".to_owned())]);

        let aligned = align_answers(&questions, &SubmittedAnswers::Keyed(keyed));
        assert_eq!(aligned, answers(&["A", "", "C"]));
        assert_eq!(score(&questions, &aligned), 2);
    }

    #[test]
    fn test_missing_answers_are_recorded_as_unanswered() {
        let questions = [question("A"), question("B")];
        let submitted = SubmittedAnswers::default();
        assert_eq!(align_answers(&questions, &submitted), answers(&["", ""]));
        assert_eq!(score_submission(&questions, &submitted), 0);
    }

    #[test]
    fn test_positional_answers_are_recorded_as_sent() {
        let questions = [question("A"), question("B")];
        assert_eq!(
            align_answers(&questions, &SubmittedAnswers::Positional(answers(&["A"]))),
            answers(&["A"])
        );
        assert_eq!(
            align_answers(&[], &SubmittedAnswers::Positional(answers(&["A", "B", "C"]))),
            answers(&["A", "B", "C"])
        );
    }
}
