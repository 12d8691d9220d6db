use quizdesk_entity::question::Model as QuestionModel;
use quizdesk_model::question::Question;

use crate::convert::TryFromDbModel;
use crate::error::Error;

impl TryFromDbModel<QuestionModel> for Question {
    type Error = Error;

    fn try_from_db_model(model: QuestionModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            question_text: model.question_text,
            options: serde_json::from_str(&model.options)?,
            correct_answer: model.correct_answer,
            created_at: model.created_at,
        })
    }
}
