use quizdesk_entity::respondent::Model as RespondentModel;
use quizdesk_model::respondent::{Contact, Respondent};

use crate::convert::TryFromDbModel;
use crate::error::Error;

impl TryFromDbModel<RespondentModel> for Respondent {
    type Error = Error;

    fn try_from_db_model(model: RespondentModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            contact: Contact {
                full_name: model.full_name,
                email: model.email,
                phone_number: model.phone_number,
            },
            score: u32::try_from(model.score).map_err(|_| Error::NegativeScore(model.score))?,
            answers: serde_json::from_str(&model.answers)?,
            submitted_at: model.submitted_at,
        })
    }
}
