pub mod question;
pub mod respondent;

pub trait TryIntoModel<T>: Sized {
    type Error;

    fn try_into_model(self) -> Result<T, Self::Error>;
}

pub trait TryFromDbModel<T>: Sized {
    type Error;

    fn try_from_db_model(model: T) -> Result<Self, Self::Error>;
}

impl<T, U> TryIntoModel<U> for T
where
    U: TryFromDbModel<T>,
{
    type Error = U::Error;

    fn try_into_model(self) -> Result<U, U::Error> {
        U::try_from_db_model(self)
    }
}
