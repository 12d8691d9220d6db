use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Serialize, Deserialize)]
pub struct Status {
    pub database: Value,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Ok,
    Error,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComponentStatus {
    state: ComponentState,
}

impl<T, E> From<Result<T, E>> for ComponentStatus {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(_) => Self::error(),
        }
    }
}

impl ComponentStatus {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            state: ComponentState::Ok,
        }
    }

    #[must_use]
    pub fn error() -> Self {
        Self {
            state: ComponentState::Error,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.state == ComponentState::Ok
    }

    #[must_use]
    pub fn into_message(self) -> Value {
        json!(self.state)
    }
}
