//! Optional HTTP Basic guard for the question administration routes.

use crate::AppConfig;
use crate::opt::Admin;
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use axum::{Extension, RequestPartsExt};
use axum_auth::AuthBasic;
use http::request::Parts;
use http::{HeaderValue, StatusCode, header};
use std::fmt;
use subtle::ConstantTimeEq;

const REALM: &str = r#"Basic realm="quizdesk admin", charset="UTF-8""#;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct AdminCredentials {
    user: String,
    password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl AdminCredentials {
    pub(crate) fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub(crate) fn from_opt(admin: Admin) -> Option<Self> {
        match (admin.admin_user, admin.admin_password) {
            (Some(user), Some(password)) => Some(Self::new(user, password)),
            _ => None,
        }
    }

    /// Compares in constant time. Both values are always checked.
    fn matches(&self, user: &str, password: Option<&str>) -> bool {
        let Some(password) = password else {
            return false;
        };
        let user_matches = self.user.as_bytes().ct_eq(user.as_bytes());
        let password_matches = self.password.as_bytes().ct_eq(password.as_bytes());
        (user_matches & password_matches).into()
    }
}

/// Extracting this succeeds when no credentials are configured or the request carries the
/// configured ones.
pub(crate) struct RequireAdmin;

pub(crate) struct AdminRejection;

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, HeaderValue::from_static(REALM))],
            "Admin credentials required",
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension::<AppConfig>(app_config) = parts.extract::<Extension<AppConfig>>().await.map_err(|error| {
            tracing::error!(error = &error as &dyn std::error::Error, "app config not found in app data");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })?;

        let Some(credentials) = app_config.admin() else {
            return Ok(Self);
        };

        match parts.extract::<AuthBasic>().await {
            Ok(AuthBasic((user, password))) if credentials.matches(&user, password.as_deref()) => Ok(Self),
            Ok(AuthBasic((user, _))) => {
                tracing::warn!(%user, "rejected admin credentials");
                Err(AdminRejection.into_response())
            }
            Err(_) => Err(AdminRejection.into_response()),
        }
    }
}
