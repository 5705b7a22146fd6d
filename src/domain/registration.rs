//! Registration request - transient input to the registration use case.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Account registration request.
///
/// Every field is optional at the type level so that absent, `null` and
/// empty values all reach validation instead of failing deserialization.
/// The password stays wrapped in [`SecretString`]: it is redacted from
/// `Debug` output and zeroed when the request is dropped.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "password_present"))]
pub struct RegistrationRequest {
    /// Requested username (must be unique)
    #[validate(required, length(min = 1))]
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Optional email address, stored as given
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    #[schema(value_type = Option<String>, example = "hunter2")]
    pub password: Option<SecretString>,
}

impl RegistrationRequest {
    pub fn new(
        username: impl Into<String>,
        email: Option<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: Some(username.into()),
            email,
            password: Some(SecretString::new(password.into())),
        }
    }
}

// Struct-level so the secret never lands in validation error params.
fn password_present(request: &RegistrationRequest) -> Result<(), ValidationError> {
    match &request.password {
        Some(secret) if !secret.expose_secret().is_empty() => Ok(()),
        _ => Err(ValidationError::new("password_required")),
    }
}
