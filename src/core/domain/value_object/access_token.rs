use crate::core::domain::error::ValidationError;

/// A bearer access token issued by the console backend.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a validated token.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_access_token(&value)?;
        Ok(Self(value))
    }

    /// Formats the token as an `Authorization` header value.
    #[must_use]
    pub fn as_bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Validates the format of an access token string.
pub(crate) fn validate_access_token(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "access_token".to_string(),
            message: "Access token cannot be empty".to_string(),
        });
    }
    if token.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(
            "Access token cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}
