use crate::core::domain::error::ValidationError;

const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];
const MAX_URL_LENGTH: usize = 2083; // RFC 7230 practical limit
const API_PREFIX: [&str; 2] = ["api", "v1"];

/// A validated base URL of the console backend (e.g. `https://console.example.com/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleUrl(url::Url);

impl ConsoleUrl {
    /// Parses and validates a base URL.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();
        validate_url(value)?;
        let parsed = url::Url::parse(value)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(parsed))
    }

    /// Builds the endpoint URL for API path segments such as `["clusters", id]`.
    ///
    /// Each segment is percent-encoded, so identifiers containing `/`, `?` or `#`
    /// stay within their segment.
    pub fn endpoint<I>(&self, segments: I) -> Result<url::Url, ValidationError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|()| ValidationError::Format("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }
}

/// Validates a console base URL.
pub(crate) fn validate_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if value.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(value)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }

    if parsed.host_str().is_none() {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "URL must contain a host".to_string(),
        });
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL cannot carry a query or fragment".to_string(),
        ));
    }

    Ok(())
}
