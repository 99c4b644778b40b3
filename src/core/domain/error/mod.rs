use thiserror::Error;

/// The main error type for console operations.
///
/// This enum represents all possible errors that can occur while talking
/// to the console backend or tracking in-flight operations, including
/// connection, authentication, authorization and validation failures.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Represents errors that occur while reaching the backend
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents authentication failures (missing or rejected token)
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The backend refused to run an operation for the current user
    ///
    /// # Fields
    /// * `errors` - Error details returned by the backend, possibly empty
    #[error("Forbidden operation: {}", errors.join(", "))]
    Forbidden { errors: Vec<String> },

    /// Any other non-successful backend response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A requested entity is not part of the inventory
    ///
    /// # Fields
    /// * `0` - Description of the missing entity
    #[error("Not found: {0}")]
    NotFound(String),

    /// Another operation is already running for the group
    ///
    /// # Fields
    /// * `0` - The group (cluster) identifier
    #[error("An operation is already running for group {0}")]
    OperationInFlight(String),

    /// Represents validation failures with detailed context
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;
