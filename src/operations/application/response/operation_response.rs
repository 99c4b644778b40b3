use serde::Deserialize;

/// Body of an accepted operation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperationAccepted {
    pub operation_id: String,
}

/// Error body returned by the backend on rejected requests.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    Detailed {
        detail: String,
    },
    Message(String),
}

impl ErrorResponse {
    /// Parses an error body, yielding no errors when it is not the expected shape.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.errors
            .into_iter()
            .map(|entry| match entry {
                ErrorEntry::Detailed { detail } => detail,
                ErrorEntry::Message(message) => message,
            })
            .collect()
    }
}
