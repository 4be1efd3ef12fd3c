use std::fmt;

/// Custom error type for AAP operations
#[derive(Debug)]
pub enum AapError {
    /// HTTP request failed before a response arrived
    Http(reqwest::Error),
    /// API returned a non-success status
    Api {
        status: u16,
        url: String,
        body: String,
    },
    /// No organization matched the identifier
    OrganizationNotFound(String),
    /// Related link does not point inside the API version root
    InvalidLink(String),
    /// JSON parsing error
    Json(String),
    /// Reading or writing a local file failed
    Io(String),
    /// Interactive prompt failed
    Prompt(String),
    /// Configuration error
    Config(String),
}

impl AapError {
    /// True when the error means the organization lookup came back empty
    pub fn is_not_found(&self) -> bool {
        matches!(self, AapError::OrganizationNotFound(_))
    }
}

impl fmt::Display for AapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AapError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AapError::Api { status, url, body } => {
                write!(f, "Error making request to {}: status {}", url, status)?;
                if !body.is_empty() {
                    write!(f, "\nResponse: {}", body)?;
                }
                Ok(())
            }
            AapError::OrganizationNotFound(identifier) => {
                write!(f, "Organization '{}' not found.", identifier)
            }
            AapError::InvalidLink(link) => {
                write!(f, "Related link '{}' is outside the API root", link)
            }
            AapError::Json(msg) => write!(f, "JSON error: {}", msg),
            AapError::Io(msg) => write!(f, "I/O error: {}", msg),
            AapError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            AapError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AapError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AapError {
    fn from(err: reqwest::Error) -> Self {
        AapError::Http(err)
    }
}

impl From<serde_json::Error> for AapError {
    fn from(err: serde_json::Error) -> Self {
        AapError::Json(err.to_string())
    }
}

impl From<std::io::Error> for AapError {
    fn from(err: std::io::Error) -> Self {
        AapError::Io(err.to_string())
    }
}

impl From<dialoguer::Error> for AapError {
    fn from(err: dialoguer::Error) -> Self {
        AapError::Prompt(err.to_string())
    }
}

/// Result type alias for AAP operations
pub type Result<T> = std::result::Result<T, AapError>;
