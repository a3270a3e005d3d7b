use std::fmt;

#[derive(Debug)]
pub enum RouterError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    MissingCredential(String),
    DuplicateTool(String),
    NetworkError(reqwest::Error),
    Timeout(std::time::Duration),
    JsonError(serde_json::Error),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            RouterError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RouterError::MissingCredential(var) => {
                write!(f, "Please set your {} in the .env file", var)
            }
            RouterError::DuplicateTool(id) => {
                write!(f, "Tool '{}' is declared more than once", id)
            }
            RouterError::NetworkError(e) => write!(f, "Network error: {}", e),
            RouterError::Timeout(limit) => write!(f, "Request timed out after {:?}", limit),
            RouterError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::NetworkError(e) => Some(e),
            RouterError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RouterError {
    fn from(err: reqwest::Error) -> Self {
        RouterError::NetworkError(err)
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::JsonError(err)
    }
}

impl From<anyhow::Error> for RouterError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} keeps the context chain on one line
        RouterError::ConfigError(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;
