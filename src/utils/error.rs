use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssError {
    #[error("Transport error while requesting {url}: {source}")]
    TransportError {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Status Code {status} when fetching {resource}. Response: {body}")]
    HttpStatusError {
        resource: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse {resource} response: {message}")]
    ParseError { resource: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background task failed: {message}")]
    TaskError { message: String },
}

/// Coarse error category, stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    HttpStatus,
    Parse,
    Config,
    Task,
}

impl IssError {
    pub fn transport<E>(url: &str, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        IssError::TransportError {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn parse(resource: &str, message: impl Into<String>) -> Self {
        IssError::ParseError {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            IssError::TransportError { .. } => ErrorKind::Transport,
            IssError::HttpStatusError { .. } => ErrorKind::HttpStatus,
            IssError::ParseError { .. } => ErrorKind::Parse,
            IssError::ValidationError { .. }
            | IssError::InvalidConfigValueError { .. }
            | IssError::ConfigValidationError { .. }
            | IssError::IoError(_) => ErrorKind::Config,
            IssError::TaskError { .. } => ErrorKind::Task,
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            IssError::HttpStatusError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IssError::TransportError { url, .. } => {
                format!("Could not reach {}. Check your network connection.", url)
            }
            IssError::HttpStatusError {
                resource, status, ..
            } => format!("The {} service answered with HTTP {}.", resource, status),
            IssError::ParseError { resource, .. } => {
                format!("The {} service returned an unexpected response.", resource)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Config => 1,
            ErrorKind::Transport => 2,
            ErrorKind::HttpStatus => 3,
            ErrorKind::Parse => 4,
            ErrorKind::Task => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, IssError>;
