use std::fmt;

/// Custom error type for Aria Automation operations
#[derive(Debug)]
pub enum VraError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Refresh token was rejected by the token endpoint
    RefreshTokenInvalid(String),
    /// Username/password (or domain) login failed
    CredentialAuth(String),
    /// The cloud multi-tenant endpoint rejected the refresh token; it has
    /// no username/password login to fall back to
    CloudNoCredentials(String),
    /// Target profile not found in any source
    TargetNotFound(String),
    /// Configuration error
    Config(String),
    /// JSON parsing error
    Json(String),
    /// YAML parsing error
    Yaml(String),
    /// User declined an interactive confirmation prompt
    UserDeclined(String),
}

impl fmt::Display for VraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VraError::Http(e) => write!(f, "HTTP request failed: {}", e),
            VraError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            VraError::RefreshTokenInvalid(msg) => {
                write!(f, "API token rejected: {}", msg)
            }
            VraError::CredentialAuth(msg) => {
                write!(f, "Credential authentication failed: {}", msg)
            }
            VraError::CloudNoCredentials(msg) => write!(
                f,
                "Token refresh against the cloud endpoint failed and the cloud \
                 service has no username/password login: {}",
                msg
            ),
            VraError::TargetNotFound(msg) => write!(f, "{}", msg),
            VraError::Config(msg) => write!(f, "Configuration error: {}", msg),
            VraError::Json(msg) => write!(f, "JSON error: {}", msg),
            VraError::Yaml(msg) => write!(f, "YAML error: {}", msg),
            VraError::UserDeclined(msg) => write!(f, "Aborted: {}", msg),
        }
    }
}

impl std::error::Error for VraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VraError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VraError {
    fn from(err: reqwest::Error) -> Self {
        VraError::Http(err)
    }
}

impl From<serde_json::Error> for VraError {
    fn from(err: serde_json::Error) -> Self {
        VraError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for VraError {
    fn from(err: serde_yml::Error) -> Self {
        VraError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for VraError {
    fn from(err: std::io::Error) -> Self {
        VraError::Config(err.to_string())
    }
}

/// Result type alias for Aria Automation operations
pub type Result<T> = std::result::Result<T, VraError>;
