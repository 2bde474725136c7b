use std::fmt;

/// Custom error type for ArkID client operations
#[derive(Debug)]
pub enum ArkIdError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Authorizer kind is not accepted by the resource client
    UnsupportedAuthorizer { client: String, authorizer: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Base URL not found in any source
    BaseUrlNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for ArkIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArkIdError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ArkIdError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ArkIdError::UnsupportedAuthorizer { client, authorizer } => write!(
                f,
                "{} does not accept authorizer of type {}",
                client, authorizer
            ),
            ArkIdError::TokenNotFound(msg) => write!(f, "{}", msg),
            ArkIdError::BaseUrlNotFound(msg) => write!(f, "{}", msg),
            ArkIdError::Credentials(msg) => write!(f, "{}", msg),
            ArkIdError::Json(msg) => write!(f, "JSON error: {}", msg),
            ArkIdError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ArkIdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArkIdError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl ArkIdError {
    /// HTTP status for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ArkIdError::Api { status, .. } => Some(*status),
            ArkIdError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ArkIdError {
    fn from(err: reqwest::Error) -> Self {
        ArkIdError::Http(err)
    }
}

impl From<serde_json::Error> for ArkIdError {
    fn from(err: serde_json::Error) -> Self {
        ArkIdError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ArkIdError {
    fn from(err: std::io::Error) -> Self {
        ArkIdError::Credentials(err.to_string())
    }
}

/// Result type alias for ArkID client operations
pub type Result<T> = std::result::Result<T, ArkIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ArkIdError::Api {
            status: 404,
            message: "Not found.".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found."));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_unsupported_authorizer_display() {
        let err = ArkIdError::UnsupportedAuthorizer {
            client: "OrgClient".to_string(),
            authorizer: "BearerAuthorizer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("OrgClient"));
        assert!(msg.contains("BearerAuthorizer"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArkIdError>();
    }

    #[test]
    fn test_token_not_found_display() {
        let err = ArkIdError::TokenNotFound("no token for host".to_string());
        assert_eq!(err.to_string(), "no token for host");
    }

    #[test]
    fn test_config_error_display() {
        let err = ArkIdError::Config("invalid --data".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("invalid --data"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ArkIdError = json_err.into();
        match err {
            ArkIdError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ArkIdError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArkIdError = io_err.into();
        match err {
            ArkIdError::Credentials(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected ArkIdError::Credentials"),
        }
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = ArkIdError::Api {
            status: 403,
            message: "You do not have permission to perform this action.".to_string(),
        };
        assert!(err.source().is_none());
    }
}
