//! Authorizers supply the credentials attached to every outgoing request

use std::fmt;

/// Kinds of authorizer a resource client can accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizerKind {
    /// No credentials at all
    Null,
    /// Static API token (`Authorization: Token <token>`)
    Basic,
}

impl fmt::Display for AuthorizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizerKind::Null => write!(f, "NullAuthorizer"),
            AuthorizerKind::Basic => write!(f, "BasicAuthorizer"),
        }
    }
}

/// Strategy producing the `Authorization` header for a request
pub trait Authorizer: Send + Sync + fmt::Debug {
    /// Which kind of authorizer this is (checked against client allow-lists)
    fn kind(&self) -> AuthorizerKind;

    /// Value of the `Authorization` header, or `None` to send none
    fn authorization_header(&self) -> Option<String>;
}

/// Authorizer that sends no credentials
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuthorizer;

impl Authorizer for NullAuthorizer {
    fn kind(&self) -> AuthorizerKind {
        AuthorizerKind::Null
    }

    fn authorization_header(&self) -> Option<String> {
        None
    }
}

/// Authorizer carrying a static ArkID API token
#[derive(Clone)]
pub struct BasicAuthorizer {
    token: String,
}

impl BasicAuthorizer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

// Never leak the token through logs
impl fmt::Debug for BasicAuthorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthorizer")
            .field("token", &"***")
            .finish()
    }
}

impl Authorizer for BasicAuthorizer {
    fn kind(&self) -> AuthorizerKind {
        AuthorizerKind::Basic
    }

    fn authorization_header(&self) -> Option<String> {
        Some(format!("Token {}", self.token))
    }
}
