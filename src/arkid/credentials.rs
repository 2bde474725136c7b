//! API token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{ArkIdError, Result};

/// Credentials file structure, keyed by base URL
#[derive(Deserialize, Debug)]
pub(crate) struct ArkIdCredentials {
    pub(crate) credentials: HashMap<String, ArkIdCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
pub(crate) struct ArkIdCredential {
    pub(crate) token: String,
}

impl ArkIdCredentials {
    /// Load and parse a credentials file
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub(crate) fn load(path: &Path) -> Result<Option<Self>> {
        debug!("Looking for credentials file at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ArkIdError::Credentials(format!(
                    "Could not read credentials file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let creds: ArkIdCredentials = serde_json::from_str(&content).map_err(|e| {
            ArkIdError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(creds))
    }

    /// Token stored for a base URL (trailing slashes ignored)
    pub(crate) fn token_for(&self, base_url: &str) -> Option<&str> {
        let wanted = base_url.trim_end_matches('/');
        self.credentials
            .iter()
            .find(|(url, _)| url.trim_end_matches('/') == wanted)
            .map(|(_, cred)| cred.token.as_str())
    }
}

/// Value of an environment variable, ignoring unset and blank values
pub(crate) fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Default credentials file location (`~/.arkid/credentials.json`)
pub(crate) fn default_credentials_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    base_url: String,
    credentials_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            credentials_path: default_credentials_path(),
        }
    }

    /// Use a specific credentials file instead of the default location
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (ARKID_TOKEN)
    /// 3. Credentials file entry for the base URL
    ///
    /// `Ok(None)` means no token anywhere; the caller decides whether
    /// anonymous access is acceptable.
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<Option<String>> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(Some(token.to_string()));
        }

        if let Some(token) = non_empty_env(credentials::TOKEN_ENV_VAR) {
            debug!(
                "Using token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(Some(token));
        }

        debug!(
            "No token in CLI or {}, trying credentials file",
            credentials::TOKEN_ENV_VAR
        );
        self.read_from_credentials_file()
    }

    /// Like [`resolve`](Self::resolve) but a missing token is an error
    pub fn resolve_required(&self, cli_token: Option<&str>) -> Result<String> {
        self.resolve(cli_token)?
            .ok_or_else(|| ArkIdError::TokenNotFound(self.token_not_found_message()))
    }

    fn read_from_credentials_file(&self) -> Result<Option<String>> {
        let Some(path) = &self.credentials_path else {
            return Ok(None);
        };

        let Some(creds) = ArkIdCredentials::load(path)? else {
            return Ok(None);
        };

        Ok(creds.token_for(&self.base_url).map(|token| {
            debug!(
                "Using token from credentials file {} for {}",
                path.display(),
                self.base_url
            );
            token.to_string()
        }))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self) -> String {
        let creds_info = self
            .credentials_path
            .as_ref()
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      arkidctl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             \n\
             Checked: env var {}{}",
            self.base_url,
            credentials::TOKEN_ENV_VAR,
            credentials::TOKEN_ENV_VAR,
            creds_info
        )
    }
}
