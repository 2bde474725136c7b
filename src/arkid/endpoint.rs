//! Base URL resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::endpoint as endpoint_config;
use crate::error::{ArkIdError, Result};

use super::credentials::{default_credentials_path, non_empty_env, ArkIdCredentials};

/// Base URL resolution with fallback logic
pub struct BaseUrlResolver {
    credentials_path: Option<PathBuf>,
}

impl Default for BaseUrlResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseUrlResolver {
    pub fn new() -> Self {
        Self {
            credentials_path: default_credentials_path(),
        }
    }

    /// Use a specific credentials file instead of the default location
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Resolve the base URL from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (ARKID_BASE_URL)
    /// 3. Credentials file:
    ///    - If 1 entry: use it
    ///    - If several: interactive selection (or error in batch mode)
    ///    - If none: error
    pub fn resolve(&self, cli_base_url: Option<&str>, batch_mode: bool) -> Result<String> {
        if let Some(url) = cli_base_url {
            debug!("Using base URL from CLI argument: {}", url);
            return Ok(url.to_string());
        }

        if let Some(url) = non_empty_env(endpoint_config::ENV_VAR) {
            debug!(
                "Using base URL from {} environment variable: {}",
                endpoint_config::ENV_VAR,
                url
            );
            return Ok(url);
        }

        debug!(
            "No base URL in CLI or {}, trying credentials file",
            endpoint_config::ENV_VAR
        );
        self.resolve_from_credentials_file(batch_mode)
    }

    fn resolve_from_credentials_file(&self, batch_mode: bool) -> Result<String> {
        let path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| ArkIdError::BaseUrlNotFound(Self::not_found_message(None, None)))?;

        let creds = ArkIdCredentials::load(path)?.ok_or_else(|| {
            ArkIdError::BaseUrlNotFound(Self::not_found_message(Some(path), None))
        })?;

        let mut urls: Vec<String> = creds.credentials.keys().cloned().collect();
        urls.sort();

        match urls.as_slice() {
            [] => Err(ArkIdError::BaseUrlNotFound(Self::not_found_message(
                Some(path),
                None,
            ))),
            [single] => {
                debug!(
                    "Using single base URL from credentials file {}: {}",
                    path.display(),
                    single
                );
                Ok(single.clone())
            }
            _ if batch_mode => Err(ArkIdError::BaseUrlNotFound(Self::not_found_message(
                Some(path),
                Some(&urls),
            ))),
            _ => Self::interactive_selection(&urls, path),
        }
    }

    /// Prompt user to select a base URL interactively
    fn interactive_selection(urls: &[String], credentials_path: &Path) -> Result<String> {
        eprintln!(
            "\nMultiple ArkID servers found in {}:",
            credentials_path.display()
        );

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a server")
            .items(urls)
            .default(0)
            .interact()
            .map_err(|e| ArkIdError::BaseUrlNotFound(format!("Failed to select server: {}", e)))?;

        let url = urls[selection].clone();
        debug!("User selected base URL: {}", url);
        Ok(url)
    }

    fn not_found_message(credentials_path: Option<&Path>, available: Option<&[String]>) -> String {
        let creds_info = match (credentials_path, available) {
            (Some(p), Some(urls)) => format!(
                "\n   Credentials file: {} ({} servers found)\n   Available servers: {}",
                p.display(),
                urls.len(),
                urls.join(", ")
            ),
            (Some(p), None) => {
                format!("\n   Credentials file: {} (no servers found)", p.display())
            }
            (None, _) => "\n   Credentials file: not found".to_string(),
        };

        format!(
            "No ArkID server specified. Please provide a base URL using one of:\n\
             \n\
             1. CLI argument:      arkidctl --base-url <URL>\n\
             2. Environment var:   export {}=<URL>\n\
             \n\
             Checked:{}\n",
            endpoint_config::ENV_VAR,
            creds_info
        )
    }
}
