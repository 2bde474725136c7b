//! Shared HTTP plumbing for every ArkID resource client

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::config::api;
use crate::error::{ArkIdError, Result};

use super::authorizers::{Authorizer, AuthorizerKind, NullAuthorizer};
use super::response::ArkIdResponse;

/// Optional knobs for building a client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Application name appended to the User-Agent header
    pub app_name: Option<String>,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            app_name: None,
            connect_timeout: Duration::from_secs(api::CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(api::REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Base client: owns the transport, URL composition and error translation
///
/// Resource clients hold one of these and only describe their endpoints.
#[derive(Debug)]
pub struct BaseClient {
    client: Client,
    base_url: String,
    service: String,
    authorizer: Box<dyn Authorizer>,
    user_agent: String,
}

impl BaseClient {
    /// Create a base client for one site API service
    ///
    /// `allowed` lists the authorizer kinds the resource client accepts. A
    /// missing authorizer means anonymous requests and is always accepted.
    /// Nothing touches the network here.
    pub fn new(
        base_url: &str,
        service: &str,
        client_name: &str,
        authorizer: Option<Box<dyn Authorizer>>,
        allowed: &[AuthorizerKind],
        options: ClientOptions,
    ) -> Result<Self> {
        let authorizer: Box<dyn Authorizer> = match authorizer {
            Some(auth) => {
                if !allowed.contains(&auth.kind()) {
                    return Err(ArkIdError::UnsupportedAuthorizer {
                        client: client_name.to_string(),
                        authorizer: auth.kind().to_string(),
                    });
                }
                auth
            }
            None => Box::new(NullAuthorizer),
        };

        debug!(
            "Creating {} for {} with {}",
            client_name,
            base_url,
            authorizer.kind()
        );

        let client = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .build()?;

        let user_agent = match &options.app_name {
            Some(app) => format!(
                "{}/{}/{}",
                api::USER_AGENT_PREFIX,
                env!("CARGO_PKG_VERSION"),
                app
            ),
            None => format!("{}/{}", api::USER_AGENT_PREFIX, env!("CARGO_PKG_VERSION")),
        };

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service: service.trim_matches('/').to_string(),
            authorizer,
            user_agent,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn authorizer_kind(&self) -> AuthorizerKind {
        self.authorizer.kind()
    }

    /// Full URL for a path relative to the service root
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url,
            api::BASE_PATH,
            self.service,
            path.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent);
        match self.authorizer.authorization_header() {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    /// GET `path` with optional query parameters
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ArkIdResponse> {
        self.request(Method::GET, path, query, None).await
    }

    /// POST `path` with an optional JSON body
    pub async fn post(&self, path: &str, json_body: Option<&Value>) -> Result<ArkIdResponse> {
        self.request(Method::POST, path, &[], json_body).await
    }

    /// PATCH `path` with an optional JSON body
    pub async fn patch(&self, path: &str, json_body: Option<&Value>) -> Result<ArkIdResponse> {
        self.request(Method::PATCH, path, &[], json_body).await
    }

    /// PUT `path` with an optional JSON body
    pub async fn put(&self, path: &str, json_body: Option<&Value>) -> Result<ArkIdResponse> {
        self.request(Method::PUT, path, &[], json_body).await
    }

    pub async fn delete(&self, path: &str) -> Result<ArkIdResponse> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Send one request and wrap the outcome
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        json_body: Option<&Value>,
    ) -> Result<ArkIdResponse> {
        let url = self.url_for(path);
        debug!("{} {}", method, url);

        let mut builder = self.with_headers(self.client.request(method.clone(), &url));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = json_body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("{} {} returned {}", method, url, status.as_u16());

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        Ok(ArkIdResponse::from_body(status.as_u16(), &body))
    }
}

/// Translate a non-success response into `ArkIdError::Api`
///
/// Prefers the `detail` field of a JSON body, then the raw body, then the
/// canonical reason phrase.
fn api_error(status: StatusCode, body: &str) -> ArkIdError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string));

    let message = match detail {
        Some(detail) => detail,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    };

    ArkIdError::Api {
        status: status.as_u16(),
        message,
    }
}
