/// Configuration constants for the ArkID site API
pub mod api {
    /// Base path shared by every site API service
    pub const BASE_PATH: &str = "/siteapi/v1";

    /// Organization service name
    pub const ORG_SERVICE: &str = "org";

    /// Product token sent in the User-Agent header
    pub const USER_AGENT_PREFIX: &str = "arkid-client-rust";

    /// Connect timeout for the HTTP transport (seconds)
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout for the HTTP transport (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".arkid/credentials.json";

    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "ARKID_TOKEN";
}

/// Configuration constants for base URL resolution
pub mod endpoint {
    /// Environment variable holding the ArkID base URL
    pub const ENV_VAR: &str = "ARKID_BASE_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
