//! Organization service client

use log::info;
use serde_json::Value;

use crate::arkid::authorizers::{Authorizer, AuthorizerKind};
use crate::arkid::base::{BaseClient, ClientOptions};
use crate::arkid::response::ArkIdResponse;
use crate::config::api;
use crate::error::Result;

use super::models::{MembershipChange, OrgListParams, PageParams};

/// Client for organization management under `/siteapi/v1/org/`
///
/// Every method issues exactly one request and returns the server's body
/// untouched. Payloads are not validated locally; rejected requests come
/// back as `ArkIdError::Api`.
#[derive(Debug)]
pub struct OrgClient {
    base: BaseClient,
}

impl OrgClient {
    pub const NAME: &'static str = "OrgClient";

    /// Authorizer kinds this client accepts (besides none at all)
    pub const ALLOWED_AUTHORIZERS: &'static [AuthorizerKind] = &[AuthorizerKind::Basic];

    /// Create a client for the ArkID instance at `base_url`
    ///
    /// Fails with `ArkIdError::UnsupportedAuthorizer` if `authorizer` is not
    /// a kind this client accepts.
    pub fn new(base_url: &str, authorizer: Option<Box<dyn Authorizer>>) -> Result<Self> {
        Self::with_options(base_url, authorizer, ClientOptions::default())
    }

    pub fn with_options(
        base_url: &str,
        authorizer: Option<Box<dyn Authorizer>>,
        options: ClientOptions,
    ) -> Result<Self> {
        let base = BaseClient::new(
            base_url,
            api::ORG_SERVICE,
            Self::NAME,
            authorizer,
            Self::ALLOWED_AUTHORIZERS,
            options,
        )?;
        Ok(Self { base })
    }

    /// Underlying transport client
    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    /// List the caller's organizations (`GET /siteapi/v1/org/`)
    pub async fn query_own_org(&self, params: &OrgListParams) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.query_own_org()");
        self.base.get("", &params.to_query()).await
    }

    /// Fetch one organization (`GET /siteapi/v1/org/<oid>/`)
    pub async fn query_org(&self, oid: &str) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.query_org()");
        self.base.get(&org_path(oid), &[]).await
    }

    /// Create an organization (`POST /siteapi/v1/org/`)
    ///
    /// `json_body` is sent as-is, e.g. `{"name": "example"}`.
    pub async fn create_org(&self, json_body: &Value) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.create_org()");
        self.base.post("", Some(json_body)).await
    }

    /// Delete an organization (`DELETE /siteapi/v1/org/<oid>/`)
    pub async fn delete_org(&self, oid: &str) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.delete_org()");
        self.base.delete(&org_path(oid)).await
    }

    /// Update an organization (`PATCH /siteapi/v1/org/<oid>/`)
    pub async fn update_org(&self, oid: &str, json_body: &Value) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.update_org()");
        self.base.patch(&org_path(oid), Some(json_body)).await
    }

    /// List members of an organization (`GET /siteapi/v1/org/<oid>/user/`)
    ///
    /// Returns one page; the caller picks it with `params`.
    pub async fn query_orguser_list(
        &self,
        oid: &str,
        params: &PageParams,
    ) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.query_orguser_list()");
        self.base.get(&users_path(oid), &params.to_query()).await
    }

    /// Add members (`PATCH /siteapi/v1/org/<oid>/user/`, subject `add`)
    pub async fn add_orguser<I, S>(&self, oid: &str, usernames: I) -> Result<ArkIdResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        info!("Calling OrgClient.add_orguser()");
        self.change_membership(oid, MembershipChange::add(usernames)).await
    }

    /// Remove members (`PATCH /siteapi/v1/org/<oid>/user/`, subject `delete`)
    pub async fn delete_orguser<I, S>(&self, oid: &str, usernames: I) -> Result<ArkIdResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        info!("Calling OrgClient.delete_orguser()");
        self.change_membership(oid, MembershipChange::delete(usernames)).await
    }

    async fn change_membership(
        &self,
        oid: &str,
        change: MembershipChange,
    ) -> Result<ArkIdResponse> {
        let body = serde_json::to_value(&change)?;
        self.base.patch(&users_path(oid), Some(&body)).await
    }

    /// Fetch one member (`GET /siteapi/v1/org/<oid>/user/<username>/`)
    pub async fn query_orguser(&self, oid: &str, username: &str) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.query_orguser()");
        self.base.get(&user_path(oid, username), &[]).await
    }

    /// Update one member (`PATCH /siteapi/v1/org/<oid>/user/<username>/`)
    ///
    /// Known fields: `email`, `employee_number`, `position`, `hiredate`,
    /// `remark`.
    pub async fn update_orguser(
        &self,
        oid: &str,
        username: &str,
        json_body: &Value,
    ) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.update_orguser()");
        self.base
            .patch(&user_path(oid, username), Some(json_body))
            .await
    }

    /// Current invitation key (`GET /siteapi/v1/org/<oid>/invitation/`)
    pub async fn get_org_invitation_key(&self, oid: &str) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.get_org_invitation_key()");
        self.base.get(&invitation_path(oid), &[]).await
    }

    /// Issue a fresh invitation key (`PUT /siteapi/v1/org/<oid>/invitation/`)
    pub async fn refresh_org_invitation_key(&self, oid: &str) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.refresh_org_invitation_key()");
        self.base.put(&invitation_path(oid), None).await
    }

    /// View an organization through an invitation key
    /// (`GET /siteapi/v1/org/<oid>/invitation/<key>/`)
    pub async fn view_org_by_invitation_key(
        &self,
        oid: &str,
        invite_link_key: &str,
    ) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.view_org_by_invitation_key()");
        self.base
            .get(&invitation_key_path(oid, invite_link_key), &[])
            .await
    }

    /// Join an organization through an invitation key
    /// (`POST /siteapi/v1/org/<oid>/invitation/<key>/`)
    pub async fn join_org_by_invitation_key(
        &self,
        oid: &str,
        invite_link_key: &str,
    ) -> Result<ArkIdResponse> {
        info!("Calling OrgClient.join_org_by_invitation_key()");
        self.base
            .post(&invitation_key_path(oid, invite_link_key), None)
            .await
    }
}

// Identifiers are percent-encoded so they stay inside their path segment.

fn org_path(oid: &str) -> String {
    format!("{}/", urlencoding::encode(oid))
}

fn users_path(oid: &str) -> String {
    format!("{}/user/", urlencoding::encode(oid))
}

fn user_path(oid: &str, username: &str) -> String {
    format!(
        "{}/user/{}/",
        urlencoding::encode(oid),
        urlencoding::encode(username)
    )
}

fn invitation_path(oid: &str) -> String {
    format!("{}/invitation/", urlencoding::encode(oid))
}

fn invitation_key_path(oid: &str, key: &str) -> String {
    format!(
        "{}/invitation/{}/",
        urlencoding::encode(oid),
        urlencoding::encode(key)
    )
}

#[cfg(test)]
impl OrgClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            base_url,
            Some(Box::new(crate::arkid::authorizers::BasicAuthorizer::new(
                "test-token",
            ))),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arkid::authorizers::NullAuthorizer;
    use crate::error::ArkIdError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn org_json(oid: &str, name: &str) -> Value {
        json!({
            "oid": oid,
            "name": name,
            "owner": {"username": "admin"},
            "dept": {"uid": format!("{}-dept", oid)},
            "group": {"uid": format!("{}-group", oid)}
        })
    }

    #[test]
    fn test_path_builders() {
        assert_eq!(org_path("o-1"), "o-1/");
        assert_eq!(users_path("o-1"), "o-1/user/");
        assert_eq!(user_path("o-1", "alice"), "o-1/user/alice/");
        assert_eq!(invitation_path("o-1"), "o-1/invitation/");
        assert_eq!(invitation_key_path("o-1", "k"), "o-1/invitation/k/");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        assert_eq!(org_path("a/b"), "a%2Fb/");
        assert_eq!(user_path("o-1", "bob smith"), "o-1/user/bob%20smith/");
    }

    #[test]
    fn test_new_accepts_basic_and_none() {
        let client = OrgClient::new("https://arkid.example.com", None).unwrap();
        assert_eq!(client.base().authorizer_kind(), AuthorizerKind::Null);
        assert_eq!(client.base().service(), "org");

        let client = OrgClient::test_client("https://arkid.example.com");
        assert_eq!(client.base().authorizer_kind(), AuthorizerKind::Basic);
    }

    #[test]
    fn test_new_rejects_disallowed_authorizer() {
        let result = OrgClient::new("https://arkid.example.com", Some(Box::new(NullAuthorizer)));
        match result {
            Err(ArkIdError::UnsupportedAuthorizer { client, authorizer }) => {
                assert_eq!(client, "OrgClient");
                assert_eq!(authorizer, "NullAuthorizer");
            }
            other => panic!("Expected UnsupportedAuthorizer, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_disallowed_authorizer_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = OrgClient::new(&mock_server.uri(), Some(Box::new(NullAuthorizer)));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_query_own_org() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/"))
            .and(query_param("role", "admin"))
            .and(header("authorization", "Token test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [org_json("o-1", "first"), org_json("o-2", "second")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client
            .query_own_org(&OrgListParams::with_role("admin"))
            .await
            .unwrap();

        assert_eq!(resp.items().len(), 2);
        assert_eq!(resp.items()[0]["oid"], "o-1");
        assert_eq!(resp.items()[1]["name"], "second");
    }

    #[tokio::test]
    async fn test_query_own_org_forwards_extra_params() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/"))
            .and(query_param("name", "x"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([org_json("o-1", "x")])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let params = OrgListParams::default().param("name", "x");
        let resp = client.query_own_org(&params).await.unwrap();
        assert_eq!(resp.items()[0]["name"], "x");
    }

    #[tokio::test]
    async fn test_query_orguser_list_forwards_extra_params() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/o-1/user/"))
            .and(query_param("page", "1"))
            .and(query_param("keyword", "ali"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let params = PageParams {
            page: Some(1),
            ..PageParams::default()
        }
        .param("keyword", "ali");
        client.query_orguser_list("o-1", &params).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_org() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/o-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(org_json("o-1", "example")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.query_org("o-1").await.unwrap();
        assert_eq!(resp["oid"], "o-1");
        assert_eq!(resp["name"], "example");
    }

    #[tokio::test]
    async fn test_query_org_not_found() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/missing/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&mock_server)
            .await;

        match client.query_org("missing").await.unwrap_err() {
            ArkIdError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not found.");
            }
            other => panic!("Expected ArkIdError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_org_encodes_oid() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/a%2Fb/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(org_json("a/b", "odd")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.query_org("a/b").await.unwrap();
        assert_eq!(resp["name"], "odd");
    }

    #[tokio::test]
    async fn test_create_org_sends_body_unmodified() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());
        let body = json!({"name": "example"});

        Mock::given(method("POST"))
            .and(path("/siteapi/v1/org/"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(201).set_body_json(org_json("o-new", "example")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.create_org(&body).await.unwrap();
        assert_eq!(resp.status(), 201);
        assert_eq!(resp["oid"], "o-new");
    }

    #[tokio::test]
    async fn test_create_org_validation_error() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/siteapi/v1/org/"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"name": ["This field is required."]})),
            )
            .mount(&mock_server)
            .await;

        let err = client.create_org(&json!({})).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("This field is required."));
    }

    #[tokio::test]
    async fn test_delete_org() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/siteapi/v1/org/o-1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.delete_org("o-1").await.unwrap();
        assert_eq!(resp.status(), 204);
    }

    #[tokio::test]
    async fn test_update_org() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());
        let body = json!({"name": "renamed"});

        Mock::given(method("PATCH"))
            .and(path("/siteapi/v1/org/o-1/"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(org_json("o-1", "renamed")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.update_org("o-1", &body).await.unwrap();
        assert_eq!(resp["name"], "renamed");
    }

    #[tokio::test]
    async fn test_query_orguser_list_with_paging() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/o-1/user/"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 11,
                "next": null,
                "previous": "http://arkid/siteapi/v1/org/o-1/user/?page=1&page_size=10",
                "results": [{"username": "alice", "email": "alice@example.com"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client
            .query_orguser_list("o-1", &PageParams::new(2, 10))
            .await
            .unwrap();

        assert_eq!(resp["count"], 11);
        assert_eq!(resp.items()[0]["username"], "alice");
    }

    #[tokio::test]
    async fn test_add_orguser() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/siteapi/v1/org/o-1/user/"))
            .and(body_json(json!({"subject": "add", "usernames": ["a", "b"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"username": "a"}, {"username": "b"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.add_orguser("o-1", ["a", "b"]).await.unwrap();
        assert_eq!(resp.items().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_orguser() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/siteapi/v1/org/o-1/user/"))
            .and(body_json(json!({"subject": "delete", "usernames": ["a", "b"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let usernames = vec!["a".to_string(), "b".to_string()];
        let resp = client.delete_orguser("o-1", usernames).await.unwrap();
        assert!(resp.items().is_empty());
    }

    #[tokio::test]
    async fn test_query_orguser() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/o-1/user/alice/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "username": "alice",
                "email": "alice@example.com",
                "position": "engineer"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.query_orguser("o-1", "alice").await.unwrap();
        assert_eq!(resp["position"], "engineer");
    }

    #[tokio::test]
    async fn test_update_orguser() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());
        let body = json!({"email": "example@org.com", "remark": "contractor"});

        Mock::given(method("PATCH"))
            .and(path("/siteapi/v1/org/o-1/user/alice/"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "username": "alice",
                "email": "example@org.com",
                "remark": "contractor"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.update_orguser("o-1", "alice", &body).await.unwrap();
        assert_eq!(resp["email"], "example@org.com");
    }

    #[tokio::test]
    async fn test_get_org_invitation_key() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/o-1/invitation/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k-1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.get_org_invitation_key("o-1").await.unwrap();
        assert_eq!(resp["key"], "k-1");
    }

    #[tokio::test]
    async fn test_refresh_org_invitation_key() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/siteapi/v1/org/o-1/invitation/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k-2"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.refresh_org_invitation_key("o-1").await.unwrap();
        assert_eq!(resp["key"], "k-2");
    }

    #[tokio::test]
    async fn test_view_org_by_invitation_key() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/siteapi/v1/org/o-1/invitation/k-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(org_json("o-1", "example")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.view_org_by_invitation_key("o-1", "k-1").await.unwrap();
        assert_eq!(resp["name"], "example");
    }

    #[tokio::test]
    async fn test_join_org_by_invitation_key() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/siteapi/v1/org/o-1/invitation/k-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(org_json("o-1", "example")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let resp = client.join_org_by_invitation_key("o-1", "k-1").await.unwrap();
        assert_eq!(resp["oid"], "o-1");
    }

    #[tokio::test]
    async fn test_join_with_expired_key() {
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/siteapi/v1/org/o-1/invitation/stale/"))
            .respond_with(ResponseTemplate::new(403).set_body_string("invalid invite key"))
            .mount(&mock_server)
            .await;

        match client
            .join_org_by_invitation_key("o-1", "stale")
            .await
            .unwrap_err()
        {
            ArkIdError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "invalid invite key");
            }
            other => panic!("Expected ArkIdError::Api, got {:?}", other),
        }
    }

    /// Logger that keeps every record, tagged with the emitting thread
    mod capture {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::sync::{Mutex, Once};
        use std::thread::{self, ThreadId};

        struct CaptureLogger;

        static LOGGER: CaptureLogger = CaptureLogger;
        static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());
        static INIT: Once = Once::new();

        impl Log for CaptureLogger {
            fn enabled(&self, _metadata: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                if let Ok(mut records) = RECORDS.lock() {
                    records.push((
                        thread::current().id(),
                        record.level(),
                        record.args().to_string(),
                    ));
                }
            }

            fn flush(&self) {}
        }

        pub fn install() {
            INIT.call_once(|| {
                let _ = log::set_logger(&LOGGER);
                log::set_max_level(LevelFilter::Info);
            });
            take_calls();
        }

        /// Drain the `Calling ...` records emitted on the current thread
        pub fn take_calls() -> Vec<(Level, String)> {
            let me = thread::current().id();
            let mut records = RECORDS.lock().unwrap();
            let (mine, rest): (Vec<_>, Vec<_>) =
                records.drain(..).partition(|(id, _, _)| *id == me);
            *records = rest;
            mine.into_iter()
                .filter(|(_, _, msg)| msg.starts_with("Calling "))
                .map(|(_, level, msg)| (level, msg))
                .collect()
        }
    }

    #[tokio::test]
    async fn test_each_call_logs_its_own_name_once() {
        capture::install();
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/siteapi/v1/org/o-1/invitation/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "k-2"})))
            .mount(&mock_server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/siteapi/v1/org/o-1/user/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&mock_server)
            .await;

        client.refresh_org_invitation_key("o-1").await.unwrap();
        assert_eq!(
            capture::take_calls(),
            vec![(
                log::Level::Info,
                "Calling OrgClient.refresh_org_invitation_key()".to_string()
            )]
        );

        client.delete_orguser("o-1", ["alice"]).await.unwrap();
        assert_eq!(
            capture::take_calls(),
            vec![(
                log::Level::Info,
                "Calling OrgClient.delete_orguser()".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_call_is_logged_before_failure() {
        capture::install();
        let mock_server = MockServer::start().await;
        let client = OrgClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&mock_server)
            .await;

        assert!(client.query_org("missing").await.is_err());
        assert_eq!(
            capture::take_calls(),
            vec![(log::Level::Info, "Calling OrgClient.query_org()".to_string())]
        );
    }
}
