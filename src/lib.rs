//! arkid-client - Rust client for the ArkID site API
//!
//! A thin SDK over ArkID's REST endpoints plus the `arkidctl` command line
//! front end.
//!
//! # Features
//!
//! - Organization CRUD, membership management and invitation keys
//! - Pluggable authorizers checked against each client's allow-list
//! - Untyped response bodies with map-like access
//! - Table, JSON and YAML output for the CLI
//!
//! # Example
//!
//! ```no_run
//! use arkid_client::{BasicAuthorizer, OrgClient};
//!
//! # async fn run() -> arkid_client::Result<()> {
//! let client = OrgClient::new(
//!     "https://arkid.example.com",
//!     Some(Box::new(BasicAuthorizer::new("my-token"))),
//! )?;
//! let org = client.create_org(&serde_json::json!({"name": "example"})).await?;
//! println!("{} {}", org["oid"], org["name"]);
//! # Ok(())
//! # }
//! ```

pub mod arkid;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use arkid::{
    run_invite_command, run_member_command, run_org_command, ArkIdResponse, Authorizer,
    AuthorizerKind, BaseClient, BaseUrlResolver, BasicAuthorizer, ClientOptions,
    MembershipChange, MembershipSubject, NullAuthorizer, OrgClient, OrgListParams, PageParams,
    TokenResolver,
};
pub use cli::{Cli, Command, InviteCommand, MemberCommand, OrgCommand, OutputFormat};
pub use error::{ArkIdError, Result};
pub use output::output_response;
