//! ArkID API client module
//!
//! `BaseClient` carries the transport; resource clients such as `OrgClient`
//! describe their endpoints on top of it.

pub mod authorizers;
mod base;
mod credentials;
mod endpoint;
pub mod org;
mod response;

pub use authorizers::{Authorizer, AuthorizerKind, BasicAuthorizer, NullAuthorizer};
pub use base::{BaseClient, ClientOptions};
pub use credentials::TokenResolver;
pub use endpoint::BaseUrlResolver;
pub use org::{
    run_invite_command, run_member_command, run_org_command, MembershipChange,
    MembershipSubject, OrgClient, OrgListParams, PageParams,
};
pub(crate) use response::list_items;
pub use response::ArkIdResponse;
