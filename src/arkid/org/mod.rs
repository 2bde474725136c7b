//! Organization module

mod api;
mod commands;
mod models;

pub use api::OrgClient;
pub use commands::{run_invite_command, run_member_command, run_org_command};
pub use models::{MembershipChange, MembershipSubject, OrgListParams, PageParams};
