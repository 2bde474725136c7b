//! CLI argument parsing

mod common;
mod invite;
mod member;
mod org;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{parse_json_data, OutputFormat};
pub use invite::InviteCommand;
pub use member::MemberCommand;
pub use org::{CreateOrgArgs, OrgCommand};

/// ArkID organization management CLI
#[derive(Parser, Debug)]
#[command(name = "arkidctl")]
#[command(version)]
#[command(
    about = "Manage ArkID organizations, members and invitation keys",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// ArkID base URL, e.g. https://arkid.example.com
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API token (overrides env var and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Batch mode: no prompts, no spinners
    #[arg(long, default_value_t = false, global = true)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage organizations
    #[command(visible_alias = "orgs")]
    Org {
        #[command(subcommand)]
        action: OrgCommand,
    },

    /// Manage organization members
    #[command(visible_alias = "members")]
    Member {
        #[command(subcommand)]
        action: MemberCommand,
    },

    /// Manage organization invitation keys
    #[command(visible_alias = "invitation")]
    Invite {
        #[command(subcommand)]
        action: InviteCommand,
    },
}
