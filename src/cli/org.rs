//! Organization command definitions and arguments

use clap::{Parser, Subcommand};

/// Subcommands of 'org'
#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// List organizations the caller belongs to
    #[command(visible_alias = "ls")]
    List {
        /// Only organizations where the caller has this role (e.g. admin)
        #[arg(long)]
        role: Option<String>,
    },

    /// Show one organization
    Get {
        /// Organization ID (oid)
        oid: String,
    },

    /// Create an organization
    Create(CreateOrgArgs),

    /// Update an organization
    Update {
        /// Organization ID (oid)
        oid: String,

        /// Fields to change as a JSON object
        #[arg(long)]
        data: String,
    },

    /// Delete an organization
    #[command(visible_alias = "rm")]
    Delete {
        /// Organization ID (oid)
        oid: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },
}

/// Arguments for 'org create'
#[derive(Parser, Debug)]
pub struct CreateOrgArgs {
    /// Organization name
    #[arg(long, conflicts_with = "data", required_unless_present = "data")]
    pub name: Option<String>,

    /// Full organization payload as a JSON object
    #[arg(long)]
    pub data: Option<String>,
}
