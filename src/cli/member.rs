//! Organization member command definitions

use clap::Subcommand;

/// Subcommands of 'member'
#[derive(Subcommand, Debug)]
pub enum MemberCommand {
    /// List members of an organization (one page)
    #[command(visible_alias = "ls")]
    List {
        /// Organization ID (oid)
        oid: String,

        /// Page number (server default: 1)
        #[arg(long)]
        page: Option<u32>,

        /// Page size (server default: 30)
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show one member
    Get {
        /// Organization ID (oid)
        oid: String,

        /// Username of the member
        username: String,
    },

    /// Add users to an organization
    Add {
        /// Organization ID (oid)
        oid: String,

        /// Usernames to add
        #[arg(required = true)]
        usernames: Vec<String>,
    },

    /// Remove users from an organization
    #[command(visible_alias = "rm")]
    Remove {
        /// Organization ID (oid)
        oid: String,

        /// Usernames to remove
        #[arg(required = true)]
        usernames: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long, default_value_t = false)]
        yes: bool,
    },

    /// Update a member's organization profile
    ///
    /// Known fields: email, employee_number, position, hiredate, remark
    #[command(verbatim_doc_comment)]
    Update {
        /// Organization ID (oid)
        oid: String,

        /// Username of the member
        username: String,

        /// Fields to change as a JSON object
        #[arg(long)]
        data: String,
    },
}
