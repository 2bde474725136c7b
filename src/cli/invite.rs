//! Invitation key command definitions

use clap::Subcommand;

/// Subcommands of 'invite'
#[derive(Subcommand, Debug)]
pub enum InviteCommand {
    /// Show the current invitation key of an organization
    Key {
        /// Organization ID (oid)
        oid: String,
    },

    /// Replace the invitation key (the old key stops working)
    Refresh {
        /// Organization ID (oid)
        oid: String,
    },

    /// View an organization through an invitation key
    View {
        /// Organization ID (oid)
        oid: String,

        /// Invitation key
        key: String,
    },

    /// Join an organization with an invitation key
    Join {
        /// Organization ID (oid)
        oid: String,

        /// Invitation key
        key: String,
    },
}
