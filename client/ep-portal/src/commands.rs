use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Employee operations (requires a session)
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Show whether a session is stored and which API is used
    Status,
}
