use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Sign in with one of the known accounts
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Register a new account (profile starts incomplete)
    SignUp {
        #[arg(long)]
        email: String,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        /// Request contributor capability
        #[arg(long)]
        contributor: bool,

        /// Request administrator capability
        #[arg(long)]
        admin: bool,
    },

    /// Clear the current session
    SignOut,

    /// Show the current identity, if any
    Whoami,

    /// Evaluate a gated view against the current session
    Access {
        /// signed_in, contributor, administrator or completed_profile
        requirement: String,
    },
}
