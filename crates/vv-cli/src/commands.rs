use clap::{Subcommand, ValueEnum};
use vv_core::Role;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with a directory account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create a new account and sign in as it
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum)]
        role: RoleArg,
        /// Doctor only
        #[arg(long)]
        specialization: Option<String>,
        /// Doctor only
        #[arg(long)]
        license_number: Option<String>,
        /// Family only (e.g. "Son", "Daughter")
        #[arg(long)]
        patient_relation: Option<String>,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the current session
    Whoami,

    /// Check whether the current session may open a path
    Route {
        /// e.g. /doctor-dashboard or /video-call/patient-1
        path: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RoleArg {
    Doctor,
    Family,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Doctor => Role::Doctor,
            RoleArg::Family => Role::Family,
        }
    }
}
