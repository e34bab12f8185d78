use clap::{Parser, Subcommand};

const VAULTPASS_LONG_VERSION: &str = concat!(
"version: ", env!("CARGO_PKG_VERSION"), "\n",
"git sha: ", env!("VAULTPASS_GIT_SHA"), "\n",
"build time (UTC): ", env!("VAULTPASS_BUILD_TIME"), "\n",
"target: ", env!("VAULTPASS_TARGET")
);

#[derive(Parser)]
#[command(
    name = "vaultpass",
    version = env!("CARGO_PKG_VERSION"),
    long_version = VAULTPASS_LONG_VERSION,
    about = " 🔐 vaultpass — remote password vault client"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set the server URL and API key
    Configure,
    /// List all passwords stored in the vault
    List {
        /// Output JSON array (machine-readable, secrets excluded)
        #[arg(long)]
        json: bool,
    },
    /// Show a single password entry
    Get {
        /// Server-assigned entry id
        id: i64,
    },
    /// Add a new password entry
    Add {
        /// Optional title to avoid the interactive prompt
        #[arg(long)]
        title: Option<String>,
        /// Optional username value (empty if omitted)
        #[arg(long)]
        username: Option<String>,
        /// Optional URL value
        #[arg(long)]
        url: Option<String>,
        /// Optional notes value
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update an entry; prompts are prefilled with the current values
    Update {
        /// Server-assigned entry id
        id: i64,
    },
    /// Delete an entry
    Delete {
        /// Server-assigned entry id
        id: i64,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}
