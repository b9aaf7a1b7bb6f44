//! Driftline CLI - Session minting and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Mint an admin session token (24h expiry by default)
//! driftline session mint --role admin
//!
//! # Mint a token with a custom lifetime
//! driftline session mint --role admin --ttl-hours 8
//!
//! # Decode and verify an existing token
//! driftline session inspect <token>
//!
//! # Generate a signing secret that passes config validation
//! driftline secret generate
//! ```
//!
//! # Commands
//!
//! - `session mint` - Produce a signed session token (the login side of
//!   the token scheme; the site only ever verifies)
//! - `session inspect` - Decode, verify, and print a token
//! - `secret generate` - Generate a high-entropy signing secret

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "driftline")]
#[command(author, version, about = "Driftline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint and inspect session tokens
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Manage signing secrets
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Mint a signed session token
    Mint {
        /// Role claim for the token (only `admin` passes the gate)
        #[arg(short, long, default_value = "admin")]
        role: String,

        /// Token lifetime in hours
        #[arg(short, long, default_value_t = 24)]
        ttl_hours: i64,
    },
    /// Decode and verify a session token
    Inspect {
        /// The token value (contents of the `admin_session` cookie)
        token: String,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Generate a high-entropy signing secret
    Generate,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Session { action } => match action {
            SessionAction::Mint { role, ttl_hours } => {
                commands::session::mint(&role, ttl_hours)?;
            }
            SessionAction::Inspect { token } => {
                commands::session::inspect(&token)?;
            }
        },
        Commands::Secret { action } => match action {
            SecretAction::Generate => commands::secret::generate()?,
        },
    }
    Ok(())
}
