//! Customer Registration CLI - Schema setup and form submission.
//!
//! # Usage
//!
//! ```bash
//! # Create the customers table (reads DATABASE_URL)
//! reg-cli init-db
//!
//! # Register a customer through the running service
//! reg-cli register --name "Ada Lovelace" --email ada@example.com
//! ```
//!
//! # Commands
//!
//! - `init-db` - Create the `customers` table if missing
//! - `register` - Submit the registration form once

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";

#[derive(Parser)]
#[command(name = "reg-cli")]
#[command(author, version, about = "Customer registration CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the customers table if it does not exist
    InitDb,
    /// Submit a registration to the service
    Register {
        /// Customer name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Customer email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Base URL of the registration service
        #[arg(long, env = "REGISTRATION_API_URL", default_value = DEFAULT_API_URL)]
        url: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but did not succeed.
async fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::InitDb => {
            commands::init_db::run().await?;
            Ok(true)
        }
        Commands::Register { name, email, url } => {
            Ok(commands::register::run(&url, &name, &email).await?)
        }
    }
}
