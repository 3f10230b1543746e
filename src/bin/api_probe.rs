//! API Probe Binary
//!
//! A minimal standalone smoke check for the hackathon platform API.
//!
//! Run with: cargo run --bin api_probe -- users
//!
//! Required environment variables:
//! - HS_DISCORD_API: Base URL of the platform service (not needed for `token`)

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::info;

use hs_api::{create_verification_hmac, ApiClient};

/// Smoke-check the hackathon platform API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all users
    Users,

    /// Fetch a single user by Discord id
    User { discord_id: String },

    /// List all teams
    Teams,

    /// Fetch a single team by auth id
    Team { auth_id: String },

    /// Resolve a named Discord resource to its platform id
    Resource { name: String },

    /// Re-sync a user's Discord account with their platform record
    Sync { discord_id: String },

    /// Compute a verification token locally (no request issued)
    Token { auth_id: String, hmac_key: String },
}

fn client() -> Result<ApiClient> {
    let client = ApiClient::from_env()?;
    info!("Using API at {}", client.base_url());
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Users => {
            let users = client()?.get_users().await?;
            println!("{}", serde_json::to_string_pretty(&users)?);
            info!("{} users", users.len());
        }
        Command::User { discord_id } => {
            let user = client()?.get_user(&discord_id).await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Command::Teams => {
            let teams = client()?.get_teams().await?;
            println!("{}", serde_json::to_string_pretty(&teams)?);
            info!("{} teams", teams.len());
        }
        Command::Team { auth_id } => {
            let team = client()?.get_team(&auth_id).await?;
            println!("{}", serde_json::to_string_pretty(&team)?);
        }
        Command::Resource { name } => {
            let discord_id = client()?.get_discord_resource(&name).await?;
            println!("{}", discord_id);
        }
        Command::Sync { discord_id } => {
            let message = client()?.sync_user(&discord_id).await?;
            println!("{}", message);
        }
        Command::Token { auth_id, hmac_key } => {
            println!("{}", create_verification_hmac(&auth_id, &hmac_key)?);
        }
    }

    Ok(())
}
