//! Typed async client for the hackathon platform API.
//!
//! The platform tracks hackathon participants, their teams, and the Discord
//! accounts and roles linked to them. This crate wraps the service's HTTP API
//! in typed request functions, plus the verification-token helper used during
//! account linking.
//!
//! ```no_run
//! use hs_api::ApiClient;
//!
//! # async fn run() -> hs_api::Result<()> {
//! let client = ApiClient::new("https://api.example.com")?;
//! for user in client.get_users().await? {
//!     println!("{} ({:?})", user.name, user.auth_level);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod verification;

pub use client::{ApiClient, BASE_URL_VAR};
pub use error::{ApiError, Result};
pub use models::{
    AuthLevel, DiscordResource, LinkResult, RoleMethod, RoleOptions, Team, UpdatedRoles, User,
};
pub use verification::create_verification_hmac;
