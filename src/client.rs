//! HTTP client for the hackathon platform API.
//!
//! Every operation maps to a single request against the configured base URL,
//! decodes the JSON envelope the service wraps its payloads in, and returns
//! the unwrapped value. No caching, no retries, no shared state between calls.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::models::{LinkResult, RoleOptions, Team, UpdatedRoles, User};

/// Environment variable naming the service base URL
pub const BASE_URL_VAR: &str = "HS_DISCORD_API";

/// Client for the hackathon platform API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

// Response envelopes. The service wraps every payload in a named field;
// these stay private and the public functions return the unwrapped values.

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct TeamsEnvelope {
    teams: Vec<Team>,
}

#[derive(Deserialize)]
struct TeamEnvelope {
    team: Team,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceEnvelope {
    discord_id: String,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    message: String,
}

#[derive(Deserialize)]
struct RolesEnvelope {
    user: UpdatedRoles,
}

impl ApiClient {
    /// Create a client for the given base URL.
    ///
    /// The URL is validated here so a bad configuration fails at startup
    /// instead of on the first request.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a preconfigured `reqwest::Client`, for callers
    /// that want their own timeouts or proxy settings on the transport.
    pub fn with_http_client(base_url: &str, http_client: reqwest::Client) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::Config {
                message: format!("base URL is empty (set {})", BASE_URL_VAR),
            });
        }

        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ApiError::Config {
            message: format!("invalid base URL '{}': {}", trimmed, e),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::Config {
                message: format!("base URL '{}' must be http or https", trimmed),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            http_client,
        })
    }

    /// Create a client from the `HS_DISCORD_API` environment variable
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_VAR).map_err(|_| ApiError::Config {
            message: format!("{} environment variable is not set", BASE_URL_VAR),
        })?;
        Self::new(&base_url)
    }

    /// Base URL this client was configured with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all registered users
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/api/v1/users", self.base_url);
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let body = self.read_success(response).await?;
        let envelope: UsersEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.users)
    }

    /// Fetch a single user by Discord id
    pub async fn get_user(&self, discord_id: &str) -> Result<User> {
        let url = format!(
            "{}/api/v1/users/{}",
            self.base_url,
            urlencoding::encode(discord_id)
        );
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::UserNotFound {
                discord_id: discord_id.to_string(),
            });
        }

        let body = self.read_success(response).await?;
        let envelope: UserEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.user)
    }

    /// Modify a user's Discord role assignment.
    ///
    /// The `{method, roles}` body is sent exactly as given; the service
    /// validates the method and role identifiers and echoes back the
    /// resulting assignment.
    pub async fn modify_user_roles(
        &self,
        discord_id: &str,
        options: &RoleOptions,
    ) -> Result<UpdatedRoles> {
        let url = format!(
            "{}/api/v1/users/{}/roles",
            self.base_url,
            urlencoding::encode(discord_id)
        );
        debug!("PUT {} ({:?}, {} roles)", url, options.method, options.roles.len());

        let response = self.http_client.put(&url).json(options).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::UserNotFound {
                discord_id: discord_id.to_string(),
            });
        }

        let body = self.read_success(response).await?;
        let envelope: RolesEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.user)
    }

    /// Re-sync a user's Discord account with their platform record
    pub async fn sync_user(&self, discord_id: &str) -> Result<String> {
        let url = format!(
            "{}/api/v1/users/{}/sync",
            self.base_url,
            urlencoding::encode(discord_id)
        );
        debug!("PUT {}", url);

        let response = self.http_client.put(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::UserNotFound {
                discord_id: discord_id.to_string(),
            });
        }

        let body = self.read_success(response).await?;
        let envelope: MessageEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.message)
    }

    /// Fetch all registered teams
    pub async fn get_teams(&self) -> Result<Vec<Team>> {
        let url = format!("{}/api/v1/teams", self.base_url);
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let body = self.read_success(response).await?;
        let envelope: TeamsEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.teams)
    }

    /// Fetch a single team by auth id
    pub async fn get_team(&self, auth_id: &str) -> Result<Team> {
        let url = format!(
            "{}/api/v1/teams/{}",
            self.base_url,
            urlencoding::encode(auth_id)
        );
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::TeamNotFound {
                auth_id: auth_id.to_string(),
            });
        }

        let body = self.read_success(response).await?;
        let envelope: TeamEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.team)
    }

    /// Resolve a named Discord resource (e.g. a role) to its platform id
    pub async fn get_discord_resource(&self, name: &str) -> Result<String> {
        let url = format!(
            "{}/api/v1/discord/resources/{}",
            self.base_url,
            urlencoding::encode(name)
        );
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::ResourceNotFound {
                name: name.to_string(),
            });
        }

        let body = self.read_success(response).await?;
        let envelope: ResourceEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.discord_id)
    }

    /// Complete an account link by passing the OAuth `code` and `state`
    /// through to the verify endpoint. Both travel as query parameters.
    pub async fn link_account(&self, auth_id: &str, code: &str, state: &str) -> Result<LinkResult> {
        let url = format!("{}/api/v1/discord/verify", self.base_url);
        debug!("GET {} (linking {})", url, auth_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("code", code), ("state", state)])
            .send()
            .await?;

        let body = self.read_success(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Read the body of a successful response, or turn a non-success status
    /// into a `Service` error carrying the status and whatever body came back.
    async fn read_success(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.text().await?);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("API request failed: {} {}", status, body);
        Err(ApiError::Service {
            status: status.as_u16(),
            body,
        })
    }
}
