// src/models.rs
use serde::{Deserialize, Serialize};

/// Privilege tier for a participant account.
///
/// The wire format is the tier's position (0 = Unverified .. 4 = Organiser).
/// Ordering is meaningful to callers; the client only passes it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AuthLevel {
    Unverified,
    Applicant,
    Attendee,
    Volunteer,
    Organiser,
}

impl TryFrom<u8> for AuthLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(AuthLevel::Unverified),
            1 => Ok(AuthLevel::Applicant),
            2 => Ok(AuthLevel::Attendee),
            3 => Ok(AuthLevel::Volunteer),
            4 => Ok(AuthLevel::Organiser),
            other => Err(format!("unknown auth level: {}", other)),
        }
    }
}

impl From<AuthLevel> for u8 {
    fn from(level: AuthLevel) -> u8 {
        level as u8
    }
}

/// A named Discord entity (e.g. a role) with its platform id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordResource {
    pub name: String,
    pub discord_id: String,
}

/// A participant account linked to Discord
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub auth_id: String,

    /// Discord user ID (snowflake as string)
    pub discord_id: String,

    pub auth_level: AuthLevel,

    pub email: String,

    pub name: String,

    /// Auth id of the user's team, if they have joined one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// Currently assigned Discord roles (absent means none)
    #[serde(default)]
    pub roles: Vec<DiscordResource>,
}

/// A registered team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub auth_id: String,
    pub name: String,

    /// Auth id of the user who created the team
    pub creator: String,

    pub team_number: u32,
}

/// How a role modification combines with the user's existing assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleMethod {
    /// Union the given roles into the current set
    Add,
    /// Replace the current set with the given roles
    Set,
    /// Subtract the given roles from the current set
    Remove,
}

/// Input describing a role-modification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleOptions {
    pub method: RoleMethod,
    pub roles: Vec<String>,
}

/// Updated role assignment echoed back by the roles endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedRoles {
    pub discord_id: String,
    pub auth_id: String,

    #[serde(default)]
    pub roles: Vec<DiscordResource>,
}

/// Outcome of the account-linking verify endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LinkResult {
    pub message: String,

    /// Where the service wants the user sent next
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_level_ordering() {
        assert!(AuthLevel::Unverified < AuthLevel::Applicant);
        assert!(AuthLevel::Applicant < AuthLevel::Attendee);
        assert!(AuthLevel::Attendee < AuthLevel::Volunteer);
        assert!(AuthLevel::Volunteer < AuthLevel::Organiser);
    }

    #[test]
    fn test_auth_level_wire_format() {
        let level: AuthLevel = serde_json::from_str("3").unwrap();
        assert_eq!(level, AuthLevel::Volunteer);

        let json = serde_json::to_string(&AuthLevel::Organiser).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn test_auth_level_rejects_unknown() {
        let result: std::result::Result<AuthLevel, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_defaults() {
        // team and roles may be absent from the payload
        let user: User = serde_json::from_str(
            r#"{
                "authId": "auth-1",
                "discordId": "111",
                "authLevel": 0,
                "email": "one@example.com",
                "name": "One"
            }"#,
        )
        .unwrap();

        assert_eq!(user.auth_id, "auth-1");
        assert_eq!(user.auth_level, AuthLevel::Unverified);
        assert!(user.team.is_none());
        assert!(user.roles.is_empty());
    }

    #[test]
    fn test_role_method_wire_format() {
        assert_eq!(
            serde_json::to_string(&RoleMethod::Add).unwrap(),
            "\"add\""
        );
        assert_eq!(
            serde_json::to_string(&RoleMethod::Set).unwrap(),
            "\"set\""
        );
        assert_eq!(
            serde_json::to_string(&RoleMethod::Remove).unwrap(),
            "\"remove\""
        );
    }

    #[test]
    fn test_team_round_trip() {
        let team: Team = serde_json::from_str(
            r#"{
                "authId": "team-1",
                "name": "Rustaceans",
                "creator": "auth-1",
                "teamNumber": 42
            }"#,
        )
        .unwrap();

        assert_eq!(team.team_number, 42);
        assert_eq!(team.creator, "auth-1");

        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["teamNumber"], 42);
        assert_eq!(json["authId"], "team-1");
    }
}
