use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// User Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub filled_preferences: bool,
    pub registered_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

/// Login accepts a username or an email address in `identity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identity: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// ============================================================================
// Role Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Gm,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Gm => "gm",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "player" => Ok(Role::Player),
            "gm" => Ok(Role::Gm),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesRequest {
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub player: bool,
    pub gm: bool,
}

// ============================================================================
// Game Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSystem {
    pub id: i64,
    pub title: String,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePost {
    pub id: i64,
    pub title: String,
    pub system_id: Option<i64>,
    pub max_players: i64,
    pub description: Option<String>,
    pub gm_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGamePostRequest {
    pub title: String,
    pub system_id: Option<i64>,
    pub max_players: i64,
    pub description: Option<String>,
}

/// Body of `GET /game_data/{id}`, served bare (no envelope).
///
/// Both fields default so a response with missing fields still
/// deserializes and renders as empty text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Tests
// ============================================================================
