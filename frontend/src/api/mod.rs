use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    ApiError, ApiSuccess, AuthResponse, CreateGamePostRequest, CreateUserRequest, GamePost,
    GameRecord, GameSystem, LoginRequest, PreferencesRequest, Role, User, UserProfile,
};
use std::fmt;

const API_BASE: &str = "/api";
const TOKEN_KEY: &str = "auth_token";

#[derive(Clone)]
pub struct AuthState {
    pub token: RwSignal<Option<String>>,
    pub user: RwSignal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        let stored_token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();

        Self {
            token: create_rw_signal(stored_token),
            user: create_rw_signal(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn set_auth(&self, response: AuthResponse) {
        LocalStorage::set(TOKEN_KEY, &response.token).ok();
        self.token.set(Some(response.token));
        self.user.set(Some(response.user));
    }

    pub fn logout(&self) {
        LocalStorage::delete(TOKEN_KEY);
        self.token.set(None);
        self.user.set(None);
    }
}

/// Failure modes of the game data fetch. The modal renders the same
/// fallback text for every kind; the distinction only feeds the console
/// log.
#[derive(Debug, Clone, PartialEq)]
pub enum GameDataError {
    Http(u16),
    Network(String),
    Decode(String),
}

impl fmt::Display for GameDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameDataError::Http(status) => write!(f, "server returned status {}", status),
            GameDataError::Network(e) => write!(f, "request failed: {}", e),
            GameDataError::Decode(e) => write!(f, "invalid response body: {}", e),
        }
    }
}

/// URL of the game data endpoint for one game. Served outside `/api`,
/// with the numeric id embedded in the path.
pub fn game_data_url(game_id: i64) -> String {
    format!("/game_data/{}", game_id)
}

pub struct ApiClient;

impl ApiClient {
    fn get_token() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    async fn request<T: DeserializeOwned>(
        method: &str,
        path: &str,
        body: Option<impl Serialize>,
        auth: bool,
    ) -> Result<T, String> {
        let url = format!("{}{}", API_BASE, path);

        let mut request = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err("Invalid method".to_string()),
        };

        if auth {
            if let Some(token) = Self::get_token() {
                request = request.header("Authorization", &format!("Bearer {}", token));
            }
        }

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?
        } else {
            request.send().await.map_err(|e| e.to_string())?
        };

        if response.ok() {
            let result: ApiSuccess<T> = response.json().await.map_err(|e| e.to_string())?;
            Ok(result.data)
        } else {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "unknown".to_string(),
                message: "An unknown error occurred".to_string(),
            });
            Err(error.message)
        }
    }

    // Auth endpoints
    pub async fn register(request: CreateUserRequest) -> Result<AuthResponse, String> {
        Self::request("POST", "/auth/register", Some(request), false).await
    }

    pub async fn login(request: LoginRequest) -> Result<AuthResponse, String> {
        Self::request("POST", "/auth/login", Some(request), false).await
    }

    pub async fn get_current_user() -> Result<User, String> {
        Self::request::<User>("GET", "/auth/me", None::<()>, true).await
    }

    // Game endpoints
    pub async fn list_games() -> Result<Vec<GamePost>, String> {
        Self::request::<Vec<GamePost>>("GET", "/games", None::<()>, false).await
    }

    pub async fn create_game_post(request: CreateGamePostRequest) -> Result<GamePost, String> {
        Self::request("POST", "/games", Some(request), true).await
    }

    pub async fn list_systems() -> Result<Vec<GameSystem>, String> {
        Self::request::<Vec<GameSystem>>("GET", "/systems", None::<()>, false).await
    }

    /// Fetches the payload for the game detail modal. The endpoint lives
    /// outside `/api` and the body is the bare record, so this bypasses
    /// the envelope-aware `request` helper. Exactly one request is sent;
    /// there is no retry.
    pub async fn game_data(game_id: i64) -> Result<GameRecord, GameDataError> {
        let response = Request::get(&game_data_url(game_id))
            .send()
            .await
            .map_err(|e| GameDataError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(GameDataError::Http(response.status()));
        }

        response
            .json::<GameRecord>()
            .await
            .map_err(|e| GameDataError::Decode(e.to_string()))
    }

    // Profile endpoints
    pub async fn get_profile() -> Result<UserProfile, String> {
        Self::request::<UserProfile>("GET", "/profile", None::<()>, true).await
    }

    pub async fn set_preferences(roles: Vec<Role>) -> Result<(), String> {
        Self::request::<()>(
            "POST",
            "/preferences",
            Some(PreferencesRequest { roles }),
            true,
        )
        .await
    }
}
