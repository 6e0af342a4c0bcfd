use std::sync::Arc;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::middleware::RateLimiter;

pub mod game;
pub mod user;

pub use game::*;
pub use user::*;

/// Application state shared across all handlers
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    pub login_rate_limiter: Arc<RateLimiter>,
}
