use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::UserRow;
use shared::{Role, UserProfile};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("User not found")]
    UserNotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub async fn get_profile(pool: &SqlitePool, user_id: &Uuid) -> Result<UserProfile, ProfileError> {
    let user: UserRow = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(user_id.to_string())
        .fetch_optional(pool)
        .await?
        .ok_or(ProfileError::UserNotFound)?;

    let player = has_role(pool, user_id, Role::Player).await?;
    let gm = has_role(pool, user_id, Role::Gm).await?;

    Ok(UserProfile {
        id: *user_id,
        username: user.username,
        email: user.email,
        player,
        gm,
    })
}

async fn has_role(pool: &SqlitePool, user_id: &Uuid, role: Role) -> Result<bool, ProfileError> {
    let query = match role {
        Role::Player => "SELECT COUNT(*) FROM players WHERE user_id = ?",
        Role::Gm => "SELECT COUNT(*) FROM gms WHERE user_id = ?",
    };

    let count = sqlx::query_scalar::<_, i64>(query)
        .bind(user_id.to_string())
        .fetch_one(pool)
        .await?;

    Ok(count > 0)
}

/// Record the roles chosen in the preferences questionnaire and mark it
/// filled. Re-submitting the same role is a no-op.
pub async fn set_preferences(
    pool: &SqlitePool,
    user_id: &Uuid,
    roles: &[Role],
) -> Result<(), ProfileError> {
    for role in roles {
        let query = match role {
            Role::Player => "INSERT OR IGNORE INTO players (user_id) VALUES (?)",
            Role::Gm => "INSERT OR IGNORE INTO gms (user_id) VALUES (?)",
        };

        sqlx::query(query)
            .bind(user_id.to_string())
            .execute(pool)
            .await?;
    }

    sqlx::query("UPDATE users SET filled_preferences = TRUE WHERE id = ?")
        .bind(user_id.to_string())
        .execute(pool)
        .await?;

    Ok(())
}
