use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub filled_preferences: bool,
    pub registered_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl UserRow {
    pub fn to_shared(&self) -> shared::User {
        shared::User {
            id: Uuid::parse_str(&self.id).unwrap(),
            username: self.username.clone(),
            email: self.email.clone(),
            filled_preferences: self.filled_preferences,
            registered_at: self.registered_at,
            last_login: self.last_login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_to_shared() {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let row = UserRow {
            id: id.to_string(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed".to_string(),
            filled_preferences: false,
            registered_at: now,
            last_login: now,
        };

        let shared = row.to_shared();

        assert_eq!(shared.id, id);
        assert_eq!(shared.username, "testuser");
        assert_eq!(shared.email, "test@example.com");
        assert!(!shared.filled_preferences);
    }
}
