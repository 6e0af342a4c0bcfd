use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for game posts
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GamePostRow {
    pub id: i64,
    pub title: String,
    pub system_id: Option<i64>,
    pub max_players: i64,
    pub description: Option<String>,
    pub gm_id: String,
}

impl GamePostRow {
    pub fn to_shared(&self) -> shared::GamePost {
        shared::GamePost {
            id: self.id,
            title: self.title.clone(),
            system_id: self.system_id,
            max_players: self.max_players,
            description: self.description.clone(),
            gm_id: Uuid::parse_str(&self.gm_id).unwrap(),
        }
    }

    /// The two display fields served by `GET /game_data/{id}`. A NULL
    /// description becomes an empty string.
    pub fn to_record(&self) -> shared::GameRecord {
        shared::GameRecord {
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

/// Database model for game systems
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GameSystemRow {
    pub id: i64,
    pub title: String,
    pub abbreviation: Option<String>,
}

impl GameSystemRow {
    pub fn to_shared(&self) -> shared::GameSystem {
        shared::GameSystem {
            id: self.id,
            title: self.title.clone(),
            abbreviation: self.abbreviation.clone(),
        }
    }
}
