use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{GamePostRow, GameSystemRow};
use shared::{CreateGamePostRequest, GamePost, GameRecord, GameSystem};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Game not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// All game posts, newest first.
pub async fn list_games(pool: &SqlitePool) -> Result<Vec<GamePost>, GameError> {
    let rows: Vec<GamePostRow> = sqlx::query_as("SELECT * FROM games_posts ORDER BY id DESC")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(|r| r.to_shared()).collect())
}

/// The title/description pair shown in the game detail modal.
pub async fn get_game_record(pool: &SqlitePool, game_id: i64) -> Result<GameRecord, GameError> {
    let row: GamePostRow = sqlx::query_as("SELECT * FROM games_posts WHERE id = ?")
        .bind(game_id)
        .fetch_optional(pool)
        .await?
        .ok_or(GameError::NotFound)?;

    Ok(row.to_record())
}

pub async fn create_game_post(
    pool: &SqlitePool,
    gm_id: &Uuid,
    request: &CreateGamePostRequest,
) -> Result<GamePost, GameError> {
    let result = sqlx::query(
        r#"
        INSERT INTO games_posts (title, system_id, max_players, description, gm_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&request.title)
    .bind(request.system_id)
    .bind(request.max_players)
    .bind(&request.description)
    .bind(gm_id.to_string())
    .execute(pool)
    .await?;

    Ok(GamePost {
        id: result.last_insert_rowid(),
        title: request.title.clone(),
        system_id: request.system_id,
        max_players: request.max_players,
        description: request.description.clone(),
        gm_id: *gm_id,
    })
}

pub async fn list_systems(pool: &SqlitePool) -> Result<Vec<GameSystem>, GameError> {
    let rows: Vec<GameSystemRow> = sqlx::query_as("SELECT * FROM systems ORDER BY title")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(|r| r.to_shared()).collect())
}
