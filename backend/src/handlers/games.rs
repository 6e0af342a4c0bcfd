use actix_web::{web, HttpRequest, HttpResponse, Result};
use shared::{ApiError, ApiSuccess, CreateGamePostRequest};

use crate::middleware::auth::extract_user_id;
use crate::models::AppState;
use crate::services::games as games_service;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/games")
            .route("", web::get().to(list_games))
            .route("", web::post().to(create_game)),
    )
    .route("/systems", web::get().to(list_systems));
}

async fn list_games(state: web::Data<AppState>) -> Result<HttpResponse> {
    match games_service::list_games(&state.db).await {
        Ok(games) => Ok(HttpResponse::Ok().json(ApiSuccess::new(games))),
        Err(e) => {
            log::error!("Failed to list games: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Failed to list games".to_string(),
            }))
        }
    }
}

async fn create_game(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateGamePostRequest>,
) -> Result<HttpResponse> {
    let gm_id = match extract_user_id(&req, &state.config.jwt_secret) {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiError {
                error: "unauthorized".to_string(),
                message: "Invalid or missing token".to_string(),
            }))
        }
    };

    let request = body.into_inner();
    if request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiError {
            error: "validation_error".to_string(),
            message: "Title is required".to_string(),
        }));
    }
    if request.max_players < 1 {
        return Ok(HttpResponse::BadRequest().json(ApiError {
            error: "validation_error".to_string(),
            message: "Max players must be at least 1".to_string(),
        }));
    }

    match games_service::create_game_post(&state.db, &gm_id, &request).await {
        Ok(game) => Ok(HttpResponse::Created().json(ApiSuccess::new(game))),
        Err(e) => {
            log::error!("Failed to create game post: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Failed to create game post".to_string(),
            }))
        }
    }
}

async fn list_systems(state: web::Data<AppState>) -> Result<HttpResponse> {
    match games_service::list_systems(&state.db).await {
        Ok(systems) => Ok(HttpResponse::Ok().json(ApiSuccess::new(systems))),
        Err(e) => {
            log::error!("Failed to list systems: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Failed to list systems".to_string(),
            }))
        }
    }
}

/// Serves the payload for the game detail modal. The body is the bare
/// record, not wrapped in the `/api` envelope, so the frontend can decode
/// it straight into a `GameRecord`.
pub async fn game_data(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let game_id = path.into_inner();
    match games_service::get_game_record(&state.db, game_id).await {
        Ok(record) => Ok(HttpResponse::Ok().json(record)),
        Err(games_service::GameError::NotFound) => Ok(HttpResponse::NotFound().json(ApiError {
            error: "not_found".to_string(),
            message: "Game not found".to_string(),
        })),
        Err(e) => {
            log::error!("Failed to fetch game data for {}: {:?}", game_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Failed to fetch game data".to_string(),
            }))
        }
    }
}
