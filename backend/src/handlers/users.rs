use actix_web::{web, HttpRequest, HttpResponse, Result};
use shared::{ApiError, ApiSuccess, PreferencesRequest};

use crate::middleware::auth::extract_user_id;
use crate::models::AppState;
use crate::services::profiles as profiles_service;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(get_profile))
        .route("/preferences", web::post().to(set_preferences));
}

async fn get_profile(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = match extract_user_id(&req, &state.config.jwt_secret) {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiError {
                error: "unauthorized".to_string(),
                message: "Invalid or missing token".to_string(),
            }))
        }
    };

    match profiles_service::get_profile(&state.db, &user_id).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(ApiSuccess::new(profile))),
        Err(profiles_service::ProfileError::UserNotFound) => {
            Ok(HttpResponse::NotFound().json(ApiError {
                error: "not_found".to_string(),
                message: "User not found".to_string(),
            }))
        }
        Err(e) => {
            log::error!("Failed to load profile: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Failed to load profile".to_string(),
            }))
        }
    }
}

async fn set_preferences(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<PreferencesRequest>,
) -> Result<HttpResponse> {
    let user_id = match extract_user_id(&req, &state.config.jwt_secret) {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiError {
                error: "unauthorized".to_string(),
                message: "Invalid or missing token".to_string(),
            }))
        }
    };

    let request = body.into_inner();
    if request.roles.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiError {
            error: "validation_error".to_string(),
            message: "Select at least one role".to_string(),
        }));
    }

    match profiles_service::set_preferences(&state.db, &user_id, &request.roles).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiSuccess::new(()))),
        Err(e) => {
            log::error!("Failed to save preferences: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Failed to save preferences".to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::middleware::RateLimiter;
    use crate::services::auth as auth_service;
    use actix_web::{test, App};
    use shared::CreateUserRequest;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;

    async fn test_state() -> web::Data<AppState> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        web::Data::new(AppState {
            db: pool,
            config: Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                database_url: "sqlite::memory:".to_string(),
                jwt_secret: "test-secret".to_string(),
                jwt_expiration_hours: 24,
                cors_origins: vec!["http://localhost".to_string()],
                static_files_path: None,
            },
            login_rate_limiter: Arc::new(RateLimiter::new(5, 900)),
        })
    }

    async fn seed_user_token(state: &web::Data<AppState>) -> String {
        let user = auth_service::register_user(
            &state.db,
            &CreateUserRequest {
                username: "frank".to_string(),
                email: "frank@example.com".to_string(),
                password: "password123".to_string(),
                confirmation: "password123".to_string(),
            },
        )
        .await
        .unwrap();
        auth_service::create_jwt(&user.id, &state.config.jwt_secret, 24).unwrap()
    }

    #[actix_web::test]
    async fn test_profile_requires_auth() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_preferences_rejects_empty_roles() {
        let state = test_state().await;
        let token = seed_user_token(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/preferences")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "roles": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_preferences_update_profile_flags() {
        let state = test_state().await;
        let token = seed_user_token(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/preferences")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "roles": ["player", "gm"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri("/api/profile")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["player"], true);
        assert_eq!(body["data"]["gm"], true);
    }

    #[actix_web::test]
    async fn test_preferences_are_idempotent() {
        let state = test_state().await;
        let token = seed_user_token(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/preferences")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(serde_json::json!({ "roles": ["player"] }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);
        }

        let req = test::TestRequest::get()
            .uri("/api/profile")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["player"], true);
        assert_eq!(body["data"]["gm"], false);
    }
}
