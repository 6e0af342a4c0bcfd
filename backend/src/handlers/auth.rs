use actix_web::{web, HttpRequest, HttpResponse, Result};
use shared::{ApiError, ApiSuccess, AuthResponse, CreateUserRequest, LoginRequest};

use crate::middleware::auth::extract_user_id;
use crate::models::AppState;
use crate::services::auth as auth_service;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(me)),
    );
}

async fn register(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    if request.username.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
        || request.confirmation.is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiError {
            error: "validation_error".to_string(),
            message: "All fields are required".to_string(),
        }));
    }

    if request.password != request.confirmation {
        return Ok(HttpResponse::BadRequest().json(ApiError {
            error: "validation_error".to_string(),
            message: "Passwords do not match".to_string(),
        }));
    }

    if request.password.len() < 8 {
        return Ok(HttpResponse::BadRequest().json(ApiError {
            error: "validation_error".to_string(),
            message: "Password must be at least 8 characters long".to_string(),
        }));
    }

    match auth_service::register_user(&state.db, &request).await {
        Ok(user) => {
            let token = match auth_service::create_jwt(
                &user.id,
                &state.config.jwt_secret,
                state.config.jwt_expiration_hours,
            ) {
                Ok(token) => token,
                Err(e) => {
                    log::error!("Failed to create JWT: {:?}", e);
                    return Ok(HttpResponse::InternalServerError().json(ApiError {
                        error: "internal_error".to_string(),
                        message: "Failed to create session".to_string(),
                    }));
                }
            };
            Ok(HttpResponse::Created().json(ApiSuccess::new(AuthResponse { token, user })))
        }
        Err(auth_service::AuthError::UserAlreadyExists) => {
            Ok(HttpResponse::Conflict().json(ApiError {
                error: "user_exists".to_string(),
                message: "Username or email is already taken".to_string(),
            }))
        }
        Err(e) => {
            log::error!("Registration failed: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Registration failed".to_string(),
            }))
        }
    }
}

async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> Result<HttpResponse> {
    let request = body.into_inner();

    if !state.login_rate_limiter.check(&request.identity) {
        return Ok(HttpResponse::TooManyRequests().json(ApiError {
            error: "rate_limited".to_string(),
            message: "Too many login attempts, please try again later".to_string(),
        }));
    }

    match auth_service::login_user(&state.db, &request).await {
        Ok(user) => {
            let token = match auth_service::create_jwt(
                &user.id,
                &state.config.jwt_secret,
                state.config.jwt_expiration_hours,
            ) {
                Ok(token) => token,
                Err(e) => {
                    log::error!("Failed to create JWT: {:?}", e);
                    return Ok(HttpResponse::InternalServerError().json(ApiError {
                        error: "internal_error".to_string(),
                        message: "Failed to create session".to_string(),
                    }));
                }
            };
            state.login_rate_limiter.clear(&request.identity);
            Ok(HttpResponse::Ok().json(ApiSuccess::new(AuthResponse { token, user })))
        }
        Err(auth_service::AuthError::InvalidCredentials)
        | Err(auth_service::AuthError::UserNotFound) => {
            state.login_rate_limiter.record(&request.identity);
            Ok(HttpResponse::Unauthorized().json(ApiError {
                error: "invalid_credentials".to_string(),
                message: "Invalid username or password".to_string(),
            }))
        }
        Err(e) => {
            log::error!("Login failed: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Login failed".to_string(),
            }))
        }
    }
}

async fn me(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let user_id = match extract_user_id(&req, &state.config.jwt_secret) {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiError {
                error: "unauthorized".to_string(),
                message: "Invalid or missing token".to_string(),
            }))
        }
    };

    match auth_service::get_user_by_id(&state.db, &user_id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiSuccess::new(user))),
        Err(auth_service::AuthError::UserNotFound) => {
            Ok(HttpResponse::NotFound().json(ApiError {
                error: "not_found".to_string(),
                message: "User not found".to_string(),
            }))
        }
        Err(e) => {
            log::error!("Failed to load current user: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                error: "internal_error".to_string(),
                message: "Failed to load current user".to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::middleware::RateLimiter;
    use actix_web::{test, App};
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

    fn register_body(username: &str) -> serde_json::Value {
        serde_json::json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "password123",
            "confirmation": "password123",
        })
    }

    #[actix_web::test]
    async fn test_register_and_login_with_username() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("alice"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "identity": "alice",
                "password": "password123",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"]["token"].as_str().is_some());
        assert_eq!(body["data"]["user"]["username"], "alice");
    }

    #[actix_web::test]
    async fn test_login_with_email() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("bob"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "identity": "bob@example.com",
                "password": "password123",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_register_rejects_mismatched_confirmation() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "username": "carol",
                "email": "carol@example.com",
                "password": "password123",
                "confirmation": "password124",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_duplicate_registration_conflicts() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("dave"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("dave"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
    }

    #[actix_web::test]
    async fn test_login_rate_limited_after_repeated_failures() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        for _ in 0..5 {
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(serde_json::json!({
                    "identity": "nobody",
                    "password": "wrong-password",
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401);
        }

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "identity": "nobody",
                "password": "wrong-password",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 429);
    }

    #[actix_web::test]
    async fn test_me_requires_token() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_me_returns_current_user() {
        let state = test_state().await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(super::super::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_body("erin"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        let token = body["data"]["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["username"], "erin");
        assert_eq!(body["data"]["filled_preferences"], false);
    }
}
