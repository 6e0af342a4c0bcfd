use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::UserRow;
use shared::{CreateUserRequest, LoginRequest, User};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Password hashing error")]
    HashingError,
    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Users may log in with their username or their email address.
fn identity_column(identity: &str) -> &'static str {
    if identity.contains('@') {
        "email"
    } else {
        "username"
    }
}

pub async fn register_user(pool: &SqlitePool, request: &CreateUserRequest) -> Result<User, AuthError> {
    // Username and email must both be free
    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE username = ? OR email = ?"
    )
    .bind(&request.username)
    .bind(&request.email)
    .fetch_one(pool)
    .await?;

    if existing > 0 {
        return Err(AuthError::UserAlreadyExists);
    }

    // Hash password
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(request.password.as_bytes(), &salt)
        .map_err(|_| AuthError::HashingError)?
        .to_string();

    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, filled_preferences, registered_at, last_login)
        VALUES (?, ?, ?, ?, FALSE, ?, ?)
        "#
    )
    .bind(id.to_string())
    .bind(&request.username)
    .bind(&request.email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        username: request.username.clone(),
        email: request.email.clone(),
        filled_preferences: false,
        registered_at: now,
        last_login: now,
    })
}

pub async fn login_user(pool: &SqlitePool, request: &LoginRequest) -> Result<User, AuthError> {
    let query = format!(
        "SELECT * FROM users WHERE {} = ?",
        identity_column(&request.identity)
    );

    let mut user: UserRow = sqlx::query_as(&query)
        .bind(&request.identity)
        .fetch_optional(pool)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let parsed_hash =
        PasswordHash::new(&user.password_hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(request.password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)?;

    user.last_login = update_last_login(pool, &user.id).await?;

    Ok(user.to_shared())
}

async fn update_last_login(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<chrono::DateTime<Utc>, AuthError> {
    let now = Utc::now();

    sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
        .bind(now)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(now)
}

pub async fn get_user_by_id(pool: &SqlitePool, user_id: &Uuid) -> Result<User, AuthError> {
    let user: UserRow = sqlx::query_as(
        "SELECT * FROM users WHERE id = ?"
    )
    .bind(user_id.to_string())
    .fetch_optional(pool)
    .await?
    .ok_or(AuthError::UserNotFound)?;

    Ok(user.to_shared())
}

pub fn create_jwt(user_id: &Uuid, secret: &str, expiration_hours: i64) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn verify_jwt(token: &str, secret: &str) -> Result<Uuid, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| AuthError::InvalidCredentials)
}
