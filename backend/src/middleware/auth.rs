use actix_web::HttpRequest;
use uuid::Uuid;

use crate::services::auth as auth_service;

/// Extract the authenticated user's id from the Authorization header.
pub fn extract_user_id(req: &HttpRequest, jwt_secret: &str) -> Result<Uuid, AuthMiddlewareError> {
    let token = bearer_token(req)?;

    auth_service::verify_jwt(token, jwt_secret).map_err(|_| AuthMiddlewareError::InvalidToken)
}

/// Pull the raw token out of a `Bearer <token>` Authorization header.
fn bearer_token(req: &HttpRequest) -> Result<&str, AuthMiddlewareError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .ok_or(AuthMiddlewareError::MissingToken)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthMiddlewareError::InvalidToken)?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthMiddlewareError::InvalidToken)
}

#[derive(Debug)]
pub enum AuthMiddlewareError {
    MissingToken,
    InvalidToken,
}

impl std::fmt::Display for AuthMiddlewareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMiddlewareError::MissingToken => write!(f, "Missing authorization token"),
            AuthMiddlewareError::InvalidToken => write!(f, "Invalid authorization token"),
        }
    }
}

impl std::error::Error for AuthMiddlewareError {}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_extraction() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .to_http_request();

        assert_eq!(bearer_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(
            bearer_token(&req),
            Err(AuthMiddlewareError::MissingToken)
        ));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();

        assert!(matches!(
            bearer_token(&req),
            Err(AuthMiddlewareError::InvalidToken)
        ));
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthMiddlewareError::MissingToken.to_string(),
            "Missing authorization token"
        );
        assert_eq!(
            AuthMiddlewareError::InvalidToken.to_string(),
            "Invalid authorization token"
        );
    }
}
