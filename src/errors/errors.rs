//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 로그인 플로우(리다이렉트 왕복) 중의 실패는 JSON 에러 응답이 아니라
//! 로그인 페이지로의 리다이렉트로 끝나야 하므로 별도의 [`LoginFailure`]로 분류합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! fn validate(settings: &ProviderSettings) -> Result<(), AppError> {
//!     if settings.client_id.is_empty() {
//!         return Err(AppError::ConfigurationError("Client ID is missing".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 프로바이더 설정 누락 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (502 Bad Gateway)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 내부 정보를 노출하지 않도록 일반 메시지로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": message
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

/// 로그인 플로우 실패 분류
///
/// 모든 변형은 로그인 페이지로의 리다이렉트와 사용자 메시지로 끝납니다.
/// `InvalidState`, `TokenExchange`, `ProfileUnavailable`은 어떤 검사가
/// 실패했는지 드러내지 않도록 같은 사용자 메시지를 사용합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoginFailure {
    /// 프로바이더 자격 증명 미설정
    #[error("provider is not configured: {0}")]
    Configuration(String),

    /// 사용자가 프로바이더 화면에서 인증을 거부
    #[error("user cancelled the login")]
    UserCancelled,

    /// 반환된 state가 비어 있거나 저장된 값과 다름
    #[error("invalid oauth2 state")]
    InvalidState,

    /// authorization code 교환 실패
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    /// 리소스 소유자 프로필 조회 실패
    #[error("profile unavailable: {0}")]
    ProfileUnavailable(String),
}

impl LoginFailure {
    /// 로깅/표시용 분류 코드
    pub fn kind(&self) -> &'static str {
        match self {
            LoginFailure::Configuration(_) => "configuration_error",
            LoginFailure::UserCancelled => "user_cancelled",
            LoginFailure::InvalidState => "invalid_state",
            LoginFailure::TokenExchange(_) => "exchange_error",
            LoginFailure::ProfileUnavailable(_) => "profile_unavailable",
        }
    }

    /// 로그인 페이지에 표시할 메시지
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginFailure::Configuration(_) => {
                "Social Auth Yelp not configured properly. Contact site administrator."
            }
            LoginFailure::UserCancelled => "You could not be authenticated.",
            LoginFailure::InvalidState
            | LoginFailure::TokenExchange(_)
            | LoginFailure::ProfileUnavailable(_) => {
                "Yelp login failed. Please try again or contact site administrator."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Client ID is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("network not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_configuration_error_is_server_error() {
        let error = AppError::ConfigurationError("client secret missing".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_external_service_error_is_bad_gateway() {
        let error = AppError::ExternalServiceError("yelp down".to_string());
        assert_eq!(error.status_code(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_login_failure_messages_do_not_leak_which_check_failed() {
        let generic = LoginFailure::InvalidState.user_message();

        assert_eq!(LoginFailure::TokenExchange("boom".into()).user_message(), generic);
        assert_eq!(LoginFailure::ProfileUnavailable("empty".into()).user_message(), generic);
        assert!(!generic.to_lowercase().contains("state"));
        assert_ne!(LoginFailure::UserCancelled.user_message(), generic);
    }

    #[test]
    fn test_login_failure_kinds() {
        assert_eq!(LoginFailure::UserCancelled.kind(), "user_cancelled");
        assert_eq!(LoginFailure::InvalidState.kind(), "invalid_state");
        assert_eq!(LoginFailure::TokenExchange(String::new()).kind(), "exchange_error");
        assert_eq!(LoginFailure::ProfileUnavailable(String::new()).kind(), "profile_unavailable");
        assert_eq!(LoginFailure::Configuration(String::new()).kind(), "configuration_error");
    }
}
