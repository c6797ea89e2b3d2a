//! # Authentication Configuration Module
//!
//! Yelp OAuth 엔드포인트, JWT 토큰, 세션 쿠키, 관리자 계정 등
//! 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ### Yelp 프로바이더 엔드포인트 (선택)
//! ```bash
//! export YELP_AUTHORIZE_URL="https://www.yelp.com/oauth2/authorize"
//! export YELP_TOKEN_URL="https://api.yelp.com/oauth2/token"
//! export YELP_RESOURCE_OWNER_URL="https://api.yelp.com/v3/users/me"
//! ```
//!
//! ### 프로바이더 자격 증명 초기값 (설정 저장소가 비어 있을 때만 사용)
//! ```bash
//! export YELP_CLIENT_ID="your-client-id"
//! export YELP_CLIENT_SECRET="your-client-secret"
//! export YELP_SCOPES="email"
//! export YELP_API_CALLS="https://api.yelp.com/v3/users/me/reviews"
//! ```
//!
//! ### JWT / 세션
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export SESSION_COOKIE_NAME="social_auth_sid"
//! export SESSION_TTL_SECONDS="3600"
//! ```

use std::env;
use crate::domain::models::settings::ProviderSettings;

/// Yelp OAuth 2.0 엔드포인트 설정
///
/// 기본값은 Yelp 공개 엔드포인트이며, 테스트나 프록시 환경에서는
/// 환경 변수로 교체할 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct YelpEndpointConfig {
    pub authorize_url: String,
    pub token_url: String,
    pub resource_owner_url: String,
}

impl YelpEndpointConfig {
    pub fn from_env() -> Self {
        Self {
            authorize_url: env::var("YELP_AUTHORIZE_URL")
                .unwrap_or_else(|_| "https://www.yelp.com/oauth2/authorize".to_string()),
            token_url: env::var("YELP_TOKEN_URL")
                .unwrap_or_else(|_| "https://api.yelp.com/oauth2/token".to_string()),
            resource_owner_url: env::var("YELP_RESOURCE_OWNER_URL")
                .unwrap_or_else(|_| "https://api.yelp.com/v3/users/me".to_string()),
        }
    }

    /// 환경 변수로 지정된 초기 프로바이더 설정
    ///
    /// 설정 저장소에 값이 없을 때 한 번 시드하는 용도입니다.
    pub fn bootstrap_settings() -> Option<ProviderSettings> {
        let client_id = env::var("YELP_CLIENT_ID").ok()?;
        let client_secret = env::var("YELP_CLIENT_SECRET").ok()?;

        Some(ProviderSettings {
            client_id: client_id.trim().to_string(),
            client_secret: client_secret.trim().to_string(),
            scopes: env::var("YELP_SCOPES").unwrap_or_default(),
            api_calls: env::var("YELP_API_CALLS").unwrap_or_default(),
        })
    }
}

/// 로그인 후 발급하는 JWT 설정
pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

/// 로그인 시도 세션 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 ID를 담는 쿠키 이름
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "social_auth_sid".to_string())
    }

    /// 세션 만료 시간 (초)
    pub fn ttl_seconds() -> u64 {
        env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(3600)
    }

    /// 로그인 성공 시 발급하는 JWT 쿠키 이름
    pub fn auth_cookie_name() -> &'static str {
        "auth_token"
    }
}

/// 관리자 권한 부여 대상 설정
pub struct AdminConfig;

impl AdminConfig {
    /// 가입 시 `admin` 역할을 받을 프로바이더 사용자 ID 목록
    ///
    /// `SOCIAL_AUTH_ADMIN_IDS="abc,def"`
    pub fn admin_provider_ids() -> Vec<String> {
        env::var("SOCIAL_AUTH_ADMIN_IDS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// 사용자 인증 프로바이더 열거형
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Yelp 소셜 로그인
    Yelp,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "yelp" => Ok(AuthProvider::Yelp),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Yelp => "yelp",
        }
    }
}
