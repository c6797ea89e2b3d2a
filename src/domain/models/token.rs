//! 로그인 완료 후 발급하는 JWT 클레임
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 로컬 사용자 ID
/// - `username`: 사용자명
/// - `auth_provider`: 가입 경로
/// - `roles`: 사용자 권한 목록
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub auth_provider: AuthProvider,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

/// 발급된 세션 토큰
#[derive(Debug, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
