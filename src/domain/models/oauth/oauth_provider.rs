//! OAuth 2.0 프로토콜 값 객체
//!
//! 프로바이더와 주고받는 토큰, 인가 요청 정보, 사용자 엔티티에 붙는
//! 프로바이더 연동 데이터를 정의합니다.

use std::fmt;
use serde::{Deserialize, Serialize};

/// 프로바이더 토큰 엔드포인트 응답
///
/// 토큰 값은 `Debug` 출력에서 마스킹됩니다.
#[derive(Clone, Deserialize, Serialize, PartialEq)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl AccessToken {
    /// Bearer 토큰 값만으로 생성합니다.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            access_token: token.into(),
            token_type: Some("Bearer".to_string()),
            expires_in: None,
            refresh_token: None,
            scope: None,
        }
    }

    pub fn secret(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("scope", &self.scope)
            .finish()
    }
}

/// 프로바이더 인가 화면으로 보낼 요청
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationRequest {
    /// state가 포함된 인가 URL
    pub url: String,
    /// 이번 시도에 발급된 anti-forgery state
    pub state: String,
}

/// 사용자 엔티티에 저장되는 OAuth 연동 데이터
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OAuthData {
    pub provider_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_profile_image: Option<String>,
    /// 가입 시 수집한 추가 프로필 데이터 (extras JSON 배열)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_data: Option<serde_json::Value>,
}
