//! User Entity Implementation
//!
//! 소셜 로그인으로 가입한 로컬 사용자 계정입니다.
//! 프로바이더가 이메일을 주지 않을 수 있으므로 이메일은 선택 필드입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::models::oauth::OAuthData;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 표시 이름
    pub display_name: String,
    /// 사용자 이메일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 프로바이더 연동 데이터
    pub oauth_data: OAuthData,
    /// 계정 활성화 여부 (차단된 계정은 로그인 불가)
    pub is_active: bool,
    /// 사용자 역할
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 소셜 로그인 사용자를 생성합니다.
    pub fn new_social(
        username: String,
        display_name: String,
        email: Option<String>,
        auth_provider: AuthProvider,
        oauth_data: OAuthData,
        roles: Vec<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            display_name,
            email,
            auth_provider,
            oauth_data,
            is_active: true,
            roles,
            last_login_at: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn provider_user_id(&self) -> &str {
        &self.oauth_data.provider_user_id
    }
}
