use serde::Serialize;
use crate::domain::entities::users::user::User;
use crate::domain::models::session::StatusMessage;

/// 로그인 페이지에 노출되는 프로바이더 링크
#[derive(Debug, Serialize)]
pub struct LoginProviderLink {
    pub id: String,
    pub name: String,
    pub login_path: String,
}

/// 일반 로그인 페이지 응답
///
/// 세션에 쌓인 상태 메시지는 이 응답으로 한 번만 표시됩니다.
#[derive(Debug, Serialize)]
pub struct LoginPageResponse {
    pub providers: Vec<LoginProviderLink>,
    pub messages: Vec<StatusMessage>,
}

/// 현재 로그인한 사용자 정보
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub auth_provider: String,
    pub provider_user_id: String,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            provider_user_id: user.provider_user_id().to_string(),
            username: user.username,
            display_name: user.display_name,
            email: user.email,
            auth_provider: user.auth_provider.as_str().to_string(),
            roles: user.roles,
            profile_image_url: user.oauth_data.provider_profile_image,
            created_at: user.created_at.try_to_rfc3339_string().unwrap_or_default(),
            last_login_at: user
                .last_login_at
                .and_then(|t| t.try_to_rfc3339_string().ok()),
        }
    }
}
