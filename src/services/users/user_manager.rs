//! # 소셜 로그인 사용자 관리자
//!
//! 콜백 처리기가 만든 [`AuthenticatedIdentity`]를 로컬 계정에 연결하고
//! 로그인 응답을 만드는 협력자입니다.
//!
//! ## 계정 연동 정책
//!
//! 1. **기존 사용자**: `(yelp, provider_user_id)`로 찾은 계정의 마지막 로그인 시각 갱신
//! 2. **신규 사용자**: 이름에서 유일한 사용자명을 만들어 계정 생성, 추가 프로필 데이터 저장
//! 3. **차단된 계정**: 로그인 거부

use std::sync::Arc;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::HttpResponse;
use async_trait::async_trait;
use log::{info, warn};

use crate::config::{AuthProvider, Environment, SessionConfig, SiteConfig};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::{AuthenticatedIdentity, OAuthData};
use crate::domain::models::token::IssuedToken;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserStore;
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::is_safe_destination;

/// 사용자 인증 협력자
///
/// 응답 본문이 `Send`가 아니므로 `?Send` future를 사용합니다.
#[async_trait(?Send)]
pub trait SocialAuthUserManager: Send + Sync {
    /// 프로바이더 사용자 ID에 연결된 로컬 계정이 있는지 확인합니다.
    async fn user_exists(&self, provider_user_id: &str) -> AppResult<bool>;

    /// 로컬 계정으로 로그인시키고 최종 HTTP 응답을 반환합니다.
    async fn authenticate_user(&self, identity: &AuthenticatedIdentity, destination: Option<&str>) -> AppResult<HttpResponse>;
}

pub struct SocialUserManager {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    admin_provider_ids: Vec<String>,
}

impl SocialUserManager {
    /// `admin_provider_ids`에 포함된 프로바이더 사용자는 가입 시 `admin` 역할을 받습니다.
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, admin_provider_ids: Vec<String>) -> Self {
        Self {
            users,
            tokens,
            admin_provider_ids,
        }
    }

    async fn create_user(&self, identity: &AuthenticatedIdentity) -> AppResult<User> {
        let base = if identity.first_name.trim().is_empty() {
            &identity.display_name
        } else {
            &identity.first_name
        };
        let username = self.generate_unique_username(base).await?;

        let mut roles = vec!["user".to_string()];
        if self.admin_provider_ids.iter().any(|id| id == &identity.provider_user_id) {
            roles.push("admin".to_string());
        }

        let user = User::new_social(
            username,
            identity.display_name.clone(),
            identity.email.clone(),
            AuthProvider::Yelp,
            OAuthData {
                provider_user_id: identity.provider_user_id.clone(),
                provider_profile_image: identity.image_url.clone(),
                provider_data: Some(identity.extras_value()),
            },
            roles,
        );

        let created = self.users.create(user).await?;
        info!("새 Yelp 사용자 등록: {} ({})", created.username, identity.provider_user_id);
        Ok(created)
    }

    async fn generate_unique_username(&self, base_name: &str) -> AppResult<String> {
        let base = normalize_username(base_name);
        let mut username = base.clone();
        let mut counter = 1;

        loop {
            match self.users.find_by_username(&username).await? {
                None => return Ok(username),
                Some(_) => {
                    username = format!("{}_{}", base, counter);
                    counter += 1;

                    if counter > 1000 {
                        return Err(AppError::InternalError("사용자명 생성 실패".to_string()));
                    }
                }
            }
        }
    }

    fn login_response(&self, issued: &IssuedToken, destination: Option<&str>) -> HttpResponse {
        let location = destination
            .filter(|d| is_safe_destination(d))
            .map(str::to_string)
            .unwrap_or_else(SiteConfig::post_login_path);

        let cookie = Cookie::build(SessionConfig::auth_cookie_name(), issued.access_token.clone())
            .path("/")
            .http_only(true)
            .secure(Environment::current().requires_secure_cookies())
            .same_site(SameSite::Lax)
            .max_age(CookieDuration::seconds(issued.expires_in))
            .finish();

        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .cookie(cookie)
            .finish()
    }
}

/// 사용자명 후보: 소문자, 공백은 `_`, 영숫자와 `_ - .` 외 문자는 제거
fn normalize_username(name: &str) -> String {
    let normalized: String = name
        .trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();

    if normalized.is_empty() {
        "yelp_user".to_string()
    } else {
        normalized
    }
}

#[async_trait(?Send)]
impl SocialAuthUserManager for SocialUserManager {
    async fn user_exists(&self, provider_user_id: &str) -> AppResult<bool> {
        Ok(self
            .users
            .find_by_provider_id(AuthProvider::Yelp, provider_user_id)
            .await?
            .is_some())
    }

    async fn authenticate_user(&self, identity: &AuthenticatedIdentity, destination: Option<&str>) -> AppResult<HttpResponse> {
        let user = match self.users.find_by_provider_id(AuthProvider::Yelp, &identity.provider_user_id).await? {
            Some(existing) => {
                if !existing.is_active {
                    warn!("차단된 계정의 로그인 시도: {}", existing.username);
                    return Err(AppError::AuthorizationError("차단된 계정입니다".to_string()));
                }

                let id = existing.id_string().ok_or_else(|| {
                    AppError::InternalError("사용자 ID가 없습니다".to_string())
                })?;
                self.users.record_login(&id).await?;
                info!("Yelp 사용자 로그인: {}", existing.username);
                existing
            }
            None => self.create_user(identity).await?,
        };

        let issued = self.tokens.issue(&user)?;
        Ok(self.login_response(&issued, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::user_repo::MemoryUserStore;

    fn identity(provider_user_id: &str, first_name: &str) -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            provider_user_id: provider_user_id.to_string(),
            first_name: first_name.to_string(),
            display_name: format!("{} L.", first_name),
            email: Some("a@b.com".to_string()),
            image_url: None,
            access_token: "tok".to_string(),
            extras_json: r#"[{"reviews":3}]"#.to_string(),
        }
    }

    fn manager(store: Arc<MemoryUserStore>, admins: Vec<String>) -> SocialUserManager {
        SocialUserManager::new(store, Arc::new(TokenService::new("test-secret", 1)), admins)
    }

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("Ada Lovelace"), "ada_lovelace");
        assert_eq!(normalize_username("  "), "yelp_user");
        assert_eq!(normalize_username("J.R. <script>"), "j.r._script");
    }

    #[actix_web::test]
    async fn test_new_user_is_created_with_extras() {
        let store = Arc::new(MemoryUserStore::new());
        let manager = manager(store.clone(), vec![]);

        assert!(!manager.user_exists("U1").await.unwrap());

        let response = manager.authenticate_user(&identity("U1", "Ada"), Some("/node/1")).await.unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/node/1");
        assert!(response.cookies().any(|c| c.name() == "auth_token" && c.http_only() == Some(true)));

        let user = store.find_by_provider_id(AuthProvider::Yelp, "U1").await.unwrap().unwrap();
        assert_eq!(user.username, "ada");
        assert_eq!(user.roles, vec!["user"]);
        assert_eq!(user.oauth_data.provider_data, Some(serde_json::json!([{"reviews": 3}])));
        assert!(manager.user_exists("U1").await.unwrap());
    }

    #[actix_web::test]
    async fn test_username_collision_gets_suffix() {
        let store = Arc::new(MemoryUserStore::new());
        let manager = manager(store.clone(), vec![]);

        manager.authenticate_user(&identity("U1", "Ada"), None).await.unwrap();
        manager.authenticate_user(&identity("U2", "Ada"), None).await.unwrap();

        let second = store.find_by_provider_id(AuthProvider::Yelp, "U2").await.unwrap().unwrap();
        assert_eq!(second.username, "ada_1");
    }

    #[actix_web::test]
    async fn test_admin_ids_get_admin_role() {
        let store = Arc::new(MemoryUserStore::new());
        let manager = manager(store.clone(), vec!["U1".to_string()]);

        manager.authenticate_user(&identity("U1", "Ada"), None).await.unwrap();

        let user = store.find_by_provider_id(AuthProvider::Yelp, "U1").await.unwrap().unwrap();
        assert!(user.roles.contains(&"admin".to_string()));
    }

    #[actix_web::test]
    async fn test_unsafe_destination_falls_back() {
        let store = Arc::new(MemoryUserStore::new());
        let manager = manager(store, vec![]);

        let response = manager
            .authenticate_user(&identity("U1", "Ada"), Some("https://evil.example"))
            .await
            .unwrap();

        let location = response.headers().get(header::LOCATION).unwrap().to_str().unwrap();
        assert!(location.starts_with('/'));
        assert!(!location.starts_with("//"));
    }

    #[actix_web::test]
    async fn test_blocked_user_is_refused() {
        let store = Arc::new(MemoryUserStore::new());
        let manager = manager(store.clone(), vec![]);

        let mut blocked = User::new_social(
            "ada".to_string(),
            "Ada".to_string(),
            None,
            AuthProvider::Yelp,
            OAuthData {
                provider_user_id: "U1".to_string(),
                provider_profile_image: None,
                provider_data: None,
            },
            vec!["user".to_string()],
        );
        blocked.is_active = false;
        store.create(blocked).await.unwrap();

        let err = manager.authenticate_user(&identity("U1", "Ada"), None).await.unwrap_err();
        assert!(matches!(err, AppError::AuthorizationError(_)));
    }
}
