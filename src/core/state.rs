//! # 애플리케이션 상태
//!
//! 시작 시 한 번 조립되어 모든 워커가 공유하는 서비스 묶음입니다.
//! 각 필드는 `Arc`이므로 `web::Data<AppState>` 복제 비용이 작습니다.
//!
//! ## 저장소 구성
//!
//! | 백엔드 | 세션 | 설정 | 사용자 |
//! |--------|------|------|--------|
//! | `Persistent` | Redis | Redis | MongoDB |
//! | `Memory` | 메모리 | 메모리 | 메모리 |

use std::sync::Arc;

use log::info;

use crate::caching::redis::RedisClient;
use crate::config::{
    AdminConfig, Environment, HttpClientConfig, SessionConfig, SiteConfig, StorageBackend, StorageConfig,
    YelpEndpointConfig,
};
use crate::core::registry::NetworkManager;
use crate::db::Database;
use crate::domain::models::settings::ProviderSettings;
use crate::errors::errors::AppResult;
use crate::repositories::sessions::session_repo::{MemorySessionStore, RedisSessionStore, SessionStore};
use crate::repositories::settings::settings_repo::{MemorySettingsStore, RedisSettingsStore, SettingsStore};
use crate::repositories::users::user_repo::{MemoryUserStore, MongoUserRepository, UserStore};
use crate::services::auth::token_service::TokenService;
use crate::services::auth::yelp_auth_service::YelpAuthService;
use crate::services::sessions::SessionService;
use crate::services::settings::SettingsService;
use crate::services::users::{SocialAuthUserManager, SocialUserManager};

/// 요청 처리에 필요한 공유 서비스
#[derive(Clone)]
pub struct AppState {
    pub networks: Arc<NetworkManager>,
    pub settings: Arc<SettingsService>,
    pub sessions: Arc<SessionService>,
    pub users: Arc<dyn UserStore>,
    pub user_manager: Arc<dyn SocialAuthUserManager>,
    pub tokens: Arc<TokenService>,
    pub yelp_auth: Arc<YelpAuthService>,
}

/// 상태 조립에 필요한 저장소와 설정값
pub struct StateParts {
    pub networks: NetworkManager,
    pub session_store: Arc<dyn SessionStore>,
    pub settings_store: Arc<dyn SettingsStore>,
    pub users: Arc<dyn UserStore>,
    pub bootstrap: Option<ProviderSettings>,
    pub endpoints: YelpEndpointConfig,
    pub http: HttpClientConfig,
    pub base_url: String,
    pub tokens: TokenService,
    pub session_cookie_name: String,
    pub session_ttl_seconds: u64,
    pub secure_cookies: bool,
    pub admin_provider_ids: Vec<String>,
}

impl AppState {
    /// 환경 변수 설정으로 상태를 만듭니다.
    ///
    /// `Persistent` 백엔드는 Redis와 MongoDB 연결을 확인한 뒤 사용자 인덱스를 생성합니다.
    pub async fn build() -> AppResult<Self> {
        let (session_store, settings_store, users): (Arc<dyn SessionStore>, Arc<dyn SettingsStore>, Arc<dyn UserStore>) =
            match StorageConfig::backend() {
                StorageBackend::Persistent => {
                    info!("📡 저장소 연결 중...");
                    let redis = RedisClient::new(&StorageConfig::redis_url()).await?;
                    let database = Database::new().await?;

                    let repo = MongoUserRepository::new(database);
                    repo.create_indexes().await?;

                    (
                        Arc::new(RedisSessionStore::new(redis.clone())),
                        Arc::new(RedisSettingsStore::new(redis)),
                        Arc::new(repo),
                    )
                }
                StorageBackend::Memory => {
                    info!("메모리 저장소를 사용합니다 (재시작 시 데이터가 사라집니다)");
                    (
                        Arc::new(MemorySessionStore::new()),
                        Arc::new(MemorySettingsStore::new()),
                        Arc::new(MemoryUserStore::new()),
                    )
                }
            };

        Ok(Self::from_parts(StateParts {
            networks: NetworkManager::with_builtin(),
            session_store,
            settings_store,
            users,
            bootstrap: YelpEndpointConfig::bootstrap_settings(),
            endpoints: YelpEndpointConfig::from_env(),
            http: HttpClientConfig::from_env(),
            base_url: SiteConfig::base_url(),
            tokens: TokenService::from_env(),
            session_cookie_name: SessionConfig::cookie_name(),
            session_ttl_seconds: SessionConfig::ttl_seconds(),
            secure_cookies: Environment::current().requires_secure_cookies(),
            admin_provider_ids: AdminConfig::admin_provider_ids(),
        }))
    }

    /// 메모리 저장소로 상태를 만듭니다.
    pub fn in_memory(
        networks: NetworkManager,
        bootstrap: Option<ProviderSettings>,
        endpoints: YelpEndpointConfig,
        http: HttpClientConfig,
        base_url: String,
    ) -> Self {
        Self::from_parts(StateParts {
            networks,
            session_store: Arc::new(MemorySessionStore::new()),
            settings_store: Arc::new(MemorySettingsStore::new()),
            users: Arc::new(MemoryUserStore::new()),
            bootstrap,
            endpoints,
            http,
            base_url,
            tokens: TokenService::new("in-memory-secret", 1),
            session_cookie_name: "social_auth_sid".to_string(),
            session_ttl_seconds: 3600,
            secure_cookies: false,
            admin_provider_ids: Vec::new(),
        })
    }

    pub fn from_parts(parts: StateParts) -> Self {
        let networks = Arc::new(parts.networks);
        let settings = Arc::new(SettingsService::new(parts.settings_store, parts.bootstrap));
        let tokens = Arc::new(parts.tokens);

        let sessions = Arc::new(SessionService::new(
            parts.session_store,
            parts.session_cookie_name,
            parts.session_ttl_seconds,
            parts.secure_cookies,
        ));

        let user_manager: Arc<dyn SocialAuthUserManager> = Arc::new(SocialUserManager::new(
            parts.users.clone(),
            tokens.clone(),
            parts.admin_provider_ids,
        ));

        let yelp_auth = Arc::new(YelpAuthService::new(
            networks.clone(),
            settings.clone(),
            parts.endpoints,
            parts.http,
            parts.base_url,
        ));

        Self {
            networks,
            settings,
            sessions,
            users: parts.users,
            user_manager,
            tokens,
            yelp_auth,
        }
    }

    /// 사용자 협력자를 교체합니다.
    pub fn with_user_manager(mut self, user_manager: Arc<dyn SocialAuthUserManager>) -> Self {
        self.user_manager = user_manager;
        self
    }
}
