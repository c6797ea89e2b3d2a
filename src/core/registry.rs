//! # 소셜 네트워크 레지스트리
//!
//! 플러그인 ID(`social_auth_yelp`)를 프로바이더 어댑터 생성 함수에 매핑하는
//! 명시적 테이블입니다. 기본 제공 네트워크는 [`BUILTIN_NETWORKS`]에 정의되며,
//! [`NetworkManager::with_factory`]로 생성 함수를 교체할 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use social_auth_yelp::core::registry::{NetworkManager, YELP_PLUGIN_ID};
//!
//! let networks = NetworkManager::with_builtin();
//! let provider = networks.create_instance(YELP_PLUGIN_ID, &ctx)?;
//! let url = provider.authorization_url(&scopes);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;

use crate::domain::dto::response::settings_response::NetworkSummary;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::yelp_provider::{OAuth2Provider, ProviderContext, YelpProvider};

/// Yelp 로그인 플러그인 ID
pub const YELP_PLUGIN_ID: &str = "social_auth_yelp";

/// 어댑터 생성 함수
pub type ProviderFactory = Arc<dyn Fn(&ProviderContext) -> AppResult<Arc<dyn OAuth2Provider>> + Send + Sync>;

/// 네트워크 메타데이터
///
/// 통합 목록과 로그인 페이지에 노출됩니다.
#[derive(Clone)]
pub struct NetworkDefinition {
    pub id: &'static str,
    pub social_network: &'static str,
    pub network_type: &'static str,
    pub settings_path: &'static str,
    pub login_path: &'static str,
    pub constructor: fn(&ProviderContext) -> AppResult<Arc<dyn OAuth2Provider>>,
}

fn yelp_constructor(ctx: &ProviderContext) -> AppResult<Arc<dyn OAuth2Provider>> {
    Ok(Arc::new(YelpProvider::new(ctx)?))
}

/// 기본 제공 네트워크 목록
pub static BUILTIN_NETWORKS: Lazy<Vec<NetworkDefinition>> = Lazy::new(|| {
    vec![NetworkDefinition {
        id: YELP_PLUGIN_ID,
        social_network: "Yelp",
        network_type: "user_authentication",
        settings_path: "/admin/config/social-api/social-auth/yelp",
        login_path: "/user/login/yelp",
        constructor: yelp_constructor,
    }]
});

struct Registration {
    definition: NetworkDefinition,
    factory: ProviderFactory,
}

/// 등록된 소셜 네트워크 관리자
///
/// 애플리케이션 시작 시 한 번 구성된 뒤 `Arc`로 공유되며 이후 변경되지 않습니다.
pub struct NetworkManager {
    registrations: HashMap<&'static str, Registration>,
    order: Vec<&'static str>,
}

impl NetworkManager {
    pub fn empty() -> Self {
        Self {
            registrations: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// 기본 제공 네트워크를 모두 등록합니다.
    pub fn with_builtin() -> Self {
        let mut manager = Self::empty();
        for definition in BUILTIN_NETWORKS.iter() {
            manager.register(definition.clone());
        }
        manager
    }

    /// 네트워크를 등록합니다. 같은 ID가 있으면 교체합니다.
    pub fn register(&mut self, definition: NetworkDefinition) {
        let constructor = definition.constructor;
        let factory: ProviderFactory = Arc::new(constructor);

        if !self.registrations.contains_key(definition.id) {
            self.order.push(definition.id);
        }
        debug!("소셜 네트워크 등록: {}", definition.id);
        self.registrations.insert(definition.id, Registration { definition, factory });
    }

    /// 등록된 네트워크의 생성 함수를 교체합니다.
    pub fn with_factory(mut self, id: &str, factory: ProviderFactory) -> Self {
        if let Some(registration) = self.registrations.get_mut(id) {
            registration.factory = factory;
        }
        self
    }

    /// 플러그인 ID로 어댑터를 생성합니다.
    ///
    /// 등록되지 않은 ID는 `NotFound`, 자격 증명 누락은 `ConfigurationError`입니다.
    pub fn create_instance(&self, id: &str, ctx: &ProviderContext) -> AppResult<Arc<dyn OAuth2Provider>> {
        let registration = self
            .registrations
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("등록되지 않은 소셜 네트워크: {}", id)))?;

        (registration.factory)(ctx)
    }

    /// 등록 순서대로 통합 목록을 반환합니다.
    pub fn networks(&self) -> Vec<NetworkSummary> {
        self.order
            .iter()
            .filter_map(|id| self.registrations.get(id))
            .map(|r| NetworkSummary {
                id: r.definition.id.to_string(),
                social_network: r.definition.social_network.to_string(),
                network_type: r.definition.network_type.to_string(),
                settings_path: r.definition.settings_path.to_string(),
                login_path: r.definition.login_path.to_string(),
            })
            .collect()
    }
}
