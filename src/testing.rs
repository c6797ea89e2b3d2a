//! 테스트 전용 협력자 구현
//!
//! - [`ScriptedProvider`] - 네트워크 없이 미리 정한 응답을 돌려주는 OAuth 어댑터
//! - [`RecordingUserManager`] - 전달받은 신원을 기록하는 사용자 관리자

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::http::header;
use actix_web::HttpResponse;
use async_trait::async_trait;

use crate::config::{HttpClientConfig, YelpEndpointConfig};
use crate::core::registry::{NetworkManager, YELP_PLUGIN_ID};
use crate::core::state::AppState;
use crate::domain::models::oauth::{AccessToken, AuthenticatedIdentity, AuthorizationRequest, YelpUserInfo};
use crate::domain::models::settings::ProviderSettings;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::yelp_provider::{generate_state, OAuth2Provider, ProviderContext};
use crate::services::users::SocialAuthUserManager;

pub fn yelp_profile() -> YelpUserInfo {
    YelpUserInfo {
        id: "U1".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some("a@b.com".to_string()),
        image_url: None,
    }
}

/// 스크립트된 OAuth 어댑터
pub struct ScriptedProvider {
    token: Result<String, String>,
    profile: Result<Option<YelpUserInfo>, String>,
    endpoints: HashMap<String, Result<String, String>>,
    exchanged: Mutex<Vec<String>>,
    fetched: Mutex<Vec<String>>,
}

impl Default for ScriptedProvider {
    fn default() -> Self {
        Self {
            token: Ok("tok".to_string()),
            profile: Ok(Some(yelp_profile())),
            endpoints: HashMap::new(),
            exchanged: Mutex::new(Vec::new()),
            fetched: Mutex::new(Vec::new()),
        }
    }
}

impl ScriptedProvider {
    pub fn with_exchange_error(mut self, message: &str) -> Self {
        self.token = Err(message.to_string());
        self
    }

    pub fn with_profile(mut self, profile: Option<YelpUserInfo>) -> Self {
        self.profile = Ok(profile);
        self
    }

    pub fn with_profile_error(mut self, message: &str) -> Self {
        self.profile = Err(message.to_string());
        self
    }

    /// 추가 API 응답. `Err`은 전송/상태 코드 실패를 뜻합니다.
    pub fn with_endpoint(mut self, url: &str, response: Result<&str, &str>) -> Self {
        let response = response.map(str::to_string).map_err(str::to_string);
        self.endpoints.insert(url.to_string(), response);
        self
    }

    pub fn exchanged_codes(&self) -> Vec<String> {
        self.exchanged.lock().unwrap().clone()
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl OAuth2Provider for ScriptedProvider {
    fn authorization_url(&self, scopes: &[String]) -> AuthorizationRequest {
        let state = generate_state();
        AuthorizationRequest {
            url: format!(
                "https://provider.test/authorize?scope={}&state={}",
                urlencoding::encode(&scopes.join(" ")),
                state
            ),
            state,
        }
    }

    async fn exchange_code(&self, code: &str) -> AppResult<AccessToken> {
        self.exchanged.lock().unwrap().push(code.to_string());
        self.token
            .clone()
            .map(AccessToken::bearer)
            .map_err(AppError::ExternalServiceError)
    }

    async fn fetch_resource_owner(&self, _token: &AccessToken) -> AppResult<Option<YelpUserInfo>> {
        self.profile.clone().map_err(AppError::ExternalServiceError)
    }

    async fn fetch_authenticated(&self, url: &str, _token: &AccessToken) -> AppResult<String> {
        self.fetched.lock().unwrap().push(url.to_string());
        match self.endpoints.get(url) {
            Some(response) => response.clone().map_err(AppError::ExternalServiceError),
            None => Err(AppError::ExternalServiceError(format!("HTTP 404 ({})", url))),
        }
    }
}

/// 전달받은 신원을 기록하는 사용자 관리자
pub struct RecordingUserManager {
    exists: Result<bool, String>,
    authenticated: Mutex<Vec<(AuthenticatedIdentity, Option<String>)>>,
}

impl RecordingUserManager {
    pub fn new(exists: bool) -> Self {
        Self {
            exists: Ok(exists),
            authenticated: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_lookup() -> Self {
        Self {
            exists: Err("user store unavailable".to_string()),
            authenticated: Mutex::new(Vec::new()),
        }
    }

    pub fn authenticated(&self) -> Vec<(AuthenticatedIdentity, Option<String>)> {
        self.authenticated.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl SocialAuthUserManager for RecordingUserManager {
    async fn user_exists(&self, _provider_user_id: &str) -> AppResult<bool> {
        self.exists.clone().map_err(AppError::DatabaseError)
    }

    async fn authenticate_user(&self, identity: &AuthenticatedIdentity, destination: Option<&str>) -> AppResult<HttpResponse> {
        self.authenticated
            .lock()
            .unwrap()
            .push((identity.clone(), destination.map(str::to_string)));

        Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, destination.unwrap_or("/user/me")))
            .finish())
    }
}

pub fn yelp_settings(client_id: &str) -> ProviderSettings {
    ProviderSettings {
        client_id: client_id.to_string(),
        client_secret: if client_id.is_empty() { String::new() } else { "xyz".to_string() },
        scopes: "email".to_string(),
        api_calls: String::new(),
    }
}

pub fn yelp_endpoints() -> YelpEndpointConfig {
    YelpEndpointConfig {
        authorize_url: "https://www.yelp.com/oauth2/authorize".to_string(),
        token_url: "https://api.yelp.com/oauth2/token".to_string(),
        resource_owner_url: "https://api.yelp.com/v3/users/me".to_string(),
    }
}

/// 스크립트된 어댑터를 등록한 레지스트리. 설정 검증은 그대로 거칩니다.
pub fn scripted_networks(provider: Arc<ScriptedProvider>) -> NetworkManager {
    NetworkManager::with_builtin().with_factory(
        YELP_PLUGIN_ID,
        Arc::new(move |ctx: &ProviderContext| -> AppResult<Arc<dyn OAuth2Provider>> {
            ctx.settings.validate_config()?;
            Ok(provider.clone() as Arc<dyn OAuth2Provider>)
        }),
    )
}

/// 메모리 저장소 기반 애플리케이션 상태
pub fn memory_state(networks: NetworkManager, settings: ProviderSettings) -> AppState {
    AppState::in_memory(
        networks,
        Some(settings),
        yelp_endpoints(),
        HttpClientConfig::default(),
        "https://example.com".to_string(),
    )
}
