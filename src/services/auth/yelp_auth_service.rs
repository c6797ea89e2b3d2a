//! # Yelp 로그인 플로우 서비스
//!
//! 로그인 시작(인가 URL 발급)과 콜백 처리 상태 머신을 담당합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! 사용자              이 서비스                          Yelp
//!   │ GET /user/login/yelp │                               │
//!   ├─────────────────────►│ state 발급, 세션 저장          │
//!   │ 302 authorize URL    │                               │
//!   │◄─────────────────────┤                               │
//!   ├─────────────────────────────────────────────────────►│ 사용자 인증
//!   │ GET .../callback?code&state                          │
//!   ├─────────────────────►│ state 소비/비교                │
//!   │                      ├──────── code → token ────────►│
//!   │                      ├──────── GET users/me ────────►│
//!   │                      ├──── (신규) 추가 API 호출 ─────►│
//!   │ 302 로그인 완료       │ 사용자 협력자에게 신원 전달      │
//!   │◄─────────────────────┤                               │
//! ```
//!
//! ## 콜백 상태
//!
//! | 상태 | 조건 | 다음 |
//! |------|------|------|
//! | START | `error=access_denied` | 실패(user_cancelled) |
//! | START | 자격 증명 누락 | 실패(configuration_error) |
//! | CHECK_STATE | state 비어 있음/불일치 | 실패(invalid_state) |
//! | EXCHANGE_TOKEN | code 누락, 교환 실패 | 실패(exchange_error) |
//! | FETCH_PROFILE | 조회 실패, 빈 프로필 | 실패(profile_unavailable) |
//! | FETCH_EXTRAS | 엔드포인트별 실패는 생략 | 완료 |
//!
//! 실패하면 세션의 `oauth2state`, `access_token`을 비우고 사용자 메시지를 남깁니다.

use std::sync::Arc;

use log::{error, info, warn};

use crate::config::{HttpClientConfig, YelpEndpointConfig};
use crate::core::registry::{NetworkManager, YELP_PLUGIN_ID};
use crate::domain::dto::request::auth_request::OAuthCallbackQuery;
use crate::domain::models::oauth::{AccessToken, AuthenticatedIdentity};
use crate::domain::models::session::{MessageLevel, SessionData, SessionKey};
use crate::domain::models::settings::ProviderSettings;
use crate::errors::errors::{AppResult, LoginFailure};
use crate::services::auth::yelp_provider::{OAuth2Provider, ProviderContext};
use crate::services::settings::SettingsService;
use crate::services::users::SocialAuthUserManager;
use crate::utils::string_utils::is_safe_destination;

pub struct YelpAuthService {
    networks: Arc<NetworkManager>,
    settings: Arc<SettingsService>,
    endpoints: YelpEndpointConfig,
    http: HttpClientConfig,
    base_url: String,
}

impl YelpAuthService {
    pub fn new(
        networks: Arc<NetworkManager>,
        settings: Arc<SettingsService>,
        endpoints: YelpEndpointConfig,
        http: HttpClientConfig,
        base_url: String,
    ) -> Self {
        Self {
            networks,
            settings,
            endpoints,
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 프로바이더에 등록해야 하는 리다이렉트 URI
    pub fn redirect_uri(&self) -> String {
        format!("{}/user/login/yelp/callback", self.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 현재 설정으로 어댑터를 만듭니다.
    async fn resolve_provider(&self) -> AppResult<(Arc<dyn OAuth2Provider>, ProviderSettings)> {
        let settings = self.settings.load(YELP_PLUGIN_ID).await?;

        let ctx = ProviderContext {
            settings,
            redirect_uri: self.redirect_uri(),
            endpoints: self.endpoints.clone(),
            http: self.http.clone(),
        };
        let provider = self.networks.create_instance(YELP_PLUGIN_ID, &ctx)?;

        Ok((provider, ctx.settings))
    }

    /// 로그인을 시작하고 프로바이더 인가 URL을 반환합니다.
    ///
    /// 새 state를 세션에 저장하며 이전 시도의 state는 덮어씁니다.
    /// 설정이 없으면 state를 저장하지 않고 `Configuration` 실패를 반환합니다.
    pub async fn begin_login(&self, session: &mut SessionData, destination: Option<&str>) -> Result<String, LoginFailure> {
        let (provider, settings) = match self.resolve_provider().await {
            Ok(resolved) => resolved,
            Err(e) => {
                let failure = LoginFailure::Configuration(e.to_string());
                record_failure(session, &failure);
                return Err(failure);
            }
        };

        let request = provider.authorization_url(&settings.scope_list());
        session.oauth2state = Some(request.state);

        match destination {
            Some(dest) if is_safe_destination(dest) => session.destination = Some(dest.to_string()),
            Some(dest) => {
                warn!("허용되지 않는 로그인 목적지를 무시합니다: {:?}", dest);
                session.destination = None;
            }
            None => session.destination = None,
        }

        Ok(request.url)
    }

    /// 프로바이더 콜백을 처리합니다.
    ///
    /// 어떤 경우에도 패닉하지 않으며, 실패는 세션 정리 후 [`LoginFailure`]로 반환됩니다.
    pub async fn handle_callback(
        &self,
        session: &mut SessionData,
        query: &OAuthCallbackQuery,
        users: &dyn SocialAuthUserManager,
    ) -> Result<AuthenticatedIdentity, LoginFailure> {
        let result = self.run_callback(session, query, users).await;

        if let Err(failure) = &result {
            record_failure(session, failure);
        }
        result
    }

    async fn run_callback(
        &self,
        session: &mut SessionData,
        query: &OAuthCallbackQuery,
        users: &dyn SocialAuthUserManager,
    ) -> Result<AuthenticatedIdentity, LoginFailure> {
        if query.is_access_denied() {
            return Err(LoginFailure::UserCancelled);
        }

        let (provider, settings) = self
            .resolve_provider()
            .await
            .map_err(|e| LoginFailure::Configuration(e.to_string()))?;

        // state는 비교 결과와 상관없이 한 번만 쓸 수 있다
        let expected = session.oauth2state.take().unwrap_or_default();
        let returned = query.state.as_deref().unwrap_or_default();
        if expected.is_empty() || returned.is_empty() || expected != returned {
            return Err(LoginFailure::InvalidState);
        }

        let code = query
            .code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| match query.provider_error() {
                Some(reported) => LoginFailure::TokenExchange(format!("프로바이더 오류: {}", reported)),
                None => LoginFailure::TokenExchange("authorization code가 없습니다".to_string()),
            })?;

        let token = provider
            .exchange_code(code)
            .await
            .map_err(|e| LoginFailure::TokenExchange(e.to_string()))?;
        session.access_token = Some(token.secret().to_string());

        let profile = provider
            .fetch_resource_owner(&token)
            .await
            .map_err(|e| LoginFailure::ProfileUnavailable(e.to_string()))?
            .ok_or_else(|| LoginFailure::ProfileUnavailable("빈 프로필".to_string()))?;

        let extras = if self.is_new_user(users, &profile.id).await {
            fetch_extras(provider.as_ref(), &token, &settings.api_call_list()).await
        } else {
            Vec::new()
        };

        info!("Yelp 인증 완료: {}", profile.id);
        Ok(AuthenticatedIdentity::from_profile(profile, token.secret().to_string(), &extras))
    }

    /// 추가 데이터 수집 여부 판단용이므로 조회 실패는 신규 사용자로 취급합니다.
    async fn is_new_user(&self, users: &dyn SocialAuthUserManager, provider_user_id: &str) -> bool {
        match users.user_exists(provider_user_id).await {
            Ok(exists) => !exists,
            Err(e) => {
                warn!("사용자 존재 여부 확인 실패, 신규 사용자로 처리합니다: {}", e);
                true
            }
        }
    }
}

/// 설정된 순서대로 추가 API를 호출하고 JSON으로 읽힌 응답만 모읍니다.
async fn fetch_extras(provider: &dyn OAuth2Provider, token: &AccessToken, urls: &[String]) -> Vec<serde_json::Value> {
    let mut extras = Vec::with_capacity(urls.len());

    for url in urls {
        let body = match provider.fetch_authenticated(url, token).await {
            Ok(body) => body,
            Err(e) => {
                warn!("추가 API 호출 실패, 생략합니다 ({}): {}", url, e);
                continue;
            }
        };

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => extras.push(value),
            Err(e) => warn!("추가 API 응답이 JSON이 아닙니다, 생략합니다 ({}): {}", url, e),
        }
    }

    extras
}

fn record_failure(session: &mut SessionData, failure: &LoginFailure) {
    match failure {
        LoginFailure::UserCancelled => info!("Yelp 로그인 취소: 사용자가 인가를 거부했습니다"),
        LoginFailure::InvalidState => warn!("Yelp 로그인 실패 ({}): state 불일치", failure.kind()),
        _ => error!("Yelp 로그인 실패 ({}): {}", failure.kind(), failure),
    }

    session.nullify(&[SessionKey::OAuth2State, SessionKey::AccessToken]);
    session.push_message(MessageLevel::Error, failure.user_message());
}
