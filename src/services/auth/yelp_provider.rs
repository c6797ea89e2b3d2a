//! # Yelp OAuth 2.0 클라이언트 어댑터
//!
//! 프로바이더 프로토콜 호출(인가 URL 생성, 코드 교환, 리소스 소유자 조회,
//! 인증된 API 호출)을 [`OAuth2Provider`] trait 뒤에 감춥니다.
//! 콜백 처리기는 이 trait에만 의존하므로 테스트에서 스크립트된 구현으로 교체할 수 있습니다.
//!
//! ## 사용하는 Yelp 엔드포인트
//!
//! | 용도 | 기본 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://www.yelp.com/oauth2/authorize` | GET |
//! | **Token Exchange** | `https://api.yelp.com/oauth2/token` | POST |
//! | **Resource Owner** | `https://api.yelp.com/v3/users/me` | GET |

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::{HttpClientConfig, YelpEndpointConfig};
use crate::domain::models::oauth::{AccessToken, AuthorizationRequest, YelpUserInfo};
use crate::domain::models::settings::ProviderSettings;
use crate::errors::errors::{AppError, AppResult};

/// 어댑터 생성에 필요한 입력
///
/// 설정 저장소의 현재 값과 사이트 주소에서 파생된 리다이렉트 URI를 묶습니다.
#[derive(Debug, Clone)]
pub struct ProviderContext {
    pub settings: ProviderSettings,
    pub redirect_uri: String,
    pub endpoints: YelpEndpointConfig,
    pub http: HttpClientConfig,
}

/// OAuth 2.0 프로바이더 프로토콜 호출
#[async_trait]
pub trait OAuth2Provider: Send + Sync {
    /// 새 anti-forgery state를 발급하고 인가 URL을 만듭니다. 네트워크 호출은 없습니다.
    fn authorization_url(&self, scopes: &[String]) -> AuthorizationRequest;

    /// authorization code를 액세스 토큰으로 교환합니다.
    async fn exchange_code(&self, code: &str) -> AppResult<AccessToken>;

    /// 토큰 소유자의 프로필을 조회합니다. 프로필이 비어 있으면 `None`입니다.
    async fn fetch_resource_owner(&self, token: &AccessToken) -> AppResult<Option<YelpUserInfo>>;

    /// 토큰으로 인증된 GET 요청을 보내고 응답 본문을 그대로 반환합니다.
    async fn fetch_authenticated(&self, url: &str, token: &AccessToken) -> AppResult<String>;
}

/// 32자리 16진수 anti-forgery state
///
/// UUID v4는 OS CSPRNG에서 122비트를 얻습니다.
pub fn generate_state() -> String {
    Uuid::new_v4().simple().to_string()
}

/// reqwest 기반 Yelp 어댑터
pub struct YelpProvider {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    endpoints: YelpEndpointConfig,
}

impl YelpProvider {
    /// 설정을 검증하고 HTTP 클라이언트를 구성합니다.
    ///
    /// Client ID나 Client Secret이 없으면 `ConfigurationError`입니다.
    pub fn new(ctx: &ProviderContext) -> AppResult<Self> {
        ctx.settings.validate_config()?;

        Ok(Self {
            client: build_http_client(&ctx.http)?,
            client_id: ctx.settings.client_id.trim().to_string(),
            client_secret: ctx.settings.client_secret.trim().to_string(),
            redirect_uri: ctx.redirect_uri.clone(),
            endpoints: ctx.endpoints.clone(),
        })
    }

    /// 주어진 state로 인가 URL을 조립합니다.
    ///
    /// 파라미터 순서는 `response_type`, `redirect_uri`, `client_id`, `scope`, `state`입니다.
    pub fn build_authorization_url(&self, scopes: &[String], state: &str) -> String {
        let params = [
            ("response_type", "code".to_string()),
            ("redirect_uri", self.redirect_uri.clone()),
            ("client_id", self.client_id.clone()),
            ("scope", scopes.join(" ")),
            ("state", state.to_string()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.endpoints.authorize_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.endpoints.authorize_url, separator, query_string)
    }

    async fn get_with_token(&self, url: &str, token: &AccessToken) -> AppResult<reqwest::Response> {
        let response = self.client
            .get(url)
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Yelp 요청 실패 ({}): {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Yelp 응답 오류 ({}): HTTP {}", url, response.status()
            )));
        }

        Ok(response)
    }
}

/// 프록시와 타임아웃을 반영한 reqwest 클라이언트
///
/// TLS 인증서 검증은 항상 켜져 있습니다.
pub fn build_http_client(config: &HttpClientConfig) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| AppError::ConfigurationError(format!("잘못된 프록시 설정: {}", e)))?;
        builder = builder.proxy(proxy);
    }

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| AppError::ConfigurationError(format!("HTTP 클라이언트 생성 실패: {}", e)))
}

#[async_trait]
impl OAuth2Provider for YelpProvider {
    fn authorization_url(&self, scopes: &[String]) -> AuthorizationRequest {
        let state = generate_state();
        let url = self.build_authorization_url(scopes, &state);

        AuthorizationRequest { url, state }
    }

    async fn exchange_code(&self, code: &str) -> AppResult<AccessToken> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self.client
            .post(&self.endpoints.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Yelp 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            // 응답 본문에 자격 증명이 되돌아올 수 있어 상태 코드만 남긴다
            return Err(AppError::ExternalServiceError(format!(
                "Yelp 토큰 교환 실패: HTTP {}", response.status()
            )));
        }

        let token = response
            .json::<AccessToken>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Yelp 토큰 응답 파싱 실패: {}", e)))?;

        if token.secret().trim().is_empty() {
            return Err(AppError::ExternalServiceError("Yelp 토큰 응답에 access_token이 없습니다".to_string()));
        }

        Ok(token)
    }

    async fn fetch_resource_owner(&self, token: &AccessToken) -> AppResult<Option<YelpUserInfo>> {
        let response = self.get_with_token(&self.endpoints.resource_owner_url, token).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Yelp 사용자 정보 읽기 실패: {}", e)))?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str::<serde_json::Value>(&body)
            .map_err(|e| AppError::ExternalServiceError(format!("Yelp 사용자 정보 파싱 실패: {}", e)))?;

        Ok(YelpUserInfo::from_value(value))
    }

    async fn fetch_authenticated(&self, url: &str, token: &AccessToken) -> AppResult<String> {
        let response = self.get_with_token(url, token).await?;

        response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Yelp 응답 본문 읽기 실패 ({}): {}", url, e)))
    }
}
