use serde::Serialize;
use crate::domain::models::settings::ProviderSettings;

/// 설정 폼 조회 응답
///
/// 비밀값은 마스킹되며, 프로바이더 앱에 등록해야 하는 파생값을 함께 보여줍니다.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub client_id: String,
    pub client_secret: String,
    pub scopes: String,
    pub api_calls: String,
    /// 프로바이더 앱의 Authorized redirect URIs에 입력할 값
    pub authorized_redirect_url: String,
    /// 프로바이더 앱의 Authorized Javascript Origins에 입력할 값
    pub authorized_javascript_origin: String,
    pub is_configured: bool,
}

impl SettingsResponse {
    pub fn new(settings: &ProviderSettings, redirect_uri: String, base_url: String) -> Self {
        Self {
            client_id: settings.client_id.clone(),
            client_secret: settings.masked_secret(),
            scopes: settings.scopes.clone(),
            api_calls: settings.api_calls.clone(),
            authorized_redirect_url: redirect_uri,
            authorized_javascript_origin: base_url,
            is_configured: settings.validate_config().is_ok(),
        }
    }
}

/// 통합 목록에 표시되는 소셜 네트워크
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub id: String,
    pub social_network: String,
    #[serde(rename = "type")]
    pub network_type: String,
    pub settings_path: String,
    pub login_path: String,
}
