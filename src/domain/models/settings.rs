//! 소셜 네트워크 프로바이더 설정 모델

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;
use crate::utils::string_utils::split_list;

/// 프로바이더 클라이언트 설정
///
/// 설정 폼을 통해서만 생성/변경되며, OAuth 어댑터와 콜백 처리기가 읽습니다.
/// `scopes`와 `api_calls`는 폼 입력 원문 그대로 저장하고 읽을 때 분리합니다.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub client_id: String,

    #[serde(default)]
    pub client_secret: String,

    /// 요청할 scope 목록 (줄바꿈 또는 쉼표 구분)
    #[serde(default)]
    pub scopes: String,

    /// 로그인 후 추가로 호출할 API URL 목록 (줄바꿈 구분)
    #[serde(default)]
    pub api_calls: String,
}

impl ProviderSettings {
    pub fn scope_list(&self) -> Vec<String> {
        split_list(&self.scopes, &['\n', ','])
    }

    pub fn api_call_list(&self) -> Vec<String> {
        split_list(&self.api_calls, &['\n'])
    }

    /// OAuth 어댑터를 만들기 전에 필수 자격 증명이 있는지 확인합니다.
    pub fn validate_config(&self) -> Result<(), AppError> {
        if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "Define Client ID and Client Secret on module settings.".to_string(),
            ));
        }
        Ok(())
    }

    /// 응답용으로 비밀값을 가린 문자열
    pub fn masked_secret(&self) -> String {
        let secret = self.client_secret.trim();
        match secret.chars().count() {
            0 => String::new(),
            1..=4 => "****".to_string(),
            n => {
                let tail: String = secret.chars().skip(n - 4).collect();
                format!("****{}", tail)
            }
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("scopes", &self.scope_list())
            .field("api_calls", &self.api_call_list())
            .finish()
    }
}
