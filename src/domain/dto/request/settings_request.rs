use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::models::settings::ProviderSettings;

/// 설정 폼 제출 요청
///
/// `PUT /admin/config/social-api/social-auth/yelp`
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(custom(function = "validate_not_blank", message = "Client ID를 입력해주세요"))]
    pub client_id: String,

    #[validate(custom(function = "validate_not_blank", message = "Client Secret을 입력해주세요"))]
    pub client_secret: String,

    #[serde(default)]
    pub scopes: String,

    #[serde(default)]
    #[validate(custom(function = "validate_api_calls"))]
    pub api_calls: String,
}

impl UpdateSettingsRequest {
    /// 저장할 설정으로 변환합니다. 자격 증명은 앞뒤 공백을 제거합니다.
    pub fn into_settings(self) -> ProviderSettings {
        ProviderSettings {
            client_id: self.client_id.trim().to_string(),
            client_secret: self.client_secret.trim().to_string(),
            scopes: self.scopes,
            api_calls: self.api_calls,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// 추가 API 호출 목록의 각 줄은 http(s) URL이어야 합니다.
fn validate_api_calls(value: &str) -> Result<(), ValidationError> {
    let invalid = value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .any(|line| !(line.starts_with("https://") || line.starts_with("http://")));

    if invalid {
        let mut error = ValidationError::new("api_calls");
        error.message = Some("API call 목록에는 http(s) URL만 입력할 수 있습니다".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, secret: &str, api_calls: &str) -> UpdateSettingsRequest {
        UpdateSettingsRequest {
            client_id: id.to_string(),
            client_secret: secret.to_string(),
            scopes: "email".to_string(),
            api_calls: api_calls.to_string(),
        }
    }

    #[test]
    fn test_valid_request_is_trimmed() {
        let req = request("  abc ", "\txyz\n", "");
        assert!(req.validate().is_ok());

        let settings = req.into_settings();
        assert_eq!(settings.client_id, "abc");
        assert_eq!(settings.client_secret, "xyz");
        assert_eq!(settings.scopes, "email");
    }

    #[test]
    fn test_blank_credentials_rejected() {
        assert!(request("", "xyz", "").validate().is_err());
        assert!(request("abc", "   ", "").validate().is_err());
    }

    #[test]
    fn test_api_calls_must_be_urls() {
        assert!(request("abc", "xyz", "https://api.yelp.com/v3/a\n\nhttp://b").validate().is_ok());
        assert!(request("abc", "xyz", "https://ok\nnot-a-url").validate().is_err());
    }
}
