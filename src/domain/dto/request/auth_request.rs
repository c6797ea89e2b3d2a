use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 로그인 시작 쿼리
///
/// `GET /user/login/yelp?destination=/node/1`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginQuery {
    /// 로그인 성공 후 이동할 로컬 경로
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 2048, message = "destination이 너무 깁니다"))]
    pub destination: Option<String>,
}

/// 프로바이더 콜백 쿼리
///
/// 사용자가 인가를 거부하면 `code`/`state` 없이 `error`만 올 수 있으므로
/// 모든 필드가 선택입니다. 필수 여부는 콜백 상태 머신이 판단합니다.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,
}

impl OAuthCallbackQuery {
    /// 사용자가 프로바이더 화면에서 인가를 거부했는지 확인합니다.
    pub fn is_access_denied(&self) -> bool {
        self.error.as_deref() == Some("access_denied")
    }

    /// 프로바이더가 보낸 오류를 `error (error_description)` 형태로 반환합니다.
    pub fn provider_error(&self) -> Option<String> {
        let error = self.error.as_deref()?;
        match self.error_description.as_deref() {
            Some(description) if !description.is_empty() => Some(format!("{} ({})", error, description)),
            _ => Some(error.to_string()),
        }
    }
}
