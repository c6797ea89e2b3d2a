//! 콜백 처리 결과로 생성되는 정규화된 원격 신원

use serde::Serialize;
use crate::domain::models::oauth::yelp_user::YelpUserInfo;

/// 프로바이더 인증이 끝난 사용자의 정규화된 신원
///
/// 콜백 한 번의 처리 동안만 존재하며, 사용자 인증 협력자에게 전달된 뒤 폐기됩니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthenticatedIdentity {
    pub provider_user_id: String,
    pub first_name: String,
    pub display_name: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub access_token: String,
    /// 추가 API 호출 결과를 설정 순서대로 담은 JSON 배열 문자열
    pub extras_json: String,
}

impl AuthenticatedIdentity {
    pub fn from_profile(profile: YelpUserInfo, access_token: String, extras: &[serde_json::Value]) -> Self {
        let display_name = profile.display_name();
        // Vec<Value> 직렬화는 실패하지 않는다
        let extras_json = serde_json::to_string(extras).unwrap_or_else(|_| "[]".to_string());

        Self {
            first_name: profile.first_name.clone().unwrap_or_default(),
            display_name,
            email: profile.email.filter(|e| !e.trim().is_empty()),
            image_url: profile.image_url,
            provider_user_id: profile.id,
            access_token,
            extras_json,
        }
    }

    /// extras JSON을 값으로 파싱합니다.
    pub fn extras_value(&self) -> serde_json::Value {
        serde_json::from_str(&self.extras_json).unwrap_or_else(|_| serde_json::Value::Array(vec![]))
    }
}
