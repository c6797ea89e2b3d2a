//! Yelp 리소스 소유자(사용자 프로필) 모델

use serde::{Deserialize, Serialize};

/// Yelp 사용자 프로필 응답
///
/// Yelp은 사용자 동의 범위에 따라 이메일을 보내지 않을 수 있으므로
/// `email`은 선택 필드입니다. 응답이 `{ "user": { ... } }`로 감싸져 오는
/// 경우는 [`YelpUserInfo::from_value`]가 처리합니다.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct YelpUserInfo {
    /// Yelp 사용자 고유 ID
    pub id: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl YelpUserInfo {
    /// 응답 JSON에서 프로필을 추출합니다.
    ///
    /// ID가 비어 있는 프로필은 없는 것으로 취급합니다.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        let body = match value.get("user") {
            Some(inner) if inner.is_object() => inner.clone(),
            _ => value,
        };

        serde_json::from_value::<YelpUserInfo>(body)
            .ok()
            .filter(|info| !info.id.trim().is_empty())
    }

    /// 표시 이름 (이름 + 성, 없으면 ID)
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.id.clone()
        } else {
            parts.join(" ")
        }
    }
}
