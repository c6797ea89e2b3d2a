//! 로그인 시도 세션 데이터
//!
//! 리다이렉트 왕복 동안 유지되는 anti-forgery state, 액세스 토큰, 로그인 후 목적지와
//! 로그인 페이지에 표시할 상태 메시지를 담습니다.

use serde::{Deserialize, Serialize};

/// 세션에서 비울 수 있는 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    OAuth2State,
    AccessToken,
}

/// 상태 메시지 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Status,
    Warning,
    Error,
}

/// 다음 페이지에서 한 번 표시되는 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub message: String,
}

/// 세션 한 개의 저장 데이터
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<StatusMessage>,
}

impl SessionData {
    /// 지정한 키를 비웁니다.
    pub fn nullify(&mut self, keys: &[SessionKey]) {
        for key in keys {
            match key {
                SessionKey::OAuth2State => self.oauth2state = None,
                SessionKey::AccessToken => self.access_token = None,
            }
        }
    }

    pub fn push_message(&mut self, level: MessageLevel, message: impl Into<String>) {
        self.messages.push(StatusMessage {
            level,
            message: message.into(),
        });
    }

    /// 쌓인 메시지를 꺼내고 비웁니다.
    pub fn drain_messages(&mut self) -> Vec<StatusMessage> {
        std::mem::take(&mut self.messages)
    }

    pub fn is_empty(&self) -> bool {
        *self == SessionData::default()
    }
}
