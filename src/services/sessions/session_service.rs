//! # 요청별 세션 컨텍스트
//!
//! 세션 쿠키로 [`SessionData`]를 불러와 핸들러가 수정하게 하고,
//! 응답 직전에 저장소에 다시 기록합니다. 세션 간에 공유되는 가변 상태는 없습니다.
//!
//! ```rust,ignore
//! let mut session = state.sessions.load(&req).await?;
//! session.data_mut().oauth2state = Some(state_value);
//! let mut response = HttpResponse::Found().finish();
//! state.sessions.persist(&session, &mut response).await?;
//! ```

use std::sync::Arc;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use log::debug;
use uuid::Uuid;

use crate::domain::models::session::SessionData;
use crate::errors::errors::{AppResult, ErrorContext};
use crate::repositories::sessions::session_repo::SessionStore;

/// 한 요청 동안의 세션 스냅샷
#[derive(Debug, Clone)]
pub struct SessionContext {
    sid: String,
    data: SessionData,
    is_new: bool,
}

impl SessionContext {
    pub fn sid(&self) -> &str {
        &self.sid
    }

    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut SessionData {
        &mut self.data
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    cookie_name: String,
    ttl_seconds: u64,
    secure_cookies: bool,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, cookie_name: String, ttl_seconds: u64, secure_cookies: bool) -> Self {
        Self {
            store,
            cookie_name,
            ttl_seconds,
            secure_cookies,
        }
    }

    /// 요청 쿠키의 세션을 불러옵니다. 쿠키가 없거나 저장된 세션이 없으면 새 세션입니다.
    pub async fn load(&self, req: &HttpRequest) -> AppResult<SessionContext> {
        let sid = req
            .cookie(&self.cookie_name)
            .map(|c| c.value().to_string())
            .filter(|sid| is_valid_sid(sid));

        if let Some(sid) = sid {
            if let Some(data) = self.store.load(&sid).await? {
                return Ok(SessionContext {
                    sid,
                    data,
                    is_new: false,
                });
            }
            debug!("만료되었거나 알 수 없는 세션 ID, 새 세션을 시작합니다");
        }

        Ok(SessionContext {
            sid: Uuid::new_v4().simple().to_string(),
            data: SessionData::default(),
            is_new: true,
        })
    }

    /// 세션을 저장하고 응답에 세션 쿠키를 붙입니다.
    ///
    /// 저장할 때마다 서버 TTL과 쿠키 `Max-Age`를 함께 갱신합니다.
    /// 비어 있는 새 세션은 저장하지 않습니다.
    pub async fn persist(&self, session: &SessionContext, response: &mut HttpResponse) -> AppResult<()> {
        if session.data.is_empty() {
            if !session.is_new {
                self.store.delete(&session.sid).await?;
            }
            return Ok(());
        }

        self.store.save(&session.sid, &session.data, self.ttl_seconds).await?;

        response
            .add_cookie(&self.cookie(&session.sid))
            .context("세션 쿠키 설정 실패")
    }

    /// 세션을 삭제하고 쿠키를 만료시킵니다.
    pub async fn destroy(&self, session: &SessionContext, response: &mut HttpResponse) -> AppResult<()> {
        if !session.is_new {
            self.store.delete(&session.sid).await?;
        }

        let mut expired = self.cookie("");
        expired.make_removal();
        response
            .add_cookie(&expired)
            .context("세션 쿠키 삭제 실패")
    }

    fn cookie(&self, sid: &str) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), sid.to_string())
            .path("/")
            .http_only(true)
            .secure(self.secure_cookies)
            .same_site(SameSite::Lax)
            .max_age(CookieDuration::seconds(self.ttl_seconds as i64))
            .finish()
    }
}

/// 발급한 형식(32자리 16진수)의 세션 ID만 받아들입니다.
fn is_valid_sid(sid: &str) -> bool {
    sid.len() == 32 && sid.chars().all(|c| c.is_ascii_hexdigit())
}
