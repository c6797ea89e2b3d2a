//! # 세션 리포지토리 구현
//!
//! 세션 ID(쿠키 값)별로 [`SessionData`]를 저장합니다.
//!
//! - **Redis 키 패턴**: `session:{sid}`
//! - **TTL**: 저장할 때마다 갱신 (`SESSION_TTL_SECONDS`, 기본 1시간)

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::caching::redis::RedisClient;
use crate::domain::models::session::SessionData;
use crate::errors::errors::AppError;

/// 세션 저장소
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, sid: &str) -> Result<Option<SessionData>, AppError>;

    /// 세션을 저장하고 만료 시간을 `ttl_seconds`로 갱신합니다.
    async fn save(&self, sid: &str, data: &SessionData, ttl_seconds: u64) -> Result<(), AppError>;

    async fn delete(&self, sid: &str) -> Result<(), AppError>;
}

/// Redis 세션 저장소
pub struct RedisSessionStore {
    redis: RedisClient,
}

impl RedisSessionStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn key(sid: &str) -> String {
        format!("session:{}", sid)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, sid: &str) -> Result<Option<SessionData>, AppError> {
        Ok(self.redis.get::<SessionData>(&Self::key(sid)).await?)
    }

    async fn save(&self, sid: &str, data: &SessionData, ttl_seconds: u64) -> Result<(), AppError> {
        Ok(self.redis.set_with_expiry(&Self::key(sid), data, ttl_seconds).await?)
    }

    async fn delete(&self, sid: &str) -> Result<(), AppError> {
        Ok(self.redis.del(&Self::key(sid)).await?)
    }
}

/// 메모리 세션 저장소
///
/// 항목마다 만료 시각을 두고, 만료된 세션은 조회되지 않으며 저장할 때 정리됩니다.
/// 로컬 개발과 테스트 전용입니다.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, MemoryEntry>>,
}

struct MemoryEntry {
    data: SessionData,
    expires_at: Instant,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error() -> AppError {
    AppError::InternalError("세션 저장소 잠금 실패".to_string())
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, sid: &str) -> Result<Option<SessionData>, AppError> {
        let sessions = self.sessions.read().map_err(|_| lock_error())?;
        let now = Instant::now();

        Ok(sessions
            .get(sid)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.data.clone()))
    }

    async fn save(&self, sid: &str, data: &SessionData, ttl_seconds: u64) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().map_err(|_| lock_error())?;
        let now = Instant::now();

        sessions.retain(|_, entry| !entry.is_expired(now));
        sessions.insert(
            sid.to_string(),
            MemoryEntry {
                data: data.clone(),
                expires_at: now + Duration::from_secs(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn delete(&self, sid: &str) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().map_err(|_| lock_error())?;
        sessions.remove(sid);
        Ok(())
    }
}
