//! # 모듈 설정 리포지토리 구현
//!
//! 플러그인 ID별 [`ProviderSettings`]를 저장합니다.
//! Redis 키는 `config:{plugin_id}.settings`이며 만료 없이 저장됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::caching::redis::RedisClient;
use crate::domain::models::settings::ProviderSettings;
use crate::errors::errors::AppError;

/// 설정 저장소
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self, plugin_id: &str) -> Result<Option<ProviderSettings>, AppError>;

    async fn save(&self, plugin_id: &str, settings: &ProviderSettings) -> Result<(), AppError>;
}

pub fn settings_key(plugin_id: &str) -> String {
    format!("config:{}.settings", plugin_id)
}

/// Redis 설정 저장소
pub struct RedisSettingsStore {
    redis: RedisClient,
}

impl RedisSettingsStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl SettingsStore for RedisSettingsStore {
    async fn load(&self, plugin_id: &str) -> Result<Option<ProviderSettings>, AppError> {
        Ok(self.redis.get::<ProviderSettings>(&settings_key(plugin_id)).await?)
    }

    async fn save(&self, plugin_id: &str, settings: &ProviderSettings) -> Result<(), AppError> {
        Ok(self.redis.set(&settings_key(plugin_id), settings).await?)
    }
}

/// 메모리 설정 저장소
#[derive(Default)]
pub struct MemorySettingsStore {
    entries: RwLock<HashMap<String, ProviderSettings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error() -> AppError {
    AppError::InternalError("설정 저장소 잠금 실패".to_string())
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self, plugin_id: &str) -> Result<Option<ProviderSettings>, AppError> {
        let entries = self.entries.read().map_err(|_| lock_error())?;
        Ok(entries.get(&settings_key(plugin_id)).cloned())
    }

    async fn save(&self, plugin_id: &str, settings: &ProviderSettings) -> Result<(), AppError> {
        let mut entries = self.entries.write().map_err(|_| lock_error())?;
        entries.insert(settings_key(plugin_id), settings.clone());
        Ok(())
    }
}
