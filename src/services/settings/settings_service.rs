//! 모듈 설정 서비스
//!
//! 설정 저장소를 감싸 읽기/쓰기를 제공합니다. 저장소가 비어 있으면
//! 환경 변수에서 읽은 초기값을 한 번 저장하고 사용합니다.

use std::sync::Arc;

use log::info;

use crate::domain::models::settings::ProviderSettings;
use crate::errors::errors::AppResult;
use crate::repositories::settings::settings_repo::SettingsStore;

pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
    bootstrap: Option<ProviderSettings>,
}

impl SettingsService {
    /// `bootstrap`은 저장소에 값이 없을 때 시드할 설정입니다.
    pub fn new(store: Arc<dyn SettingsStore>, bootstrap: Option<ProviderSettings>) -> Self {
        Self { store, bootstrap }
    }

    /// 현재 설정을 읽습니다. 아무 설정도 없으면 빈 설정을 반환합니다.
    pub async fn load(&self, plugin_id: &str) -> AppResult<ProviderSettings> {
        if let Some(settings) = self.store.load(plugin_id).await? {
            return Ok(settings);
        }

        match &self.bootstrap {
            Some(seed) => {
                self.store.save(plugin_id, seed).await?;
                info!("{} 설정을 환경 변수 초기값으로 저장했습니다", plugin_id);
                Ok(seed.clone())
            }
            None => Ok(ProviderSettings::default()),
        }
    }

    /// 설정을 저장합니다. 자격 증명은 앞뒤 공백을 제거해 저장합니다.
    pub async fn save(&self, plugin_id: &str, settings: ProviderSettings) -> AppResult<ProviderSettings> {
        let settings = ProviderSettings {
            client_id: settings.client_id.trim().to_string(),
            client_secret: settings.client_secret.trim().to_string(),
            ..settings
        };

        self.store.save(plugin_id, &settings).await?;
        info!("{} 설정이 변경되었습니다: {:?}", plugin_id, settings);

        Ok(settings)
    }
}
