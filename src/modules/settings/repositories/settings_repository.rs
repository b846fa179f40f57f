use std::sync::Arc;

use tokio::sync::RwLock;

use crate::modules::settings::models::{AppSettings, SettingsUpdate};

/// Shared in-memory store for the single settings object
#[derive(Clone, Default)]
pub struct SettingsRepository {
    settings: Arc<RwLock<AppSettings>>,
}

impl SettingsRepository {
    pub fn new(initial: AppSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(initial)),
        }
    }

    pub async fn get(&self) -> AppSettings {
        self.settings.read().await.clone()
    }

    pub async fn update(&self, update: SettingsUpdate) -> AppSettings {
        let mut settings = self.settings.write().await;
        *settings = settings.merged_with(update);
        settings.clone()
    }
}
