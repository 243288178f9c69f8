use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::{DatabaseError, Error, Result};
use crate::settings::settings_model::{AppContext, Settings, SettingsUpdate};
use crate::settings::settings_repository::SettingsRepositoryTrait;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;

    fn get_theme(&self) -> Result<Option<String>>;

    async fn update_theme(&self, new_theme: &str) -> Result<()>;

    fn get_view_as(&self) -> Result<Option<String>>;

    async fn update_view_as(&self, salesperson_id: Option<&str>) -> Result<()>;

    /// Builds the injected session context from persisted settings.
    fn build_context(&self) -> Result<AppContext>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn get_optional_setting(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::QueryFailed(diesel::result::Error::NotFound))) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

// Implement the trait for SettingsService
#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.get_settings()
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        self.settings_repository.update_settings(new_settings)
    }

    fn get_theme(&self) -> Result<Option<String>> {
        self.get_optional_setting("theme")
    }

    async fn update_theme(&self, new_theme: &str) -> Result<()> {
        debug!("Updating theme to {}", new_theme);
        self.settings_repository.update_setting("theme", new_theme)
    }

    fn get_view_as(&self) -> Result<Option<String>> {
        self.get_optional_setting("view_as_salesperson_id")
    }

    async fn update_view_as(&self, salesperson_id: Option<&str>) -> Result<()> {
        match salesperson_id {
            Some(sp) => self
                .settings_repository
                .update_setting("view_as_salesperson_id", sp),
            None => self
                .settings_repository
                .delete_setting("view_as_salesperson_id"),
        }
    }

    fn build_context(&self) -> Result<AppContext> {
        let settings = self.get_settings()?;
        Ok(AppContext::from_settings(&settings))
    }
}
