use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::app_settings::dsl::*;
use crate::settings::settings_model::{AppSetting, Settings, SettingsUpdate};

// Define the trait for SettingsRepository
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;
    fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;
    fn get_setting(&self, setting_key_param: &str) -> Result<String>;
    fn update_setting(&self, setting_key_param: &str, setting_value_param: &str) -> Result<()>;
    fn delete_setting(&self, setting_key_param: &str) -> Result<()>;
}

pub struct SettingsRepository {
    pool: Arc<DbPool>,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SettingsRepository { pool }
    }
}

// Implement the trait for SettingsRepository
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let mut conn = get_connection(&self.pool)?;
        let all_settings: Vec<(String, String)> = app_settings
            .select((setting_key, setting_value))
            .load::<(String, String)>(&mut conn)
            .map_err(Error::from)?;

        let mut settings = Settings::default();

        for (key, value) in all_settings {
            match key.as_str() {
                "theme" => settings.theme = value,
                "base_currency" => settings.base_currency = value,
                "view_as_salesperson_id" => settings.view_as_salesperson_id = Some(value),
                _ => {} // Ignore unknown settings
            }
        }

        Ok(settings)
    }

    fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<_, Error, _>(|conn| {
            if let Some(ref theme_value) = new_settings.theme {
                diesel::replace_into(app_settings)
                    .values(&AppSetting {
                        setting_key: "theme".to_string(),
                        setting_value: theme_value.clone(),
                    })
                    .execute(conn)?;
            }
            if let Some(ref currency_value) = new_settings.base_currency {
                diesel::replace_into(app_settings)
                    .values(&AppSetting {
                        setting_key: "base_currency".to_string(),
                        setting_value: currency_value.clone(),
                    })
                    .execute(conn)?;
            }
            if let Some(ref view_as_value) = new_settings.view_as_salesperson_id {
                diesel::replace_into(app_settings)
                    .values(&AppSetting {
                        setting_key: "view_as_salesperson_id".to_string(),
                        setting_value: view_as_value.clone(),
                    })
                    .execute(conn)?;
            }
            Ok(())
        })
    }

    fn get_setting(&self, setting_key_param: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        Ok(app_settings
            .filter(setting_key.eq(setting_key_param))
            .select(setting_value)
            .first::<String>(&mut conn)?)
    }

    fn update_setting(&self, setting_key_param: &str, setting_value_param: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_settings)
            .values(&AppSetting {
                setting_key: setting_key_param.to_string(),
                setting_value: setting_value_param.to_string(),
            })
            .execute(&mut conn)?;
        Ok(())
    }

    fn delete_setting(&self, setting_key_param: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(app_settings.filter(setting_key.eq(setting_key_param)))
            .execute(&mut conn)?;
        Ok(())
    }
}
