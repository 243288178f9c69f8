use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub base_currency: String,
    pub view_as_salesperson_id: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            base_currency: "USD".to_string(),
            view_as_salesperson_id: None,
        }
    }
}

/// Partial update; `None` fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub base_currency: Option<String>,
    pub view_as_salesperson_id: Option<String>,
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug)]
#[diesel(table_name = crate::schema::app_settings)]
#[serde(rename_all = "camelCase")]
pub struct AppSetting {
    pub setting_key: String,
    pub setting_value: String,
}

/// Explicit, injected session context assembled from persisted settings at
/// app start. Consumers receive it as a value; there is no ambient global.
///
/// `view_as_salesperson_id` scopes every dashboard query to one salesperson
/// when a director is reviewing someone else's book.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppContext {
    pub theme: String,
    pub view_as_salesperson_id: Option<String>,
}

impl AppContext {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            theme: settings.theme.clone(),
            view_as_salesperson_id: settings.view_as_salesperson_id.clone(),
        }
    }
}
