use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub recipient_id: String,
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::notifications)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub recipient_id: String,
    pub kind: String,
    pub message: String,
    pub is_read: bool,
}

impl NewNotification {
    pub fn new(recipient_id: &str, kind: &str, message: String) -> Self {
        Self {
            id: None,
            recipient_id: recipient_id.to_string(),
            kind: kind.to_string(),
            message,
            is_read: false,
        }
    }
}
