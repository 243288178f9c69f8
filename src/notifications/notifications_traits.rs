use async_trait::async_trait;

use crate::errors::Result;
use crate::notifications::notifications_model::{NewNotification, Notification};

/// Trait for notification repository operations
pub trait NotificationRepositoryTrait: Send + Sync {
    fn insert(&self, new_notification: NewNotification) -> Result<Notification>;
    fn list_for_recipient(&self, recipient_id: &str) -> Result<Vec<Notification>>;
    fn mark_read(&self, notification_id: &str) -> Result<usize>;
    fn unread_count(&self, recipient_id: &str) -> Result<i64>;
}

/// Trait for notification service operations
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    async fn notify(&self, new_notification: NewNotification) -> Result<Notification>;
    fn get_notifications(&self, recipient_id: &str) -> Result<Vec<Notification>>;
    async fn mark_read(&self, notification_id: &str) -> Result<usize>;
    fn unread_count(&self, recipient_id: &str) -> Result<i64>;
}
