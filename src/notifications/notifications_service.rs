use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::notifications::notifications_model::{NewNotification, Notification};
use crate::notifications::notifications_traits::{
    NotificationRepositoryTrait, NotificationServiceTrait,
};

pub struct NotificationService {
    notification_repository: Arc<dyn NotificationRepositoryTrait>,
}

impl NotificationService {
    pub fn new(notification_repository: Arc<dyn NotificationRepositoryTrait>) -> Self {
        NotificationService {
            notification_repository,
        }
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn notify(&self, new_notification: NewNotification) -> Result<Notification> {
        self.notification_repository.insert(new_notification)
    }

    fn get_notifications(&self, recipient_id: &str) -> Result<Vec<Notification>> {
        self.notification_repository.list_for_recipient(recipient_id)
    }

    async fn mark_read(&self, notification_id: &str) -> Result<usize> {
        self.notification_repository.mark_read(notification_id)
    }

    fn unread_count(&self, recipient_id: &str) -> Result<i64> {
        self.notification_repository.unread_count(recipient_id)
    }
}
