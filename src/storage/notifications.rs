//! Job-creation notification queue.
//!
//! A bounded list of "job created" notices kept in the key-value store under
//! [`NOTIFICATIONS_KEY`], newest first.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

use super::store::{get_collection, set_collection, KeyValueStore};

pub const NOTIFICATIONS_KEY: &str = "jobNotifications";

/// Oldest entries beyond this count are dropped.
pub const MAX_NOTIFICATIONS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobNotification {
    pub id: String,
    pub job_no: String,
    pub message: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

pub struct NotificationQueue {
    store: Arc<dyn KeyValueStore>,
}

impl NotificationQueue {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Record that a job was created and return the new notification.
    pub fn push_job_created(
        &self,
        job_no: &str,
        created_by: Option<&str>,
    ) -> StoreResult<JobNotification> {
        let notification = JobNotification {
            id: Uuid::new_v4().to_string(),
            job_no: job_no.to_string(),
            message: match created_by {
                Some(user) => format!("Job {} was created by {}", job_no, user),
                None => format!("Job {} was created", job_no),
            },
            created_by: created_by.map(|s| s.to_string()),
            created_at: Utc::now(),
            read: false,
        };

        let mut items = self.load()?;
        items.insert(0, notification.clone());
        items.truncate(MAX_NOTIFICATIONS);
        self.save(&items)?;

        log::info!(
            "NOTIFICATION_PUSHED job={} id={} queued={}",
            job_no,
            notification.id,
            items.len()
        );
        Ok(notification)
    }

    /// All notifications, newest first.
    pub fn list(&self) -> StoreResult<Vec<JobNotification>> {
        self.load()
    }

    pub fn unread_count(&self) -> StoreResult<usize> {
        Ok(self.load()?.iter().filter(|n| !n.read).count())
    }

    /// Mark one notification read. Returns false if no notification has `id`.
    pub fn mark_read(&self, id: &str) -> StoreResult<bool> {
        let mut items = self.load()?;
        let Some(item) = items.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        item.read = true;
        self.save(&items)?;
        Ok(true)
    }

    pub fn mark_all_read(&self) -> StoreResult<()> {
        let mut items = self.load()?;
        for item in &mut items {
            item.read = true;
        }
        self.save(&items)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove(NOTIFICATIONS_KEY)
    }

    fn load(&self) -> StoreResult<Vec<JobNotification>> {
        match get_collection(self.store.as_ref(), NOTIFICATIONS_KEY) {
            Ok(items) => Ok(items),
            Err(StoreError::Serialization(e)) => {
                log::warn!("NOTIFICATIONS_CORRUPT error={} action=reset", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, items: &[JobNotification]) -> StoreResult<()> {
        set_collection(self.store.as_ref(), NOTIFICATIONS_KEY, items)
    }
}
