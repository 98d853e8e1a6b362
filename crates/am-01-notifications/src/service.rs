//! Notification Center service.
//!
//! An owned, cloneable handle over the live notification list. Each push
//! spawns one expiry task on the ambient tokio runtime; the task holds only
//! a weak reference, so dropping the last handle ends the center.

use crate::domain::{Notification, NotificationConfig, NotificationId};
use parking_lot::Mutex;
use shared_types::NotificationKind;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// A live notification plus its pending expiry task.
struct Entry {
    notification: Notification,
    expiry: Option<AbortHandle>,
}

/// Why a notification left the list (for logging).
#[derive(Debug, Clone, Copy)]
enum Removal {
    Dismissed,
    Expired,
}

struct Inner {
    config: NotificationConfig,
    entries: Mutex<Vec<Entry>>,
    next_id: AtomicU64,
    updates: watch::Sender<Vec<Notification>>,
}

impl Inner {
    fn remove(&self, id: NotificationId, cause: Removal) -> Option<Entry> {
        let mut entries = self.entries.lock();
        let index = entries.iter().position(|e| e.notification.id == id)?;
        let entry = entries.remove(index);
        self.publish(&entries);
        debug!(notification_id = %id, ?cause, "Notification removed");
        Some(entry)
    }

    fn publish(&self, entries: &[Entry]) {
        self.updates
            .send_replace(entries.iter().map(|e| e.notification.clone()).collect());
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for entry in self.entries.get_mut().drain(..) {
            if let Some(expiry) = entry.expiry {
                expiry.abort();
            }
        }
    }
}

/// Notification Center.
///
/// Instantiate one per UI root. Clones share the same list.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl NotificationCenter {
    pub fn new(config: NotificationConfig) -> Self {
        let (updates, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                config,
                entries: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                updates,
            }),
        }
    }

    /// Append a notification and schedule its automatic removal.
    ///
    /// Must be called from within a tokio runtime for the removal to be
    /// scheduled. Outside one the notification stays until dismissed.
    pub fn push(&self, kind: NotificationKind, text: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification {
            id,
            kind,
            text: text.into(),
        };
        debug!(notification_id = %id, %kind, text = %notification.text, "Notification pushed");

        // Lock before spawning so the expiry task can never observe the
        // list without this entry.
        let mut entries = self.inner.entries.lock();
        let expiry = self.schedule_expiry(id);
        entries.push(Entry {
            notification,
            expiry,
        });
        self.inner.publish(&entries);

        id
    }

    /// Remove a notification immediately. No-op if it is already gone.
    pub fn dismiss(&self, id: NotificationId) {
        if let Some(entry) = self.inner.remove(id, Removal::Dismissed) {
            if let Some(expiry) = entry.expiry {
                expiry.abort();
            }
        }
    }

    /// Live notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.inner
            .entries
            .lock()
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    /// Receiver that observes every change to the live list.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.inner.updates.subscribe()
    }

    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.lock().is_empty()
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.inner.config
    }

    fn schedule_expiry(&self, id: NotificationId) -> Option<AbortHandle> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!(notification_id = %id, "No tokio runtime, notification will not expire");
                return None;
            }
        };

        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let lifetime = self.inner.config.display_duration;
        let task = runtime.spawn(async move {
            tokio::time::sleep(lifetime).await;
            if let Some(inner) = inner.upgrade() {
                inner.remove(id, Removal::Expired);
            }
        });

        Some(task.abort_handle())
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("live", &self.len())
            .field("display_duration", &self.inner.config.display_duration)
            .finish()
    }
}
