use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// How long the profile save outcome stays visible.
pub const SAVE_STATUS_TTL: Duration = Duration::from_millis(1500);
/// How long the project create outcome stays visible.
pub const CREATE_STATUS_TTL: Duration = Duration::from_millis(1500);
/// How long the project delete outcome stays visible.
pub const DELETE_STATUS_TTL: Duration = Duration::from_millis(1200);

pub const SAVING: &str = "Saving...";
pub const SAVED: &str = "Saved!";
pub const SAVE_FAILED: &str = "Failed to save";
pub const CREATING: &str = "Creating project...";
pub const CREATED: &str = "Project created";
pub const CREATE_FAILED: &str = "Failed to create project";
pub const DELETING: &str = "Deleting...";
pub const DELETED: &str = "Deleted";
pub const DELETE_FAILED: &str = "Failed to delete";

/// Current content of the status slot. An empty message means nothing is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    generation: u64,
}

/// Single-slot, self-clearing status message.
///
/// Every write bumps a generation counter. A scheduled clear only fires if the
/// generation it was scheduled for is still current, so the newest message's
/// timer is the only one that can empty the slot.
#[derive(Clone)]
pub struct StatusSlot {
    tx: Arc<watch::Sender<Status>>,
}

impl Default for StatusSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSlot {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Status::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn message(&self) -> String {
        self.tx.borrow().message.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.tx.subscribe()
    }

    /// Show `message` until something replaces it.
    pub fn set(&self, message: impl Into<String>) -> u64 {
        let message = message.into();
        let mut generation = 0;
        self.tx.send_modify(|status| {
            status.generation += 1;
            status.message = message;
            generation = status.generation;
        });
        generation
    }

    /// Show `message`, then clear it after `ttl` unless a newer message lands first.
    pub fn flash(&self, message: impl Into<String>, ttl: Duration) {
        let generation = self.set(message);
        let deadline = tokio::time::Instant::now() + ttl;
        let tx = Arc::clone(&self.tx);
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            tx.send_if_modified(|status| {
                if status.generation != generation {
                    return false;
                }
                status.message.clear();
                true
            });
        });
    }
}
