//! # Toast State Module
//!
//! Queue of notifications shown in the bottom-right corner. Toasts expire
//! after a fixed lifetime or when dismissed; at most [`MAX_VISIBLE_TOASTS`]
//! are kept, oldest dropped first.

use shared::Notification;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl ToastState {
    pub fn new() -> Self {
        Self::with_lifetime(TOAST_LIFETIME)
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            lifetime,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        log::info!("🔔 Toast: {} - {}", notification.title, notification.description);
        self.toasts.push_back(Toast {
            id: self.next_id,
            notification,
            shown_at: now,
        });
        self.next_id += 1;

        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts older than the lifetime
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Time until the next toast expires, used to schedule a repaint
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .map(|toast| (toast.shown_at + self.lifetime).saturating_duration_since(now))
            .min()
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}
