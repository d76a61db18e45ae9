//! Toast notifications as an explicit, injectable handle.
//!
//! The queue is a single shared instance per session: clone the handle into
//! every component that raises or renders toasts. Dismissal timing belongs to
//! the host shell; this crate only keeps the queue.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
}

#[derive(Default)]
struct Queue {
    seq: u64,
    list: Vec<Toast>,
}

/// Shared toast queue. Newest toasts first.
#[derive(Clone, Default)]
pub struct Alerts {
    inner: Arc<Mutex<Queue>>,
}

impl Alerts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast and return its id.
    pub fn show(&self, kind: ToastKind, title: impl Into<String>, message: Option<String>) -> u64 {
        let mut q = self.lock();
        q.seq += 1;
        let toast = Toast {
            id: q.seq,
            kind,
            title: title.into(),
            message,
        };
        let id = toast.id;
        q.list.insert(0, toast);
        id
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Success, title, Some(message.into()))
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Info, title, Some(message.into()))
    }

    pub fn warn(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Warning, title, Some(message.into()))
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.show(ToastKind::Error, title, Some(message.into()))
    }

    /// Remove one toast; unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.lock().list.retain(|t| t.id != id);
    }

    pub fn clear(&self) {
        self.lock().list.clear();
    }

    /// Current queue contents, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().list.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Queue> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_with_increasing_ids() {
        let alerts = Alerts::new();
        let a = alerts.success("Cliente salvo", "ok");
        let b = alerts.error("Erro", "falha ao salvar");
        assert!(b > a);

        let list = alerts.snapshot();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, b);
        assert_eq!(list[0].kind, ToastKind::Error);
        assert_eq!(list[1].id, a);
    }

    #[test]
    fn dismiss_removes_only_target() {
        let alerts = Alerts::new();
        let a = alerts.info("um", "1");
        let b = alerts.warn("dois", "2");
        alerts.dismiss(a);
        alerts.dismiss(999); // unknown id: no-op
        let list = alerts.snapshot();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, b);
    }

    #[test]
    fn clones_share_the_queue() {
        let alerts = Alerts::new();
        let other = alerts.clone();
        other.success("de outro lugar", "visível em todos");
        assert_eq!(alerts.snapshot().len(), 1);
        alerts.clear();
        assert!(other.snapshot().is_empty());
    }
}
