//! Toast State
//!
//! Queue of transient notifications shown by the root layout.

use leptos::*;

/// Most toasts shown at once; older ones are dropped first
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Auto-dismiss delay in milliseconds
    pub fn timeout_ms(&self) -> u32 {
        match self {
            ToastKind::Success | ToastKind::Info => 3000,
            ToastKind::Error => 5000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Plain toast queue, independent of the reactive runtime
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<ToastMessage>,
    next_id: u64,
}

impl ToastQueue {
    /// Add a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(ToastMessage {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[ToastMessage] {
        &self.items
    }
}

/// Reactive toast state provided to the component tree
#[derive(Clone, Copy)]
pub struct ToastState {
    pub queue: RwSignal<ToastQueue>,
}

impl ToastState {
    pub fn show(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        gloo_timers::callback::Timeout::new(kind.timeout_ms(), move || {
            queue.update(|q| q.dismiss(id));
        })
        .forget();
    }

    /// Show a success message (auto-clears after timeout)
    pub fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: &str) {
        self.show(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

/// Provide toast state to the component tree
pub fn provide_toasts() {
    provide_context(ToastState {
        queue: create_rw_signal(ToastQueue::default()),
    });
}

/// Get the toast state
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>().expect("ToastState not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Saved");
        let b = queue.push(ToastKind::Error, "Failed");
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
    }

    #[test]
    fn test_queue_drops_oldest() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(ToastKind::Info, format!("toast {}", i));
        }
        let messages: Vec<_> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        queue.push(ToastKind::Success, "two");
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "two");

        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_errors_linger_longer() {
        assert!(ToastKind::Error.timeout_ms() > ToastKind::Success.timeout_ms());
    }
}
