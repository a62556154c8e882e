#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How loudly a toast presents itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Destructive,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// Notification channel, injected via context rather than ambient globals so
/// the logic that raises toasts stays testable without a UI host.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, title: &str, message: &str, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            title: title.to_owned(),
            message: message.to_owned(),
            severity,
        });
        id
    }

    /// Remove a toast by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
