use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

/// Fire-and-forget notification sink.
pub trait AlertSink {
    fn new_alert(&mut self, kind: AlertKind, title: &str, message: &str);
}

/// Sink that keeps every alert in memory, in emission order.
#[derive(Debug, Default)]
pub struct AlertLog {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Removes an alert by id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    pub fn push(&mut self, kind: AlertKind, title: &str, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.push(Alert {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
        id
    }
}

impl AlertSink for AlertLog {
    fn new_alert(&mut self, kind: AlertKind, title: &str, message: &str) {
        self.push(kind, title, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dismiss_removes_one() {
        let mut log = AlertLog::new();
        let first = log.push(AlertKind::Info, "a", "one");
        let second = log.push(AlertKind::Danger, "b", "two");
        assert_ne!(first, second);

        assert!(log.dismiss(first));
        assert!(!log.dismiss(first));
        assert_eq!(log.len(), 1);
        assert_eq!(log.alerts()[0].message, "two");
    }
}
