//! Outcome notifications
//!
//! Modal-style success/error messages. The controller only pushes into a
//! [`NotificationSink`]; how they are shown is up to the sink.

use colored::Colorize;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Accent used on the confirm button of success notifications.
pub const CONFIRM_COLOR: &str = "#2B9843";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub tone: Tone,
    pub title: String,
    pub text: String,
    pub confirm_color: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            title: title.into(),
            text: text.into(),
            confirm_color: Some(CONFIRM_COLOR.into()),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            title: title.into(),
            text: text.into(),
            confirm_color: None,
        }
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Prints notifications to the terminal, errors to stderr.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, notification: &Notification) {
        match notification.tone {
            Tone::Success => {
                println!("{} {}", "✔".green().bold(), notification.title.green().bold());
                println!("  {}", notification.text);
            }
            Tone::Error => {
                eprintln!("{} {}", "✘".red().bold(), notification.title.red().bold());
                eprintln!("  {}", notification.text);
            }
        }
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    seen: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: &Notification) {
        self.seen.lock().push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_confirm_color() {
        let n = Notification::success("Success", "Region created");
        assert_eq!(n.tone, Tone::Success);
        assert_eq!(n.confirm_color.as_deref(), Some(CONFIRM_COLOR));
        assert!(Notification::error("Error", "x").confirm_color.is_none());
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.notify(&Notification::error("Error", "first"));
        sink.notify(&Notification::success("Success", "second"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.notifications()[0].text, "first");
        assert_eq!(sink.last().unwrap().text, "second");
    }
}
