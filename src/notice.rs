//! Notification modal.
//!
//! Three fixed content variants; unknown tags fall back to info. The modal is
//! closed by an explicit close action or the escape key.

use serde::{Deserialize, Serialize};

use crate::display::{Panel, ResultKind};
use crate::observability::metrics;

/// Notification variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Warning,
    Info,
}

impl NoticeKind {
    /// Map a tag to a kind, falling back to [`NoticeKind::Info`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => NoticeKind::Success,
            "warning" => NoticeKind::Warning,
            _ => NoticeKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
        }
    }

    fn result_kind(&self) -> ResultKind {
        match self {
            NoticeKind::Success => ResultKind::Success,
            NoticeKind::Warning => ResultKind::Error,
            NoticeKind::Info => ResultKind::Info,
        }
    }
}

/// Title and body of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModalContent {
    pub title: &'static str,
    pub message: &'static str,
}

/// Fixed content for a notification kind.
pub fn modal_content(kind: NoticeKind) -> ModalContent {
    match kind {
        NoticeKind::Success => ModalContent {
            title: "Success!",
            message: "Operation completed successfully. This modal slides in smoothly using CSS transitions triggered by JavaScript.",
        },
        NoticeKind::Warning => ModalContent {
            title: "Warning",
            message: "Please be careful! This is a warning message displayed in a beautifully animated modal.",
        },
        NoticeKind::Info => ModalContent {
            title: "Information",
            message: "Here is some important information. Notice how the modal scales in and the overlay fades in simultaneously.",
        },
    }
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// Open/closed state of the single notification surface.
#[derive(Debug, Default)]
pub struct Modal {
    active: Option<NoticeKind>,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing whatever was open.
    pub fn open(&mut self, kind: NoticeKind) -> ModalContent {
        self.active = Some(kind);
        metrics::record_notification(kind.as_str());
        tracing::debug!(kind = kind.as_str(), "Modal opened");
        modal_content(kind)
    }

    /// Dismiss the modal. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.active.take().is_some();
        if was_open {
            tracing::debug!("Modal closed");
        }
        was_open
    }

    /// Escape closes; other keys are ignored. Returns whether the modal closed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.close(),
            Key::Char(_) => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<NoticeKind> {
        self.active
    }

    /// Panel for the open notification, if any.
    pub fn panel(&self) -> Option<Panel> {
        self.active.map(|kind| {
            let content = modal_content(kind);
            Panel::new(
                kind.result_kind(),
                vec![
                    content.title.to_string(),
                    content.message.to_string(),
                    "(close or esc to dismiss)".to_string(),
                ],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_falls_back_to_info() {
        assert_eq!(NoticeKind::from_tag("danger"), NoticeKind::Info);
        assert_eq!(modal_content(NoticeKind::from_tag("")).title, "Information");
        assert_eq!(modal_content(NoticeKind::from_tag("warning")).title, "Warning");
    }

    #[test]
    fn test_open_and_close() {
        let mut modal = Modal::new();
        assert!(!modal.is_open());
        assert!(!modal.close());

        let content = modal.open(NoticeKind::Success);
        assert_eq!(content.title, "Success!");
        assert!(modal.is_open());

        assert!(modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = Modal::new();
        modal.open(NoticeKind::Warning);

        assert!(!modal.handle_key(Key::Char('q')));
        assert!(modal.is_open());

        assert!(modal.handle_key(Key::Escape));
        assert!(!modal.is_open());
        assert!(!modal.handle_key(Key::Escape));
    }

    #[test]
    fn test_panel_reflects_active_kind() {
        let mut modal = Modal::new();
        assert!(modal.panel().is_none());

        modal.open(NoticeKind::Warning);
        let panel = modal.panel().unwrap();
        assert_eq!(panel.kind, ResultKind::Error);
        assert_eq!(panel.lines[0], "Warning");
    }
}
