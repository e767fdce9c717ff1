//! Dialog and notification state for the dashboard.
//!
//! Pure presentation bookkeeping: which dialogs are showing and which toasts
//! are still on screen. No business rules live here.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Dialogs the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    AddMember,
    AddSkill,
    AssignSkill,
}

impl ModalId {
    /// DOM id of the dialog element.
    pub fn element_id(self) -> &'static str {
        match self {
            ModalId::AddMember => "addMemberModal",
            ModalId::AddSkill => "addSkillModal",
            ModalId::AssignSkill => "skillAssignModal",
        }
    }
}

/// Open/closed state of every dialog.
#[derive(Debug, Default, Clone)]
pub struct Modals {
    open: HashSet<ModalId>,
    scroll_locked: bool,
}

impl Modals {
    pub fn open(&mut self, id: ModalId) {
        self.open.insert(id);
        self.scroll_locked = true;
    }

    /// Closing any dialog unlocks page scrolling, even if another is still open.
    pub fn close(&mut self, id: ModalId) {
        self.open.remove(&id);
        self.scroll_locked = false;
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.contains(&id)
    }

    /// Set by the last `open`, cleared by the last `close`.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

/// Transient notifications, oldest first. Expired entries drop out on `prune`.
#[derive(Debug, Clone)]
pub struct Toasts {
    items: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_ttl(TOAST_DURATION)
    }
}

impl Toasts {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastKind::Success, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastKind::Error, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.items.push_back(Toast {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Drop every toast whose display time has elapsed at `now`.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
        before - self.items.len()
    }

    /// Toasts still on screen at `now`.
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        let ttl = self.ttl;
        self.items
            .iter()
            .filter(move |toast| now.saturating_duration_since(toast.shown_at) < ttl)
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_toggle() {
        let mut modals = Modals::default();
        assert!(!modals.scroll_locked());

        modals.open(ModalId::AddMember);
        assert!(modals.is_open(ModalId::AddMember));
        assert!(!modals.is_open(ModalId::AddSkill));
        assert!(modals.scroll_locked());

        // Opening twice is a no-op.
        modals.open(ModalId::AddMember);
        modals.close(ModalId::AddMember);
        assert!(!modals.is_open(ModalId::AddMember));
        assert!(!modals.scroll_locked());
    }

    #[test]
    fn test_any_close_unlocks_scrolling() {
        let mut modals = Modals::default();
        modals.open(ModalId::AddMember);
        modals.open(ModalId::AssignSkill);

        modals.close(ModalId::AddMember);
        assert!(modals.is_open(ModalId::AssignSkill));
        assert!(!modals.scroll_locked());

        modals.open(ModalId::AddSkill);
        assert!(modals.scroll_locked());
    }

    #[test]
    fn test_toasts_expire_after_ttl() {
        let start = Instant::now();
        let mut toasts = Toasts::default();
        toasts.push_at("first", ToastKind::Success, start);
        toasts.push_at("second", ToastKind::Error, start + Duration::from_secs(2));

        assert_eq!(toasts.visible(start + Duration::from_secs(1)).count(), 2);

        let later = start + TOAST_DURATION;
        let visible: Vec<_> = toasts.visible(later).map(|t| t.message.as_str()).collect();
        assert_eq!(visible, vec!["second"]);

        assert_eq!(toasts.prune(later), 1);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.prune(start + Duration::from_secs(10)), 1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_latest_toast_kind() {
        let mut toasts = Toasts::default();
        toasts.success("ok");
        toasts.error("nope");
        let latest = toasts.latest().unwrap();
        assert_eq!(latest.kind, ToastKind::Error);
        assert_eq!(latest.kind.css_class(), "toast-error");
    }
}
