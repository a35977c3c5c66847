//! Transient toast notifications.
//!
//! A toast is inserted in the `Entering` phase (off-screen), slides in on the
//! next frame, stays for [`TOAST_VISIBLE_MS`], then leaves over
//! [`TOAST_EXIT_MS`] before removal. Concurrent toasts stack in insertion
//! order; identical messages are not coalesced.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Time from insertion until the exit animation starts.
pub const TOAST_VISIBLE_MS: f64 = 4_000.0;

/// Duration of the exit animation before removal.
pub const TOAST_EXIT_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

/// Toast severity; picks icon and color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Warning => "fas fa-exclamation-triangle",
            Self::Info => "fas fa-info-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Warning => "#f59e0b",
            Self::Info => "#3b82f6",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

/// Ordered toasts currently in the tree.
#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    mounted: bool,
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the render surface ready; earlier pushes were dropped.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Insert a toast. `None` (and no toast) before the surface is mounted.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> Option<ToastId> {
        if !self.mounted {
            return None;
        }
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), severity, phase: ToastPhase::Entering });
        Some(id)
    }

    /// Slide an entering toast in.
    pub fn show(&mut self, id: ToastId) -> bool {
        match self.get_mut(id) {
            Some(toast) if toast.phase == ToastPhase::Entering => {
                toast.phase = ToastPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start the exit animation. `false` if already leaving or gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.get_mut(id) {
            Some(toast) if toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }

    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.get(id).map(|t| t.phase)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
