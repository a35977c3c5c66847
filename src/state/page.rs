//! Page-level state: owns every component and the shared timeline.
//!
//! ARCHITECTURE
//! ============
//! `PageState` is the single value held in the app's Leptos signal. Event
//! handlers call one method per user or host event; deferred work is queued
//! on the [`Timeline`] as a [`Task`] and dispatched back here when the browser
//! driver (or a test) advances the clock.
//!
//! ```text
//! click/key/scroll/system change -> PageState method -> state + Task(s)
//! timer/frame -> run_timers/run_frame -> dispatch(Task) -> state + Task(s)
//! ```

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::SiteConfig;
use crate::state::contact::{ContactError, ContactForm};
use crate::state::counter::CounterPhase;
use crate::state::nav::{KeyAction, KeyInput, NavState, ScrollMetrics, SectionBounds, key_action};
use crate::state::reveal::{ElementId, ElementKind, IntersectionEntry, RevealScheduler, SecondaryEffect};
use crate::state::theme::{PreferenceStore, Theme, ThemeParseError};
use crate::state::timeline::Timeline;
use crate::state::toast::{Severity, TOAST_EXIT_MS, TOAST_VISIBLE_MS, ToastId, ToastStack};
use crate::state::typewriter::{TYPE_CHAR_MS, TYPE_START_DELAY_MS, Typewriter};
use crate::util::clipboard::CopyOutcome;
use crate::util::host::{KeyValueStore, MailLauncher};

/// How long the body keeps `theme-switching` (suppresses color transitions).
pub const THEME_SWITCHING_MS: f64 = 100.0;
/// How long the body keeps `theme-transition` (cross-fade).
pub const THEME_TRANSITION_MS: f64 = 300.0;
/// How long the toggle icon spins after a click.
pub const ICON_SPIN_MS: f64 = 600.0;
/// Delay after window load before the loading screen fades.
pub const LOADER_HOLD_MS: f64 = 1_000.0;
/// Loading screen fade duration.
pub const LOADER_FADE_MS: f64 = 500.0;

pub const CONTACT_SENT_MESSAGE: &str = "Message sent! Your email client should open now.";
pub const COPY_OK_MESSAGE: &str = "Email copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy email";

/// Deferred work, tagged by what it continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    ThemeSwitchingEnd(u64),
    ThemeTransitionEnd(u64),
    IconSpinEnd(u64),
    Reveal(ElementId),
    CounterStep(ElementId),
    ToastShow(ToastId),
    ToastDismiss(ToastId),
    ToastRemove(ToastId),
    TypeNext,
    LoaderFade,
    LoaderHide,
    ScrollStep,
}

/// Cosmetic theme-change flags. Each change bumps `generation`; a timer from an
/// older change does not clear a newer change's flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeEffects {
    pub generation: u64,
    pub switching: bool,
    pub transitioning: bool,
    pub icon_spin: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Fading,
    Done,
}

/// Everything the page renders.
#[derive(Clone, Debug)]
pub struct PageState<S> {
    pub config: SiteConfig,
    pub reveal: RevealScheduler,
    pub toasts: ToastStack,
    pub nav: NavState,
    pub contact: ContactForm,
    preference: PreferenceStore<S>,
    typewriter: Typewriter,
    loader: LoadPhase,
    loader_scheduled: bool,
    theme_fx: ThemeEffects,
    timeline: Timeline<Task>,
    scroll_request: Option<f64>,
}

impl<S: KeyValueStore> PageState<S> {
    /// Build page state at `now_ms`. `system_theme` is the host's reported
    /// color scheme, if it can report one.
    pub fn new(config: SiteConfig, storage: S, system_theme: Option<Theme>, now_ms: f64) -> Self {
        let typewriter = Typewriter::new(&config.tagline);
        let mut timeline = Timeline::starting_at(now_ms);
        timeline.after(TYPE_START_DELAY_MS, Task::TypeNext);
        let preference = PreferenceStore::new(storage, system_theme);
        log::debug!("initial theme {} (explicit: {})", preference.get(), preference.is_explicit());
        Self {
            config,
            reveal: RevealScheduler::new(),
            toasts: ToastStack::new(),
            nav: NavState::default(),
            contact: ContactForm::default(),
            preference,
            typewriter,
            loader: LoadPhase::Loading,
            loader_scheduled: false,
            theme_fx: ThemeEffects::default(),
            timeline,
            scroll_request: None,
        }
    }

    // =============================================================
    // Lifecycle
    // =============================================================

    /// The render surface exists; toasts can be shown from now on.
    pub fn mount(&mut self) {
        self.toasts.mount();
    }

    /// Window `load` fired: schedule the loading screen's exit. Only the
    /// first report counts.
    pub fn window_loaded(&mut self) {
        if self.loader == LoadPhase::Loading && !self.loader_scheduled {
            self.loader_scheduled = true;
            self.timeline.after(LOADER_HOLD_MS, Task::LoaderFade);
        }
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.loader
    }

    // =============================================================
    // Theme
    // =============================================================

    pub fn theme(&self) -> Theme {
        self.preference.get()
    }

    pub fn theme_effects(&self) -> ThemeEffects {
        self.theme_fx
    }

    pub fn preference(&self) -> &PreferenceStore<S> {
        &self.preference
    }

    /// Explicitly choose a theme and announce it.
    pub fn set_theme(&mut self, theme: Theme) {
        let change = self.preference.set(theme);
        self.start_theme_effects(true);
        self.notify(format!("Switched to {} mode", change.theme), Severity::Info);
    }

    pub fn set_theme_str(&mut self, raw: &str) -> Result<Theme, ThemeParseError> {
        let theme = raw.parse::<Theme>()?;
        self.set_theme(theme);
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.preference.get().opposite());
    }

    /// The OS color scheme changed.
    pub fn system_theme_changed(&mut self, theme: Theme) {
        let before = self.preference.get();
        if self.preference.on_system_change(theme).is_some_and(|adopted| adopted != before) {
            self.start_theme_effects(false);
        }
    }

    /// Drop the explicit preference and follow the system again.
    pub fn clear_theme_preference(&mut self) -> Theme {
        let before = self.preference.get();
        let theme = self.preference.clear();
        if theme != before {
            self.start_theme_effects(false);
        }
        theme
    }

    fn start_theme_effects(&mut self, spin_icon: bool) {
        self.theme_fx.generation += 1;
        let generation = self.theme_fx.generation;
        self.theme_fx.switching = true;
        self.theme_fx.transitioning = true;
        self.timeline.after(THEME_SWITCHING_MS, Task::ThemeSwitchingEnd(generation));
        self.timeline.after(THEME_TRANSITION_MS, Task::ThemeTransitionEnd(generation));
        if spin_icon {
            self.theme_fx.icon_spin = true;
            self.timeline.after(ICON_SPIN_MS, Task::IconSpinEnd(generation));
        }
    }

    // =============================================================
    // Toasts
    // =============================================================

    /// Show a toast; silently ignored before [`mount`](Self::mount).
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Option<ToastId> {
        let id = self.toasts.push(message, severity)?;
        self.timeline.next_frame(Task::ToastShow(id));
        self.timeline.after(TOAST_VISIBLE_MS, Task::ToastDismiss(id));
        Some(id)
    }

    // =============================================================
    // Reveal
    // =============================================================

    pub fn register_reveal(&mut self, kind: ElementKind, counter_text: Option<&str>) -> ElementId {
        self.reveal.register(kind, counter_text)
    }

    /// The host has no intersection observer; nothing will be revealed.
    pub fn observer_unavailable(&mut self) {
        self.reveal.disable();
    }

    /// Apply one intersection notification batch.
    pub fn intersections(&mut self, entries: &[IntersectionEntry]) {
        for reveal in self.reveal.observe_batch(entries) {
            self.timeline.after(reveal.delay_ms, Task::Reveal(reveal.id));
        }
    }

    // =============================================================
    // Navigation
    // =============================================================

    /// Handle a keydown. Theme and menu actions are applied here; a returned
    /// `ScrollTo` needs the caller to measure the section and call
    /// [`scroll_to`](Self::scroll_to).
    pub fn handle_key(&mut self, input: &KeyInput<'_>) -> Option<KeyAction> {
        let action = key_action(input)?;
        match action {
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::CloseMenu => self.nav.close_menu(),
            KeyAction::ScrollTo(_) => {}
        }
        Some(action)
    }

    pub fn scrolled(&mut self, metrics: &ScrollMetrics, sections: &[SectionBounds]) {
        self.nav.on_scroll(metrics, sections);
    }

    /// Smoothly scroll from `from_y` so `section_top` sits below the navbar.
    pub fn scroll_to(&mut self, from_y: f64, section_top: f64) {
        let already_running = self.nav.is_scrolling();
        self.nav.begin_scroll(from_y, section_top, self.timeline.now_ms());
        self.nav.close_menu();
        if !already_running {
            self.timeline.next_frame(Task::ScrollStep);
        }
    }

    /// Window scroll position the driver should apply, if any.
    pub fn take_scroll_request(&mut self) -> Option<f64> {
        self.scroll_request.take()
    }

    pub fn typed_tagline(&self) -> String {
        self.typewriter.visible()
    }

    // =============================================================
    // Contact + clipboard
    // =============================================================

    /// Submit the contact form through `launcher`.
    ///
    /// On success the form is cleared. Failures keep the draft and show a toast.
    pub fn submit_contact<M: MailLauncher + ?Sized>(&mut self, launcher: &M) -> Result<(), ContactError> {
        match self.try_submit(launcher) {
            Ok(()) => {
                self.contact.clear();
                self.notify(CONTACT_SENT_MESSAGE, Severity::Success);
                Ok(())
            }
            Err(err) => {
                let severity = match err {
                    ContactError::Launch(_) => Severity::Error,
                    ContactError::MissingField(_) | ContactError::InvalidEmail(_) => Severity::Warning,
                };
                log::warn!("contact form not sent: {err}");
                self.notify(err.to_string(), severity);
                Err(err)
            }
        }
    }

    fn try_submit<M: MailLauncher + ?Sized>(&self, launcher: &M) -> Result<(), ContactError> {
        let request = self.contact.compose(&self.config.contact_email)?;
        launcher.launch(&request.to_mailto_url())?;
        Ok(())
    }

    /// Report the result of a copy-email attempt.
    pub fn copy_finished(&mut self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied | CopyOutcome::CopiedWithFallback => {
                self.notify(COPY_OK_MESSAGE, Severity::Success);
            }
            CopyOutcome::Failed => {
                self.notify(COPY_FAILED_MESSAGE, Severity::Error);
            }
        }
    }

    // =============================================================
    // Scheduling
    // =============================================================

    /// Run every timer task due at `now_ms`, including ones that become due
    /// while running, then bring the clock up to `now_ms`.
    pub fn run_timers(&mut self, now_ms: f64) {
        while let Some(task) = self.timeline.pop_due(now_ms) {
            self.dispatch(task);
        }
        self.timeline.sync_to(now_ms);
    }

    /// Catch up to `now_ms` before applying an event, so delays the event
    /// schedules start from when it happened.
    pub fn tick(&mut self, now_ms: f64) {
        self.run_timers(now_ms);
    }

    /// Run one display frame starting at `now_ms`.
    pub fn run_frame(&mut self, now_ms: f64) {
        for task in self.timeline.take_frame(now_ms) {
            self.dispatch(task);
        }
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.timeline.next_due_ms()
    }

    pub fn has_frame_work(&self) -> bool {
        self.timeline.has_frame_work()
    }

    pub fn is_idle(&self) -> bool {
        self.timeline.is_idle()
    }

    fn dispatch(&mut self, task: Task) {
        let now = self.timeline.now_ms();
        match task {
            Task::ThemeSwitchingEnd(generation) => {
                if generation == self.theme_fx.generation {
                    self.theme_fx.switching = false;
                }
            }
            Task::ThemeTransitionEnd(generation) => {
                if generation == self.theme_fx.generation {
                    self.theme_fx.transitioning = false;
                }
            }
            Task::IconSpinEnd(generation) => {
                if generation == self.theme_fx.generation {
                    self.theme_fx.icon_spin = false;
                }
            }
            Task::Reveal(id) => {
                if self.reveal.show(id) == Some(SecondaryEffect::Counter) {
                    self.timeline.next_frame(Task::CounterStep(id));
                }
            }
            Task::CounterStep(id) => {
                if self.reveal.step_counter(id) == Some(CounterPhase::Running) {
                    self.timeline.next_frame(Task::CounterStep(id));
                }
            }
            Task::ToastShow(id) => {
                self.toasts.show(id);
            }
            Task::ToastDismiss(id) => {
                if self.toasts.dismiss(id) {
                    self.timeline.after(TOAST_EXIT_MS, Task::ToastRemove(id));
                }
            }
            Task::ToastRemove(id) => {
                self.toasts.remove(id);
            }
            Task::TypeNext => {
                if self.typewriter.advance() {
                    self.timeline.after(TYPE_CHAR_MS, Task::TypeNext);
                }
            }
            Task::LoaderFade => {
                self.loader = LoadPhase::Fading;
                self.timeline.after(LOADER_FADE_MS, Task::LoaderHide);
            }
            Task::LoaderHide => {
                self.loader = LoadPhase::Done;
            }
            Task::ScrollStep => {
                if let Some((y, done)) = self.nav.scroll_step(now) {
                    self.scroll_request = Some(y);
                    if !done {
                        self.timeline.next_frame(Task::ScrollStep);
                    }
                }
            }
        }
    }
}
