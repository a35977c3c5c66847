//! Navigation chrome: sections, keyboard shortcuts, scroll-derived state.
//!
//! DESIGN
//! ======
//! Everything here is computed from plain inputs (key descriptions, scroll
//! metrics, section bounds) so the browser layer only measures and applies.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset beyond which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Probe offset below the top of the viewport used for the active section.
pub const ACTIVE_SECTION_PROBE_PX: f64 = 100.0;

/// Height reserved for the fixed navbar when scrolling to a section.
pub const SCROLL_OFFSET_PX: f64 = 80.0;

/// Duration of the smooth scroll to an anchor.
pub const SMOOTH_SCROLL_MS: f64 = 800.0;

/// Hero parallax factor (content moves up at 30% of scroll speed).
pub const PARALLAX_RATE: f64 = -0.3;

/// Page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [Self::Home, Self::About, Self::Skills, Self::Projects, Self::Contact];

    /// DOM id of the `<section>`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            Self::Home => 'h',
            Self::About => 'a',
            Self::Skills => 's',
            Self::Projects => 'p',
            Self::Contact => 'c',
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_shortcut(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let first = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|s| s.shortcut() == first)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// A keydown, reduced to what the shortcuts look at.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyInput<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// Focus is in an `<input>` or `<textarea>`.
    pub in_text_field: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleTheme,
    ScrollTo(Section),
    CloseMenu,
}

/// Map a keydown to a page action.
///
/// Ctrl/Cmd+Shift+T works everywhere. Section letters and Escape are ignored
/// while typing in a form field.
pub fn key_action(input: &KeyInput<'_>) -> Option<KeyAction> {
    let command = input.ctrl || input.meta;
    if command && input.shift && input.key == "T" {
        return Some(KeyAction::ToggleTheme);
    }
    if input.in_text_field {
        return None;
    }
    if input.key.eq_ignore_ascii_case("escape") {
        return Some(KeyAction::CloseMenu);
    }
    if command {
        return None;
    }
    Section::from_shortcut(input.key).map(KeyAction::ScrollTo)
}

/// Window scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable distance covered, clamped to `0..=100`.
    pub fn progress_pct(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    }

    /// Hero translate offset; zero once the hero has scrolled out of view.
    pub fn parallax_offset(&self) -> f64 {
        if self.scroll_y < self.viewport_height { self.scroll_y * PARALLAX_RATE } else { 0.0 }
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// Section containing the probe line; the last match wins when sections
/// touch.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<Section> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_PX;
    sections
        .iter()
        .rev()
        .find(|b| probe >= b.top && probe <= b.top + b.height)
        .map(|b| b.section)
}

fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Eased scroll from one offset to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl ScrollTween {
    /// Position at `now_ms` and whether the tween has finished.
    pub fn position_at(&self, now_ms: f64) -> (f64, bool) {
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0)
        };
        (self.from + (self.to - self.from) * ease_out_cubic(progress), progress >= 1.0)
    }
}

/// Navbar and scroll state.
#[derive(Clone, Debug, Default)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub active_section: Option<Section>,
    pub progress_pct: f64,
    pub parallax_offset: f64,
    tween: Option<ScrollTween>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, metrics: &ScrollMetrics, sections: &[SectionBounds]) {
        self.scrolled = metrics.scroll_y > NAVBAR_SCROLLED_PX;
        self.progress_pct = metrics.progress_pct();
        self.parallax_offset = metrics.parallax_offset();
        if let Some(section) = active_section(metrics.scroll_y, sections) {
            self.active_section = Some(section);
        }
    }

    /// Start a smooth scroll so `section_top` lands below the navbar.
    /// Replaces any scroll in flight.
    pub fn begin_scroll(&mut self, from: f64, section_top: f64, now_ms: f64) {
        self.tween = Some(ScrollTween {
            from,
            to: (section_top - SCROLL_OFFSET_PX).max(0.0),
            started_ms: now_ms,
            duration_ms: SMOOTH_SCROLL_MS,
        });
    }

    /// Next scroll position; clears the tween once it finishes.
    pub fn scroll_step(&mut self, now_ms: f64) -> Option<(f64, bool)> {
        let (y, done) = self.tween?.position_at(now_ms);
        if done {
            self.tween = None;
        }
        Some((y, done))
    }

    pub fn is_scrolling(&self) -> bool {
        self.tween.is_some()
    }
}
