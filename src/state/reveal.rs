//! One-way scroll reveal of page elements.
//!
//! DESIGN
//! ======
//! Elements are registered once with a kind resolved from their class name.
//! The first intersecting notification flips `revealed` for good; the visual
//! side effect (`shown`, plus a kind-specific secondary effect) is applied
//! later by the caller after a per-batch stagger delay.
//!
//! ```text
//! hidden --intersect--> revealed --stagger elapsed--> shown (+ effect)
//! ```
//!
//! Without an intersection observer nothing is ever revealed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeMap;

use crate::state::counter::{CounterAnimation, CounterPhase};

/// Fraction of an element that must be visible before it counts as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Viewport margin applied before intersection is computed; the bottom edge is
/// pulled up so elements reveal slightly after they enter.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay between consecutive reveals in one notification batch.
pub const REVEAL_STAGGER_MS: f64 = 100.0;

/// CSS transition delay added per registered element, in registration order.
pub const TRANSITION_DELAY_STEP_MS: u32 = 100;

/// Attribute carrying an element's [`ElementId`] in the DOM.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Handle of a registered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

/// Classification of revealable elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    HeroContent,
    SectionTitle,
    SectionSubtitle,
    AboutText,
    Stat,
    SkillCategory,
    ProjectCard,
    ContactItem,
}

/// Extra effect a kind gets once shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryEffect {
    /// Title underline animation (`animate` class).
    Animate,
    /// Card zoom (`scale-in` class).
    ScaleIn,
    /// Numeric count-up of the stat label.
    Counter,
}

impl ElementKind {
    pub const ALL: [Self; 8] = [
        Self::HeroContent,
        Self::SectionTitle,
        Self::SectionSubtitle,
        Self::AboutText,
        Self::Stat,
        Self::SkillCategory,
        Self::ProjectCard,
        Self::ContactItem,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            Self::HeroContent => "hero-content",
            Self::SectionTitle => "section-title",
            Self::SectionSubtitle => "section-subtitle",
            Self::AboutText => "about-text",
            Self::Stat => "stat-item",
            Self::SkillCategory => "skill-category",
            Self::ProjectCard => "project-card",
            Self::ContactItem => "contact-item",
        }
    }

    /// Resolve a kind from an element's class list. The first recognised
    /// class wins.
    pub fn classify<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        classes
            .into_iter()
            .find_map(|class| Self::ALL.into_iter().find(|kind| kind.class_name() == class))
    }

    pub fn secondary_effect(self) -> Option<SecondaryEffect> {
        match self {
            Self::SectionTitle => Some(SecondaryEffect::Animate),
            Self::ProjectCard => Some(SecondaryEffect::ScaleIn),
            Self::Stat => Some(SecondaryEffect::Counter),
            _ => None,
        }
    }
}

/// Per-element reveal state.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservableElement {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Flipped on first intersection; never reset.
    pub revealed: bool,
    /// Visual reveal applied (after the stagger delay).
    pub shown: bool,
    pub effect: Option<SecondaryEffect>,
    pub transition_delay_ms: u32,
    counter_text: Option<String>,
    counter: Option<CounterAnimation>,
}

impl ObservableElement {
    /// Label to render: the running counter, or the registered stat text.
    pub fn label(&self) -> Option<&str> {
        match &self.counter {
            Some(counter) => Some(counter.display()),
            None => self.counter_text.as_deref(),
        }
    }

    pub fn counter(&self) -> Option<&CounterAnimation> {
        self.counter.as_ref()
    }
}

/// One intersection notification for one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub id: ElementId,
    pub intersecting: bool,
}

/// A reveal whose visual effect should run after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggeredReveal {
    pub id: ElementId,
    pub delay_ms: f64,
}

/// Watches registered elements and flips them revealed on first sight.
#[derive(Clone, Debug)]
pub struct RevealScheduler {
    observer_available: bool,
    next_id: u32,
    elements: BTreeMap<ElementId, ObservableElement>,
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self { observer_available: true, next_id: 0, elements: BTreeMap::new() }
    }

    /// Scheduler for a host without intersection observation.
    pub fn without_observer() -> Self {
        Self { observer_available: false, ..Self::new() }
    }

    pub fn observer_available(&self) -> bool {
        self.observer_available
    }

    /// Mark intersection observation as missing; later batches are ignored.
    pub fn disable(&mut self) {
        self.observer_available = false;
    }

    /// Register an element. Stat elements pass their label text as the
    /// counter target.
    pub fn register(&mut self, kind: ElementKind, counter_text: Option<&str>) -> ElementId {
        let index = self.next_id;
        let id = ElementId(index);
        self.next_id += 1;
        self.elements.insert(
            id,
            ObservableElement {
                id,
                kind,
                revealed: false,
                shown: false,
                effect: None,
                transition_delay_ms: index.saturating_mul(TRANSITION_DELAY_STEP_MS),
                counter_text: counter_text.map(str::to_owned),
                counter: None,
            },
        );
        id
    }

    /// Drop an element removed from the page.
    pub fn forget(&mut self, id: ElementId) -> bool {
        self.elements.remove(&id).is_some()
    }

    /// Apply one notification batch.
    ///
    /// Returns the newly revealed elements with their stagger delays, in batch
    /// order. Already revealed, unknown and non-intersecting entries are skipped.
    pub fn observe_batch(&mut self, entries: &[IntersectionEntry]) -> Vec<StaggeredReveal> {
        if !self.observer_available {
            return Vec::new();
        }
        let mut reveals = Vec::new();
        for entry in entries.iter().filter(|e| e.intersecting) {
            let Some(element) = self.elements.get_mut(&entry.id) else {
                continue;
            };
            if element.revealed {
                continue;
            }
            element.revealed = true;
            #[allow(clippy::cast_precision_loss)]
            let delay_ms = reveals.len() as f64 * REVEAL_STAGGER_MS;
            reveals.push(StaggeredReveal { id: entry.id, delay_ms });
        }
        reveals
    }

    /// Apply the visual reveal once the stagger delay has elapsed.
    ///
    /// Returns the secondary effect that started, if any. A stat whose label is
    /// not numeric gets no counter.
    pub fn show(&mut self, id: ElementId) -> Option<SecondaryEffect> {
        let element = self.elements.get_mut(&id)?;
        if !element.revealed || element.shown {
            return None;
        }
        element.shown = true;
        let effect = element.kind.secondary_effect()?;
        if effect == SecondaryEffect::Counter {
            let counter = element.counter_text.as_deref().and_then(CounterAnimation::new)?;
            element.counter = Some(counter);
        }
        element.effect = Some(effect);
        Some(effect)
    }

    /// Advance a running counter by one frame.
    ///
    /// `None` when the element or its counter is gone; the caller stops.
    pub fn step_counter(&mut self, id: ElementId) -> Option<CounterPhase> {
        let counter = self.elements.get_mut(&id)?.counter.as_mut()?;
        Some(counter.step())
    }

    pub fn element(&self, id: ElementId) -> Option<&ObservableElement> {
        self.elements.get(&id)
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.revealed)
    }

    pub fn is_shown(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.shown)
    }

    pub fn has_effect(&self, id: ElementId, effect: SecondaryEffect) -> bool {
        self.elements.get(&id).is_some_and(|e| e.effect == Some(effect))
    }

    pub fn elements(&self) -> impl Iterator<Item = &ObservableElement> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
