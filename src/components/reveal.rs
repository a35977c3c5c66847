//! Scroll-reveal bindings shared by section components.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

use crate::app::PageSignal;
use crate::state::reveal::{ElementId, ElementKind, ObservableElement, SecondaryEffect};

/// Register a reveal target. Render the id with [`reveal_attr`].
///
/// `None` once the page has been disposed; the element then renders untagged.
pub fn use_reveal(kind: ElementKind, counter_text: Option<&str>) -> Option<ElementId> {
    let page = expect_context::<PageSignal>();
    page.try_update_untracked(|p| p.register_reveal(kind, counter_text))
}

/// `data-reveal-id` value; untagged elements are never observed.
pub fn reveal_attr(id: Option<ElementId>) -> Option<String> {
    id.map(|id| id.0.to_string())
}

/// Class list for a reveal target with base classes `base`.
pub fn reveal_class(base: &str, element: Option<&ObservableElement>) -> String {
    let mut class = format!("{base} scroll-reveal");
    let Some(element) = element else {
        return class;
    };
    if element.shown {
        class.push_str(" revealed");
    }
    match element.effect {
        Some(SecondaryEffect::Animate) => class.push_str(" animate"),
        Some(SecondaryEffect::ScaleIn) => class.push_str(" scale-in"),
        Some(SecondaryEffect::Counter) | None => {}
    }
    class
}

/// Inline style staggering the CSS transition by registration order.
pub fn reveal_style(element: Option<&ObservableElement>) -> String {
    let delay_ms = element.map_or(0, |e| e.transition_delay_ms);
    format!("transition-delay: {delay_ms}ms")
}

/// Reactive class for `id`.
pub fn class_for(page: PageSignal, id: Option<ElementId>, base: &'static str) -> impl Fn() -> String + Copy {
    move || page.with(|p| reveal_class(base, id.and_then(|id| p.reveal.element(id))))
}

/// Transition delay style for `id`, fixed at registration.
pub fn style_for(page: PageSignal, id: Option<ElementId>) -> String {
    page.with_untracked(|p| reveal_style(id.and_then(|id| p.reveal.element(id))))
}
