//! System color scheme and theme application on the document.
//!
//! Applies the active theme as a `data-theme` attribute on the `<html>`
//! element and the transient switch classes on `<body>`. Reads and watches
//! the `prefers-color-scheme` media query. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! All of this is best-effort browser-only behavior; native paths no-op so
//! page state can be exercised without a DOM.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use crate::state::page::ThemeEffects;
use crate::state::theme::Theme;

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Body class suppressing color transitions while a theme is swapped.
pub const SWITCHING_CLASS: &str = "theme-switching";
/// Body class running the theme cross-fade.
pub const TRANSITION_CLASS: &str = "theme-transition";

/// The host's preferred color scheme, if it reports one.
pub fn system_theme() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let query = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?;
        Some(Theme::from_prefers_dark(query.matches()))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("data-theme not applied: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Body classes to add and remove for the current effect flags.
pub fn body_classes(fx: ThemeEffects) -> [(&'static str, bool); 2] {
    [(SWITCHING_CLASS, fx.switching), (TRANSITION_CLASS, fx.transitioning)]
}

/// Sync the switch classes on `<body>`.
pub fn apply_effects(fx: ThemeEffects) {
    for (class, on) in body_classes(fx) {
        crate::util::viewport::toggle_body_class(class, on);
    }
}

/// Call `on_change` whenever the system color scheme flips.
///
/// Returns `false` when the host cannot report changes.
pub fn watch(on_change: impl Fn(Theme) + 'static) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            return false;
        };
        let listener = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change(Theme::from_prefers_dark(event.matches()));
        }) as Box<dyn FnMut(_)>);
        if let Err(err) = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            log::warn!("color scheme changes not observed: {err:?}");
            return false;
        }
        // Lives as long as the page.
        listener.forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
        false
    }
}
