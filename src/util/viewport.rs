//! Window scroll geometry and section layout reads.

use crate::state::nav::{ScrollMetrics, Section, SectionBounds};

/// Current scroll position and page size.
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let document_height = window.document()?.document_element()?.scroll_height();
        Some(ScrollMetrics {
            scroll_y: window.scroll_y().unwrap_or(0.0),
            viewport_height: window.inner_height().ok()?.as_f64()?,
            document_height: f64::from(document_height),
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Document offset of a rendered section.
pub fn section_top(section: Section) -> Option<f64> {
    section_element_bounds(section).map(|b| b.top)
}

/// Bounds of every rendered section, in page order.
pub fn section_bounds() -> Vec<SectionBounds> {
    Section::ALL.into_iter().filter_map(section_element_bounds).collect()
}

fn section_element_bounds(section: Section) -> Option<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?
            .document()?
            .get_element_by_id(section.id())?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(SectionBounds {
            section,
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = section;
        None
    }
}

/// Whether a keydown target is a text entry control.
#[cfg(feature = "csr")]
pub fn is_text_field(target: Option<web_sys::EventTarget>) -> bool {
    use wasm_bindgen::JsCast;

    let Some(element) = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        || element.get_attribute("contenteditable").is_some_and(|v| v != "false")
}

/// Current window scroll offset.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Whether the window `load` event has already fired.
pub fn document_loaded() -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| js_sys::Reflect::get(&d, &JsValue::from_str("readyState")).ok())
            .and_then(|state| state.as_string())
            .is_some_and(|state| state == "complete")
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Add or remove a class on `<body>`.
pub fn toggle_body_class(class: &str, on: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        if let Err(err) = body.class_list().toggle_with_force(class, on) {
            log::warn!("body class {class} not updated: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (class, on);
    }
}
