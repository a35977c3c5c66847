//! Intersection observation for scroll reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components register their reveal targets in page state and render the id
//! as a `data-reveal-id` attribute. Once the page is mounted, one observer
//! watches every tagged element and forwards each notification batch to
//! [`PageState::intersections`](crate::state::page::PageState::intersections).

use crate::app::PageSignal;
#[cfg(feature = "csr")]
use crate::util::host::HostError;

/// Start observing every element tagged with a reveal id.
///
/// A host without intersection observation leaves everything unrevealed.
pub fn observe_reveals(page: PageSignal) {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::*;

        if let Err(err) = start(page) {
            log::warn!("scroll reveal disabled: {err}");
            page.try_update(|p| p.observer_unavailable());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = page;
    }
}

#[cfg(feature = "csr")]
fn start(page: PageSignal) -> Result<(), HostError> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::state::reveal::{
        ElementId, IntersectionEntry, REVEAL_ID_ATTR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    };

    let window = web_sys::window().ok_or(HostError::unavailable("window"))?;
    let document = window.document().ok_or(HostError::unavailable("document"))?;
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        return Err(HostError::unavailable("IntersectionObserver"));
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: JsValue| {
        let batch: Vec<IntersectionEntry> = entries
            .iter()
            .filter_map(|value| {
                let entry = value.dyn_into::<web_sys::IntersectionObserverEntry>().ok()?;
                let id = entry.target().get_attribute(REVEAL_ID_ATTR)?.parse::<u32>().ok()?;
                Some(IntersectionEntry { id: ElementId(id), intersecting: entry.is_intersecting() })
            })
            .collect();
        crate::util::driver::apply(page, |p| p.intersections(&batch));
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| HostError::from_js("IntersectionObserver", &err))?;
    // The observer and its callback live as long as the page.
    callback.forget();

    let targets = document
        .query_selector_all(&format!("[{REVEAL_ID_ATTR}]"))
        .map_err(|err| HostError::from_js("querySelectorAll", &err))?;
    let mut observed = 0_u32;
    for index in 0..targets.length() {
        if let Some(element) = targets.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&element);
            observed += 1;
        }
    }
    log::debug!("observing {observed} reveal targets");
    Ok(())
}
