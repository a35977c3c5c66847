//! Copy text to the system clipboard.
//!
//! The async clipboard API is tried first when the page runs in a secure
//! context. Anything else falls back to selecting a hidden textarea and running
//! the legacy `copy` command.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::util::host::HostError;

/// How a copy attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written through the async clipboard API.
    Copied,
    /// Written through the selection fallback.
    CopiedWithFallback,
    Failed,
}

impl CopyOutcome {
    pub fn is_copied(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Combine the async attempt with the fallback, which only runs if the async
/// attempt failed.
pub fn resolve_copy(
    primary: Result<(), HostError>,
    fallback: impl FnOnce() -> Result<(), HostError>,
) -> CopyOutcome {
    let Err(primary_err) = primary else {
        return CopyOutcome::Copied;
    };
    log::debug!("async clipboard: {primary_err}; trying selection copy");
    match fallback() {
        Ok(()) => CopyOutcome::CopiedWithFallback,
        Err(err) => {
            log::warn!("copy failed: {err}");
            CopyOutcome::Failed
        }
    }
}

/// Copy `text`, reporting which path (if any) succeeded.
pub async fn copy_text(text: &str) -> CopyOutcome {
    #[cfg(feature = "csr")]
    {
        let primary = write_async_clipboard(text).await;
        resolve_copy(primary, || copy_with_selection(text))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        resolve_copy(Err(HostError::unavailable("clipboard")), || {
            Err(HostError::unavailable("document"))
        })
    }
}

#[cfg(feature = "csr")]
async fn write_async_clipboard(text: &str) -> Result<(), HostError> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or(HostError::unavailable("window"))?;
    if !window.is_secure_context() {
        return Err(HostError::unavailable("clipboard"));
    }
    // Older engines have no `navigator.clipboard`; probe before casting.
    let raw = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|err| HostError::from_js("clipboard", &err))?;
    if raw.is_undefined() || raw.is_null() {
        return Err(HostError::unavailable("clipboard"));
    }
    let clipboard: web_sys::Clipboard = raw
        .dyn_into()
        .map_err(|value| HostError::from_js("clipboard", &value))?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| HostError::from_js("clipboard", &err))
}

#[cfg(feature = "csr")]
fn copy_with_selection(text: &str) -> Result<(), HostError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(HostError::unavailable("document"))?;
    let body = document.body().ok_or(HostError::unavailable("document body"))?;
    let textarea: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|err| HostError::from_js("textarea", &err))?
        .dyn_into()
        .map_err(|el| HostError::from_js("textarea", &el))?;
    textarea.set_value(text);
    let style = textarea.style();
    for (prop, value) in [("position", "fixed"), ("top", "0"), ("left", "0"), ("opacity", "0")] {
        style
            .set_property(prop, value)
            .map_err(|err| HostError::from_js("textarea", &err))?;
    }
    body.append_child(&textarea)
        .map_err(|err| HostError::from_js("document body", &err))?;
    if let Err(err) = textarea.focus() {
        log::debug!("copy textarea focus: {err:?}");
    }
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .ok_or(HostError::unavailable("execCommand"))
        .and_then(|doc| doc.exec_command("copy").map_err(|err| HostError::from_js("execCommand", &err)));

    if let Err(err) = body.remove_child(&textarea) {
        log::debug!("copy textarea cleanup: {err:?}");
    }
    if copied? {
        Ok(())
    } else {
        Err(HostError::Failed { capability: "execCommand", message: "copy rejected".to_owned() })
    }
}
