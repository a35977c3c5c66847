//! Host capability seams: durable key-value storage and mail-compose hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page state never reaches for browser globals directly. It is handed a
//! [`KeyValueStore`] at construction and a [`MailLauncher`] per submission, so
//! native tests can substitute the in-memory implementations below.
//!
//! TRADE-OFFS
//! ==========
//! Browser implementations are best-effort: outside a `csr` build every call
//! reports [`HostError::Unavailable`] and callers degrade to "does nothing".

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Failure of a host capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The capability does not exist in this environment.
    #[error("{capability} is unavailable")]
    Unavailable { capability: &'static str },
    /// The capability exists but the call was rejected.
    #[error("{capability} failed: {message}")]
    Failed { capability: &'static str, message: String },
}

impl HostError {
    pub(crate) fn unavailable(capability: &'static str) -> Self {
        Self::Unavailable { capability }
    }

    #[cfg(feature = "csr")]
    pub(crate) fn from_js(capability: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Failed { capability, message: err.as_string().unwrap_or_else(|| format!("{err:?}")) }
    }
}

/// Durable string key-value storage surviving page reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;
    fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
    fn remove(&self, key: &str) -> Result<(), HostError>;
}

/// Hands a fully built `mailto:` URL to the user's email client.
pub trait MailLauncher {
    fn launch(&self, mailto_url: &str) -> Result<(), HostError>;
}

// =============================================================
// Browser implementations
// =============================================================

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, HostError> {
    let window = web_sys::window().ok_or(HostError::unavailable("window"))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(HostError::unavailable("localStorage")),
        Err(err) => Err(HostError::from_js("localStorage", &err)),
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| HostError::from_js("localStorage", &err))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(HostError::unavailable("localStorage"))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| HostError::from_js("localStorage", &err))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(HostError::unavailable("localStorage"))
        }
    }

    fn remove(&self, key: &str) -> Result<(), HostError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|err| HostError::from_js("localStorage", &err))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(HostError::unavailable("localStorage"))
        }
    }
}

/// Navigates `window.location` to the `mailto:` URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserMailer;

impl MailLauncher for BrowserMailer {
    fn launch(&self, mailto_url: &str) -> Result<(), HostError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window().ok_or(HostError::unavailable("window"))?;
            window
                .location()
                .set_href(mailto_url)
                .map_err(|err| HostError::from_js("location", &err))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = mailto_url;
            Err(HostError::unavailable("location"))
        }
    }
}

// =============================================================
// In-memory implementations
// =============================================================

/// In-memory store. Writes can be made to fail to exercise degraded paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose `set` and `remove` always fail, like a full or locked-down
    /// browser storage.
    pub fn read_only() -> Self {
        Self { reject_writes: true, ..Self::default() }
    }

    /// Raw stored value, bypassing the trait.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.reject_writes {
            return Err(HostError::Failed { capability: "memory store", message: "quota exceeded".to_owned() });
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), HostError> {
        if self.reject_writes {
            return Err(HostError::Failed { capability: "memory store", message: "read-only".to_owned() });
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), HostError> {
        (**self).remove(key)
    }
}

/// Records every launched URL instead of opening a mail client.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    launched: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mailer that rejects every launch.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.borrow().clone()
    }
}

impl MailLauncher for RecordingMailer {
    fn launch(&self, mailto_url: &str) -> Result<(), HostError> {
        if self.fail {
            return Err(HostError::Failed { capability: "mail launcher", message: "blocked".to_owned() });
        }
        self.launched.borrow_mut().push(mailto_url.to_owned());
        Ok(())
    }
}
