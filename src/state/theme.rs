//! Light/dark theme preference.
//!
//! The stored value lives under a single `localStorage` key. When nothing is
//! stored the page follows the system color scheme, and keeps following it
//! as the OS setting changes, until the user picks a theme explicitly.
//!
//! TRADE-OFFS
//! ==========
//! A failed storage write keeps the choice for the current session only. The
//! choice is still pinned in memory so a later system change cannot undo a
//! click the user just made.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::util::host::KeyValueStore;

/// `localStorage` key holding the theme name.
pub const STORAGE_KEY: &str = "theme";

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle: the moon offers dark mode, the sun offers light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme name other than `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Result of an explicit theme change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub theme: Theme,
    /// `false` when the storage write failed and the value is session-only.
    pub persisted: bool,
}

/// Owner of the durable `theme` preference.
#[derive(Clone, Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    current: Theme,
    system: Option<Theme>,
    pinned: bool,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Load the stored preference, falling back to `system` (the host's
    /// reported color scheme) and then to light.
    pub fn new(storage: S, system: Option<Theme>) -> Self {
        let stored = read_stored(&storage);
        let current = stored.or(system).unwrap_or_default();
        Self { storage, current, system, pinned: stored.is_some() }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Whether an explicit choice overrides the system color scheme.
    pub fn is_explicit(&self) -> bool {
        self.pinned
    }

    /// Make `theme` the explicit choice and persist it.
    pub fn set(&mut self, theme: Theme) -> ThemeChange {
        self.current = theme;
        self.pinned = true;
        let persisted = match self.storage.set(STORAGE_KEY, theme.as_str()) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("theme preference not persisted: {err}");
                false
            }
        };
        ThemeChange { theme, persisted }
    }

    /// [`set`](Self::set) from an untrusted theme name.
    pub fn set_str(&mut self, raw: &str) -> Result<ThemeChange, ThemeParseError> {
        let theme = raw.parse::<Theme>()?;
        Ok(self.set(theme))
    }

    pub fn toggle(&mut self) -> ThemeChange {
        self.set(self.current.opposite())
    }

    /// Record an OS-level color scheme change.
    ///
    /// Returns the adopted theme, or `None` when an explicit choice wins.
    pub fn on_system_change(&mut self, theme: Theme) -> Option<Theme> {
        self.system = Some(theme);
        if self.pinned {
            return None;
        }
        self.current = theme;
        Some(theme)
    }

    /// Forget the explicit choice and follow the system scheme again.
    pub fn clear(&mut self) -> Theme {
        if let Err(err) = self.storage.remove(STORAGE_KEY) {
            log::warn!("theme preference not cleared from storage: {err}");
        }
        self.pinned = false;
        self.current = self.system.unwrap_or_default();
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn read_stored<S: KeyValueStore>(storage: &S) -> Option<Theme> {
    match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("ignoring stored theme: {err}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            log::debug!("theme storage unreadable: {err}");
            None
        }
    }
}
