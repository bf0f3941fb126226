//! Typed accessors for dashboard preference flags.
//!
//! # Responsibility
//! - Own the storage keys and value encodings of user preferences.
//! - Degrade unreadable values to defaults instead of failing reads.
//!
//! # Invariants
//! - Boolean flags are stored as the literal strings `true` / `false`.
//! - A missing or different `app-version` clears the whole store once.

use super::{KeyValueStore, StorageResult};
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const APP_VERSION_KEY: &str = "app-version";
pub const ONBOARDED_KEY: &str = "nexus-onboarded";
pub const FOCUS_MODE_KEY: &str = "nexus-focus-mode";
pub const QUICK_LINKS_KEY: &str = "nexus-quick-links";

/// User-curated shortcut shown in the quick links card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Preference view over any [`KeyValueStore`].
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Gates stored state on the running app version.
    ///
    /// Returns `true` when the stored version equals `current_version`.
    /// Otherwise clears every key, records `current_version` and returns
    /// `false`.
    pub fn check_app_version(&self, current_version: &str) -> StorageResult<bool> {
        let stored = self.store.get(APP_VERSION_KEY)?;
        if stored.as_deref() == Some(current_version) {
            return Ok(true);
        }

        self.store.clear()?;
        self.store.set(APP_VERSION_KEY, current_version)?;
        info!(
            "event=app_version_changed module=storage status=ok previous={} current={}",
            stored.as_deref().unwrap_or("none"),
            current_version
        );
        Ok(false)
    }

    pub fn is_onboarded(&self) -> StorageResult<bool> {
        self.read_flag(ONBOARDED_KEY)
    }

    pub fn set_onboarded(&self) -> StorageResult<()> {
        self.store.set(ONBOARDED_KEY, "true")
    }

    pub fn focus_mode(&self) -> StorageResult<bool> {
        self.read_flag(FOCUS_MODE_KEY)
    }

    pub fn set_focus_mode(&self, enabled: bool) -> StorageResult<()> {
        self.store
            .set(FOCUS_MODE_KEY, if enabled { "true" } else { "false" })
    }

    /// Flips focus mode and returns the new value.
    pub fn toggle_focus_mode(&self) -> StorageResult<bool> {
        let enabled = !self.focus_mode()?;
        self.set_focus_mode(enabled)?;
        Ok(enabled)
    }

    /// Saved quick links; empty when absent or unreadable.
    pub fn quick_links(&self) -> StorageResult<Vec<QuickLink>> {
        let Some(raw) = self.store.get(QUICK_LINKS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<QuickLink>>(&raw) {
            Ok(links) => Ok(links),
            Err(err) => {
                warn!(
                    "event=prefs_load module=storage status=fallback key={} error={}",
                    QUICK_LINKS_KEY, err
                );
                Ok(Vec::new())
            }
        }
    }

    pub fn set_quick_links(&self, links: &[QuickLink]) -> StorageResult<()> {
        let encoded = serde_json::to_string(links)?;
        self.store.set(QUICK_LINKS_KEY, &encoded)
    }

    fn read_flag(&self, key: &str) -> StorageResult<bool> {
        Ok(self.store.get(key)?.as_deref() == Some("true"))
    }
}
