//! Core logic for the Nexus intranet dashboard.
//! This crate is the single source of truth for layout, search and reveal
//! invariants; view layers only render what it returns.

pub mod db;
pub mod layout;
pub mod logging;
pub mod model;
pub mod reveal;
pub mod search;
pub mod service;
pub mod storage;

pub use layout::{accept_drop, accept_drop_of_kind, begin_drag, load, persist, DragPayload, DragSession};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    Announcement, CalendarEntry, CalendarEntryType, FeedItem, Kudo, NavigationTarget, Person,
    RecordCollections, RecordKind, RecordRef, Searchable,
};
pub use model::widget::{Region, WidgetKind, WidgetRegistry, CARD_DRAG_KIND};
pub use reveal::{
    IntersectionEntry, ItemStyle, RevealOptions, RevealScheduler, RevealState, Subscription,
    ViewportObserver,
};
pub use search::{quick_actions, QuickAction, SearchHit, SearchIndex, DEFAULT_SEARCH_LIMIT};
pub use service::layout_service::{LayoutService, ViewFlags};
pub use storage::{
    KeyValueStore, MemoryStore, Preferences, QuickLink, SqliteKvStore, StorageError,
    StorageResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
