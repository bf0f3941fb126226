//! Dashboard layout use-case service.
//!
//! # Responsibility
//! - Hold the in-session order of every region.
//! - Apply drops and mirror accepted changes into durable storage.
//! - Project orders into the widget ids a view should render.
//!
//! # Invariants
//! - In-memory order is the source of truth within a session; storage is the
//!   source of truth across launches.
//! - Storage is written only after an order actually changes.
//! - A failed write never rolls back the in-memory order; it is reported to
//!   the caller after the order has been replaced.
//! - The welcome checklist heads the sidebar until onboarding completes and
//!   never appears in focus mode.

use crate::layout::order::accept_drop_of_kind;
use crate::layout::persist::{load, persist};
use crate::model::widget::{Region, WidgetKind, WidgetRegistry, CARD_DRAG_KIND};
use crate::storage::{KeyValueStore, Preferences, StorageResult};
use log::{error, info};
use std::collections::BTreeMap;

const FOCUS_MODE_MAIN: &[WidgetKind] = &[WidgetKind::ForYouFeed, WidgetKind::CompanyAnnouncements];

/// Preference flags that shape what a dashboard view renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFlags {
    pub focus_mode: bool,
    pub onboarded: bool,
}

impl ViewFlags {
    /// Reads both flags from stored preferences.
    pub fn from_preferences<S: KeyValueStore>(prefs: &Preferences<S>) -> StorageResult<Self> {
        Ok(Self {
            focus_mode: prefs.focus_mode()?,
            onboarded: prefs.is_onboarded()?,
        })
    }
}

/// Per-region order state backed by a [`KeyValueStore`].
pub struct LayoutService<S: KeyValueStore> {
    store: S,
    registry: WidgetRegistry,
    orders: BTreeMap<Region, Vec<String>>,
}

impl<S: KeyValueStore> LayoutService<S> {
    /// Loads every region from `store`, falling back to region defaults.
    pub fn new(store: S) -> Self {
        let orders = Region::ALL
            .iter()
            .map(|region| {
                let order = load(&store, region.storage_key(), &region.default_order_owned());
                (*region, order)
            })
            .collect();

        Self {
            store,
            registry: WidgetRegistry::builtin(),
            orders,
        }
    }

    /// Current order of `region`.
    pub fn order(&self, region: Region) -> &[String] {
        self.orders.get(&region).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Applies a drag payload dropped onto `target_id` in `region`.
    ///
    /// Returns the resulting order; unchanged when the drop is rejected.
    ///
    /// # Errors
    /// - The storage error of a failed write. The in-memory order has already
    ///   moved on and stays readable through [`LayoutService::order`].
    pub fn handle_drop(
        &mut self,
        region: Region,
        payload_raw: &str,
        target_id: &str,
    ) -> StorageResult<&[String]> {
        let current = self.order(region);
        let next = accept_drop_of_kind(payload_raw, target_id, current, CARD_DRAG_KIND);
        if next.as_slice() == current {
            return Ok(self.order(region));
        }

        let written = persist(&self.store, region.storage_key(), &next);
        self.orders.insert(region, next);
        if let Err(err) = written {
            error!(
                "event=order_persist module=layout status=error region={} error={}",
                region.as_str(),
                err
            );
            return Err(err);
        }
        Ok(self.order(region))
    }

    /// Restores the default order of `region` and persists it.
    pub fn reset(&mut self, region: Region) -> StorageResult<&[String]> {
        let defaults = region.default_order_owned();
        persist(&self.store, region.storage_key(), &defaults)?;
        self.orders.insert(region, defaults);
        info!(
            "event=order_reset module=layout status=ok region={}",
            region.as_str()
        );
        Ok(self.order(region))
    }

    /// Widget ids a view should render for `region`, in order.
    ///
    /// Focus mode collapses the main region to the feed and announcements
    /// and hides the sidebar. Before onboarding the sidebar opens with the
    /// welcome checklist. Ids the registry does not allow in the region are
    /// skipped.
    pub fn visible_widgets(&self, region: Region, flags: ViewFlags) -> Vec<String> {
        if flags.focus_mode {
            return match region {
                Region::Main => FOCUS_MODE_MAIN
                    .iter()
                    .map(|kind| kind.id().to_string())
                    .collect(),
                Region::Sidebar => Vec::new(),
            };
        }

        let welcome = WidgetKind::WelcomeChecklist.id();
        let show_welcome = region == Region::Sidebar && !flags.onboarded;
        let mut visible = Vec::new();
        if show_welcome {
            visible.push(welcome.to_string());
        }
        visible.extend(
            self.order(region)
                .iter()
                .filter(|id| self.registry.renders_in(id, region))
                .filter(|id| !(show_welcome && id.as_str() == welcome))
                .cloned(),
        );
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutService, ViewFlags};
    use crate::db::DbError;
    use crate::layout::drag::begin_drag;
    use crate::model::widget::Region;
    use crate::storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};

    const SETTLED: ViewFlags = ViewFlags {
        focus_mode: false,
        onboarded: true,
    };

    /// Store that reads like an empty store and rejects every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Db(DbError::Sqlite(
                rusqlite::Error::InvalidQuery,
            )))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }

        fn clear(&self) -> StorageResult<()> {
            Ok(())
        }
    }

    fn card(id: &str) -> String {
        begin_drag(id, "card").to_transfer_string()
    }

    #[test]
    fn starts_from_defaults_without_writing() {
        let store = MemoryStore::new();
        let service = LayoutService::new(&store);
        assert_eq!(service.order(Region::Sidebar), Region::Sidebar.default_order());
        assert!(store.is_empty());
    }

    #[test]
    fn accepted_drop_is_persisted_and_rejected_drop_is_not() {
        let store = MemoryStore::new();
        let mut service = LayoutService::new(&store);

        service
            .handle_drop(Region::Sidebar, "garbage", "time-off")
            .unwrap();
        assert!(store.is_empty());

        let order = service
            .handle_drop(Region::Sidebar, &card("team-calendar"), "time-off")
            .unwrap()
            .to_vec();
        assert_eq!(order, vec!["team-calendar", "time-off", "quick-links"]);
        assert_eq!(
            store
                .get(Region::Sidebar.storage_key())
                .unwrap()
                .as_deref(),
            Some(r#"["team-calendar","time-off","quick-links"]"#)
        );
    }

    #[test]
    fn foreign_drag_kind_is_ignored() {
        let store = MemoryStore::new();
        let mut service = LayoutService::new(&store);
        let foreign = begin_drag("analytics", "file").to_transfer_string();
        let order = service
            .handle_drop(Region::Main, &foreign, "for-you-feed")
            .unwrap()
            .to_vec();
        assert_eq!(order, Region::Main.default_order());
    }

    #[test]
    fn focus_mode_projects_fixed_main_and_empty_sidebar() {
        let store = MemoryStore::new();
        let service = LayoutService::new(&store);
        let focused = ViewFlags {
            focus_mode: true,
            onboarded: false,
        };
        assert_eq!(
            service.visible_widgets(Region::Main, focused),
            vec!["for-you-feed", "company-announcements"]
        );
        assert!(service.visible_widgets(Region::Sidebar, focused).is_empty());
        assert_eq!(
            service.visible_widgets(Region::Main, SETTLED),
            Region::Main.default_order()
        );
    }

    #[test]
    fn welcome_checklist_heads_sidebar_until_onboarded() {
        let store = MemoryStore::new();
        let service = LayoutService::new(&store);

        assert_eq!(
            service.visible_widgets(Region::Sidebar, ViewFlags::default()),
            vec!["welcome-checklist", "time-off", "quick-links", "team-calendar"]
        );
        assert_eq!(
            service.visible_widgets(Region::Main, ViewFlags::default()),
            Region::Main.default_order()
        );
        assert_eq!(
            service.visible_widgets(Region::Sidebar, SETTLED),
            Region::Sidebar.default_order()
        );
    }

    #[test]
    fn stored_welcome_checklist_is_not_rendered_twice() {
        let store = MemoryStore::new();
        store
            .set(
                Region::Sidebar.storage_key(),
                r#"["time-off","welcome-checklist"]"#,
            )
            .unwrap();
        let service = LayoutService::new(&store);
        assert_eq!(
            service.visible_widgets(Region::Sidebar, ViewFlags::default()),
            vec!["welcome-checklist", "time-off"]
        );
    }

    #[test]
    fn failed_write_keeps_new_order_and_reports_error() {
        let mut service = LayoutService::new(ReadOnlyStore);

        let result = service.handle_drop(Region::Main, &card("analytics"), "for-you-feed");
        assert!(matches!(result, Err(StorageError::Db(_))));
        assert_eq!(
            service.order(Region::Main)[..3],
            ["analytics", "for-you-feed", "company-announcements"]
        );

        let rejected = service
            .handle_drop(Region::Main, "garbage", "for-you-feed")
            .unwrap()
            .to_vec();
        assert_eq!(rejected[0], "analytics");
    }

    #[test]
    fn unknown_stored_ids_are_kept_but_not_rendered() {
        let store = MemoryStore::new();
        store
            .set(
                Region::Sidebar.storage_key(),
                r#"["weather","quick-links","analytics"]"#,
            )
            .unwrap();
        let service = LayoutService::new(&store);
        assert_eq!(service.order(Region::Sidebar).len(), 3);
        assert_eq!(
            service.visible_widgets(Region::Sidebar, SETTLED),
            vec!["quick-links"]
        );
    }

    #[test]
    fn reset_restores_and_persists_defaults() {
        let store = MemoryStore::new();
        let mut service = LayoutService::new(&store);
        service
            .handle_drop(Region::Main, &card("kudos-feed"), "for-you-feed")
            .unwrap();
        assert_eq!(service.order(Region::Main)[0], "kudos-feed");

        let order = service.reset(Region::Main).unwrap().to_vec();
        assert_eq!(order, Region::Main.default_order());
        assert!(store.get(Region::Main.storage_key()).unwrap().is_some());
    }
}
