//! Durable region orders.
//!
//! # Invariants
//! - `load` never writes storage and never fails.
//! - Absent, unreadable, non-array or duplicate-containing values load as the
//!   caller's default.

use super::order::is_unique;
use crate::storage::{KeyValueStore, StorageResult};
use log::{debug, warn};

/// Writes `order` as a JSON string array under `region_key`.
pub fn persist<S: KeyValueStore + ?Sized>(
    store: &S,
    region_key: &str,
    order: &[String],
) -> StorageResult<()> {
    let encoded = serde_json::to_string(order)?;
    store.set(region_key, &encoded)?;
    debug!(
        "event=order_persist module=layout status=ok key={} len={}",
        region_key,
        order.len()
    );
    Ok(())
}

/// Reads the order stored under `region_key`, or `default_order`.
pub fn load<S: KeyValueStore + ?Sized>(
    store: &S,
    region_key: &str,
    default_order: &[String],
) -> Vec<String> {
    let raw = match store.get(region_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default_order.to_vec(),
        Err(err) => {
            warn!(
                "event=order_load module=layout status=fallback key={} reason=read_failed error={}",
                region_key, err
            );
            return default_order.to_vec();
        }
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(order) if is_unique(&order) => order,
        Ok(_) => {
            warn!(
                "event=order_load module=layout status=fallback key={} reason=duplicate_ids",
                region_key
            );
            default_order.to_vec()
        }
        Err(err) => {
            warn!(
                "event=order_load module=layout status=fallback key={} reason=malformed error={}",
                region_key, err
            );
            default_order.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load, persist};
    use crate::storage::{KeyValueStore, MemoryStore};

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn persist_then_load_round_trips() {
        let store = MemoryStore::new();
        let order = ids(&["kudos-feed", "analytics", "for-you-feed"]);
        persist(&store, "dashboard-main-card-order", &order).unwrap();
        assert_eq!(
            load(&store, "dashboard-main-card-order", &ids(&["x"])),
            order
        );
    }

    #[test]
    fn invalid_json_falls_back_without_overwriting() {
        let store = MemoryStore::new();
        store.set("dashboard-sidebar-card-order", "not-json").unwrap();
        let default = ids(&["time-off", "quick-links", "team-calendar"]);

        assert_eq!(load(&store, "dashboard-sidebar-card-order", &default), default);
        assert_eq!(
            store.get("dashboard-sidebar-card-order").unwrap().as_deref(),
            Some("not-json")
        );
    }

    #[test]
    fn wrong_shape_and_duplicates_fall_back() {
        let store = MemoryStore::new();
        let default = ids(&["a", "b"]);

        store.set("k", r#"{"order":["a"]}"#).unwrap();
        assert_eq!(load(&store, "k", &default), default);

        store.set("k", r#"["a",1]"#).unwrap();
        assert_eq!(load(&store, "k", &default), default);

        store.set("k", r#"["b","a","b"]"#).unwrap();
        assert_eq!(load(&store, "k", &default), default);
    }

    #[test]
    fn missing_key_returns_default_and_stays_missing() {
        let store = MemoryStore::new();
        let default = ids(&["a"]);
        assert_eq!(load(&store, "absent", &default), default);
        assert!(store.is_empty());
    }
}
