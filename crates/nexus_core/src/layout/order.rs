//! Drop handling for ordered widget lists.
//!
//! # Invariants
//! - A drop either repositions exactly one id or returns the input unchanged.
//! - Ids other than the dragged one keep their pairwise relative order.
//! - No id is ever duplicated or lost.

use super::drag::DragPayload;
use log::debug;

/// Applies a serialized drop onto `target_id` and returns the resulting order.
///
/// Returns `current_order` unchanged when the payload is unreadable, when the
/// dragged id equals `target_id`, or when either id is absent.
pub fn accept_drop(payload_raw: &str, target_id: &str, current_order: &[String]) -> Vec<String> {
    match DragPayload::parse(payload_raw) {
        Some(payload) => reposition(current_order, &payload.id, target_id),
        None => current_order.to_vec(),
    }
}

/// Like [`accept_drop`], but also ignores payloads whose type tag is not
/// `expected_kind`.
pub fn accept_drop_of_kind(
    payload_raw: &str,
    target_id: &str,
    current_order: &[String],
    expected_kind: &str,
) -> Vec<String> {
    match DragPayload::parse(payload_raw) {
        Some(payload) if payload.kind == expected_kind => {
            reposition(current_order, &payload.id, target_id)
        }
        Some(payload) => {
            debug!(
                "event=drop module=layout status=ignored reason=kind_mismatch expected={} actual={}",
                expected_kind, payload.kind
            );
            current_order.to_vec()
        }
        None => current_order.to_vec(),
    }
}

/// Moves `dragged_id` to the index `target_id` occupies in `order`.
///
/// The target index is taken before removal, so dragging forward lands the
/// item after the target and dragging backward lands it before.
pub fn reposition(order: &[String], dragged_id: &str, target_id: &str) -> Vec<String> {
    if dragged_id == target_id {
        return order.to_vec();
    }

    let dragged_index = order.iter().position(|id| id == dragged_id);
    let target_index = order.iter().position(|id| id == target_id);
    let (Some(dragged_index), Some(target_index)) = (dragged_index, target_index) else {
        debug!("event=drop module=layout status=ignored reason=unknown_id");
        return order.to_vec();
    };

    let mut reordered = order.to_vec();
    let moved = reordered.remove(dragged_index);
    reordered.insert(target_index, moved);
    reordered
}

/// Whether `order` contains no duplicate identifiers.
pub fn is_unique(order: &[String]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(order.len());
    order.iter().all(|id| seen.insert(id.as_str()))
}
