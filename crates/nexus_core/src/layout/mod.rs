//! Reorder-and-persist controller for dashboard regions.
//!
//! # Responsibility
//! - Build and parse drag payloads.
//! - Reposition one widget id onto another as a pure function.
//! - Persist and reload region orders through a [`crate::storage::KeyValueStore`].
//!
//! Nothing here surfaces drop or load failures to callers; both degrade to
//! the unchanged or default order.

pub mod drag;
pub mod order;
pub mod persist;

pub use drag::{begin_drag, DragPayload, DragSession};
pub use order::{accept_drop, accept_drop_of_kind, reposition};
pub use persist::{load, persist};
