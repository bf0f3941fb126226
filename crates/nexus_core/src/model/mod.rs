//! Dashboard domain model.
//!
//! # Responsibility
//! - Widget identities, kinds and layout regions.
//! - Read-only record kinds consumed by global search.

pub mod record;
pub mod widget;
