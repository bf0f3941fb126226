//! Staggered reveal scheduling for list containers.
//!
//! # Responsibility
//! - Flip a container to revealed the first time it intersects the viewport.
//! - Derive per-item transition delays and visibility classes.
//!
//! The host viewport facility is injected through [`ViewportObserver`]; no
//! polling happens here.

pub mod scheduler;
pub mod style;

pub use scheduler::{
    IntersectionEntry, RevealScheduler, RevealState, Subscription, ViewportObserver,
};
pub use style::{class_name, style_for_index, ItemStyle, RevealConfigError, RevealOptions};
