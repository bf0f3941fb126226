//! Flutter bridge surface over `nexus_core`.
//!
//! Only [`api`] is exposed to Dart; everything else stays in the core crate.

pub mod api;
