//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate pure layout functions and storage into dashboard use cases.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod layout_service;
