//! Global search across intranet records.
//!
//! # Responsibility
//! - Score free-text queries against each record's searchable text.
//! - Merge every record kind into one ranked, capped hit list.
//!
//! Search is pure and synchronous; it cannot fail, only return nothing.

pub mod index;
pub mod score;

pub use index::{quick_actions, QuickAction, SearchHit, SearchIndex, DEFAULT_SEARCH_LIMIT};
pub use score::relevance;
