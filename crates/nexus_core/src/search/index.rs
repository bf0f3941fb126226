//! Multi-collection search over borrowed intranet records.
//!
//! # Invariants
//! - Blank queries return no hits.
//! - Zero-score records are never returned.
//! - Hits are sorted by descending score; ties keep scan order (people,
//!   announcements, kudos, calendar, feed; collection order within each).
//! - At most `limit` hits are returned.

use super::score::{normalize, relevance_normalized};
use crate::model::record::{
    NavigationTarget, RecordCollections, RecordKind, RecordRef, Searchable,
};
use log::debug;
use std::time::Instant;

/// Default maximum number of hits per query.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// One ranked match.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub record: RecordRef<'a>,
    pub kind: RecordKind,
    /// Relevance in `0..=100`.
    pub score: f64,
    pub title: String,
    pub subtitle: String,
    pub target: NavigationTarget,
}

impl SearchHit<'_> {
    pub fn id(&self) -> &str {
        self.record.id()
    }
}

/// Shortcut offered when the query is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub kind: RecordKind,
}

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "Search employees",
        icon: "users",
        kind: RecordKind::Person,
    },
    QuickAction {
        label: "Search announcements",
        icon: "megaphone",
        kind: RecordKind::Announcement,
    },
    QuickAction {
        label: "Search calendar events",
        icon: "calendar",
        kind: RecordKind::CalendarEntry,
    },
    QuickAction {
        label: "Search kudos",
        icon: "heart",
        kind: RecordKind::Kudo,
    },
];

/// Quick actions shown in place of results for an empty query.
pub fn quick_actions() -> &'static [QuickAction] {
    QUICK_ACTIONS
}

/// Read-only search view over injected record collections.
#[derive(Debug, Clone, Copy)]
pub struct SearchIndex<'a> {
    collections: &'a RecordCollections,
    limit: usize,
}

impl<'a> SearchIndex<'a> {
    pub fn new(collections: &'a RecordCollections) -> Self {
        Self {
            collections,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Overrides the maximum number of hits.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Ranks every record of every kind against `query`.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'a>> {
        let query = normalize(query);
        if query.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        let started_at = Instant::now();
        let collections = self.collections;
        let mut hits = Vec::new();
        scan(&collections.people, &query, &mut hits);
        scan(&collections.announcements, &query, &mut hits);
        scan(&collections.kudos, &query, &mut hits);
        scan(&collections.calendar, &query, &mut hits);
        scan(&collections.feed, &query, &mut hits);

        let matched = hits.len();
        // `sort_by` is stable, so equal scores keep scan order.
        hits.sort_by(|left, right| right.score.total_cmp(&left.score));
        hits.truncate(self.limit);

        debug!(
            "event=search module=search status=ok query_chars={} matched={} returned={} duration_us={}",
            query.chars().count(),
            matched,
            hits.len(),
            started_at.elapsed().as_micros()
        );
        hits
    }

    /// Ranked hits of one kind.
    ///
    /// The kind filter applies after the global cap, so this returns the
    /// `kind` entries of [`SearchIndex::search`], not the top hits of `kind`.
    pub fn search_by_kind(&self, query: &str, kind: RecordKind) -> Vec<SearchHit<'a>> {
        self.search(query)
            .into_iter()
            .filter(|hit| hit.kind == kind)
            .collect()
    }
}

fn scan<'a, T: Searchable>(records: &'a [T], query: &str, hits: &mut Vec<SearchHit<'a>>) {
    for record in records {
        let text = normalize(&record.searchable_text());
        let score = relevance_normalized(query, &text);
        if score <= 0.0 {
            continue;
        }
        hits.push(SearchHit {
            record: record.as_record(),
            kind: T::KIND,
            score,
            title: record.display_title(),
            subtitle: record.display_subtitle(),
            target: record.navigation_target(),
        });
    }
}
