//! Read-only intranet records addressed by global search.
//!
//! # Responsibility
//! - Define the record kinds the search index scans.
//! - Project each kind to searchable text, display strings and a route.
//!
//! # Invariants
//! - Records are never mutated by core; collections are borrowed.
//! - Missing optional fields contribute an empty string to searchable text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ANNOUNCEMENT_SUBTITLE_MAX_CHARS: usize = 100;

/// Kind tag of a searchable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    #[serde(rename = "employee")]
    Person,
    Announcement,
    Kudo,
    #[serde(rename = "event")]
    CalendarEntry,
    #[serde(rename = "feed")]
    FeedItem,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "employee",
            Self::Announcement => "announcement",
            Self::Kudo => "kudo",
            Self::CalendarEntry => "event",
            Self::FeedItem => "feed",
        }
    }

    /// Route of the page that lists records of this kind.
    pub fn route(self) -> &'static str {
        match self {
            Self::Person => "/employees",
            Self::Announcement => "/announcements",
            Self::Kudo => "/kudos",
            Self::CalendarEntry => "/calendar",
            Self::FeedItem => "/for-you",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "employee" => Some(Self::Person),
            "announcement" => Some(Self::Announcement),
            "kudo" => Some(Self::Kudo),
            "event" => Some(Self::CalendarEntry),
            "feed" => Some(Self::FeedItem),
            _ => None,
        }
    }
}

/// Where a caller should navigate to show one record highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
    pub route: &'static str,
    pub params: BTreeMap<String, String>,
}

impl NavigationTarget {
    pub fn highlight(kind: RecordKind, id: &str) -> Self {
        let mut params = BTreeMap::new();
        params.insert("highlight".to_string(), id.to_string());
        Self {
            route: kind.route(),
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Recognition post ("kudo") from one colleague to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kudo {
    pub id: String,
    pub from: String,
    pub to: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEntryType {
    Event,
    Birthday,
    Anniversary,
}

impl CalendarEntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Birthday => "Birthday",
            Self::Anniversary => "Anniversary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    /// Display date supplied by the data layer, e.g. `2026-10-21`.
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: CalendarEntryType,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// Every collection global search scans, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordCollections {
    pub people: Vec<Person>,
    pub announcements: Vec<Announcement>,
    pub kudos: Vec<Kudo>,
    pub calendar: Vec<CalendarEntry>,
    pub feed: Vec<FeedItem>,
}

/// Borrowed reference to one record of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef<'a> {
    Person(&'a Person),
    Announcement(&'a Announcement),
    Kudo(&'a Kudo),
    CalendarEntry(&'a CalendarEntry),
    FeedItem(&'a FeedItem),
}

impl RecordRef<'_> {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Person(_) => RecordKind::Person,
            Self::Announcement(_) => RecordKind::Announcement,
            Self::Kudo(_) => RecordKind::Kudo,
            Self::CalendarEntry(_) => RecordKind::CalendarEntry,
            Self::FeedItem(_) => RecordKind::FeedItem,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Person(record) => record.id(),
            Self::Announcement(record) => record.id(),
            Self::Kudo(record) => record.id(),
            Self::CalendarEntry(record) => record.id(),
            Self::FeedItem(record) => record.id(),
        }
    }
}

/// Projection every searchable record kind provides.
pub trait Searchable {
    const KIND: RecordKind;

    fn id(&self) -> &str;
    /// Concatenated text the relevance score is computed against.
    fn searchable_text(&self) -> String;
    fn display_title(&self) -> String;
    fn display_subtitle(&self) -> String;
    fn as_record(&self) -> RecordRef<'_>;

    fn navigation_target(&self) -> NavigationTarget {
        NavigationTarget::highlight(Self::KIND, self.id())
    }
}

impl Searchable for Person {
    const KIND: RecordKind = RecordKind::Person;

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.role,
            self.department,
            self.email.as_deref().unwrap_or_default()
        )
    }

    fn display_title(&self) -> String {
        self.name.clone()
    }

    fn display_subtitle(&self) -> String {
        format!("{} • {}", self.role, self.department)
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Person(self)
    }
}

impl Searchable for Announcement {
    const KIND: RecordKind = RecordKind::Announcement;

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn display_subtitle(&self) -> String {
        truncate_chars(&self.body, ANNOUNCEMENT_SUBTITLE_MAX_CHARS)
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Announcement(self)
    }
}

impl Searchable for Kudo {
    const KIND: RecordKind = RecordKind::Kudo;

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        format!("{} {} {}", self.from, self.to, self.message)
    }

    fn display_title(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }

    fn display_subtitle(&self) -> String {
        self.message.clone()
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::Kudo(self)
    }
}

impl Searchable for CalendarEntry {
    const KIND: RecordKind = RecordKind::CalendarEntry;

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or_default(),
            self.entry_type.as_str()
        )
    }

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn display_subtitle(&self) -> String {
        format!("{} • {}", self.entry_type.label(), self.date)
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::CalendarEntry(self)
    }
}

impl Searchable for FeedItem {
    const KIND: RecordKind = RecordKind::FeedItem;

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.author.as_deref().unwrap_or_default()
        )
    }

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn display_subtitle(&self) -> String {
        self.description.clone()
    }

    fn as_record(&self) -> RecordRef<'_> {
        RecordRef::FeedItem(self)
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated = value.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}
