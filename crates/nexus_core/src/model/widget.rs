//! Dashboard widget identities, kinds and regions.
//!
//! # Responsibility
//! - Map opaque widget identifiers to a closed set of widget kinds.
//! - Declare each region's storage key and default order.
//!
//! # Invariants
//! - Identifier to kind resolution is a table lookup; unknown ids resolve to
//!   `None` and are skipped by renderers.
//! - Default orders contain no duplicates and only ids allowed in the region.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Drag type tag carried by card payloads.
pub const CARD_DRAG_KIND: &str = "card";

/// Named dashboard layout area holding an independently ordered widget list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Main,
    Sidebar,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Main, Region::Sidebar];

    /// Durable storage key holding this region's JSON-encoded order.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Main => "dashboard-main-card-order",
            Self::Sidebar => "dashboard-sidebar-card-order",
        }
    }

    pub fn default_order(self) -> &'static [&'static str] {
        match self {
            Self::Main => &[
                "for-you-feed",
                "company-announcements",
                "analytics",
                "resources",
                "projects",
                "employee-directory",
                "kudos-feed",
            ],
            Self::Sidebar => &["time-off", "quick-links", "team-calendar"],
        }
    }

    /// Owned copy of [`Region::default_order`].
    pub fn default_order_owned(self) -> Vec<String> {
        self.default_order()
            .iter()
            .map(|id| (*id).to_string())
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Sidebar => "sidebar",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "main" => Some(Self::Main),
            "sidebar" => Some(Self::Sidebar),
            _ => None,
        }
    }
}

/// Closed set of dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    ForYouFeed,
    CompanyAnnouncements,
    Analytics,
    Resources,
    Projects,
    EmployeeDirectory,
    KudosFeed,
    TimeOff,
    QuickLinks,
    TeamCalendar,
    WelcomeChecklist,
}

impl WidgetKind {
    /// Stable identifier used in stored orders and drag payloads.
    pub fn id(self) -> &'static str {
        match self {
            Self::ForYouFeed => "for-you-feed",
            Self::CompanyAnnouncements => "company-announcements",
            Self::Analytics => "analytics",
            Self::Resources => "resources",
            Self::Projects => "projects",
            Self::EmployeeDirectory => "employee-directory",
            Self::KudosFeed => "kudos-feed",
            Self::TimeOff => "time-off",
            Self::QuickLinks => "quick-links",
            Self::TeamCalendar => "team-calendar",
            Self::WelcomeChecklist => "welcome-checklist",
        }
    }
}

/// Registry entry describing where one widget kind may render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub kind: WidgetKind,
    pub regions: &'static [Region],
}

const MAIN_ONLY: &[Region] = &[Region::Main];
const SIDEBAR_ONLY: &[Region] = &[Region::Sidebar];
const BOTH: &[Region] = &[Region::Main, Region::Sidebar];

const BUILTIN_WIDGETS: &[WidgetDescriptor] = &[
    WidgetDescriptor { kind: WidgetKind::ForYouFeed, regions: MAIN_ONLY },
    WidgetDescriptor { kind: WidgetKind::CompanyAnnouncements, regions: MAIN_ONLY },
    WidgetDescriptor { kind: WidgetKind::Analytics, regions: MAIN_ONLY },
    WidgetDescriptor { kind: WidgetKind::Resources, regions: MAIN_ONLY },
    WidgetDescriptor { kind: WidgetKind::Projects, regions: BOTH },
    WidgetDescriptor { kind: WidgetKind::EmployeeDirectory, regions: BOTH },
    WidgetDescriptor { kind: WidgetKind::KudosFeed, regions: MAIN_ONLY },
    WidgetDescriptor { kind: WidgetKind::TimeOff, regions: SIDEBAR_ONLY },
    WidgetDescriptor { kind: WidgetKind::QuickLinks, regions: SIDEBAR_ONLY },
    WidgetDescriptor { kind: WidgetKind::TeamCalendar, regions: SIDEBAR_ONLY },
    WidgetDescriptor { kind: WidgetKind::WelcomeChecklist, regions: SIDEBAR_ONLY },
];

/// Lookup table from widget identifier to descriptor.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    by_id: BTreeMap<&'static str, WidgetDescriptor>,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WidgetRegistry {
    /// Registry of every built-in dashboard card.
    pub fn builtin() -> Self {
        let by_id = BUILTIN_WIDGETS
            .iter()
            .map(|descriptor| (descriptor.kind.id(), descriptor.clone()))
            .collect();
        Self { by_id }
    }

    pub fn resolve(&self, id: &str) -> Option<WidgetKind> {
        self.by_id.get(id).map(|descriptor| descriptor.kind)
    }

    /// Whether `id` names a known widget that may render in `region`.
    pub fn renders_in(&self, id: &str, region: Region) -> bool {
        self.by_id
            .get(id)
            .is_some_and(|descriptor| descriptor.regions.contains(&region))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Region, WidgetKind, WidgetRegistry};
    use std::collections::BTreeSet;

    #[test]
    fn default_orders_are_unique_and_renderable() {
        let registry = WidgetRegistry::builtin();
        for region in Region::ALL {
            let order = region.default_order();
            let unique: BTreeSet<_> = order.iter().collect();
            assert_eq!(unique.len(), order.len(), "{region:?} has duplicates");
            for id in order {
                assert!(registry.renders_in(id, region), "{id} not allowed in {region:?}");
            }
        }
    }

    #[test]
    fn registry_resolves_known_ids_only() {
        let registry = WidgetRegistry::builtin();
        assert_eq!(registry.len(), 11);
        assert_eq!(registry.resolve("kudos-feed"), Some(WidgetKind::KudosFeed));
        assert_eq!(registry.resolve("weather"), None);
        assert!(registry.renders_in("projects", Region::Sidebar));
        assert!(!registry.renders_in("time-off", Region::Main));
    }

    #[test]
    fn region_names_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::parse(region.as_str()), Some(region));
        }
        assert_eq!(Region::parse("footer"), None);
    }
}
