//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose dashboard layout, preference, search and reveal helpers to Dart
//!   via FRB.
//! - Turn every failure into a message; the UI never needs to catch.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Layout calls always return a renderable order, even when storage fails.

use log::warn;
use nexus_core::db::open_db;
use nexus_core::{
    begin_drag, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, LayoutService, Preferences, QuickLink, RecordCollections, RecordKind,
    Region, RevealOptions, SearchHit, SearchIndex, SqliteKvStore, StorageResult, ViewFlags,
    CARD_DRAG_KIND,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;

const STORE_FILE_NAME: &str = "nexus_dashboard.sqlite3";
const STORE_PATH_ENV: &str = "NEXUS_STORE_PATH";
static STORE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the preference store file for this process.
///
/// Must run before the first layout call to take effect. Returns empty
/// string on success and an error message when a different path is already
/// in use.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_storage_path(path: String) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "storage path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = STORE_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!(
            "storage path already set to `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        )
    }
}

/// Order envelope returned by every layout call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOrderResponse {
    /// Whether the call completed without storage errors.
    pub ok: bool,
    pub region: String,
    /// Card ids to render, in order.
    pub order: Vec<String>,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

impl CardOrderResponse {
    fn success(region: Region, order: Vec<String>) -> Self {
        Self {
            ok: true,
            region: region.as_str().to_string(),
            order,
            message: String::new(),
        }
    }

    fn degraded(region: Region, order: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            region: region.as_str().to_string(),
            order,
            message: message.into(),
        }
    }

    fn unknown_region(region: &str) -> Self {
        Self {
            ok: false,
            region: region.to_string(),
            order: Vec::new(),
            message: format!("unknown region `{region}`; expected main|sidebar"),
        }
    }
}

/// Transfer string a card's drag handle puts on the drag channel.
#[flutter_rust_bridge::frb(sync)]
pub fn begin_card_drag(card_id: String) -> String {
    begin_drag(card_id.trim(), CARD_DRAG_KIND).to_transfer_string()
}

/// Loads the stored order of `region` (`main|sidebar`).
#[flutter_rust_bridge::frb(sync)]
pub fn load_card_order(region: String) -> CardOrderResponse {
    let (region, conn) = match open_layout_conn(&region) {
        Ok(opened) => opened,
        Err(response) => return response,
    };
    let store = match layout_store(&conn, region) {
        Ok(store) => store,
        Err(response) => return response,
    };
    let service = LayoutService::new(&store);
    CardOrderResponse::success(region, service.order(region).to_vec())
}

/// Applies a drop of `payload` onto `target_id` and persists the result.
#[flutter_rust_bridge::frb(sync)]
pub fn drop_card(region: String, payload: String, target_id: String) -> CardOrderResponse {
    let (region, conn) = match open_layout_conn(&region) {
        Ok(opened) => opened,
        Err(response) => return response,
    };
    let store = match layout_store(&conn, region) {
        Ok(store) => store,
        Err(response) => return response,
    };
    let mut service = LayoutService::new(&store);
    let dropped = service
        .handle_drop(region, &payload, target_id.trim())
        .map(<[String]>::to_vec);
    match dropped {
        Ok(order) => CardOrderResponse::success(region, order),
        Err(err) => CardOrderResponse::degraded(
            region,
            service.order(region).to_vec(),
            format!("drop_card not saved: {err}"),
        ),
    }
}

/// Restores the default order of `region`.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_card_order(region: String) -> CardOrderResponse {
    let (region, conn) = match open_layout_conn(&region) {
        Ok(opened) => opened,
        Err(response) => return response,
    };
    let store = match layout_store(&conn, region) {
        Ok(store) => store,
        Err(response) => return response,
    };
    let mut service = LayoutService::new(&store);
    match service.reset(region) {
        Ok(order) => CardOrderResponse::success(region, order.to_vec()),
        Err(err) => CardOrderResponse::degraded(
            region,
            region.default_order_owned(),
            format!("reset_card_order failed: {err}"),
        ),
    }
}

/// Card ids to render for `region`, honoring the stored focus mode and
/// onboarding flags.
#[flutter_rust_bridge::frb(sync)]
pub fn visible_cards(region: String) -> CardOrderResponse {
    let (region, conn) = match open_layout_conn(&region) {
        Ok(opened) => opened,
        Err(response) => return response,
    };
    let store = match layout_store(&conn, region) {
        Ok(store) => store,
        Err(response) => return response,
    };
    let service = LayoutService::new(&store);
    match ViewFlags::from_preferences(&Preferences::new(&store)) {
        Ok(flags) => CardOrderResponse::success(region, service.visible_widgets(region, flags)),
        Err(err) => CardOrderResponse::degraded(
            region,
            service.visible_widgets(region, ViewFlags::default()),
            format!("view flags unavailable: {err}"),
        ),
    }
}

/// Boolean preference envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagResponse {
    /// Whether the preference store was reachable.
    pub ok: bool,
    /// Flag value; `false` when `ok` is false.
    pub value: bool,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

impl FlagResponse {
    fn from_result(call: &str, result: Result<bool, String>) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                value,
                message: String::new(),
            },
            Err(err) => Self {
                ok: false,
                value: false,
                message: format!("{call} failed: {err}"),
            },
        }
    }
}

/// Gates stored state on the running app version; call once at startup.
///
/// `value` is `true` when the stored version matched. Otherwise every stored
/// preference and card order was cleared and `current_version` recorded.
#[flutter_rust_bridge::frb(sync)]
pub fn check_app_version(current_version: String) -> FlagResponse {
    let current_version = current_version.trim().to_string();
    if current_version.is_empty() {
        return FlagResponse::from_result(
            "check_app_version",
            Err("version cannot be empty".to_string()),
        );
    }
    FlagResponse::from_result(
        "check_app_version",
        with_preferences(|prefs| prefs.check_app_version(&current_version)),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn is_onboarded() -> FlagResponse {
    FlagResponse::from_result("is_onboarded", with_preferences(|prefs| prefs.is_onboarded()))
}

/// Records that the welcome checklist was completed or dismissed.
///
/// Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn mark_onboarded() -> String {
    match with_preferences(|prefs| prefs.set_onboarded()) {
        Ok(()) => String::new(),
        Err(err) => format!("mark_onboarded failed: {err}"),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn focus_mode() -> FlagResponse {
    FlagResponse::from_result("focus_mode", with_preferences(|prefs| prefs.focus_mode()))
}

/// Stores the focus mode flag. Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn set_focus_mode(enabled: bool) -> String {
    match with_preferences(|prefs| prefs.set_focus_mode(enabled)) {
        Ok(()) => String::new(),
        Err(err) => format!("set_focus_mode failed: {err}"),
    }
}

/// Flips focus mode; `value` is the new state.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_focus_mode() -> FlagResponse {
    FlagResponse::from_result(
        "toggle_focus_mode",
        with_preferences(|prefs| prefs.toggle_focus_mode()),
    )
}

/// One user-curated shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLinkItem {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLinksResponse {
    pub ok: bool,
    pub links: Vec<QuickLinkItem>,
    pub message: String,
}

/// Saved quick links; empty when none were stored.
#[flutter_rust_bridge::frb(sync)]
pub fn quick_links() -> QuickLinksResponse {
    match with_preferences(|prefs| prefs.quick_links()) {
        Ok(links) => QuickLinksResponse {
            ok: true,
            links: links.into_iter().map(to_quick_link_item).collect(),
            message: String::new(),
        },
        Err(err) => QuickLinksResponse {
            ok: false,
            links: Vec::new(),
            message: format!("quick_links failed: {err}"),
        },
    }
}

/// Replaces the saved quick links. Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn set_quick_links(links: Vec<QuickLinkItem>) -> String {
    if let Some(blank) = links
        .iter()
        .find(|link| link.id.trim().is_empty() || link.url.trim().is_empty())
    {
        return format!(
            "set_quick_links failed: link `{}` needs an id and a url",
            blank.name
        );
    }
    let links = links
        .into_iter()
        .map(|link| QuickLink {
            id: link.id,
            name: link.name,
            url: link.url,
        })
        .collect::<Vec<_>>();
    match with_preferences(|prefs| prefs.set_quick_links(&links)) {
        Ok(()) => String::new(),
        Err(err) => format!("set_quick_links failed: {err}"),
    }
}

/// One search hit flattened for Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchItem {
    pub id: String,
    /// `employee|announcement|kudo|event|feed`.
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub score: f64,
    /// Page route to open.
    pub route: String,
    /// Record id to highlight on that page.
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
    pub message: String,
}

/// Searches the JSON-encoded record collections handed over by the UI.
///
/// `kind` optionally restricts hits to one record kind.
#[flutter_rust_bridge::frb(sync)]
pub fn search_records(
    collections_json: String,
    query: String,
    kind: Option<String>,
) -> SearchResponse {
    let collections = match serde_json::from_str::<RecordCollections>(&collections_json) {
        Ok(collections) => collections,
        Err(err) => {
            return SearchResponse {
                items: Vec::new(),
                message: format!("search_records failed: invalid collections: {err}"),
            };
        }
    };

    let index = SearchIndex::new(&collections);
    let hits = match kind.as_deref().map(str::trim).filter(|kind| !kind.is_empty()) {
        None => index.search(&query),
        Some(raw) => match RecordKind::parse(raw) {
            Some(kind) => index.search_by_kind(&query, kind),
            None => {
                return SearchResponse {
                    items: Vec::new(),
                    message: format!("search_records failed: unknown kind `{raw}`"),
                };
            }
        },
    };

    let items = hits.iter().map(to_search_item).collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} result(s).", items.len())
    };
    SearchResponse { items, message }
}

/// Inline CSS transition declarations for list item `index`.
///
/// `None` options use the reveal defaults (50 ms stagger, 500 ms duration).
#[flutter_rust_bridge::frb(sync)]
pub fn reveal_item_style(
    index: u32,
    stagger_delay_ms: Option<u32>,
    duration_ms: Option<u32>,
) -> String {
    let defaults = RevealOptions::default();
    let options = RevealOptions {
        stagger_delay_ms: stagger_delay_ms.unwrap_or(defaults.stagger_delay_ms),
        duration_ms: duration_ms.unwrap_or(defaults.duration_ms),
        ..defaults
    };
    nexus_core::reveal::style_for_index(&options, index as usize).to_css()
}

fn resolve_store_path() -> PathBuf {
    STORE_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(STORE_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_FILE_NAME)
        })
        .clone()
}

fn open_store_conn() -> Result<Connection, String> {
    open_db(resolve_store_path()).map_err(|err| format!("store open failed: {err}"))
}

fn with_preferences<T>(
    f: impl FnOnce(&Preferences<SqliteKvStore<'_>>) -> StorageResult<T>,
) -> Result<T, String> {
    let conn = open_store_conn()?;
    let store =
        SqliteKvStore::try_new(&conn).map_err(|err| format!("store init failed: {err}"))?;
    let prefs = Preferences::new(store);
    f(&prefs).map_err(|err| err.to_string())
}

fn open_layout_conn(region: &str) -> Result<(Region, Connection), CardOrderResponse> {
    let Some(parsed) = Region::parse(region) else {
        return Err(CardOrderResponse::unknown_region(region));
    };

    match open_store_conn() {
        Ok(conn) => Ok((parsed, conn)),
        Err(err) => {
            warn!(
                "event=ffi_layout module=ffi status=fallback region={} error={}",
                parsed.as_str(),
                err
            );
            Err(CardOrderResponse::degraded(
                parsed,
                parsed.default_order_owned(),
                err,
            ))
        }
    }
}

fn layout_store(conn: &Connection, region: Region) -> Result<SqliteKvStore<'_>, CardOrderResponse> {
    SqliteKvStore::try_new(conn).map_err(|err| {
        CardOrderResponse::degraded(
            region,
            region.default_order_owned(),
            format!("store init failed: {err}"),
        )
    })
}

fn to_quick_link_item(link: QuickLink) -> QuickLinkItem {
    QuickLinkItem {
        id: link.id,
        name: link.name,
        url: link.url,
    }
}

fn to_search_item(hit: &SearchHit<'_>) -> SearchItem {
    SearchItem {
        id: hit.id().to_string(),
        kind: hit.kind.as_str().to_string(),
        title: hit.title.clone(),
        subtitle: hit.subtitle.clone(),
        score: hit.score,
        route: hit.target.route.to_string(),
        highlight: hit
            .target
            .params
            .get("highlight")
            .cloned()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        begin_card_drag, check_app_version, configure_storage_path, core_version, drop_card,
        focus_mode, init_logging, is_onboarded, load_card_order, mark_onboarded, ping,
        quick_links, reveal_item_style, search_records, set_focus_mode, set_quick_links,
        toggle_focus_mode, visible_cards, QuickLinkItem,
    };
    use std::collections::BTreeSet;
    use std::sync::OnceLock;
    use tempfile::TempDir;

    static STORE_DIR: OnceLock<TempDir> = OnceLock::new();

    /// Points the process-wide store at a private temp file.
    fn use_private_store() {
        let dir = STORE_DIR.get_or_init(|| tempfile::tempdir().unwrap());
        let path = dir.path().join("nexus_test.sqlite3");
        assert_eq!(configure_storage_path(path.to_string_lossy().into_owned()), "");
    }

    const COLLECTIONS: &str = r#"{
        "people": [
            {"id": "1", "name": "Priya Sharma", "role": "Frontend Developer", "department": "Engineering"}
        ],
        "kudos": [
            {"id": "1", "from": "David Chen", "to": "Priya Sharma", "message": "Amazing work!"}
        ]
    }"#;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn unknown_region_is_reported_not_panicked() {
        let response = load_card_order("footer".to_string());
        assert!(!response.ok);
        assert!(response.order.is_empty());
        assert!(response.message.contains("unknown region"));
    }

    #[test]
    fn drop_keeps_the_same_card_set() {
        use_private_store();
        let before = load_card_order("sidebar".to_string());
        let payload = begin_card_drag("team-calendar".to_string());
        let after = drop_card("sidebar".to_string(), payload, "time-off".to_string());

        assert!(after.ok, "{}", after.message);
        let before_set: BTreeSet<_> = before.order.into_iter().collect();
        let after_set: BTreeSet<_> = after.order.into_iter().collect();
        assert_eq!(before_set, after_set);
    }

    #[test]
    fn preferences_round_trip_and_shape_visible_cards() {
        use_private_store();

        let first = check_app_version("2.0.0".to_string());
        assert!(first.ok, "{}", first.message);
        assert!(check_app_version("2.0.0".to_string()).value);
        assert!(!check_app_version(" ".to_string()).ok);

        assert_eq!(set_focus_mode(false), "");
        assert!(!is_onboarded().value);
        assert_eq!(visible_cards("sidebar".to_string()).order[0], "welcome-checklist");

        assert_eq!(mark_onboarded(), "");
        assert!(is_onboarded().value);
        let sidebar = visible_cards("sidebar".to_string()).order;
        assert!(!sidebar.iter().any(|id| id == "welcome-checklist"));

        assert!(toggle_focus_mode().value);
        assert!(focus_mode().value);
        assert_eq!(
            visible_cards("main".to_string()).order,
            vec!["for-you-feed", "company-announcements"]
        );
        assert!(visible_cards("sidebar".to_string()).order.is_empty());
        assert_eq!(set_focus_mode(false), "");

        let links = vec![QuickLinkItem {
            id: "1".to_string(),
            name: "Company Wiki".to_string(),
            url: "https://wiki.company.com".to_string(),
        }];
        assert_eq!(set_quick_links(links.clone()), "");
        assert_eq!(quick_links().links, links);

        let blank = QuickLinkItem {
            id: String::new(),
            ..links[0].clone()
        };
        assert!(set_quick_links(vec![blank]).contains("needs an id"));
        assert_eq!(quick_links().links, links);
    }

    #[test]
    fn search_records_flattens_hits_and_filters_kind() {
        let response = search_records(COLLECTIONS.to_string(), "priya".to_string(), None);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].kind, "employee");
        assert_eq!(response.items[0].route, "/employees");
        assert_eq!(response.items[0].highlight, "1");
        assert_eq!(response.items[1].title, "David Chen → Priya Sharma");

        let kudos = search_records(
            COLLECTIONS.to_string(),
            "priya".to_string(),
            Some("kudo".to_string()),
        );
        assert_eq!(kudos.items.len(), 1);

        let bad_kind = search_records(
            COLLECTIONS.to_string(),
            "priya".to_string(),
            Some("wiki".to_string()),
        );
        assert!(bad_kind.message.contains("unknown kind"));

        let bad_json = search_records("{not json".to_string(), "priya".to_string(), None);
        assert!(bad_json.items.is_empty());
        assert!(bad_json.message.contains("invalid collections"));
    }

    #[test]
    fn reveal_item_style_uses_defaults() {
        let css = reveal_item_style(3, None, None);
        assert!(css.starts_with("transition-delay: 150ms; transition-duration: 500ms;"));
    }
}
