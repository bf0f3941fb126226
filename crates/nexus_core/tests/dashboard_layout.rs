use nexus_core::{
    accept_drop, begin_drag, load, persist, DragSession, KeyValueStore, LayoutService,
    MemoryStore, Preferences, Region, ViewFlags,
};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn dragging_analytics_onto_feed_moves_it_first() {
    let order = ids(&["for-you-feed", "company-announcements", "analytics"]);
    let payload = begin_drag("analytics", "card").to_transfer_string();

    let result = accept_drop(&payload, "for-you-feed", &order);

    assert_eq!(
        result,
        ids(&["analytics", "for-you-feed", "company-announcements"])
    );
}

#[test]
fn sidebar_with_corrupt_storage_loads_default() {
    let store = MemoryStore::new();
    store
        .set("dashboard-sidebar-card-order", "not-json")
        .unwrap();
    let default = ids(&["time-off", "quick-links", "team-calendar"]);

    assert_eq!(load(&store, "dashboard-sidebar-card-order", &default), default);
}

#[test]
fn persisted_order_is_what_the_next_launch_sees() {
    let store = MemoryStore::new();
    let order = ids(&["team-calendar", "quick-links", "time-off"]);
    persist(&store, Region::Sidebar.storage_key(), &order).unwrap();

    let service = LayoutService::new(&store);
    assert_eq!(service.order(Region::Sidebar), order.as_slice());
    assert_eq!(service.order(Region::Main), Region::Main.default_order());
}

#[test]
fn drag_session_feeds_the_service() {
    let store = MemoryStore::new();
    let mut service = LayoutService::new(&store);
    let mut session = DragSession::new();

    let transfer = session.start("kudos-feed", nexus_core::CARD_DRAG_KIND);
    assert!(session.is_lifted("kudos-feed"));
    let order = service
        .handle_drop(Region::Main, &transfer, "analytics")
        .unwrap()
        .to_vec();
    session.end();

    assert!(!session.is_dragging());
    assert_eq!(
        order,
        ids(&[
            "for-you-feed",
            "company-announcements",
            "kudos-feed",
            "analytics",
            "resources",
            "projects",
            "employee-directory",
        ])
    );

    let reloaded = LayoutService::new(&store);
    assert_eq!(reloaded.order(Region::Main), order.as_slice());
}

#[test]
fn regions_are_independent() {
    let store = MemoryStore::new();
    let mut service = LayoutService::new(&store);

    let cross = begin_drag("time-off", "card").to_transfer_string();
    let main = service
        .handle_drop(Region::Main, &cross, "analytics")
        .unwrap()
        .to_vec();
    assert_eq!(main, Region::Main.default_order());
    assert_eq!(store.get(Region::Main.storage_key()).unwrap(), None);
}

#[test]
fn onboarding_controls_the_welcome_checklist() {
    let store = MemoryStore::new();
    let service = LayoutService::new(&store);
    let prefs = Preferences::new(&store);

    let flags = ViewFlags::from_preferences(&prefs).unwrap();
    assert_eq!(
        service.visible_widgets(Region::Sidebar, flags),
        ids(&["welcome-checklist", "time-off", "quick-links", "team-calendar"])
    );

    prefs.set_onboarded().unwrap();
    let flags = ViewFlags::from_preferences(&prefs).unwrap();
    assert_eq!(
        service.visible_widgets(Region::Sidebar, flags),
        Region::Sidebar.default_order()
    );

    prefs.set_focus_mode(true).unwrap();
    let flags = ViewFlags::from_preferences(&prefs).unwrap();
    assert!(service.visible_widgets(Region::Sidebar, flags).is_empty());
}
