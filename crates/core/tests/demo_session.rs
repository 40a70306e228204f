//! Integration test: drive a full session through user edits, URL
//! navigations and instance jumps, checking the URL and both histories.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use demo_state_core::{DemoSession, Location, MemoryLocation};
use demo_state_protocol::{Selection, SelectionPatch, ThemeMode, Version};

fn fresh_session() -> DemoSession<MemoryLocation> {
    DemoSession::new(MemoryLocation::new("/", ""))
}

fn count_changes(session: &mut DemoSession<MemoryLocation>) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    session.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    calls
}

#[test]
fn no_op_update_touches_nothing() {
    let mut session = fresh_session();
    session.update(SelectionPatch::default().scenario("offers"));
    let calls = count_changes(&mut session);
    let url_before = session.location().href();
    let replacements = session.location().replacements();
    let recent_before = session.recent().len();

    let same = SelectionPatch::from(session.selection());
    assert!(session.update(same).is_none());

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(session.location().href(), url_before);
    assert_eq!(session.location().replacements(), replacements);
    assert_eq!(session.recent().len(), recent_before);
}

#[test]
fn url_origin_change_is_not_written_back() {
    let mut session = fresh_session();
    let url = "/demos/cvs/tickets?role=support&client=cvs";
    session.location_mut().navigate(url);

    let change = session.navigated();
    assert!(change.is_some());
    assert_eq!(session.selection().role, "support");
    assert_eq!(session.selection().client_id, "cvs");

    // Partial URL stays exactly as navigated: no normalizing rewrite.
    assert_eq!(session.location().href(), url);
    assert_eq!(session.location().replacements(), 0);

    // The next user edit is written normally.
    session.update(SelectionPatch::default().version(Version::Upcoming));
    assert_eq!(session.location().replacements(), 1);
    assert_eq!(
        session.location().query(),
        "role=support&client=cvs&scenario=dashboard&theme=light&version=upcoming"
    );
}

#[test]
fn unsupported_theme_in_url_is_ignored() {
    let mut session = fresh_session();
    session.location_mut().navigate("/?theme=neon&version=nightly");
    assert!(session.navigated().is_none());
    assert_eq!(session.selection().theme_mode, ThemeMode::Light);
    assert_eq!(session.selection().version, Version::Current);
}

#[test]
fn saving_the_same_selection_twice_keeps_one_instance() {
    let mut session = fresh_session();
    assert_eq!(session.save_current_instance(), Some(0));
    assert_eq!(session.save_current_instance(), None);
    assert_eq!(session.instances().len(), 1);
}

#[test]
fn six_url_changes_leave_five_recent_entries() {
    let mut session = fresh_session();
    let scenarios = ["s1", "s2", "s3", "s4", "s5", "s6"];
    for scenario in scenarios {
        session
            .location_mut()
            .navigate(&format!("/?scenario={scenario}"));
        assert!(session.navigated().is_some());
    }

    let recent: Vec<_> = session
        .recent()
        .entries()
        .map(|s| s.scenario.as_str())
        .collect();
    assert_eq!(recent, ["s5", "s4", "s3", "s2", "s1"]);
}

#[test]
fn go_to_instance_restores_entry_and_pointer() {
    let mut session = fresh_session();
    let presets = [
        SelectionPatch::default().role("merchant").client_id("cvs"),
        SelectionPatch::default().role("support").scenario("support-flow"),
        SelectionPatch::default()
            .role("admin")
            .client_id("generic")
            .theme_mode(ThemeMode::Dark)
            .version(Version::Experimental),
    ];
    let mut saved: Vec<Selection> = Vec::new();
    for patch in presets {
        session.update(patch);
        session.save_current_instance();
        saved.push(session.selection().clone());
    }
    assert_eq!(session.instances().len(), 3);

    for (k, expected) in saved.iter().enumerate() {
        session.go_to_instance(k);
        assert_eq!(session.selection(), expected);
        assert_eq!(session.instances().current_index(), Some(k));
    }

    let before = session.selection().clone();
    let replacements = session.location().replacements();
    assert!(session.go_to_instance(saved.len()).is_none());
    assert_eq!(session.selection(), &before);
    assert_eq!(session.instances().current_index(), Some(saved.len() - 1));
    assert_eq!(session.location().replacements(), replacements);
}

#[test]
fn go_to_instance_restores_client_name() {
    let mut session = fresh_session();
    session.update(
        SelectionPatch::default()
            .client_id("seven-eleven")
            .client_name("7-Eleven (West)"),
    );
    session.save_current_instance();
    session.update(SelectionPatch::default().client_id("schwab"));
    assert_eq!(session.store().client_name(), "Charles Schwab");

    session.go_to_instance(0);
    assert_eq!(session.store().client_name(), "7-Eleven (West)");
    assert!(session.location().query().contains("client=seven-eleven"));
}

#[test]
fn support_flow_example() {
    let mut session = fresh_session();
    assert_eq!(
        session.selection(),
        &Selection::new(
            "merchant",
            "deacons-pizza",
            "dashboard",
            ThemeMode::Light,
            Version::Current
        )
    );

    session.update(
        SelectionPatch::default()
            .role("support")
            .scenario("support-flow"),
    );

    assert_eq!(
        session.selection(),
        &Selection::new(
            "support",
            "deacons-pizza",
            "support-flow",
            ThemeMode::Light,
            Version::Current
        )
    );
    assert!(session.location().href().contains(
        "role=support&client=deacons-pizza&scenario=support-flow&theme=light&version=current"
    ));
    assert_eq!(
        session.recent().latest().map(|s| s.role.as_str()),
        Some("merchant")
    );
}

#[test]
fn name_only_change_leaves_url_alone() {
    let query = "role=admin&client=generic&scenario=default&theme=dark&version=future";
    let mut session = DemoSession::new(MemoryLocation::new("/admin", query));
    assert_eq!(session.selection().role, "admin");

    session.update(SelectionPatch::default().client_name("Kigo Platform"));
    assert_eq!(session.location().replacements(), 0);
    assert_eq!(session.location().query(), query);
}
