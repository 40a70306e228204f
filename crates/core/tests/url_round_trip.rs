use demo_state_core::url_sync::{QueryParams, query_for};
use demo_state_core::{DemoConfig, DemoSession, Location, MemoryLocation};
use demo_state_protocol::{Selection, SelectionPatch, ThemeMode, Version};
use proptest::prelude::*;

fn theme_mode() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
}

fn version() -> impl Strategy<Value = Version> {
    prop_oneof![
        Just(Version::Current),
        Just(Version::Upcoming),
        Just(Version::Future),
        Just(Version::Experimental),
    ]
}

fn selection() -> impl Strategy<Value = Selection> {
    // Includes characters that need percent-encoding.
    let text = "[a-zA-Z0-9 &=+%#?/-]{1,16}";
    (text, text, text, theme_mode(), version())
        .prop_map(|(role, client, scenario, theme, version)| {
            Selection::new(role, client, scenario, theme, version)
        })
}

#[test]
fn query_uses_canonical_parameter_order() {
    let selection = Selection::new(
        "merchant",
        "cvs",
        "offers",
        ThemeMode::Dark,
        Version::Future,
    );
    assert_eq!(
        query_for(&selection),
        "role=merchant&client=cvs&scenario=offers&theme=dark&version=future"
    );
}

proptest! {
    #[test]
    fn prop_written_url_reads_back_identically(target in selection()) {
        prop_assume!(target != DemoConfig::default().default_selection);
        let mut writer = DemoSession::new(MemoryLocation::default());
        writer.update(SelectionPatch::from(&target));
        prop_assert_eq!(writer.selection(), &target);

        let query = writer.location().query();
        prop_assert!(QueryParams::parse(&query).matches(&target));

        let reader = DemoSession::new(MemoryLocation::new("/", query));
        prop_assert_eq!(reader.selection(), &target);
        prop_assert_eq!(reader.location().replacements(), 0);
    }

    #[test]
    fn prop_reloading_own_url_is_a_no_op(target in selection()) {
        let mut session = DemoSession::new(MemoryLocation::default());
        session.update(SelectionPatch::from(&target));
        let href = session.location().href();
        let replacements = session.location().replacements();

        session.location_mut().navigate(&href);
        prop_assert!(session.navigated().is_none());
        prop_assert_eq!(session.location().replacements(), replacements);
    }
}
