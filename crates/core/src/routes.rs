use demo_state_protocol::Selection;

use crate::url_sync::query_for;

/// `/demos/{client}/{page}`.
pub fn demo_path(client_id: &str, page: &str) -> String {
    format!("/demos/{client_id}/{page}")
}

/// Conventional page for a role/client/scenario triple.
///
/// Dashboards live at the role root (`/` for merchants); every other
/// scenario is a client demo page.
pub fn scenario_path(role: &str, client_id: &str, scenario: &str) -> String {
    match scenario {
        "dashboard" | "default" if role == "merchant" => "/".to_owned(),
        "dashboard" | "default" => format!("/{role}"),
        _ => demo_path(client_id, scenario),
    }
}

/// `path` with the full five-parameter query for `selection` appended.
pub fn href(path: &str, selection: &Selection) -> String {
    format!("{path}?{}", query_for(selection))
}

#[cfg(test)]
mod tests {
    use demo_state_protocol::{ThemeMode, Version};

    use super::*;

    #[test]
    fn dashboards_map_to_role_root() {
        assert_eq!(scenario_path("merchant", "cvs", "dashboard"), "/");
        assert_eq!(scenario_path("admin", "generic", "default"), "/admin");
    }

    #[test]
    fn other_scenarios_are_demo_pages() {
        assert_eq!(
            scenario_path("support", "cvs", "token-management"),
            "/demos/cvs/token-management"
        );
    }

    #[test]
    fn href_appends_query() {
        let sel = Selection::new("admin", "generic", "default", ThemeMode::Dark, Version::Future);
        assert_eq!(
            href("/admin", &sel),
            "/admin?role=admin&client=generic&scenario=default&theme=dark&version=future"
        );
    }
}
