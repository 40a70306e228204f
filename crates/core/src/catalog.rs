//! Static catalog of named demo presets and the spotlight search over it.

use demo_state_protocol::SelectionPatch;
use serde::Serialize;

use crate::lookup::client_name;
use crate::routes::scenario_path;

/// A named, one-click demo preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub role: &'static str,
    pub client_id: &'static str,
    pub scenario: &'static str,
    pub category: &'static str,
    pub emoji: &'static str,
    pub tags: &'static [&'static str],
    /// Display name of the mock persona featured in this preset.
    pub profile_name: Option<&'static str>,
    /// Page to open instead of the conventional scenario path.
    pub path: Option<&'static str>,
}

impl CatalogEntry {
    /// Store update applied when this entry is picked.
    pub fn patch(&self) -> SelectionPatch {
        SelectionPatch::default()
            .role(self.role)
            .client_id(self.client_id)
            .client_name(client_name(self.client_id))
            .scenario(self.scenario)
    }

    /// Page to navigate to after picking this entry.
    pub fn target_path(&self) -> String {
        self.path.map_or_else(
            || scenario_path(self.role, self.client_id, self.scenario),
            str::to_owned,
        )
    }

    fn matches(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(self.title)
            || hit(self.description)
            || self.tags.iter().any(|t| hit(t))
            || self.profile_name.is_some_and(hit)
    }
}

static CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        id: "merchant-deacons-pizza-campaign-creation",
        title: "Deacon's Pizza - AI Campaign Creation",
        description: "Create a restaurant campaign with AI assistance",
        role: "merchant",
        client_id: "deacons-pizza",
        scenario: "campaign-creation",
        category: "Small Business Owner",
        emoji: "🍕",
        tags: &["merchant", "restaurant", "campaign", "ai assistant", "marketing"],
        profile_name: Some("Marco Deacon"),
        path: None,
    },
    CatalogEntry {
        id: "support-generic-support-flow",
        title: "Support - Token Management",
        description: "Assist customers with offer token issues",
        role: "support",
        client_id: "generic",
        scenario: "support-flow",
        category: "Support Agent",
        emoji: "🎫",
        tags: &["support", "token", "customer service"],
        profile_name: Some("Alex Chen"),
        path: None,
    },
    CatalogEntry {
        id: "merchant-cvs-campaign-creation",
        title: "CVS - Multi-location Campaign",
        description: "Create campaigns across multiple locations",
        role: "merchant",
        client_id: "cvs",
        scenario: "campaign-creation",
        category: "National Chain",
        emoji: "💊",
        tags: &["merchant", "pharmacy", "chain", "multiple locations"],
        profile_name: Some("Jennifer Williams"),
        path: None,
    },
    CatalogEntry {
        id: "support-cvs-support-flow",
        title: "CVS - Support Dashboard",
        description: "Triage pharmacy loyalty tickets and token issues",
        role: "support",
        client_id: "cvs",
        scenario: "support-flow",
        category: "National Chain",
        emoji: "💊",
        tags: &["support", "pharmacy", "tickets", "dashboard"],
        profile_name: Some("Alex Chen"),
        path: Some("/demos/cvs-dashboard"),
    },
    CatalogEntry {
        id: "support-cvs-token-management",
        title: "CVS - Token Catalog",
        description: "Browse and reissue ExtraCare offer tokens",
        role: "support",
        client_id: "cvs",
        scenario: "token-management",
        category: "National Chain",
        emoji: "🎟️",
        tags: &["support", "token", "catalog", "pharmacy"],
        profile_name: Some("Sarah Johnson"),
        path: Some("/demos/cvs-token-catalog"),
    },
    CatalogEntry {
        id: "admin-generic-default",
        title: "Admin - Analytics Dashboard",
        description: "Overview of system-wide performance metrics",
        role: "admin",
        client_id: "generic",
        scenario: "default",
        category: "Platform Administration",
        emoji: "📊",
        tags: &["admin", "analytics", "dashboard", "reporting"],
        profile_name: Some("David Garcia"),
        path: None,
    },
    CatalogEntry {
        id: "merchant-deacons-pizza-default",
        title: "Deacon's Pizza - Dashboard",
        description: "View merchant dashboard and performance",
        role: "merchant",
        client_id: "deacons-pizza",
        scenario: "default",
        category: "Small Business Owner",
        emoji: "🍕",
        tags: &["merchant", "restaurant", "dashboard", "analytics"],
        profile_name: Some("Marco Deacon"),
        path: None,
    },
];

/// Roles offered by presenter pickers.
pub const ROLES: [&str; 3] = ["merchant", "support", "admin"];

/// Scenarios offered by presenter pickers. The URL accepts any value.
pub const SCENARIOS: [&str; 5] = [
    "dashboard",
    "default",
    "campaign-creation",
    "support-flow",
    "token-management",
];

/// The option after `current`, wrapping around. Values not in `options`
/// restart at the first one.
pub fn next_option<'a>(options: &[&'a str], current: &str) -> Option<&'a str> {
    let next = options
        .iter()
        .position(|o| *o == current)
        .map_or(0, |i| (i + 1) % options.len());
    options.get(next).copied()
}

pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Case-insensitive substring search over title, description, tags and
/// persona name. A blank query returns the whole catalog in order.
pub fn search(query: &str) -> Vec<&'static CatalogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CATALOG.iter().collect();
    }
    CATALOG.iter().filter(|e| e.matches(&needle)).collect()
}

/// Group entries by category, keeping first-seen category order.
pub fn group_by_category<'a>(
    entries: &[&'a CatalogEntry],
) -> Vec<(&'static str, Vec<&'a CatalogEntry>)> {
    let mut groups: Vec<(&'static str, Vec<&'a CatalogEntry>)> = Vec::new();
    for &entry in entries {
        match groups.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, members)) => members.push(entry),
            None => groups.push((entry.category, vec![entry])),
        }
    }
    groups
}

/// Keyboard-driven search state: query text plus a highlighted result.
#[derive(Debug, Clone)]
pub struct Spotlight {
    query: String,
    results: Vec<&'static CatalogEntry>,
    selected: usize,
}

impl Spotlight {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: search(""),
            selected: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query, re-filter and move the highlight to the top.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = search(&self.query);
        self.selected = 0;
    }

    pub fn results(&self) -> &[&'static CatalogEntry] {
        &self.results
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected(&self) -> Option<&'static CatalogEntry> {
        self.results.get(self.selected).copied()
    }

    pub fn clear(&mut self) {
        self.set_query(String::new());
    }
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new()
    }
}
