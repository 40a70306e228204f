use log::warn;
use serde::{Deserialize, Serialize};

/// Persisted layout of the demo-selector settings panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelState {
    pub open: bool,
    pub pinned: bool,
    pub collapsed: bool,
}

impl PanelState {
    /// Restore from a stored blob. Missing or unreadable blobs give the
    /// default layout.
    pub fn restore(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!("ignoring stored panel state: {e}");
            Self::default()
        })
    }

    pub fn to_json(self) -> String {
        // Three booleans always serialize.
        serde_json::to_string(&self).unwrap_or_else(|_| String::from("{}"))
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_pinned(&mut self) {
        self.pinned = !self.pinned;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}
