use demo_state_protocol::{Selection, ThemeMode, Version};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("default selection field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("recent capacity {0} exceeds the maximum of {max}", max = MAX_RECENT_CAPACITY)]
    Capacity(usize),
}

/// Upper bound accepted for `recentCapacity`.
pub const MAX_RECENT_CAPACITY: usize = 100;

/// Session-wide settings. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoConfig {
    /// Selection used at startup, before any URL is read.
    pub default_selection: Selection,
    pub default_client_name: String,
    /// Maximum number of entries kept in the recent-history list.
    pub recent_capacity: usize,
    /// Local-storage key of the persisted settings panel state.
    pub panel_storage_key: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            default_selection: Selection::new(
                "merchant",
                "deacons-pizza",
                "dashboard",
                ThemeMode::Light,
                Version::Current,
            ),
            default_client_name: "Deacon's Pizza".to_owned(),
            recent_capacity: 5,
            panel_storage_key: "demo-selector-panel".to_owned(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.default_selection;
        for (name, value) in [
            ("role", &s.role),
            ("clientId", &s.client_id),
            ("scenario", &s.scenario),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        if self.recent_capacity > MAX_RECENT_CAPACITY {
            return Err(ConfigError::Capacity(self.recent_capacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = DemoConfig::from_json("{}").ok();
        assert_eq!(config, Some(DemoConfig::default()));
    }

    #[test]
    fn overrides_capacity_only() {
        let config = DemoConfig::from_json(r#"{"recentCapacity": 3}"#).ok();
        assert_eq!(config.map(|c| (c.recent_capacity, c.default_selection.role)), Some((3, "merchant".to_owned())));
    }

    #[test]
    fn overrides_default_selection() {
        let json = r#"{
            "defaultSelection": {
                "role": "admin",
                "clientId": "generic",
                "scenario": "default",
                "themeMode": "dark",
                "version": "future"
            },
            "defaultClientName": "Generic Business"
        }"#;
        let config = DemoConfig::from_json(json).unwrap_or_default();
        assert_eq!(config.default_selection.role, "admin");
        assert_eq!(config.default_selection.theme_mode, ThemeMode::Dark);
        assert_eq!(config.default_selection.version, Version::Future);
    }

    #[test]
    fn rejects_bad_enum_and_empty_fields() {
        let bad_theme = r#"{"defaultSelection":{"role":"a","clientId":"b","scenario":"c","themeMode":"neon","version":"current"}}"#;
        assert!(matches!(DemoConfig::from_json(bad_theme), Err(ConfigError::Json(_))));

        let empty_role = r#"{"defaultSelection":{"role":"","clientId":"b","scenario":"c","themeMode":"light","version":"current"}}"#;
        assert!(matches!(
            DemoConfig::from_json(empty_role),
            Err(ConfigError::EmptyField("role"))
        ));
    }

    #[test]
    fn rejects_oversized_capacity() {
        assert!(matches!(
            DemoConfig::from_json(r#"{"recentCapacity": 1000000}"#),
            Err(ConfigError::Capacity(1_000_000))
        ));
        // Too large for a 32-bit usize: a parse error there, a bound error here.
        let huge = r#"{"recentCapacity": 18446744073709551615}"#;
        assert!(matches!(
            DemoConfig::from_json(huge),
            Err(ConfigError::Capacity(_) | ConfigError::Json(_))
        ));
        let limit = format!(r#"{{"recentCapacity": {MAX_RECENT_CAPACITY}}}"#);
        assert!(DemoConfig::from_json(&limit).is_ok());
    }
}
