use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected external value for one of the closed selection fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnknownValue {
    #[error("unknown theme mode: {0:?}")]
    ThemeMode(String),
    #[error("unknown version: {0:?}")]
    Version(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownValue::ThemeMode(other.to_owned())),
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature-maturity tag controlling which demo content is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    #[default]
    Current,
    Upcoming,
    Future,
    Experimental,
}

impl Version {
    pub const ALL: [Version; 4] = [
        Version::Current,
        Version::Upcoming,
        Version::Future,
        Version::Experimental,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Upcoming => "upcoming",
            Self::Future => "future",
            Self::Experimental => "experimental",
        }
    }

    /// The next tag in maturity order, wrapping back to `Current`.
    pub fn next(self) -> Self {
        match self {
            Self::Current => Self::Upcoming,
            Self::Upcoming => Self::Future,
            Self::Future => Self::Experimental,
            Self::Experimental => Self::Current,
        }
    }
}

impl FromStr for Version {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue::Version(s.to_owned()))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tuple that drives what the demo shows.
///
/// `role`, `client_id` and `scenario` are free-form: validating them is a
/// view concern. `theme_mode` and `version` are closed, so an unsupported
/// value can never be stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub role: String,
    pub client_id: String,
    pub scenario: String,
    pub theme_mode: ThemeMode,
    pub version: Version,
}

impl Selection {
    pub fn new(
        role: impl Into<String>,
        client_id: impl Into<String>,
        scenario: impl Into<String>,
        theme_mode: ThemeMode,
        version: Version,
    ) -> Self {
        Self {
            role: role.into(),
            client_id: client_id.into(),
            scenario: scenario.into(),
            theme_mode,
            version,
        }
    }

    /// Whether two selections point at the same demo view, ignoring the
    /// theme mode.
    pub fn same_view(&self, other: &Selection) -> bool {
        self.role == other.role
            && self.client_id == other.client_id
            && self.scenario == other.scenario
            && self.version == other.version
    }
}

/// A partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionPatch {
    pub role: Option<String>,
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub scenario: Option<String>,
    pub theme_mode: Option<ThemeMode>,
    pub version: Option<Version>,
}

impl SelectionPatch {
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }

    pub fn theme_mode(mut self, theme_mode: ThemeMode) -> Self {
        self.theme_mode = Some(theme_mode);
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.client_id.is_none()
            && self.client_name.is_none()
            && self.scenario.is_none()
            && self.theme_mode.is_none()
            && self.version.is_none()
    }
}

impl From<&Selection> for SelectionPatch {
    fn from(selection: &Selection) -> Self {
        Self {
            role: Some(selection.role.clone()),
            client_id: Some(selection.client_id.clone()),
            client_name: None,
            scenario: Some(selection.scenario.clone()),
            theme_mode: Some(selection.theme_mode),
            version: Some(selection.version),
        }
    }
}
