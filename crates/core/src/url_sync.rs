//! Loop-free reconciliation between the selection store and the URL.
//!
//! Inbound: URL → store, on load and on every navigation. Outbound:
//! store → URL, on every store change. A change that came from the URL is
//! tagged [`Transition::FromUrl`] and is never written back, so the two
//! directions cannot feed each other.

use demo_state_protocol::{Selection, SelectionPatch, ThemeMode, Version};
use log::debug;
use url::form_urlencoded;

use crate::location::{Location, LocationError};
use crate::store::{Change, SelectionStore, Transition};

pub const ROLE_PARAM: &str = "role";
pub const CLIENT_PARAM: &str = "client";
pub const SCENARIO_PARAM: &str = "scenario";
pub const THEME_PARAM: &str = "theme";
pub const VERSION_PARAM: &str = "version";

/// The five demo parameters as found in a query string.
///
/// Values are raw strings: `theme` and `version` are only validated when
/// staged into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub role: Option<String>,
    pub client: Option<String>,
    pub scenario: Option<String>,
    pub theme: Option<String>,
    pub version: Option<String>,
}

impl QueryParams {
    /// Parse a query string. The first occurrence of a key wins; empty
    /// values and unrelated keys are ignored. Never fails.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                ROLE_PARAM => &mut params.role,
                CLIENT_PARAM => &mut params.client,
                SCENARIO_PARAM => &mut params.scenario,
                THEME_PARAM => &mut params.theme,
                VERSION_PARAM => &mut params.version,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            role: Some(selection.role.clone()),
            client: Some(selection.client_id.clone()),
            scenario: Some(selection.scenario.clone()),
            theme: Some(selection.theme_mode.as_str().to_owned()),
            version: Some(selection.version.as_str().to_owned()),
        }
    }

    /// Whether all five parameters are present and equal to `selection`.
    pub fn matches(&self, selection: &Selection) -> bool {
        self.role.as_deref() == Some(selection.role.as_str())
            && self.client.as_deref() == Some(selection.client_id.as_str())
            && self.scenario.as_deref() == Some(selection.scenario.as_str())
            && self.theme.as_deref() == Some(selection.theme_mode.as_str())
            && self.version.as_deref() == Some(selection.version.as_str())
    }

    /// Encode the present parameters in canonical order.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in [
            (ROLE_PARAM, &self.role),
            (CLIENT_PARAM, &self.client),
            (SCENARIO_PARAM, &self.scenario),
            (THEME_PARAM, &self.theme),
            (VERSION_PARAM, &self.version),
        ] {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    /// Stage every parameter that is present, valid and different from
    /// `current` into a patch.
    pub fn stage(&self, current: &Selection) -> SelectionPatch {
        let differs = |value: &Option<String>, current: &str| {
            value.as_deref().filter(|v| *v != current).map(str::to_owned)
        };
        SelectionPatch {
            role: differs(&self.role, &current.role),
            client_id: differs(&self.client, &current.client_id),
            client_name: None,
            scenario: differs(&self.scenario, &current.scenario),
            theme_mode: self
                .theme
                .as_deref()
                .and_then(|v| v.parse::<ThemeMode>().ok())
                .filter(|mode| *mode != current.theme_mode),
            version: self
                .version
                .as_deref()
                .and_then(|v| v.parse::<Version>().ok())
                .filter(|version| *version != current.version),
        }
    }
}

/// Full five-parameter query string for a selection.
pub fn query_for(selection: &Selection) -> String {
    QueryParams::from_selection(selection).to_query_string()
}

/// Inbound direction: seed the store from the location's query string.
///
/// Returns the resulting change, tagged [`Transition::FromUrl`], or `None`
/// when nothing in the URL was both valid and different.
pub fn sync_from_url(store: &mut SelectionStore, location: &impl Location) -> Option<Change> {
    let params = QueryParams::parse(&location.query());
    let patch = params.stage(store.selection());
    if patch.is_empty() {
        return None;
    }
    debug!("staging {patch:?} from URL");
    store.update(patch, Transition::FromUrl)
}

/// What the outbound direction did with one change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// The change came from the URL; writing it back would loop.
    Suppressed,
    /// The URL already carries all five fields.
    InSync,
    /// The query string was replaced with this value.
    Rewritten { query: String },
}

/// Outbound direction: make the location reflect `change.current`.
///
/// Always writes all five parameters, replacing the query string in place.
/// Parameters unrelated to the demo state are dropped.
pub fn sync_to_url(change: &Change, location: &mut impl Location) -> Result<Outbound, LocationError> {
    if change.transition == Transition::FromUrl {
        debug!("skipping URL write for URL-originated change");
        return Ok(Outbound::Suppressed);
    }
    if QueryParams::parse(&location.query()).matches(&change.current) {
        return Ok(Outbound::InSync);
    }
    let query = query_for(&change.current);
    location.replace_query(&query)?;
    debug!("rewrote URL query to {query}");
    Ok(Outbound::Rewritten { query })
}
