use std::sync::Mutex;

use demo_state_core::catalog::{self, CatalogEntry};
use demo_state_core::{
    ConfigError, DemoConfig, DemoSession, Instance, Location, MemoryLocation,
};
use demo_state_protocol::{Selection, SelectionPatch, ThemeColors, UserProfile};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

static SESSIONS: Mutex<Vec<DemoSession<MemoryLocation>>> = Mutex::new(Vec::new());

#[derive(Debug, Error)]
enum BridgeError {
    #[error("invalid session handle: {0}")]
    Handle(usize),
    #[error("session table is poisoned")]
    Poisoned,
    #[error("unknown catalog entry: {0}")]
    Entry(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a JavaScript view needs to render one session.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    selection: &'a Selection,
    client_name: &'a str,
    theme: ThemeColors,
    user_profile: &'static UserProfile,
    href: String,
    query: String,
    recent: Vec<&'a Selection>,
    instances: &'a [Instance],
    current_index: Option<usize>,
}

impl<'a> Snapshot<'a> {
    fn of(session: &'a DemoSession<MemoryLocation>) -> Self {
        let store = session.store();
        Self {
            selection: store.selection(),
            client_name: store.client_name(),
            theme: store.theme(),
            user_profile: store.user_profile(),
            href: session.location().href(),
            query: session.location().query(),
            recent: session.recent().entries().collect(),
            instances: session.instances().instances(),
            current_index: session.instances().current_index(),
        }
    }
}

fn open(href: &str, config_json: Option<&str>) -> Result<usize, BridgeError> {
    let config = match config_json {
        Some(json) => DemoConfig::from_json(json)?,
        None => DemoConfig::default(),
    };
    let session = DemoSession::with_config(config, MemoryLocation::from_href(href));
    let mut sessions = SESSIONS.lock().map_err(|_| BridgeError::Poisoned)?;
    sessions.push(session);
    Ok(sessions.len() - 1)
}

fn with_session<T>(
    handle: usize,
    f: impl FnOnce(&mut DemoSession<MemoryLocation>) -> Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    let mut sessions = SESSIONS.lock().map_err(|_| BridgeError::Poisoned)?;
    let session = sessions
        .get_mut(handle)
        .ok_or(BridgeError::Handle(handle))?;
    f(session)
}

fn snapshot_json(session: &DemoSession<MemoryLocation>) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(&Snapshot::of(session))?)
}

fn find_entry(id: &str) -> Result<&'static CatalogEntry, BridgeError> {
    catalog::catalog()
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| BridgeError::Entry(id.to_owned()))
}

/// Open a session at `href` (path and query). Returns a handle for later calls.
#[wasm_bindgen]
pub fn open_session(href: &str, config_json: Option<String>) -> Result<usize, JsError> {
    Ok(open(href, config_json.as_deref())?)
}

/// Current state of a session as JSON.
#[wasm_bindgen]
pub fn snapshot(handle: usize) -> Result<String, JsError> {
    Ok(with_session(handle, |s| snapshot_json(s))?)
}

/// The host navigated (link, back/forward). Returns the new snapshot.
#[wasm_bindgen]
pub fn navigate(handle: usize, href: &str) -> Result<String, JsError> {
    Ok(with_session(handle, |s| {
        s.location_mut().navigate(href);
        s.navigated();
        snapshot_json(s)
    })?)
}

/// Apply a partial selection given as camelCase JSON.
#[wasm_bindgen]
pub fn update_selection(handle: usize, patch_json: &str) -> Result<String, JsError> {
    Ok(with_session(handle, |s| {
        let patch: SelectionPatch = serde_json::from_str(patch_json)?;
        s.update(patch);
        snapshot_json(s)
    })?)
}

#[wasm_bindgen]
pub fn reset_to_default(handle: usize) -> Result<String, JsError> {
    Ok(with_session(handle, |s| {
        s.reset_to_default();
        snapshot_json(s)
    })?)
}

/// Save the live selection. Returns the new index, or `undefined` when an
/// equal instance exists.
#[wasm_bindgen]
pub fn save_instance(handle: usize) -> Result<Option<usize>, JsError> {
    Ok(with_session(handle, |s| Ok(s.save_current_instance()))?)
}

#[wasm_bindgen]
pub fn go_to_instance(handle: usize, index: usize) -> Result<String, JsError> {
    Ok(with_session(handle, |s| {
        s.go_to_instance(index);
        snapshot_json(s)
    })?)
}

/// Catalog entries matching `query`, grouped by category, as JSON.
#[wasm_bindgen]
pub fn search_catalog(query: &str) -> Result<String, JsError> {
    let results = catalog::search(query);
    let groups = catalog::group_by_category(&results);
    serde_json::to_string(&groups).map_err(|e| JsError::new(&e.to_string()))
}

/// Apply a catalog preset by id. Returns the href the host should open.
#[wasm_bindgen]
pub fn select_entry(handle: usize, entry_id: &str) -> Result<String, JsError> {
    Ok(with_session(handle, |s| {
        let entry = find_entry(entry_id)?;
        Ok(s.select_entry(entry))
    })?)
}
