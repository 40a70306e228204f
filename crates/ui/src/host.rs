//! Host integration: the address bar, page navigation and panel persistence.

use demo_state_core::{Location, MemoryLocation, PanelState};

/// A [`Location`] that can also open another page.
pub trait Host: Location {
    /// Leave for `href` (path and query), as a link click would.
    ///
    /// Returns `true` when the address bar already shows `href`, `false`
    /// when the page is being unloaded and the next page load picks it up.
    fn open(&mut self, href: &str) -> bool;

    fn load_panel(&self, key: &str) -> PanelState;

    fn save_panel(&mut self, key: &str, state: PanelState);
}

/// Native hosts keep everything in memory.
impl Host for MemoryLocation {
    fn open(&mut self, href: &str) -> bool {
        self.navigate(href);
        true
    }

    fn load_panel(&self, _key: &str) -> PanelState {
        PanelState::default()
    }

    fn save_panel(&mut self, _key: &str, _state: PanelState) {}
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocation;

#[cfg(target_arch = "wasm32")]
mod browser {
    use demo_state_core::{Location, LocationError, PanelState};
    use wasm_bindgen::JsValue;

    use super::Host;

    /// `window.location` plus `history.replaceState`.
    pub struct BrowserLocation {
        window: web_sys::Window,
    }

    impl BrowserLocation {
        pub fn new() -> Result<Self, LocationError> {
            web_sys::window()
                .map(|window| Self { window })
                .ok_or_else(|| LocationError::Unavailable("no window".into()))
        }

        fn storage(&self) -> Option<web_sys::Storage> {
            self.window.local_storage().ok().flatten()
        }
    }

    fn js_message(e: &JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{e:?}"))
    }

    impl Location for BrowserLocation {
        fn query(&self) -> String {
            self.window.location().search().unwrap_or_default()
        }

        fn replace_query(&mut self, query: &str) -> Result<(), LocationError> {
            let location = self.window.location();
            let mut url = location
                .pathname()
                .map_err(|e| LocationError::Unavailable(js_message(&e)))?;
            if !query.is_empty() {
                url.push('?');
                url.push_str(query);
            }
            url.push_str(&location.hash().unwrap_or_default());

            self.window
                .history()
                .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)))
                .map_err(|e| LocationError::Replace(js_message(&e)))
        }
    }

    impl Host for BrowserLocation {
        fn open(&mut self, href: &str) -> bool {
            if let Err(e) = self.window.location().set_href(href) {
                log::warn!("failed to open {href}: {}", js_message(&e));
            }
            // set_href only schedules the navigation.
            false
        }

        fn load_panel(&self, key: &str) -> PanelState {
            let raw = self.storage().and_then(|s| s.get_item(key).ok().flatten());
            PanelState::restore(raw.as_deref())
        }

        fn save_panel(&mut self, key: &str, state: PanelState) {
            let Some(storage) = self.storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, &state.to_json()) {
                log::warn!("failed to persist panel state: {}", js_message(&e));
            }
        }
    }
}
