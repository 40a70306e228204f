use demo_state_protocol::{Selection, SelectionPatch};
use log::{debug, warn};

use crate::catalog::CatalogEntry;
use crate::config::DemoConfig;
use crate::instances::InstanceHistory;
use crate::location::Location;
use crate::recent::RecentHistory;
use crate::routes;
use crate::store::{Change, SelectionStore, SubscriptionId, Transition};
use crate::url_sync::{self, Outbound};

/// One presenter session: the store, both histories and the host URL.
///
/// Every mutation goes through here so that each store change is followed
/// by exactly one outbound URL pass.
pub struct DemoSession<L> {
    config: DemoConfig,
    store: SelectionStore,
    recent: RecentHistory,
    instances: InstanceHistory,
    location: L,
}

impl<L: Location> DemoSession<L> {
    pub fn new(location: L) -> Self {
        Self::with_config(DemoConfig::default(), location)
    }

    /// Start from the configured defaults, then seed from the URL.
    pub fn with_config(config: DemoConfig, location: L) -> Self {
        let mut session = Self {
            store: SelectionStore::from_config(&config),
            recent: RecentHistory::with_capacity(config.recent_capacity),
            instances: InstanceHistory::new(),
            location,
            config,
        };
        session.navigated();
        session
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        self.store.selection()
    }

    pub fn recent(&self) -> &RecentHistory {
        &self.recent
    }

    pub fn instances(&self) -> &InstanceHistory {
        &self.instances
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// For hosts that move the address bar themselves; follow up with
    /// [`DemoSession::navigated`].
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&Change) + Send + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// The location changed under us (load, link, back/forward): pull the
    /// demo parameters into the store.
    pub fn navigated(&mut self) -> Option<Change> {
        let change = url_sync::sync_from_url(&mut self.store, &self.location)?;
        self.publish(&change);
        Some(change)
    }

    /// Apply a user edit.
    pub fn update(&mut self, patch: SelectionPatch) -> Option<Change> {
        let change = self.store.update(patch, Transition::FromUser)?;
        self.publish(&change);
        Some(change)
    }

    pub fn reset_to_default(&mut self) -> Option<Change> {
        let patch = SelectionPatch::from(&self.config.default_selection)
            .client_name(self.config.default_client_name.clone());
        self.update(patch)
    }

    /// Bookmark the live selection. Returns the new entry's index, or
    /// `None` when an equal instance already exists.
    pub fn save_current_instance(&mut self) -> Option<usize> {
        self.instances
            .save(self.store.selection(), self.store.client_name())
    }

    /// Restore a saved instance. Out-of-range indices change nothing.
    pub fn go_to_instance(&mut self, index: usize) -> Option<Change> {
        let patch = self.instances.go_to(index)?.to_patch();
        self.update(patch)
    }

    /// Apply a catalog preset and return the href the host should open.
    pub fn select_entry(&mut self, entry: &CatalogEntry) -> String {
        self.update(entry.patch());
        routes::href(&entry.target_path(), self.store.selection())
    }

    fn publish(&mut self, change: &Change) {
        match url_sync::sync_to_url(change, &mut self.location) {
            // The URL moved either way; remember where we came from.
            Ok(Outbound::Rewritten { .. } | Outbound::Suppressed) => {
                if change.selection_changed() {
                    self.recent.record(&change.previous);
                }
            }
            Ok(Outbound::InSync) => debug!("URL already reflects selection"),
            Err(e) => warn!("URL left unchanged: {e}"),
        }
    }
}

impl<L: std::fmt::Debug> std::fmt::Debug for DemoSession<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoSession")
            .field("store", &self.store)
            .field("recent", &self.recent)
            .field("instances", &self.instances)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
