use demo_state_protocol::{Selection, SelectionPatch, ThemeColors, UserProfile};
use serde::Serialize;

use crate::config::DemoConfig;
use crate::lookup;

/// Where a store change came from.
///
/// Carried with every change so the outbound URL sync can tell its own
/// echoes apart from user edits without shared mutable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    FromUser,
    FromUrl,
}

/// A committed store change, as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub previous: Selection,
    pub current: Selection,
    pub client_name: String,
    pub transition: Transition,
}

impl Change {
    /// False when only the client display name moved.
    pub fn selection_changed(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Change) + Send>;

/// Single authoritative holder of the current selection.
///
/// All mutation goes through [`SelectionStore::update`]; `theme` and
/// `user_profile` are derived on every read.
pub struct SelectionStore {
    selection: Selection,
    client_name: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl SelectionStore {
    pub fn new(selection: Selection, client_name: impl Into<String>) -> Self {
        Self {
            selection,
            client_name: client_name.into(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(
            config.default_selection.clone(),
            config.default_client_name.clone(),
        )
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn theme(&self) -> ThemeColors {
        lookup::lookup_theme(&self.selection.client_id, self.selection.theme_mode)
    }

    pub fn user_profile(&self) -> &'static UserProfile {
        lookup::lookup_user_profile(&self.selection.role, &self.selection.client_id)
    }

    /// Register a listener called once per committed change, in
    /// subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Merge `patch` into the current selection.
    ///
    /// Returns `None` without touching anything when no field differs. A
    /// new `client_id` without an explicit `client_name` resolves the
    /// display name from the client registry.
    pub fn update(&mut self, patch: SelectionPatch, transition: Transition) -> Option<Change> {
        let mut next = self.selection.clone();
        let mut changed = false;

        if let Some(role) = patch.role
            && role != next.role
        {
            next.role = role;
            changed = true;
        }
        let client_changed = match patch.client_id {
            Some(client_id) if client_id != next.client_id => {
                next.client_id = client_id;
                true
            }
            _ => false,
        };
        if let Some(scenario) = patch.scenario
            && scenario != next.scenario
        {
            next.scenario = scenario;
            changed = true;
        }
        if let Some(theme_mode) = patch.theme_mode
            && theme_mode != next.theme_mode
        {
            next.theme_mode = theme_mode;
            changed = true;
        }
        if let Some(version) = patch.version
            && version != next.version
        {
            next.version = version;
            changed = true;
        }

        let next_name = if client_changed {
            Some(
                patch
                    .client_name
                    .unwrap_or_else(|| lookup::client_name(&next.client_id)),
            )
        } else {
            patch.client_name.filter(|name| *name != self.client_name)
        };

        if !changed && !client_changed && next_name.is_none() {
            return None;
        }

        let previous = std::mem::replace(&mut self.selection, next);
        if let Some(name) = next_name {
            self.client_name = name;
        }
        let change = Change {
            previous,
            current: self.selection.clone(),
            client_name: self.client_name.clone(),
            transition,
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
        Some(change)
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selection", &self.selection)
            .field("client_name", &self.client_name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
