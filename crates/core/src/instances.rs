use demo_state_protocol::{Selection, SelectionPatch};
use serde::Serialize;
use uuid::Uuid;

/// A saved selection the presenter can jump back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: Uuid,
    pub client_name: String,
    #[serde(flatten)]
    pub selection: Selection,
}

impl Instance {
    pub fn new(selection: Selection, client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            selection,
        }
    }

    /// The update that restores this instance into the live store.
    pub fn to_patch(&self) -> SelectionPatch {
        SelectionPatch::from(&self.selection).client_name(self.client_name.clone())
    }
}

/// Append-only list of saved instances with a current-index pointer.
///
/// Two instances with equal selections (all five fields) are never both
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceHistory {
    instances: Vec<Instance>,
    current: Option<usize>,
}

impl InstanceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `selection` unless an equal one is already stored. Returns the
    /// index of the new entry.
    pub fn save(&mut self, selection: &Selection, client_name: &str) -> Option<usize> {
        if self.instances.iter().any(|i| i.selection == *selection) {
            return None;
        }
        self.instances
            .push(Instance::new(selection.clone(), client_name));
        let index = self.instances.len() - 1;
        self.current = Some(index);
        Some(index)
    }

    /// Move the pointer to `index` and return the instance there. Out of
    /// range leaves everything untouched.
    pub fn go_to(&mut self, index: usize) -> Option<&Instance> {
        let instance = self.instances.get(index)?;
        self.current = Some(index);
        Some(instance)
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use demo_state_protocol::{ThemeMode, Version};

    use super::*;

    fn sel(role: &str, theme_mode: ThemeMode) -> Selection {
        Selection::new(role, "cvs", "dashboard", theme_mode, Version::Current)
    }

    #[test]
    fn save_points_at_new_entry() {
        let mut history = InstanceHistory::new();
        assert_eq!(history.save(&sel("merchant", ThemeMode::Light), "CVS"), Some(0));
        assert_eq!(history.save(&sel("support", ThemeMode::Light), "CVS"), Some(1));
        assert_eq!(history.current_index(), Some(1));
    }

    #[test]
    fn duplicate_selection_is_not_saved() {
        let mut history = InstanceHistory::new();
        history.save(&sel("merchant", ThemeMode::Light), "CVS");
        history.save(&sel("support", ThemeMode::Light), "CVS");
        history.go_to(1);
        assert_eq!(history.save(&sel("merchant", ThemeMode::Light), "Other name"), None);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), Some(1));
    }

    #[test]
    fn theme_mode_distinguishes_instances() {
        let mut history = InstanceHistory::new();
        history.save(&sel("merchant", ThemeMode::Light), "CVS");
        assert_eq!(history.save(&sel("merchant", ThemeMode::Dark), "CVS"), Some(1));
    }

    #[test]
    fn ids_are_unique() {
        let mut history = InstanceHistory::new();
        history.save(&sel("a", ThemeMode::Light), "CVS");
        history.save(&sel("b", ThemeMode::Light), "CVS");
        let ids: Vec<_> = history.instances().iter().map(|i| i.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut history = InstanceHistory::new();
        history.save(&sel("merchant", ThemeMode::Light), "CVS");
        history.save(&sel("admin", ThemeMode::Light), "CVS");
        assert!(history.go_to(0).is_some());
        assert!(history.go_to(2).is_none());
        assert_eq!(history.current_index(), Some(0));
    }

    #[test]
    fn patch_carries_client_name() {
        let instance = Instance::new(sel("merchant", ThemeMode::Dark), "CVS Pharmacy");
        let patch = instance.to_patch();
        assert_eq!(patch.client_name.as_deref(), Some("CVS Pharmacy"));
        assert_eq!(patch.theme_mode, Some(ThemeMode::Dark));
    }

    #[test]
    fn serializes_flat() {
        let instance = Instance::new(sel("merchant", ThemeMode::Light), "CVS");
        let json = serde_json::to_value(&instance).unwrap_or_default();
        assert_eq!(json["role"], "merchant");
        assert_eq!(json["clientName"], "CVS");
        assert_eq!(json["themeMode"], "light");
    }
}
