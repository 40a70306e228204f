use std::collections::VecDeque;

use demo_state_protocol::Selection;
use log::debug;

/// Capped, most-recent-first audit of selections the URL moved away from.
///
/// An entry showing the same view (role, client, scenario, version) as any
/// entry already in the list is not added again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentHistory {
    entries: VecDeque<Selection>,
    capacity: usize,
}

impl RecentHistory {
    /// Nothing is allocated up front; the list grows as entries arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Push `selection` to the front unless it duplicates an existing
    /// entry. Returns whether it was added.
    pub fn record(&mut self, selection: &Selection) -> bool {
        if self.capacity == 0 || self.entries.iter().any(|e| e.same_view(selection)) {
            return false;
        }
        self.entries.push_front(selection.clone());
        self.entries.truncate(self.capacity);
        debug!(
            "recent history: {} entries, newest {}/{}/{}",
            self.entries.len(),
            selection.role,
            selection.client_id,
            selection.scenario
        );
        true
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &Selection> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Selection> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
