// ABOUTME: Change observer registry for the state store
// ABOUTME: Payload-free synchronous notification in subscription order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::StateStore;
use std::fmt;
use std::mem;
use uuid::Uuid;

/// Handle returned by [`StateStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Change callback; it receives the store and re-reads whatever it needs
pub type Observer = Box<dyn FnMut(&StateStore) + Send>;

#[derive(Default)]
pub(super) struct ObserverList {
    entries: Vec<(SubscriptionId, Observer)>,
}

impl ObserverList {
    pub(super) fn add(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.entries.push((id, observer));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Detach the list so observers can borrow the store while being called
    pub(super) fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub(super) fn notify(&mut self, store: &StateStore) {
        for (_, observer) in &mut self.entries {
            observer(store);
        }
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("count", &self.entries.len())
            .finish()
    }
}
