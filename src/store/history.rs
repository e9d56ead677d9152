// ABOUTME: Bounded undo stack and unbounded redo stack of state records
// ABOUTME: Commit evicts the oldest entry past the limit and invalidates redo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use physio_core::models::StateRecord;
use std::collections::VecDeque;

/// Undo/redo stacks holding independent copies of past records
#[derive(Debug, Clone)]
pub struct History {
    past: VecDeque<StateRecord>,
    future: Vec<StateRecord>,
    limit: usize,
}

impl History {
    /// Empty history keeping at most `limit` undo entries
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(limit.min(64)),
            future: Vec::new(),
            limit,
        }
    }

    /// Push the record being replaced; a new branch drops every redo entry
    pub fn commit(&mut self, previous: StateRecord) {
        self.past.push_back(previous);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Swap `current` for the most recent past record
    pub fn undo(&mut self, current: &StateRecord) -> Option<StateRecord> {
        let previous = self.past.pop_back()?;
        self.future.push(current.clone());
        Some(previous)
    }

    /// Swap `current` for the most recently undone record
    pub fn redo(&mut self, current: &StateRecord) -> Option<StateRecord> {
        let next = self.future.pop()?;
        self.past.push_back(current.clone());
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        Some(next)
    }

    /// Number of undo entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.past.len()
    }

    /// No undo entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    /// Whether a redo entry exists
    #[must_use]
    pub fn has_future(&self) -> bool {
        !self.future.is_empty()
    }

    /// Every stored record, undo and redo entries alike
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut StateRecord> {
        self.past.iter_mut().chain(self.future.iter_mut())
    }
}
