//! Recently processed command ids
//!
//! Idempotency only has to cover client retries, so the set keeps the most
//! recent `capacity` ids and forgets the oldest first.

use std::collections::{HashSet, VecDeque};

/// Ids remembered for duplicate detection
pub const DEFAULT_PROCESSED_HISTORY: usize = 10_000;

#[derive(Debug)]
pub(super) struct ProcessedCommands {
    ids: HashSet<String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl ProcessedCommands {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            ids: HashSet::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub(super) fn contains(&self, command_id: &str) -> bool {
        self.ids.contains(command_id)
    }

    pub(super) fn insert(&mut self, command_id: String) {
        if !self.ids.insert(command_id.clone()) {
            return;
        }
        self.order.push_back(command_id);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.ids.remove(&oldest);
            }
        }
    }

    pub(super) fn len(&self) -> usize {
        self.order.len()
    }
}
