//! Retained conversation window.
//!
//! Holds the most recent completed exchanges, bounded by a fixed capacity.
//! The relay runs with a capacity of one: each successful round replaces
//! the previous exchange wholesale.

use speechintent_core::message::RetainedTurn;
use std::collections::VecDeque;

/// Default number of exchanges kept.
pub const DEFAULT_CAPACITY: usize = 1;

/// Bounded, oldest-first store of completed exchanges.
#[derive(Debug, Clone)]
pub struct ConversationWindow {
    capacity: usize,
    turns: VecDeque<RetainedTurn>,
}

impl ConversationWindow {
    /// Create an empty window. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            turns: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a completed exchange, evicting the oldest beyond capacity.
    pub fn record(&mut self, turn: RetainedTurn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    /// Retained exchanges, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RetainedTurn> {
        self.turns.iter()
    }

    pub fn latest(&self) -> Option<&RetainedTurn> {
        self.turns.back()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Owned copy of the retained exchanges.
    pub fn snapshot(&self) -> Vec<RetainedTurn> {
        self.turns.iter().cloned().collect()
    }
}

impl Default for ConversationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
