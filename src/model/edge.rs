//! Undirected brush edges

use std::hash::{Hash, Hasher};

/// An edge between two vertex indices of the same object
///
/// Equality ignores direction: `Edge::new(1, 2) == Edge::new(2, 1)`. The
/// stored order is still kept because EMAP writes edges as first seen.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// First vertex index
    pub first: i64,
    /// Second vertex index
    pub second: i64,
}

impl Edge {
    /// Create a new edge
    pub fn new(first: i64, second: i64) -> Self {
        Self { first, second }
    }

    /// Direction-independent key
    fn key(&self) -> (i64, i64) {
        (self.first.min(self.second), self.first.max(self.second))
    }

    /// `a,b` in stored order
    pub fn serialize_emap(&self) -> String {
        format!("{},{}", self.first, self.second)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
