//! Search counters.

use std::fmt;
use std::ops::AddAssign;
use std::time::Duration;

/// Counters gathered over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Every visited node, the root included.
    pub nodes: u64,
    /// Nodes reached with no remaining depth.
    pub leaf_nodes: u64,
    /// Checkmated positions found in the tree.
    pub checkmates: u64,
    /// Stalemated positions found in the tree.
    pub stalemates: u64,
    /// Wall-clock time of the whole search.
    pub elapsed: Duration,
}

impl AddAssign for Statistics {
    /// Sum the counters. Elapsed time is left alone: workers run concurrently.
    fn add_assign(&mut self, other: Statistics) {
        self.nodes += other.nodes;
        self.leaf_nodes += other.leaf_nodes;
        self.checkmates += other.checkmates;
        self.stalemates += other.stalemates;
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "executionTimeMillis: {} functionCalls: {} leafNodes: {}",
            self.elapsed.as_millis(),
            self.nodes,
            self.leaf_nodes
        )
    }
}
