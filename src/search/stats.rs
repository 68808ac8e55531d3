//! Minimax search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a minimax search.
///
/// Purely observational: the chosen action never depends on them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated below the root.
    pub nodes_visited: u64,

    /// Terminal positions scored with `utility`.
    pub terminal_evaluations: u64,

    /// Deepest ply reached, counted from the root.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a visit to a position `depth` plies below the root.
    pub(crate) fn visit(&mut self, depth: u16, terminal: bool) {
        self.nodes_visited += 1;
        if terminal {
            self.terminal_evaluations += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate positions visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
