//! Escape summary model

use serde::{Deserialize, Serialize};

/// Break structure of a whole program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeSummary {
    /// A break is reachable outside every loop
    pub escapes: bool,

    /// Number of while loops at any depth
    pub loops: usize,

    /// Loops whose body escapes, i.e. loops some break targets
    pub absorbing_loops: usize,
}

impl EscapeSummary {
    /// Loops no break ever leaves early
    pub fn plain_loops(&self) -> usize {
        self.loops.saturating_sub(self.absorbing_loops)
    }
}
