//! Edge between a turn and the turn it responds to.

use serde::{Deserialize, Serialize};
use super::{LineType, PropositionId};

/// A directed "responds to" connection, derived from records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The referenced (earlier) proposition.
    pub from: PropositionId,
    /// The responding proposition.
    pub to: PropositionId,
    pub line_type: LineType,
    /// Row indices of both ends, for coordinate lookup.
    pub from_row: usize,
    pub to_row: usize,
}

impl Edge {
    pub fn new(from: PropositionId, to: PropositionId, line_type: LineType) -> Self {
        Self { from, to, line_type, from_row: 0, to_row: 0 }
    }

    pub fn with_rows(mut self, from_row: usize, to_row: usize) -> Self {
        self.from_row = from_row;
        self.to_row = to_row;
        self
    }

    /// Whether the rendering layer draws this edge at all.
    pub fn is_drawn(&self) -> bool {
        self.line_type != LineType::NoLine
    }

    /// The "other" end of the edge from the given proposition.
    pub fn other_end(&self, from: &PropositionId) -> Option<&PropositionId> {
        if *from == self.from { Some(&self.to) }
        else if *from == self.to { Some(&self.from) }
        else { None }
    }
}
