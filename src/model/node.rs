//! Positioned node in the layout.

use serde::{Deserialize, Serialize};
use super::PropositionId;

/// A proposition placed on the plane.
///
/// `x` is the accumulated semantic distance from the root, `y` the
/// chronological slot (root on top, `y == row_count`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: PropositionId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: impl Into<PropositionId>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    pub fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}

/// A bare `(x, y)` pair — the per-record `Pos` column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
