//! # Layout Engine
//!
//! Assigns `(x, y)` to every record in one forward pass over row order.
//!
//! The plane encodes discourse structure, not graph geometry:
//! - `x` is semantic distance: a row sits `distance` units right of the
//!   row it responds to; the root sits at `x = 0`.
//! - `y` is chronology: row `i` sits at `y = row_count - i`, root on top.
//!
//! A position is written once, when its row is reached, and never touched
//! again. Later rows may only read earlier positions, so an unresolved
//! reference is fatal: every position after it would be wrong.

use hashbrown::HashMap;
use serde::Serialize;

use crate::model::{Dataset, Node, Position, PropositionId};
use crate::{Error, Result};

/// Output of [`compute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// One position per record, in row order (the `Pos` column).
    positions: Vec<Position>,
    /// One node per distinct proposition, in first-occurrence order.
    nodes: Vec<Node>,
    /// proposition → index into `nodes`
    #[serde(skip)]
    index: HashMap<PropositionId, usize>,
}

impl Layout {
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Position of the record at `row`.
    pub fn position(&self, row: usize) -> Option<Position> {
        self.positions.get(row).copied()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &PropositionId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Lay out `dataset`.
///
/// Fails with [`Error::Reference`] when a non-root row names a proposition
/// that no earlier row carries, and with [`Error::InvalidRecord`] when a
/// non-root row has no numeric distance. Nothing is returned on failure.
pub fn compute(dataset: &Dataset) -> Result<Layout> {
    if dataset.is_empty() {
        return Err(Error::EmptyTable);
    }

    let row_count = dataset.len() as f64;
    let mut positions = Vec::with_capacity(dataset.len());
    let mut nodes: Vec<Node> = Vec::with_capacity(dataset.len());
    let mut index: HashMap<PropositionId, usize> = HashMap::with_capacity(dataset.len());

    for (row, record) in dataset.iter().enumerate() {
        let y = row_count - row as f64;
        let x = if row == 0 {
            0.0
        } else {
            let target = record.responds_to.as_ref().ok_or_else(|| Error::Reference {
                row,
                responds_to: "NA".into(),
            })?;
            let referenced = index.get(target).map(|&i| &nodes[i]).ok_or_else(|| Error::Reference {
                row,
                responds_to: target.to_string(),
            })?;
            let distance = record.distance.ok_or_else(|| Error::InvalidRecord {
                row,
                message: "distance must be a number".into(),
            })?;
            referenced.x + distance
        };

        positions.push(Position::new(x, y));
        if index.contains_key(&record.proposition) {
            tracing::warn!(
                row,
                proposition = %record.proposition,
                "duplicate proposition; keeping the first node"
            );
            continue;
        }
        index.insert(record.proposition.clone(), nodes.len());
        nodes.push(Node::new(record.proposition.clone(), x, y));
    }

    tracing::debug!(rows = positions.len(), nodes = nodes.len(), "layout computed");
    Ok(Layout { positions, nodes, index })
}
