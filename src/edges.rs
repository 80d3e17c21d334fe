//! # Edge Classifier
//!
//! Builds the typed "responds to" edge set from positioned records.
//!
//! Semantically this is a scan over every ordered pair of rows `(r1, r2)`
//! with `r1.proposition == r2.responds_to`. That scan is O(n²) in row count;
//! here it is done with a proposition → rows index instead, and the accepted
//! pairs are sorted by `(r1, r2)` so output order matches the pairwise scan.
//!
//! Responding rows at the break distance never get an edge, whatever their
//! line type: a break is drawn as a free-floating node.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::DtaConfig;
use crate::layout::Layout;
use crate::model::{Dataset, Edge, LineType, Position, PropositionId};
use crate::{Error, Result};

// ============================================================================
// EdgeTrace
// ============================================================================

/// Disjoint line segments in plotting form: `[x0, x1, None, x0, x1, None, ...]`.
///
/// The `None` gap marker keeps a plotting layer from joining consecutive
/// segments into one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeTrace {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
}

impl EdgeTrace {
    pub fn push_segment(&mut self, from: Position, to: Position) {
        self.x.extend([Some(from.x), Some(to.x), None]);
        self.y.extend([Some(from.y), Some(to.y), None]);
    }

    pub fn segment_count(&self) -> usize {
        self.x.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ============================================================================
// EdgeSet
// ============================================================================

/// Classified edges plus one trace per line type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    /// "responds to"
    pub solid: EdgeTrace,
    /// "may respond to"
    pub dotted: EdgeTrace,
    /// Tracked, not drawn.
    pub no_line: EdgeTrace,
}

impl EdgeSet {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn of_type(&self, line_type: LineType) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.line_type == line_type)
    }

    pub fn trace(&self, line_type: LineType) -> &EdgeTrace {
        match line_type {
            LineType::Solid => &self.solid,
            LineType::Dotted => &self.dotted,
            LineType::NoLine => &self.no_line,
        }
    }

    fn push(&mut self, edge: Edge, from: Position, to: Position) {
        let trace = match edge.line_type {
            LineType::Solid => &mut self.solid,
            LineType::Dotted => &mut self.dotted,
            LineType::NoLine => &mut self.no_line,
        };
        trace.push_segment(from, to);
        self.edges.push(edge);
    }
}

/// Classify the edges of `dataset` using positions from `layout`.
pub fn classify(dataset: &Dataset, layout: &Layout, config: &DtaConfig) -> Result<EdgeSet> {
    let records = dataset.records();

    let mut rows_by_id: HashMap<&PropositionId, SmallVec<[usize; 2]>> = HashMap::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        rows_by_id.entry(&record.proposition).or_default().push(row);
    }

    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(records.len());
    for (responding, record) in records.iter().enumerate().skip(1) {
        let Some(target) = record.responds_to.as_ref() else { continue };
        if record.distance == Some(config.break_distance) {
            tracing::trace!(row = responding, "break distance; no edge");
            continue;
        }
        if let Some(rows) = rows_by_id.get(target) {
            pairs.extend(rows.iter().filter(|&&r| r != responding).map(|&r| (r, responding)));
        }
    }
    pairs.sort_unstable();

    let mut set = EdgeSet::default();
    for (referenced, responding) in pairs {
        let Some(line_type) = records[responding].line_type else {
            tracing::debug!(row = responding, "unrecognized line type; no edge");
            continue;
        };
        let from = position(layout, referenced)?;
        let to = position(layout, responding)?;
        let edge = Edge::new(
            records[referenced].proposition.clone(),
            records[responding].proposition.clone(),
            line_type,
        )
        .with_rows(referenced, responding);
        set.push(edge, from, to);
    }

    tracing::debug!(
        edges = set.len(),
        solid = set.solid.segment_count(),
        dotted = set.dotted.segment_count(),
        "edges classified"
    );
    Ok(set)
}

fn position(layout: &Layout, row: usize) -> Result<Position> {
    layout.position(row).ok_or_else(|| Error::InvalidRecord {
        row,
        message: "row has no computed position".into(),
    })
}
