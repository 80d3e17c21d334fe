//! Export — write an analysis or a validation report for another tool.
//!
//! ```text
//! Analysis → export_json() → { generated_at, row_count, nodes, edges, plot, metrics }
//!   → hand to a charting front end, or archive next to the transcript
//! ```

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::edges::EdgeSet;
use crate::metrics::SemanticMetrics;
use crate::model::{Node, Position};
use crate::plot::PlotData;
use crate::validate::ValidationReport;
use crate::{Analysis, Result};

/// Shape of the exported JSON document.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub generated_at: DateTime<Utc>,
    pub row_count: usize,
    pub nodes: &'a [Node],
    /// Per-row positions, row order.
    pub positions: &'a [Position],
    pub edges: &'a EdgeSet,
    pub plot: &'a PlotData,
    pub metrics: &'a SemanticMetrics,
}

impl<'a> ExportDocument<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            generated_at: Utc::now(),
            row_count: analysis.dataset.len(),
            nodes: analysis.layout.nodes(),
            positions: analysis.layout.positions(),
            edges: &analysis.edges,
            plot: &analysis.plot,
            metrics: &analysis.metrics,
        }
    }
}

/// Write `analysis` as pretty-printed JSON.
pub fn export_json(analysis: &Analysis, writer: &mut dyn Write) -> Result<()> {
    let document = ExportDocument::new(analysis);
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)?;
    tracing::debug!(nodes = document.nodes.len(), edges = document.edges.len(), "analysis exported");
    Ok(())
}

/// Write the rendered validation report.
pub fn export_report(report: &ValidationReport, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "{report}")?;
    Ok(())
}
