//! # visual-dta — Dynamic Topic Analysis layout engine
//!
//! Turns a coded conversation transcript (one row per proposition) into a
//! plane layout that shows topic drift, plus the semantic distance metrics
//! shown next to it.
//!
//! ## Pipeline
//!
//! ```text
//! Table ──► validate (advisory report, never fails)
//!   │
//!   └──► Dataset ──► layout ──► edges ──► metrics ──► plot
//!                     (Reference / Domain errors stop here)
//! ```
//!
//! ## Design Principles
//!
//! 1. **Validation is advisory**: every check runs, a check that cannot run
//!    reports nothing, the caller decides whether to lay out anyway
//! 2. **Layout is strict**: an unresolved reference or an undefined metric is
//!    a typed error, never a partial result
//! 3. **One identifier key**: `1`, `1.0` and `"1"` are normalized to one
//!    `PropositionId` when records are parsed
//! 4. **No hidden state**: every call recomputes from the table it is given
//!
//! ## Quick Start
//!
//! ```rust
//! use visual_dta::{Cell, Dta, Table};
//!
//! # fn example() -> visual_dta::Result<()> {
//! let table = Table::from_rows(
//!     &["Proposition", "Speaker", "Responds To", "Relation Type", "Distance", "Line Type", "Text"],
//!     vec![
//!         vec![Cell::from(0), "A".into(), "NA".into(), "NA".into(), "NA".into(), "NA".into(), "hi".into()],
//!         vec![Cell::from(1), "B".into(), 0.into(), "T".into(), 0.into(), 1.into(), "hello".into()],
//!         vec![Cell::from(2), "A".into(), 1.into(), "P".into(), 2.into(), 2.into(), "anyway".into()],
//!     ],
//! );
//!
//! let dta = Dta::default();
//! println!("{}", dta.validate(&table));
//!
//! let analysis = dta.analyze(&table)?;
//! assert_eq!(analysis.metrics.accumulated_semantic_distance, 2.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod validate;
pub mod layout;
pub mod edges;
pub mod metrics;
pub mod plot;
pub mod export;

use serde::Serialize;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Cell, Column, Table, Heading,
    PropositionId, Record, Dataset, RelationType, LineType,
    Node, Position, Edge,
};
pub use config::{DtaConfig, RelationSet};
pub use validate::{CheckKind, CheckReport, Finding, Severity, ValidationReport, Validator};
pub use layout::Layout;
pub use edges::{EdgeSet, EdgeTrace};
pub use metrics::SemanticMetrics;
pub use plot::{Annotation, MarkerGroup, PlotData, PlotOptions};

// ============================================================================
// Top-level Dta handle
// ============================================================================

/// The primary entry point. Holds configuration; every call works on the
/// table it is handed and keeps nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct Dta {
    config: DtaConfig,
    plot_options: PlotOptions,
}

impl Dta {
    pub fn new(config: DtaConfig) -> Self {
        Self { config, plot_options: PlotOptions::default() }
    }

    pub fn with_plot_options(mut self, options: PlotOptions) -> Self {
        self.plot_options = options;
        self
    }

    pub fn config(&self) -> &DtaConfig {
        &self.config
    }

    /// Run every validation check. Never fails.
    pub fn validate(&self, table: &Table) -> ValidationReport {
        Validator::new(self.config.clone()).run(table)
    }

    /// Parse, lay out, classify edges, compute metrics, and build plot data.
    pub fn analyze(&self, table: &Table) -> Result<Analysis> {
        self.config.validate()?;

        // Phase 1: Parse
        let dataset = Dataset::from_table(table)?;

        // Phase 2: Positions
        let layout = layout::compute(&dataset)?;

        // Phase 3: Edges
        let edges = edges::classify(&dataset, &layout, &self.config)?;

        // Phase 4: Metrics
        let metrics = SemanticMetrics::compute(&dataset, &layout, &self.config)?;

        let plot = PlotData::build(&dataset, &layout, &edges, &self.plot_options);
        Ok(Analysis { dataset, layout, edges, metrics, plot })
    }
}

/// Everything derived from one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub dataset: Dataset,
    pub layout: Layout,
    pub edges: EdgeSet,
    pub metrics: SemanticMetrics,
    pub plot: PlotData,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `Responds To` that names no earlier proposition.
    #[error("Reference error in row {row}: \"Responds To\" value {responds_to} does not name an earlier proposition")]
    Reference { row: usize, responds_to: String },

    /// A reduction over an empty set.
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid record in row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Empty table")]
    EmptyTable,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
