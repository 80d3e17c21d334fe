//! Parsed table — named columns of [`Cell`]s.
//!
//! The ingestion collaborator (file-format and encoding detection) builds a
//! `Table`; everything in this crate starts from one. Columns may be ragged:
//! the equal length check exists to report that.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cell;
use crate::{Error, Result};

// ============================================================================
// Heading
// ============================================================================

/// The seven required headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Heading {
    Proposition,
    Speaker,
    RespondsTo,
    RelationType,
    Distance,
    LineType,
    Text,
}

impl Heading {
    pub const ALL: [Heading; 7] = [
        Heading::Proposition,
        Heading::Speaker,
        Heading::RespondsTo,
        Heading::RelationType,
        Heading::Distance,
        Heading::LineType,
        Heading::Text,
    ];

    /// Canonical spelling, as shipped in the spreadsheet template.
    pub fn title(self) -> &'static str {
        match self {
            Heading::Proposition => "Proposition",
            Heading::Speaker => "Speaker",
            Heading::RespondsTo => "Responds To",
            Heading::RelationType => "Relation Type",
            Heading::Distance => "Distance",
            Heading::LineType => "Line Type",
            Heading::Text => "Text",
        }
    }

    /// Resolve a raw heading. Case-insensitive; inner spacing matters.
    /// `Dotted Line` is the legacy name of `Line Type`.
    pub fn parse(raw: &str) -> Option<Heading> {
        match normalize_heading(raw).as_str() {
            "proposition" => Some(Heading::Proposition),
            "speaker" => Some(Heading::Speaker),
            "responds to" => Some(Heading::RespondsTo),
            "relation type" => Some(Heading::RelationType),
            "distance" => Some(Heading::Distance),
            "line type" | "dotted line" => Some(Heading::LineType),
            "text" => Some(Heading::Text),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Lowercased, trimmed heading used for all comparisons.
pub fn normalize_heading(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ============================================================================
// Column / Table
// ============================================================================

/// One named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub heading: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(heading: impl Into<String>, cells: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        Self {
            heading: heading.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `row`, `Null` past the end.
    pub fn get(&self, row: usize) -> &Cell {
        self.cells.get(row).unwrap_or(&Cell::Null)
    }

    /// Number of non-missing cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_missing()).count()
    }
}

/// A parsed table, columns in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Build from row-major data. Short rows are padded with `Null`.
    pub fn from_rows<H, R>(headings: &[H], rows: impl IntoIterator<Item = R>) -> Self
    where
        H: AsRef<str>,
        R: IntoIterator<Item = Cell>,
    {
        let mut columns: Vec<Column> = headings
            .iter()
            .map(|h| Column { heading: h.as_ref().to_owned(), cells: Vec::new() })
            .collect();
        for row in rows {
            let mut cells = row.into_iter();
            for column in &mut columns {
                column.cells.push(cells.next().unwrap_or(Cell::Null));
            }
        }
        Self { columns }
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.heading.as_str())
    }

    /// First column whose heading resolves to `heading`.
    pub fn column(&self, heading: Heading) -> Option<&Column> {
        self.columns.iter().find(|c| Heading::parse(&c.heading) == Some(heading))
    }

    pub fn require(&self, heading: Heading) -> Result<&Column> {
        self.column(heading)
            .ok_or_else(|| Error::MissingColumn(heading.title().to_owned()))
    }

    /// Row count, taken from the `Proposition` column (longest column otherwise).
    pub fn row_count(&self) -> usize {
        match self.column(Heading::Proposition) {
            Some(c) => c.len(),
            None => self.columns.iter().map(Column::len).max().unwrap_or(0),
        }
    }
}
