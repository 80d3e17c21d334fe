//! Typed view over table rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Cell, Heading, PropositionId, Table};
use crate::{Error, Result};

// ============================================================================
// Relation type
// ============================================================================

/// Discourse category of a turn relative to the one it responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    /// `PR` — prompt.
    Prompt,
    /// `T` — narrowly on-topic.
    OnTopic,
    /// `P` — parallel shift.
    Parallel,
    /// `B` — break.
    Break,
    /// `X` — flexible.
    Flexible,
}

impl RelationType {
    pub const ALL: [RelationType; 5] = [
        RelationType::OnTopic,
        RelationType::Parallel,
        RelationType::Break,
        RelationType::Flexible,
        RelationType::Prompt,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            RelationType::Prompt => "PR",
            RelationType::OnTopic => "T",
            RelationType::Parallel => "P",
            RelationType::Break => "B",
            RelationType::Flexible => "X",
        }
    }

    pub fn legend_name(self) -> &'static str {
        match self {
            RelationType::Prompt => "prompt",
            RelationType::OnTopic => "Narrowly on-topic (T)",
            RelationType::Parallel => "Parallel Shift (P)",
            RelationType::Break => "Break (B)",
            RelationType::Flexible => "Flexible (X)",
        }
    }

    /// Whether `distance` is what coders are expected to use for this tag.
    /// `PR` and `X` carry no constraint.
    pub fn accepts_distance(self, distance: f64) -> bool {
        match self {
            RelationType::OnTopic => distance == 0.0,
            RelationType::Parallel => [1.0, 2.0, 3.0].contains(&distance),
            RelationType::Break => distance == 4.0,
            RelationType::Prompt | RelationType::Flexible => true,
        }
    }

    pub fn from_cell(cell: &Cell) -> Option<Self> {
        cell.as_text().and_then(|s| s.parse().ok())
    }
}

impl FromStr for RelationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PR" => Ok(RelationType::Prompt),
            "T" => Ok(RelationType::OnTopic),
            "P" => Ok(RelationType::Parallel),
            "B" => Ok(RelationType::Break),
            "X" => Ok(RelationType::Flexible),
            other => Err(Error::InvalidValue(format!("unknown relation type {other:?}"))),
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Line type
// ============================================================================

/// Connector drawn between a turn and the turn it responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    NoLine,
    Solid,
    Dotted,
}

impl LineType {
    pub fn code(self) -> u8 {
        match self {
            LineType::NoLine => 0,
            LineType::Solid => 1,
            LineType::Dotted => 2,
        }
    }

    /// Single parser for every accepted encoding (numeric codes, yes/no,
    /// spelled-out names).
    pub fn from_cell(cell: &Cell) -> Option<Self> {
        match cell {
            Cell::Null => None,
            Cell::Int(_) | Cell::Float(_) => cell.as_int().and_then(Self::from_code),
            Cell::Text(s) => s.parse().ok(),
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(LineType::NoLine),
            1 => Some(LineType::Solid),
            2 => Some(LineType::Dotted),
            _ => None,
        }
    }
}

impl FromStr for LineType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "0" | "0.0" | "no" | "n" | "none" | "no line" | "no_line" => Ok(LineType::NoLine),
            "1" | "1.0" | "yes" | "y" | "solid" | "solid line" | "solid_line" => Ok(LineType::Solid),
            "2" | "2.0" | "dotted" | "dotted line" | "dotted_line" | "dashed" => Ok(LineType::Dotted),
            _ => Err(Error::InvalidValue(format!("unknown line type {s:?}"))),
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineType::NoLine => "no line",
            LineType::Solid => "solid line",
            LineType::Dotted => "dotted line",
        })
    }
}

// ============================================================================
// Record / Dataset
// ============================================================================

/// One coded utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based row index; row 0 is the root.
    pub row: usize,
    pub proposition: PropositionId,
    pub speaker: Option<String>,
    pub responds_to: Option<PropositionId>,
    pub relation_type: Option<RelationType>,
    pub distance: Option<f64>,
    pub line_type: Option<LineType>,
    pub text: Option<String>,
}

impl Record {
    pub fn is_root(&self) -> bool {
        self.row == 0
    }
}

/// All records of one transcript, in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap records in row order; `row` fields are renumbered to match.
    pub fn new(mut records: Vec<Record>) -> Self {
        for (row, record) in records.iter_mut().enumerate() {
            record.row = row;
        }
        Self { records }
    }

    /// Parse every row of `table`.
    ///
    /// `Line Type` and `Text` may be absent; the other five columns are
    /// required. Unrecognized relation tags and line types become `None`;
    /// reporting them is the validator's job.
    pub fn from_table(table: &Table) -> Result<Self> {
        let proposition = table.require(Heading::Proposition)?;
        let speaker = table.require(Heading::Speaker)?;
        let responds_to = table.require(Heading::RespondsTo)?;
        let relation_type = table.require(Heading::RelationType)?;
        let distance = table.require(Heading::Distance)?;
        let line_type = table.column(Heading::LineType);
        let text = table.column(Heading::Text);

        let row_count = proposition.len();
        if row_count == 0 {
            return Err(Error::EmptyTable);
        }

        let mut records = Vec::with_capacity(row_count);
        for row in 0..row_count {
            let id = PropositionId::from_cell(proposition.get(row)).ok_or_else(|| Error::InvalidRecord {
                row,
                message: "missing proposition".into(),
            })?;
            records.push(Record {
                row,
                proposition: id,
                speaker: speaker.get(row).as_text(),
                responds_to: PropositionId::from_cell(responds_to.get(row)),
                relation_type: RelationType::from_cell(relation_type.get(row)),
                distance: distance.get(row).as_float(),
                line_type: line_type.and_then(|c| LineType::from_cell(c.get(row))),
                text: text.and_then(|c| c.get(row).as_text()),
            });
        }
        tracing::debug!(rows = records.len(), "parsed dataset");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn root(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
