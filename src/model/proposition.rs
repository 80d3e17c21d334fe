//! Canonical proposition identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cell;

/// Identifier of one coded utterance.
///
/// Identifiers arrive typed inconsistently across a table (`1`, `1.0`, `"1"`).
/// They are normalized once, at record parsing, so every later lookup is a
/// single exact-match on this key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropositionId {
    Num(i64),
    Label(String),
}

impl PropositionId {
    /// Normalize a cell. Missing cells have no identifier.
    pub fn from_cell(cell: &Cell) -> Option<Self> {
        if cell.is_missing() {
            return None;
        }
        if let Some(i) = cell.as_int() {
            return Some(PropositionId::Num(i));
        }
        cell.as_text().map(PropositionId::Label)
    }
}

impl fmt::Display for PropositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropositionId::Num(i) => write!(f, "{i}"),
            PropositionId::Label(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for PropositionId { fn from(v: i64) -> Self { PropositionId::Num(v) } }
impl From<i32> for PropositionId { fn from(v: i32) -> Self { PropositionId::Num(v as i64) } }
impl From<&str> for PropositionId {
    fn from(v: &str) -> Self {
        PropositionId::from_cell(&Cell::from(v)).unwrap_or_else(|| PropositionId::Label(v.to_owned()))
    }
}
