//! Loosely typed table cell, as handed over by the ingestion collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Markers that coders use for "no value here" (compared case-insensitively).
pub const UNKNOWN_MARKERS: &[&str] = &["n/a", "na", "nan", "none", "unknown", "?", "??", "???"];

/// A single table value.
///
/// Spreadsheets and delimited files type their cells inconsistently: the same
/// column may hold `1`, `1.0` and `"1"`. `Cell` keeps what the reader saw and
/// leaves interpretation to the typed accessors below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

// ============================================================================
// Inference
// ============================================================================

impl Cell {
    /// Infer a cell from raw text the way a spreadsheet reader would:
    /// integers, then floats, then text. Blank input becomes `Null`.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Cell::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Cell::Float(f);
            }
        }
        Cell::Text(raw.to_owned())
    }
}

// ============================================================================
// Type checking
// ============================================================================

impl Cell {
    /// True for `Null`, blank text, NaN, and any of [`UNKNOWN_MARKERS`].
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Int(_) => false,
            Cell::Float(f) => f.is_nan(),
            Cell::Text(s) => {
                let t = s.trim();
                t.is_empty() || UNKNOWN_MARKERS.iter().any(|m| t.eq_ignore_ascii_case(m))
            }
        }
    }

    /// Numeric view. Text holding a number counts.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) if f.is_finite() => Some(*f),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Integral view: ints, and floats/text without a fractional part.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            Cell::Text(s) if s.trim().parse::<i64>().is_ok() => s.trim().parse::<i64>().ok(),
            _ => self
                .as_float()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64),
        }
    }

    /// Trimmed text of a non-missing cell. Numbers are rendered.
    pub fn as_text(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        match self {
            Cell::Text(s) => Some(s.trim().to_owned()),
            other => Some(other.to_string()),
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<i32> for Cell { fn from(v: i32) -> Self { Cell::Int(v as i64) } }
impl From<i64> for Cell { fn from(v: i64) -> Self { Cell::Int(v) } }
impl From<f64> for Cell { fn from(v: f64) -> Self { Cell::Float(v) } }
impl From<String> for Cell { fn from(v: String) -> Self { Cell::Text(v) } }
impl From<&str> for Cell { fn from(v: &str) -> Self { Cell::Text(v.to_owned()) } }
impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Cell::Null) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "NA"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.1}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer() {
        assert_eq!(Cell::infer("3"), Cell::Int(3));
        assert_eq!(Cell::infer(" 2.5 "), Cell::Float(2.5));
        assert_eq!(Cell::infer("hello"), Cell::Text("hello".into()));
        assert_eq!(Cell::infer("   "), Cell::Null);
    }

    #[test]
    fn test_missing_markers() {
        for raw in ["NA", "n/a", "N/A", "Unknown", "??", "", "  "] {
            assert!(Cell::from(raw).is_missing(), "{raw:?} should be missing");
        }
        assert!(Cell::Null.is_missing());
        assert!(Cell::Float(f64::NAN).is_missing());
        assert!(!Cell::Int(0).is_missing());
        assert!(!Cell::from("no").is_missing());
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(Cell::Float(2.0).as_int(), Some(2));
        assert_eq!(Cell::Float(2.5).as_int(), None);
        assert_eq!(Cell::from("4").as_float(), Some(4.0));
        assert_eq!(Cell::from("x").as_float(), None);
        assert_eq!(Cell::Null.as_float(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Float(1.0).to_string(), "1.0");
        assert_eq!(Cell::Int(7).to_string(), "7");
        assert_eq!(Cell::Null.to_string(), "NA");
    }
}
