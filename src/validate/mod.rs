//! # Schema Validator
//!
//! An ordered battery of independent checks over a raw [`Table`]. Each check
//! is a pure function `(&Table, &DtaConfig) -> Result<Vec<Finding>>`; none
//! reads another's output, so they can run in any order.
//!
//! Validation is advisory. A check that errors internally (a column it needs
//! is absent, the table is empty) is recorded as skipped with no findings
//! and the rest of the report is still produced.
//!
//! | Check | Module |
//! |-------|--------|
//! | Heading | `heading` |
//! | Minimal length, equal length | `length` |
//! | First row | `first_row` |
//! | Blank value, value type | `values` |
//! | Order | `order` |

pub mod heading;
pub mod length;
pub mod first_row;
pub mod values;
pub mod order;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DtaConfig;
use crate::model::Table;
use crate::Result;

pub use heading::check_heading;
pub use length::{check_equal_length, check_minimal_length};
pub use first_row::check_first_row;
pub use values::{check_blank_value, check_value_type};
pub use order::check_order;

const REPORT_INTRO: &str = "Successfully uploaded!";
const REPORT_OUTRO: &str = "Please check the file regarding the above messages. \
    Or you can proceed to visualize, but it may not work as expected, if at all.";
const LOOKS_GOOD: &str = "Looks good.";

// ============================================================================
// Findings
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One problem reported by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }
}

// ============================================================================
// Checks
// ============================================================================

/// A single validation rule.
pub type CheckFn = fn(&Table, &DtaConfig) -> Result<Vec<Finding>>;

/// The checks, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Heading,
    MinimalLength,
    EqualLength,
    FirstRow,
    BlankValue,
    ValueType,
    Order,
}

impl CheckKind {
    pub const ALL: [CheckKind; 7] = [
        CheckKind::Heading,
        CheckKind::MinimalLength,
        CheckKind::EqualLength,
        CheckKind::FirstRow,
        CheckKind::BlankValue,
        CheckKind::ValueType,
        CheckKind::Order,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CheckKind::Heading => "Heading check",
            CheckKind::MinimalLength => "Minimal length check",
            CheckKind::EqualLength => "Equal length check",
            CheckKind::FirstRow => "First row check",
            CheckKind::BlankValue => "Blank value check",
            CheckKind::ValueType => "Value type check",
            CheckKind::Order => "Order check",
        }
    }

    pub fn check_fn(self) -> CheckFn {
        match self {
            CheckKind::Heading => check_heading,
            CheckKind::MinimalLength => check_minimal_length,
            CheckKind::EqualLength => check_equal_length,
            CheckKind::FirstRow => check_first_row,
            CheckKind::BlankValue => check_blank_value,
            CheckKind::ValueType => check_value_type,
            CheckKind::Order => check_order,
        }
    }

    /// Run this check, failing open.
    pub fn run(self, table: &Table, config: &DtaConfig) -> CheckReport {
        match (self.check_fn())(table, config) {
            Ok(findings) => CheckReport { kind: self, findings, skipped: None },
            Err(e) => {
                tracing::debug!(check = self.title(), error = %e, "check skipped");
                CheckReport { kind: self, findings: Vec::new(), skipped: Some(e.to_string()) }
            }
        }
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub kind: CheckKind,
    pub findings: Vec<Finding>,
    /// Why the check could not run, if it could not.
    pub skipped: Option<String>,
}

impl CheckReport {
    pub fn looks_good(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Section text: title, then findings or "Looks good.".
    pub fn render(&self) -> String {
        let body = if self.findings.is_empty() {
            LOOKS_GOOD.to_owned()
        } else {
            self.findings.iter().map(|f| f.message.as_str()).collect::<Vec<_>>().join("\n")
        };
        format!("**{}**:\n\n{}", self.kind.title(), body)
    }
}

/// All check outcomes, in [`CheckKind::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checks: Vec<CheckReport>,
}

impl ValidationReport {
    pub fn check(&self, kind: CheckKind) -> Option<&CheckReport> {
        self.checks.iter().find(|c| c.kind == kind)
    }

    /// No check produced any finding.
    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(CheckReport::looks_good)
    }

    pub fn has_errors(&self) -> bool {
        self.checks.iter().any(CheckReport::has_errors)
    }

    pub fn findings(&self) -> impl Iterator<Item = (CheckKind, &Finding)> {
        self.checks.iter().flat_map(|c| c.findings.iter().map(move |f| (c.kind, f)))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_INTRO}")?;
        for check in &self.checks {
            write!(f, "\n{}\n", check.render())?;
        }
        write!(f, "\n{REPORT_OUTRO}")
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Runs every check against a table.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: DtaConfig,
}

impl Validator {
    pub fn new(config: DtaConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, table: &Table) -> ValidationReport {
        let checks: Vec<CheckReport> = CheckKind::ALL.iter().map(|k| k.run(table, &self.config)).collect();
        tracing::debug!(
            findings = checks.iter().map(|c| c.findings.len()).sum::<usize>(),
            skipped = checks.iter().filter(|c| c.skipped.is_some()).count(),
            "validation finished"
        );
        ValidationReport { checks }
    }
}

// ============================================================================
// Message helpers
// ============================================================================

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// `"A", "B", "C"`
pub(crate) fn quoted<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|i| format!("\"{i}\"")).collect::<Vec<_>>().join(", ")
}

/// Singular/plural pick.
pub(crate) fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
