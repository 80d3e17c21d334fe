//! Length checks over the `Proposition` column.

use crate::config::DtaConfig;
use crate::model::{Heading, Table};
use crate::Result;

use super::{plural, quoted, Finding};

/// At least two non-missing propositions: a root and one response.
pub fn check_minimal_length(table: &Table, _config: &DtaConfig) -> Result<Vec<Finding>> {
    let proposition = table.require(Heading::Proposition)?;
    if proposition.count() >= 2 {
        Ok(Vec::new())
    } else {
        Ok(vec![Finding::error("Proposition count is too short (fewer than two).")])
    }
}

/// Every required column is as long as `Proposition`. Absent columns are
/// the heading check's business.
pub fn check_equal_length(table: &Table, _config: &DtaConfig) -> Result<Vec<Finding>> {
    let expected = table.require(Heading::Proposition)?.len();
    let uneven: Vec<&str> = Heading::ALL
        .iter()
        .filter(|&&h| h != Heading::Proposition)
        .filter(|&&h| table.column(h).is_some_and(|c| c.len() != expected))
        .map(|h| h.title())
        .collect();

    if uneven.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![Finding::error(format!(
        "The length of {} {} not equal to the length of the \"Proposition\" column.",
        quoted(&uneven),
        plural(uneven.len(), "is", "are"),
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Column};

    #[test]
    fn test_minimal_length() {
        let config = DtaConfig::default();
        let short = Table::new().with_column(Column::new("Proposition", [Cell::Int(0), Cell::from("NA")]));
        assert_eq!(check_minimal_length(&short, &config).unwrap().len(), 1);
        let ok = Table::new().with_column(Column::new("Proposition", [0, 1]));
        assert!(check_minimal_length(&ok, &config).unwrap().is_empty());
        assert!(check_minimal_length(&Table::new(), &config).is_err());
    }

    #[test]
    fn test_equal_length() {
        let config = DtaConfig::default();
        let table = Table::from_columns(vec![
            Column::new("Proposition", [0, 1, 2]),
            Column::new("Speaker", ["A", "B", "C"]),
            Column::new("Distance", [0, 1]),
            Column::new("Text", ["x"]),
        ]);
        let findings = check_equal_length(&table, &config).unwrap();
        assert_eq!(
            findings,
            vec![Finding::error(
                "The length of \"Distance\", \"Text\" are not equal to the length of the \"Proposition\" column."
            )]
        );
    }
}
