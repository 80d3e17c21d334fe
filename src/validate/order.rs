//! Order check: every `Responds To` must point backwards.
//!
//! The layout engine resolves references in row order, so a reference to
//! the same row or a later one cannot be laid out. This check names each
//! such pair without trying to fix it.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::config::DtaConfig;
use crate::model::{Heading, PropositionId, Table};
use crate::Result;

use super::{ordinal, Finding};

pub fn check_order(table: &Table, _config: &DtaConfig) -> Result<Vec<Finding>> {
    let proposition = table.require(Heading::Proposition)?;
    let responds_to = table.require(Heading::RespondsTo)?;

    let mut rows_by_id: HashMap<PropositionId, SmallVec<[usize; 2]>> = HashMap::with_capacity(proposition.len());
    for (row, cell) in proposition.cells.iter().enumerate() {
        if let Some(id) = PropositionId::from_cell(cell) {
            rows_by_id.entry(id).or_default().push(row);
        }
    }

    let mut findings = Vec::new();
    for (row, cell) in responds_to.cells.iter().enumerate().skip(1) {
        let Some(target) = PropositionId::from_cell(cell) else { continue };
        let Some(rows) = rows_by_id.get(&target) else { continue };
        for &target_row in rows.iter().filter(|&&r| r >= row) {
            let message = if target_row == row {
                format!(
                    "\"Responds To\" value {target} (in the {} row) and its corresponding \"Proposition\" value appear in the same row, double check it.",
                    ordinal(row + 1),
                )
            } else {
                format!(
                    "\"Responds To\" value {target} (in the {} row) appears earlier than its corresponding \"Proposition\" value (in the {} row), double check it.",
                    ordinal(row + 1),
                    ordinal(target_row + 1),
                )
            };
            findings.push(Finding::warning(message));
        }
    }

    if !findings.is_empty() {
        findings.push(Finding::warning(
            "Please make sure the corresponding value in \"Proposition\" appears before the value in \"Responds To\".",
        ));
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, Column};

    fn table(propositions: Vec<Cell>, responds_to: Vec<Cell>) -> Table {
        Table::from_columns(vec![
            Column::new("Proposition", propositions),
            Column::new("Responds To", responds_to),
        ])
    }

    #[test]
    fn test_backward_references_pass() {
        let t = table(
            vec![Cell::Int(0), Cell::Int(1), Cell::Int(2)],
            vec![Cell::from("NA"), Cell::Int(0), Cell::Int(1)],
        );
        assert!(check_order(&t, &DtaConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_forward_reference() {
        let t = table(
            vec![Cell::Int(0), Cell::Int(1), Cell::Int(2)],
            vec![Cell::from("NA"), Cell::Int(2), Cell::Int(0)],
        );
        let findings = check_order(&t, &DtaConfig::default()).unwrap();
        assert_eq!(findings.len(), 2);
        assert_eq!(
            findings[0].message,
            "\"Responds To\" value 2 (in the 2nd row) appears earlier than its corresponding \"Proposition\" value (in the 3rd row), double check it."
        );
    }

    #[test]
    fn test_self_reference() {
        let t = table(vec![Cell::Int(0), Cell::from("1")], vec![Cell::Null, Cell::Float(1.0)]);
        let findings = check_order(&t, &DtaConfig::default()).unwrap();
        assert!(findings[0].message.contains("appear in the same row"));
    }

    #[test]
    fn test_needs_both_columns() {
        let t = Table::new().with_column(Column::new("Proposition", [0, 1]));
        assert!(check_order(&t, &DtaConfig::default()).is_err());
    }
}
