//! First row check: the root row must look like a root.

use crate::config::DtaConfig;
use crate::model::{Heading, PropositionId, Table};
use crate::{Error, Result};

use super::{plural, quoted, Finding};

/// - `Proposition` is the root sentinel.
/// - `Responds To`, `Relation Type` and `Distance` are unknown (`NA`).
/// - `Speaker` and `Text` are filled in.
pub fn check_first_row(table: &Table, config: &DtaConfig) -> Result<Vec<Finding>> {
    let proposition = table.require(Heading::Proposition)?;
    if proposition.is_empty() {
        return Err(Error::EmptyTable);
    }

    let mut findings = Vec::new();
    if PropositionId::from_cell(proposition.get(0)).as_ref() != Some(&config.root_sentinel) {
        findings.push(Finding::error(format!(
            "Please specify the first value under \"Proposition\" as \"{}\".",
            config.root_sentinel
        )));
    }

    let should_be_na: Vec<&str> = [Heading::RespondsTo, Heading::RelationType, Heading::Distance]
        .into_iter()
        .filter(|&h| table.column(h).is_some_and(|c| !c.get(0).is_missing()))
        .map(Heading::title)
        .collect();
    if !should_be_na.is_empty() {
        findings.push(Finding::error(format!(
            "The first {} under {} should be \"NA\".",
            plural(should_be_na.len(), "value", "values"),
            quoted(&should_be_na),
        )));
    }

    for heading in [Heading::Speaker, Heading::Text] {
        if table.column(heading).is_some_and(|c| c.get(0).is_missing()) {
            findings.push(Finding::error(format!(
                "The first value under \"{heading}\" should not be blank."
            )));
        }
    }
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    const HEADINGS: [&str; 7] = ["Proposition", "Speaker", "Responds To", "Relation Type", "Distance", "Line Type", "Text"];

    fn root(cells: Vec<Cell>) -> Table {
        Table::from_rows(&HEADINGS, vec![cells])
    }

    #[test]
    fn test_good_root() {
        let table = root(vec![
            Cell::Int(0), Cell::from("A"), Cell::from("NA"), Cell::from("n/a"), Cell::Null, Cell::Int(0), Cell::from("hi"),
        ]);
        assert!(check_first_row(&table, &DtaConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_every_condition_reports() {
        let table = root(vec![
            Cell::Int(1), Cell::Null, Cell::Int(0), Cell::from("T"), Cell::from("NA"), Cell::Int(0), Cell::from(""),
        ]);
        let messages: Vec<String> = check_first_row(&table, &DtaConfig::default())
            .unwrap()
            .into_iter()
            .map(|f| f.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Please specify the first value under \"Proposition\" as \"0\".",
                "The first values under \"Responds To\", \"Relation Type\" should be \"NA\".",
                "The first value under \"Speaker\" should not be blank.",
                "The first value under \"Text\" should not be blank.",
            ]
        );
    }

    #[test]
    fn test_custom_sentinel() {
        let table = root(vec![
            Cell::from("start"), Cell::from("A"), Cell::Null, Cell::Null, Cell::Null, Cell::Int(0), Cell::from("hi"),
        ]);
        let config = DtaConfig::default().with_root_sentinel("start");
        assert!(check_first_row(&table, &config).unwrap().is_empty());
    }

    #[test]
    fn test_empty_table_skips() {
        let table = Table::from_rows(&HEADINGS, Vec::<Vec<Cell>>::new());
        assert!(check_first_row(&table, &DtaConfig::default()).is_err());
    }
}
