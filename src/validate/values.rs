//! Blank value and value type checks.

use hashbrown::HashSet;

use crate::config::DtaConfig;
use crate::model::{Cell, Heading, LineType, PropositionId, RelationType, Table};
use crate::Result;

use super::{ordinal, plural, quoted, Finding};

/// `Proposition` and `Speaker` never blank or `NA`, anywhere.
pub fn check_blank_value(table: &Table, _config: &DtaConfig) -> Result<Vec<Finding>> {
    let proposition = table.require(Heading::Proposition)?;
    let mut findings = Vec::new();
    for column in [Some(proposition), table.column(Heading::Speaker)].into_iter().flatten() {
        if column.cells.iter().any(Cell::is_missing) {
            let heading = Heading::parse(&column.heading).map_or(column.heading.as_str(), |h| h.title());
            findings.push(Finding::error(format!(
                "Values under \"{heading}\" should never be blank or \"NA\"."
            )));
        }
    }
    Ok(findings)
}

/// Column-by-column value checks. The root row is exempt except for
/// `Proposition` and a line type that is filled in.
pub fn check_value_type(table: &Table, config: &DtaConfig) -> Result<Vec<Finding>> {
    let proposition = table.require(Heading::Proposition)?;
    let mut findings = Vec::new();

    // Proposition: unique, never missing
    let mut known: HashSet<PropositionId> = HashSet::with_capacity(proposition.len());
    let mut duplicates: Vec<String> = Vec::new();
    let mut has_missing = false;
    for cell in &proposition.cells {
        match PropositionId::from_cell(cell) {
            Some(id) => {
                if !known.insert(id.clone()) && !duplicates.contains(&id.to_string()) {
                    duplicates.push(id.to_string());
                }
            }
            None => has_missing = true,
        }
    }
    if has_missing || !duplicates.is_empty() {
        let mut message = "Make sure no duplicate or \"NA\" exists in \"Proposition\" column.".to_owned();
        if !duplicates.is_empty() {
            message.push_str(&format!(" Duplicated: {}.", quoted(&duplicates)));
        }
        findings.push(Finding::error(message));
    }

    // Responds To: resolves to some proposition
    if let Some(responds_to) = table.column(Heading::RespondsTo) {
        let mut unresolved: Vec<String> = Vec::new();
        for cell in responds_to.cells.iter().skip(1) {
            let label = match PropositionId::from_cell(cell) {
                Some(id) if known.contains(&id) => continue,
                Some(id) => id.to_string(),
                None => "NA".to_owned(),
            };
            if !unresolved.contains(&label) {
                unresolved.push(label);
            }
        }
        if !unresolved.is_empty() {
            findings.push(Finding::error(format!(
                "\"Responds To\" column has {} that {} not exist in \"Proposition\" column.",
                quoted(&unresolved),
                plural(unresolved.len(), "does", "do"),
            )));
        }
    }

    // Relation Type: a known tag; Distance: what the tag expects
    if let Some(relation_type) = table.column(Heading::RelationType) {
        let accepted = config.relation_set.tags();
        let mut unknown: Vec<String> = Vec::new();
        for cell in relation_type.cells.iter().skip(1) {
            let valid = RelationType::from_cell(cell).is_some_and(|r| config.relation_set.contains(r));
            if !valid {
                let label = cell.as_text().unwrap_or_else(|| "NA".to_owned());
                if !unknown.contains(&label) {
                    unknown.push(label);
                }
            }
        }
        if !unknown.is_empty() {
            let allowed: Vec<String> = accepted
                .iter()
                .map(|r| format!("\"{}\" ({})", r.tag(), r.legend_name()))
                .collect();
            findings.push(Finding::error(format!(
                "\"Relation Type\" column has {} that {} not fit. The relation can only be one of {}.",
                quoted(&unknown),
                plural(unknown.len(), "does", "do"),
                allowed.join(", "),
            )));
        }

        if let Some(distance) = table.column(Heading::Distance) {
            for (row, cell) in relation_type.cells.iter().enumerate().skip(1) {
                let Some(relation) = RelationType::from_cell(cell).filter(|r| config.relation_set.contains(*r)) else {
                    continue;
                };
                let matches = distance.get(row).as_float().is_some_and(|d| relation.accepts_distance(d));
                if !matches {
                    findings.push(Finding::error(format!(
                        "The {} row's relation type and distance mismatch.",
                        ordinal(row + 1)
                    )));
                }
            }
        }
    }

    // Line Type: a recognized encoding
    if let Some(line_type) = table.column(Heading::LineType) {
        let encodings: Vec<String> = [LineType::NoLine, LineType::Solid, LineType::Dotted]
            .iter()
            .map(|l| format!("{} ({l})", l.code()))
            .collect();
        for (row, cell) in line_type.cells.iter().enumerate() {
            if row == 0 && cell.is_missing() {
                continue;
            }
            if LineType::from_cell(cell).is_none() {
                findings.push(Finding::error(format!(
                    "The {} row's line type is specified incorrectly. Use {}, or {}.",
                    ordinal(row + 1),
                    encodings[..2].join(", "),
                    encodings[2],
                )));
            }
        }
    }

    Ok(findings)
}
