//! Heading check: the seven required headings, each exactly once.
//!
//! Matching is case- and order-insensitive; spacing inside a heading matters.
//! Extra headings are allowed but never looked at.

use crate::config::DtaConfig;
use crate::model::{Heading, Table};
use crate::Result;

use super::{plural, quoted, Finding};

pub fn check_heading(table: &Table, _config: &DtaConfig) -> Result<Vec<Finding>> {
    let mut seen: Vec<(Heading, usize)> = Vec::new();
    let mut extras: Vec<String> = Vec::new();
    for raw in table.headings() {
        match Heading::parse(raw) {
            Some(h) => match seen.iter_mut().find(|(s, _)| *s == h) {
                Some((_, count)) => *count += 1,
                None => seen.push((h, 1)),
            },
            None => {
                let trimmed = raw.trim().to_owned();
                if !extras.iter().any(|e| e.eq_ignore_ascii_case(&trimmed)) {
                    extras.push(trimmed);
                }
            }
        }
    }

    let mut duplicated: Vec<Heading> = seen.iter().filter(|(_, n)| *n > 1).map(|(h, _)| *h).collect();
    duplicated.sort();
    let missing: Vec<&str> = Heading::ALL
        .iter()
        .filter(|h| !seen.iter().any(|(s, _)| s == *h))
        .map(|h| h.title())
        .collect();

    let mut findings = Vec::new();
    if !duplicated.is_empty() {
        findings.push(Finding::error(format!(
            "Multiple {} headings exist.",
            quoted(&duplicated)
        )));
    }
    if !missing.is_empty() {
        findings.push(Finding::error(format!(
            "{} {} {} missing.",
            plural(missing.len(), "Heading", "Headings"),
            quoted(&missing),
            plural(missing.len(), "is", "are"),
        )));
        if !extras.is_empty() {
            findings.push(Finding::warning(format!(
                "Values under {} {} will not be used.",
                plural(extras.len(), "heading", "headings"),
                quoted(&extras),
            )));
        }
    } else if !extras.is_empty() {
        findings.push(Finding::warning(format!(
            "Required headings are all specified correctly. No check will be performed on extra {} {}.",
            plural(extras.len(), "heading", "headings"),
            quoted(&extras),
        )));
    }

    if findings.iter().any(|f| f.severity == super::Severity::Error) {
        let titles: Vec<&str> = Heading::ALL.iter().map(|h| h.title()).collect();
        findings.push(Finding::warning(format!(
            "Please make sure the following seven headings are specified: {}. \
             Headings are case- and order-insensitive, but spacing within a heading matters. \
             \"Dotted Line\" is accepted in place of \"Line Type\".",
            quoted(&titles),
        )));
    }
    Ok(findings)
}
