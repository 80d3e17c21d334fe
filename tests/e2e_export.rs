//! End-to-end tests for JSON and report export.
//!
//! Tests the exported document shape a charting front end reads.

use visual_dta::export::{export_json, export_report};
use visual_dta::{Cell, Dta, PlotOptions, Table};

const HEADINGS: [&str; 7] = ["Proposition", "Speaker", "Responds To", "Relation Type", "Distance", "Line Type", "Text"];

fn transcript() -> Table {
    Table::from_rows(
        &HEADINGS,
        vec![
            vec![0.into(), "A".into(), "NA".into(), "NA".into(), "NA".into(), "NA".into(), "Where to?".into()],
            vec![1.into(), "B".into(), 0.into(), "T".into(), 0.into(), 1.into(), "North.".into()],
            vec![2.into(), "A".into(), 1.into(), "P".into(), 2.into(), 2.into(), "Or the coast.".into()],
            vec![3.into(), "B".into(), 2.into(), "B".into(), 4.into(), 1.into(), "Coffee?".into()],
        ],
    )
}

fn exported(dta: &Dta) -> serde_json::Value {
    let analysis = dta.analyze(&transcript()).unwrap();
    let mut out = Vec::new();
    export_json(&analysis, &mut out).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn test_export_document_shape() {
    let doc = exported(&Dta::default());

    for key in ["generated_at", "row_count", "nodes", "positions", "edges", "plot", "metrics"] {
        assert!(doc.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(doc["row_count"], 4);
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(doc["nodes"][2]["id"], 2);
    assert_eq!(doc["nodes"][2]["x"], 2.0);
    assert_eq!(doc["nodes"][0]["y"], 4.0);

    // RFC 3339 timestamp from chrono
    let stamp = doc["generated_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "{stamp}");
}

#[test]
fn test_export_metrics_keys() {
    let doc = exported(&Dta::default());
    let metrics = &doc["metrics"];
    assert_eq!(metrics["accumulated_semantic_distance"], 6.0);
    assert_eq!(metrics["mean_semantic_distance"], 2.0);
    assert_eq!(metrics["mean_semantic_distance_only_for_P"], 2.0);
}

#[test]
fn test_export_edge_traces_use_gaps() {
    let doc = exported(&Dta::default());
    let solid = &doc["edges"]["solid"]["x"];
    assert_eq!(solid, &serde_json::json!([0.0, 0.0, null]));
    // the break row contributes no segment
    assert_eq!(doc["edges"]["edges"].as_array().unwrap().len(), 2);

    let names: Vec<&str> = doc["plot"]["edges"].as_array().unwrap().iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["responds to", "may respond to", "no line"]);
}

#[test]
fn test_export_without_annotations() {
    let dta = Dta::default().with_plot_options(PlotOptions { show_text: false });
    let doc = exported(&dta);
    assert!(doc["plot"]["annotations"].as_array().unwrap().is_empty());
}

#[test]
fn test_export_report_text() {
    let mut rows = vec![vec![Cell::from(1), "A".into(), "NA".into(), "NA".into(), "NA".into(), "NA".into(), "hi".into()]];
    rows.push(vec![2.into(), "B".into(), 1.into(), "T".into(), 0.into(), 1.into(), "yo".into()]);
    let report = Dta::default().validate(&Table::from_rows(&HEADINGS, rows));

    let mut out = Vec::new();
    export_report(&report, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Successfully uploaded!"));
    assert!(text.contains("Please specify the first value under \"Proposition\" as \"0\"."));
}
