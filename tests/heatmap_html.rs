use std::fs;

use tempfile::TempDir;

use kira_mutscan::report::html::write_heatmap;
use kira_mutscan::scan::matrix::{build_matrices, HeatmapData};
use kira_mutscan::scan::rank::rank_and_bin;
use kira_mutscan::table::{resolve_schema, ResultsTable};

fn ranked_table(rows: &[(&str, &str)]) -> ResultsTable {
    ResultsTable {
        headers: vec!["mutant".to_string(), "score".to_string()],
        rows: rows
            .iter()
            .map(|(m, s)| vec![m.to_string(), s.to_string()])
            .collect(),
    }
}

#[test]
fn heatmap_page_carries_labels_and_cell_detail() {
    let t = ranked_table(&[("M1A", "0.9"), ("M1C", "0.1"), ("A2K", "0.5")]);
    let rows = rank_and_bin(&t, &resolve_schema(&t));
    let data = build_matrices(&rows, None);

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("heatmap.html");
    write_heatmap(&path, &data).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("Prediction Heatmap"));
    assert!(html.contains(">M1</text>"));
    assert!(html.contains(">A2</text>"));
    assert!(html.contains("data-pos=\"M1\""));
    assert!(html.contains("data-rank=\"1\""));
    assert!(html.contains("Rank Percentile"));
    // Full view of a 2-position table is not partial.
    assert!(!html.contains("Showing first"));
}

#[test]
fn partial_view_announces_the_truncation() {
    let source: Vec<(String, String)> = (1..=45)
        .map(|i| (format!("M{}A", i), format!("{:.3}", 1.0 - i as f64 / 100.0)))
        .collect();
    let t = ResultsTable {
        headers: vec!["mutant".to_string(), "score".to_string()],
        rows: source
            .iter()
            .map(|(m, s)| vec![m.clone(), s.clone()])
            .collect(),
    };
    let rows = rank_and_bin(&t, &resolve_schema(&t));
    let data = build_matrices(&rows, Some(40));

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("heatmap.html");
    write_heatmap(&path, &data).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("Showing first 40 of 45 residues"));
}

#[test]
fn no_data_renders_a_placeholder_page() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("heatmap.html");
    write_heatmap(&path, &HeatmapData::NoData).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("No data to display"));
}
