use kira_mutscan::scan::matrix::{
    build_matrices, build_view, HeatmapData, ViewMode, SUMMARY_RESIDUE_CAP,
};
use kira_mutscan::scan::rank::rank_and_bin;
use kira_mutscan::scan::RankedRow;
use kira_mutscan::table::{resolve_schema, ResultsTable};

fn ranked(rows: &[(&str, f64)]) -> Vec<RankedRow> {
    let t = ResultsTable {
        headers: vec!["mutant".to_string(), "score".to_string()],
        rows: rows
            .iter()
            .map(|(m, s)| vec![m.to_string(), format!("{}", s)])
            .collect(),
    };
    rank_and_bin(&t, &resolve_schema(&t))
}

fn matrices(data: HeatmapData) -> kira_mutscan::scan::matrix::HeatmapMatrices {
    match data {
        HeatmapData::Ready(m) => m,
        HeatmapData::NoData => panic!("expected matrices"),
    }
}

#[test]
fn shape_is_positions_by_twenty() {
    let rows = ranked(&[("M1A", 0.9), ("M1C", 0.5), ("A2K", 0.3), ("G7W", 0.1)]);
    let m = matrices(build_matrices(&rows, None));

    assert_eq!(m.row_labels, vec!["M1", "A2", "G7"]);
    assert_eq!(m.column_labels.len(), 20);
    assert_eq!(m.bins.len(), 3);
    assert!(m.bins.iter().all(|row| row.len() == 20));
    assert_eq!(m.total_positions, 3);
    assert!(!m.is_partial());
}

#[test]
fn cap_keeps_first_positions_only() {
    let source: Vec<(String, f64)> = (1..=50)
        .map(|i| (format!("M{}A", i), 1.0 - i as f64 / 100.0))
        .collect();
    let rows: Vec<RankedRow> = ranked(
        &source
            .iter()
            .map(|(m, s)| (m.as_str(), *s))
            .collect::<Vec<_>>(),
    );
    let m = matrices(build_matrices(&rows, Some(40)));

    assert_eq!(m.row_labels.len(), 40);
    assert_eq!(m.total_positions, 50);
    assert!(m.is_partial());
    assert_eq!(m.row_labels.first().unwrap(), "M1");
    assert_eq!(m.row_labels.last().unwrap(), "M40");
}

#[test]
fn present_pairs_fill_all_three_grids_at_same_coordinates() {
    let rows = ranked(&[("M1A", 0.9), ("M1C", 0.1)]);
    let m = matrices(build_matrices(&rows, None));

    // A is column 0, C is column 1 in the canonical order.
    assert_eq!(m.bins[0][0], Some(10));
    assert_eq!(m.ranks[0][0], Some(1));
    assert_eq!(m.scores[0][0], Some(0.9));
    assert!(m.bins[0][1].is_some());
    assert!(m.ranks[0][1].is_some());
    assert!(m.scores[0][1].is_some());
}

#[test]
fn absent_pairs_stay_unset() {
    let rows = ranked(&[("M1A", 0.9)]);
    let m = matrices(build_matrices(&rows, None));

    let filled: usize = m
        .bins
        .iter()
        .map(|row| row.iter().filter(|c| c.is_some()).count())
        .sum();
    assert_eq!(filled, 1);
}

#[test]
fn scores_are_rounded_to_three_decimals() {
    let rows = ranked(&[("M1A", 0.123456)]);
    let m = matrices(build_matrices(&rows, None));
    assert_eq!(m.scores[0][0], Some(0.123));
}

#[test]
fn wild_type_is_first_observed() {
    let rows = ranked(&[("M1A", 0.9), ("K1C", 0.5)]);
    let m = matrices(build_matrices(&rows, None));
    assert_eq!(m.row_labels, vec!["M1"]);
}

#[test]
fn builder_is_idempotent() {
    let rows = ranked(&[("M1A", 0.9), ("M1C", 0.5), ("A2K", 0.3)]);
    let a = build_matrices(&rows, Some(2));
    let b = build_matrices(&rows, Some(2));
    assert_eq!(a, b);
}

#[test]
fn empty_input_yields_no_data() {
    assert_eq!(build_matrices(&[], None), HeatmapData::NoData);
    assert_eq!(build_view(&[], ViewMode::Summary), HeatmapData::NoData);
}

#[test]
fn summary_view_caps_at_forty_and_full_view_does_not() {
    let source: Vec<(String, f64)> = (1..=45)
        .map(|i| (format!("L{}F", i), 1.0 - i as f64 / 100.0))
        .collect();
    let rows = ranked(
        &source
            .iter()
            .map(|(m, s)| (m.as_str(), *s))
            .collect::<Vec<_>>(),
    );

    let summary = matrices(build_view(&rows, ViewMode::Summary));
    let full = matrices(build_view(&rows, ViewMode::Full));

    assert_eq!(summary.row_labels.len(), SUMMARY_RESIDUE_CAP);
    assert_eq!(full.row_labels.len(), 45);

    // Both views come from the same ranked rows, so shared cells agree.
    assert_eq!(summary.ranks[0], full.ranks[0]);
    assert_eq!(summary.bins[0], full.bins[0]);
}
