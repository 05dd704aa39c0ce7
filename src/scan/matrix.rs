use std::collections::HashMap;

use crate::scan::{RankedRow, AMINO_ACIDS};

/// Position cap used by the summary view.
pub const SUMMARY_RESIDUE_CAP: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Summary,
    Full,
}

/// Dense position x substitution matrices for heatmap rendering.
///
/// The three grids share one shape: `row_labels.len()` rows by 20 columns
/// in `AMINO_ACIDS` order. A cell is `None` when the corresponding
/// (position, substitution) pair never appeared in the ranked rows; `None`
/// is the only "no data" marker, there is no numeric sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapMatrices {
    pub row_labels: Vec<String>,
    pub column_labels: [char; 20],
    pub bins: Vec<Vec<Option<u8>>>,
    pub ranks: Vec<Vec<Option<u32>>>,
    pub scores: Vec<Vec<Option<f64>>>,
    /// Distinct positions observed before any cap was applied.
    pub total_positions: usize,
}

impl HeatmapMatrices {
    pub fn is_partial(&self) -> bool {
        self.row_labels.len() < self.total_positions
    }
}

/// Matrix builder output; callers must check for `NoData` before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum HeatmapData {
    NoData,
    Ready(HeatmapMatrices),
}

/// Stateless view re-entry point: both views are rebuilt from the same
/// ranked rows, so rank and bin values stay globally correct in either.
pub fn build_view(rows: &[RankedRow], mode: ViewMode) -> HeatmapData {
    match mode {
        ViewMode::Summary => build_matrices(rows, Some(SUMMARY_RESIDUE_CAP)),
        ViewMode::Full => build_matrices(rows, None),
    }
}

/// Lay ranked rows out as dense position x substitution matrices.
///
/// Rows ascend by position; `cap` keeps only the first `cap` distinct
/// positions. The wild type shown in a row label is the first one observed
/// at that position.
pub fn build_matrices(rows: &[RankedRow], cap: Option<usize>) -> HeatmapData {
    if rows.is_empty() {
        return HeatmapData::NoData;
    }

    let mut wild_types: HashMap<u32, char> = HashMap::new();
    let mut positions: Vec<u32> = Vec::new();
    for row in rows {
        let pos = row.code.position;
        wild_types.entry(pos).or_insert(row.code.wild_type);
        if !positions.contains(&pos) {
            positions.push(pos);
        }
    }
    positions.sort_unstable();
    let total_positions = positions.len();
    if let Some(cap) = cap {
        positions.truncate(cap);
    }

    let row_index: HashMap<u32, usize> = positions
        .iter()
        .enumerate()
        .map(|(i, &pos)| (pos, i))
        .collect();
    let col_index: HashMap<char, usize> = AMINO_ACIDS
        .iter()
        .enumerate()
        .map(|(i, &aa)| (aa, i))
        .collect();

    let shape = (positions.len(), AMINO_ACIDS.len());
    let mut bins = vec![vec![None; shape.1]; shape.0];
    let mut ranks = vec![vec![None; shape.1]; shape.0];
    let mut scores = vec![vec![None; shape.1]; shape.0];

    for row in rows {
        let y = match row_index.get(&row.code.position) {
            Some(&y) => y,
            None => continue,
        };
        let x = match col_index.get(&row.code.substitution) {
            Some(&x) => x,
            None => continue,
        };
        bins[y][x] = Some(row.bin);
        ranks[y][x] = Some(row.rank);
        scores[y][x] = Some((row.score * 1000.0).round() / 1000.0);
    }

    let row_labels = positions
        .iter()
        .map(|pos| format!("{}{}", wild_types.get(pos).copied().unwrap_or('?'), pos))
        .collect();

    HeatmapData::Ready(HeatmapMatrices {
        row_labels,
        column_labels: AMINO_ACIDS,
        bins,
        ranks,
        scores,
        total_positions,
    })
}

/// Count of distinct positions carrying at least one valid mutation.
pub fn total_residue_count(rows: &[RankedRow]) -> usize {
    let mut positions: Vec<u32> = rows.iter().map(|r| r.code.position).collect();
    positions.sort_unstable();
    positions.dedup();
    positions.len()
}
