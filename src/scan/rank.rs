use crate::scan::{MutationCode, RankedRow};
use crate::table::{ResultsTable, SchemaResolution};

/// Rank a validated results table and assign decile bins.
///
/// Rows whose mutation token fails the `MutationCode` invariant, or whose
/// score is missing or non-finite, are dropped here; they cannot be ranked
/// or plotted but still appear in the raw exported table. The input order
/// is not trusted: rows are re-sorted by score descending (stable) before
/// ranks are assigned, so an unsorted table cannot produce bogus ranks.
///
/// Ranks are competition ranks: equal scores share the minimum rank of the
/// tie group. Bins invert the decile index so that higher bin = more
/// favorable; the rank-1 group always lands in bin 10, including the
/// degenerate n < 10 case where the plain decile formula would not place
/// it there.
pub fn rank_and_bin(table: &ResultsTable, schema: &SchemaResolution) -> Vec<RankedRow> {
    let (mutation_idx, score_idx) = match schema {
        SchemaResolution::Resolved {
            mutation_idx,
            score_idx,
        } => (*mutation_idx, *score_idx),
        SchemaResolution::Unresolved => return Vec::new(),
    };

    let mut rows: Vec<(MutationCode, String, f64)> = Vec::new();
    for record in &table.rows {
        let raw = match record.get(mutation_idx) {
            Some(v) => v,
            None => continue,
        };
        let code = match MutationCode::parse(raw) {
            Some(c) => c,
            None => continue,
        };
        let score = record
            .get(score_idx)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite());
        let score = match score {
            Some(s) => s,
            None => continue,
        };
        rows.push((code, raw.to_string(), score));
    }

    rows.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    let n = rows.len();
    let mut out = Vec::with_capacity(n);
    let mut rank = 0u32;
    let mut prev_score = f64::INFINITY;
    for (i, (code, raw, score)) in rows.into_iter().enumerate() {
        if score != prev_score {
            rank = i as u32 + 1;
            prev_score = score;
        }
        out.push(RankedRow {
            code,
            raw,
            score,
            rank,
            bin: decile_bin(rank, n),
        });
    }
    out
}

fn decile_bin(rank: u32, n: usize) -> u8 {
    if rank == 1 {
        return 10;
    }
    let bin_width = n as f64 / 10.0;
    let decile = (rank as f64 / bin_width).ceil().min(10.0);
    (11.0 - decile).max(1.0) as u8
}
