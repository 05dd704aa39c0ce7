use crate::table::{resolve_schema, ResultsTable, SchemaResolution};

/// Fraction of rows quoted from each end of the ranked table.
const SLICE_FRACTION: f64 = 0.05;

/// Build the structured analysis request for a ranked results table.
///
/// The table must already be sorted from most to least favorable. Column
/// identity is resolved here again even when the caller validated the table
/// upstream, so a bad table yields `None` instead of a panic. Tables with
/// fewer than 5 rows are quoted in full as the top slice with no bottom
/// slice, so the two excerpts never overlap.
pub fn build_analysis_prompt(table: &ResultsTable, scorer_name: &str) -> Option<String> {
    let (mutation_idx, score_idx) = match resolve_schema(table) {
        SchemaResolution::Resolved {
            mutation_idx,
            score_idx,
        } => (mutation_idx, score_idx),
        SchemaResolution::Unresolved => return None,
    };

    let n = table.rows.len();
    let (top_count, bottom_count) = if n < 5 {
        (n, 0)
    } else {
        let count = ((n as f64 * SLICE_FRACTION) as usize).max(1);
        (count, count)
    };

    let mutation_header = &table.headers[mutation_idx];
    let score_header = &table.headers[score_idx];

    let top = format_slice(
        &table.rows[..top_count],
        mutation_idx,
        score_idx,
        mutation_header,
        score_header,
    );
    let bottom = if bottom_count > 0 {
        format_slice(
            &table.rows[n - bottom_count..],
            mutation_idx,
            score_idx,
            mutation_header,
            score_header,
        )
    } else {
        "N/A".to_string()
    };

    Some(format!(
        r#"Please act as an expert protein engineer and analyze the following mutation prediction results generated by the '{scorer}' model.

A deep mutational scan was performed. The results are sorted from most beneficial to least beneficial based on the '{score_col}' column (a zero-shot score). Below are the most significant findings: the top 5% and the bottom 5% of mutations.

### Top 5% Predicted Mutations (Potentially Most Beneficial):
```
{top}
```

### Bottom 5% Predicted Mutations (Potentially Most Detrimental):
```
{bottom}
```

### Your Analysis Task:
Based on this data, provide a structured scientific analysis report that includes the following sections:

1. **Executive Summary**: Briefly summarize the key findings. Are there clear hotspot regions for beneficial mutations?
2. **Analysis of Beneficial Mutations**: Discuss the top mutations. Are there specific residues or regions that show potential as hotspots for improvement? What biochemical properties might these mutations be altering (e.g., improving protein packing, removing unfavorable charges)?
3. **Analysis of Detrimental Mutations & Sequence Conservation**: Discuss the mutations predicted to be most harmful. What do these positions tell us about sequence conservation and functionally critical residues? Positions that are highly intolerant to mutation are likely essential for the protein's structure or function.
4. **Recommendations for Experimentation**: Based on your analysis, suggest 3-5 specific point mutations that are the most promising candidates for experimental validation in the lab. Please justify your choices.

Please provide a concise, clear, and insightful report in a professional scientific tone suitable for biologists.
"#,
        scorer = scorer_name,
        score_col = score_header,
        top = top,
        bottom = bottom,
    ))
}

/// Render (mutation, score) pairs as a fixed-width, right-aligned text
/// table with a header row.
fn format_slice(
    rows: &[Vec<String>],
    mutation_idx: usize,
    score_idx: usize,
    mutation_header: &str,
    score_header: &str,
) -> String {
    let cell = |row: &Vec<String>, idx: usize| -> String {
        row.get(idx).cloned().unwrap_or_default()
    };

    let mutation_width = rows
        .iter()
        .map(|r| cell(r, mutation_idx).len())
        .chain(std::iter::once(mutation_header.len()))
        .max()
        .unwrap_or(0);
    let score_width = rows
        .iter()
        .map(|r| cell(r, score_idx).len())
        .chain(std::iter::once(score_header.len()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{:>mw$} {:>sw$}",
        mutation_header,
        score_header,
        mw = mutation_width,
        sw = score_width
    );
    for row in rows {
        out.push('\n');
        out.push_str(&format!(
            "{:>mw$} {:>sw$}",
            cell(row, mutation_idx),
            cell(row, score_idx),
            mw = mutation_width,
            sw = score_width
        ));
    }
    out
}
