/// A scorer output table: header row plus string records, created once by
/// the invoker and consumed read-only by every downstream stage.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultsTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One-shot column resolution, threaded explicitly to every consumer
/// instead of re-sniffing headers ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaResolution {
    Resolved {
        mutation_idx: usize,
        score_idx: usize,
    },
    Unresolved,
}

impl SchemaResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Identify the mutation and score columns of a raw table.
///
/// Scoring back-ends disagree on header naming, so identity is heuristic:
/// the mutation column is an exact `mutant` header match, else the first
/// column; the score column is the first header containing `score`
/// (case-insensitive), else the second column. Tables with fewer than two
/// columns are `Unresolved`.
pub fn resolve_schema(table: &ResultsTable) -> SchemaResolution {
    if table.headers.len() < 2 {
        return SchemaResolution::Unresolved;
    }
    let mutation_idx = table
        .headers
        .iter()
        .position(|h| h == "mutant")
        .unwrap_or(0);
    let score_idx = table
        .headers
        .iter()
        .position(|h| h.to_ascii_lowercase().contains("score"))
        .unwrap_or(1);
    SchemaResolution::Resolved {
        mutation_idx,
        score_idx,
    }
}
