use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Sequence,
    Structure,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Sequence => "sequence",
            AnalysisKind::Structure => "structure",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMeta {
    pub kind: AnalysisKind,
    pub scorer: String,
    pub input: String,
    pub sequence_length: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStats {
    pub rows: u64,
    pub valid_mutations: u64,
    pub distinct_positions: u64,
    pub dropped_rows: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifacts {
    pub results_csv: Option<String>,
    pub heatmap_html: Option<String>,
    pub ai_report: Option<String>,
    pub bundle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiMeta {
    pub enabled: bool,
    pub provider: Option<String>,
    pub summary_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutScanV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub analysis: AnalysisMeta,
    pub status: Option<String>,
    pub table: TableStats,
    pub artifacts: Artifacts,
    pub ai: AiMeta,
    pub warnings: Vec<String>,
}

impl MutScanV1 {
    pub fn empty(
        tool_version: &str,
        kind: AnalysisKind,
        scorer: &str,
        input: &str,
        ai_enabled: bool,
    ) -> Self {
        Self {
            tool: "kira-mutscan".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            analysis: AnalysisMeta {
                kind,
                scorer: scorer.to_string(),
                input: input.to_string(),
                sequence_length: None,
            },
            status: None,
            table: TableStats {
                rows: 0,
                valid_mutations: 0,
                distinct_positions: 0,
                dropped_rows: 0,
            },
            artifacts: Artifacts {
                results_csv: None,
                heatmap_html: None,
                ai_report: None,
                bundle: None,
            },
            ai: AiMeta {
                enabled: ai_enabled,
                provider: None,
                summary_available: false,
            },
            warnings: Vec::new(),
        }
    }
}
