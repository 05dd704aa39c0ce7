use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::registry::{ProviderRegistry, ScorerRegistry};
use crate::report::AiOutcome;
use crate::scan::matrix::HeatmapData;
use crate::scan::RankedRow;
use crate::schema::v1::{AnalysisKind, MutScanV1};
use crate::table::{ResultsTable, SchemaResolution};

/// Progress phases emitted while a run advances. Numeric results are always
/// announced (`Scored`) before the optional summarization path starts.
#[derive(Debug, Clone)]
pub enum RunEvent {
    Started,
    Scored,
    Summarizing,
    Complete,
    Failed(String),
}

/// Outcome of one scorer invocation. `Failed` halts artifact production for
/// the run; `CompletedNoOutput` is kept distinct so operators can tell
/// "crashed" from "silently produced nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeStatus {
    Completed,
    CompletedNoOutput,
    Failed(String),
}

impl InvokeStatus {
    pub fn message(&self) -> String {
        match self {
            InvokeStatus::Completed => "Prediction completed successfully!".to_string(),
            InvokeStatus::CompletedNoOutput => {
                "Prediction completed but no output file was generated.".to_string()
            }
            InvokeStatus::Failed(diagnostics) => format!("Prediction failed: {}", diagnostics),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub results_csv_path: PathBuf,
    pub heatmap_path: PathBuf,
    pub report_md_path: PathBuf,
    pub json_path: PathBuf,
    pub bundle_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub kind: AnalysisKind,
    pub scorer: String,
    pub input: PathBuf,
    pub scorers_dir: PathBuf,
    pub enable_ai: bool,
    pub provider: String,
    pub api_key: Option<String>,
    pub write_json: bool,
    pub scorers: ScorerRegistry,
    pub providers: ProviderRegistry,
    /// Per-run token keeping concurrent runs' scratch files apart.
    pub run_token: u128,
    pub scorer_output_path: PathBuf,
    pub sequence: Option<String>,
    pub invoke_status: Option<InvokeStatus>,
    pub raw_table: Option<ResultsTable>,
    pub schema: Option<SchemaResolution>,
    pub ranked: Vec<RankedRow>,
    pub summary_view: Option<HeatmapData>,
    pub full_view: Option<HeatmapData>,
    pub ai_outcome: AiOutcome,
    pub warnings: Vec<String>,
    pub progress: Option<Sender<RunEvent>>,
    pub output: OutputPaths,
    pub report: MutScanV1,
}

impl Ctx {
    pub fn new(
        kind: AnalysisKind,
        scorer: String,
        input: PathBuf,
        out_dir: PathBuf,
        tool_version: &str,
    ) -> Self {
        let run_token = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let scorer_output_path = out_dir.join(format!("scan_{}_{}.csv", kind.as_str(), run_token));
        let bundle_path = out_dir.join(format!(
            "prediction_{}_results_{}.zip",
            kind.as_str(),
            run_token
        ));
        let report = MutScanV1::empty(
            tool_version,
            kind,
            &scorer,
            &input.display().to_string(),
            false,
        );
        Self {
            kind,
            scorer,
            input,
            scorers_dir: PathBuf::from("scorers"),
            enable_ai: false,
            provider: "DeepSeek".to_string(),
            api_key: None,
            write_json: false,
            scorers: ScorerRegistry::builtin(),
            providers: ProviderRegistry::builtin(),
            run_token,
            scorer_output_path,
            sequence: None,
            invoke_status: None,
            raw_table: None,
            schema: None,
            ranked: Vec::new(),
            summary_view: None,
            full_view: None,
            ai_outcome: AiOutcome::Disabled,
            warnings: Vec::new(),
            progress: None,
            output: OutputPaths {
                results_csv_path: out_dir.join("prediction_results.csv"),
                heatmap_path: out_dir.join("prediction_heatmap.html"),
                report_md_path: out_dir.join("AI_Analysis_Report.md"),
                json_path: out_dir.join("mutscan.json"),
                bundle_path,
                out_dir,
            },
            report,
        }
    }

    /// True once the scoring path has failed; later stages skip their work.
    pub fn halted(&self) -> bool {
        matches!(self.invoke_status, Some(InvokeStatus::Failed(_)))
    }

    pub fn emit(&self, event: RunEvent) {
        if let Some(tx) = &self.progress {
            let _ = tx.send(event);
        }
    }
}
