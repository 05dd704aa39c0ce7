use std::process::Command;

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::{Ctx, InvokeStatus, RunEvent};
use crate::io::table_reader;
use crate::pipeline::Stage;
use crate::schema::v1::AnalysisKind;
use crate::table::ResultsTable;

pub struct Stage2Invoke;

impl Stage2Invoke {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Invoke {
    fn name(&self) -> &'static str {
        "stage2_invoke"
    }

    /// Run the scoring back-end as an isolated subprocess and capture its
    /// table. All three outcomes are values on `Ctx`, never errors: the
    /// host process must survive a crashing scorer. The per-run output file
    /// is left on disk; the export stage owns cleanup policy.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let def = match ctx.scorers.find(&ctx.scorer, ctx.kind) {
            Some(def) => *def,
            None => {
                let status = InvokeStatus::Failed(format!(
                    "unknown {} scorer '{}'",
                    ctx.kind.as_str(),
                    ctx.scorer
                ));
                finish(ctx, status, ResultsTable::empty());
                return Ok(());
            }
        };

        let exe = ctx.scorers.executable_path(&def, &ctx.scorers_dir);
        let file_flag = match ctx.kind {
            AnalysisKind::Sequence => "--fasta_file",
            AnalysisKind::Structure => "--pdb_file",
        };

        info!(
            scorer = def.name,
            exe = %exe.display(),
            output = %ctx.scorer_output_path.display(),
            "scorer_invocation"
        );

        let output = Command::new(&exe)
            .arg(file_flag)
            .arg(&ctx.input)
            .arg("--output_csv")
            .arg(&ctx.scorer_output_path)
            .output();

        let status = match output {
            Err(err) => {
                InvokeStatus::Failed(format!("failed to launch {}: {}", exe.display(), err))
            }
            Ok(out) if !out.status.success() => {
                InvokeStatus::Failed(String::from_utf8_lossy(&out.stderr).trim_end().to_string())
            }
            Ok(_) => {
                if ctx.scorer_output_path.exists() {
                    match table_reader::read_table(&ctx.scorer_output_path) {
                        Ok(table) => {
                            finish(ctx, InvokeStatus::Completed, table);
                            return Ok(());
                        }
                        Err(err) => {
                            InvokeStatus::Failed(format!("failed to parse scorer output: {}", err))
                        }
                    }
                } else {
                    InvokeStatus::CompletedNoOutput
                }
            }
        };

        if let InvokeStatus::Failed(diagnostics) = &status {
            warn!(scorer = def.name, diagnostics = %diagnostics, "scorer_failed");
        }
        finish(ctx, status, ResultsTable::empty());
        Ok(())
    }
}

fn finish(ctx: &mut Ctx, status: InvokeStatus, table: ResultsTable) {
    ctx.report.status = Some(status.message());
    ctx.report.table.rows = table.rows.len() as u64;
    if let InvokeStatus::Failed(_) = &status {
        ctx.emit(RunEvent::Failed(status.message()));
    }
    ctx.invoke_status = Some(status);
    ctx.raw_table = Some(table);
}
