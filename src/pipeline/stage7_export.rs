use std::fs;

use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, RunEvent};
use crate::io::{bundle, table_writer, write_json};
use crate::pipeline::Stage;
use crate::report::html;
use crate::scan::matrix::HeatmapData;

pub struct Stage7Export;

impl Stage7Export {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Export {
    fn name(&self) -> &'static str {
        "stage7_export"
    }

    /// Materialize the artifacts and the bundle. The bundle packs whatever
    /// of the fixed-name artifacts exist on disk; a missing report or
    /// heatmap only shrinks the archive.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.halted() {
            return Ok(());
        }

        if let Some(table) = &ctx.raw_table {
            table_writer::write_table(&ctx.output.results_csv_path, table)?;
            ctx.report.artifacts.results_csv = Some("prediction_results.csv".to_string());
        }

        // Artifact names are fixed, so a reused out dir may still hold a
        // previous run's files; anything this run did not produce must not
        // leak into its bundle.
        match &ctx.full_view {
            Some(view @ HeatmapData::Ready(_)) => {
                html::write_heatmap(&ctx.output.heatmap_path, view)?;
                ctx.report.artifacts.heatmap_html = Some("prediction_heatmap.html".to_string());
            }
            _ => {
                let _ = fs::remove_file(&ctx.output.heatmap_path);
            }
        }

        match ctx.ai_outcome.summary_text() {
            Some(text) => {
                fs::write(&ctx.output.report_md_path, text)?;
                ctx.report.artifacts.ai_report = Some("AI_Analysis_Report.md".to_string());
            }
            None => {
                let _ = fs::remove_file(&ctx.output.report_md_path);
            }
        }

        let entries = [
            (ctx.output.results_csv_path.clone(), "prediction_results.csv"),
            (ctx.output.heatmap_path.clone(), "prediction_heatmap.html"),
            (ctx.output.report_md_path.clone(), "AI_Analysis_Report.md"),
        ];
        let included = bundle::write_bundle(&ctx.output.bundle_path, &entries)?;
        ctx.report.artifacts.bundle = Some(
            ctx.output
                .bundle_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        info!(
            bundle = %ctx.output.bundle_path.display(),
            entries = included.len(),
            "bundle_ready"
        );

        ctx.report.warnings = ctx.warnings.clone();
        if ctx.write_json {
            write_json(&ctx.output.json_path, &ctx.report)?;
        }

        ctx.emit(RunEvent::Complete);
        Ok(())
    }
}
