use anyhow::Result;
use tracing::info;

use crate::ctx::{Ctx, RunEvent};
use crate::pipeline::Stage;
use crate::scan::matrix::{self, build_view, HeatmapData, ViewMode};

pub struct Stage5Matrix;

impl Stage5Matrix {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Matrix {
    fn name(&self) -> &'static str {
        "stage5_matrix"
    }

    /// Build both heatmap views from the same ranked rows, so rank and bin
    /// values stay globally correct no matter which view is rendered. The
    /// numeric results of the run are complete after this stage.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.halted() {
            return Ok(());
        }

        let summary = build_view(&ctx.ranked, ViewMode::Summary);
        let full = build_view(&ctx.ranked, ViewMode::Full);

        let positions = matrix::total_residue_count(&ctx.ranked);
        ctx.report.table.distinct_positions = positions as u64;

        match &full {
            HeatmapData::Ready(m) => {
                info!(
                    positions,
                    rows = m.row_labels.len(),
                    "heatmap_matrices_ready"
                );
            }
            HeatmapData::NoData => {
                info!("no plottable mutations; heatmap has no data");
            }
        }

        ctx.summary_view = Some(summary);
        ctx.full_view = Some(full);
        ctx.emit(RunEvent::Scored);
        Ok(())
    }
}
