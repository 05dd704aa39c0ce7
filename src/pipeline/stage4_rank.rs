use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scan::rank::rank_and_bin;
use crate::table::SchemaResolution;

pub struct Stage4Rank;

impl Stage4Rank {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Rank {
    fn name(&self) -> &'static str {
        "stage4_rank"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.halted() {
            return Ok(());
        }
        let table = match &ctx.raw_table {
            Some(table) if !table.is_empty() => table,
            _ => return Ok(()),
        };
        let schema = ctx.schema.unwrap_or(SchemaResolution::Unresolved);

        ctx.ranked = rank_and_bin(table, &schema);

        let dropped = table.rows.len().saturating_sub(ctx.ranked.len());
        if dropped > 0 {
            ctx.warnings.push(format!(
                "{} row(s) excluded from ranking (invalid mutation code or score)",
                dropped
            ));
        }
        ctx.report.table.valid_mutations = ctx.ranked.len() as u64;
        ctx.report.table.dropped_rows = dropped as u64;

        info!(
            ranked = ctx.ranked.len(),
            dropped, "ranking_and_binning_done"
        );
        Ok(())
    }
}
