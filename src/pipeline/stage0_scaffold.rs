use anyhow::Result;
use std::fs;
use tracing::info;

use crate::ctx::{Ctx, RunEvent};
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        fs::create_dir_all(&ctx.output.out_dir)?;
        info!(
            out_dir = %ctx.output.out_dir.display(),
            "output_dir_ready"
        );

        ctx.report.ai.enabled = ctx.enable_ai;
        if ctx.enable_ai {
            ctx.report.ai.provider = Some(ctx.provider.clone());
        }

        ctx.emit(RunEvent::Started);
        Ok(())
    }
}
