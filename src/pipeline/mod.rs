use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::{Ctx, RunEvent};

pub mod stage0_scaffold;
pub mod stage1_sequence;
pub mod stage2_invoke;
pub mod stage3_validate;
pub mod stage4_rank;
pub mod stage5_matrix;
pub mod stage6_report;
pub mod stage7_export;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// The full stage list for one scan run.
    pub fn full_run() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_sequence::Stage1Sequence::new()),
            Box::new(stage2_invoke::Stage2Invoke::new()),
            Box::new(stage3_validate::Stage3Validate::new()),
            Box::new(stage4_rank::Stage4Rank::new()),
            Box::new(stage5_matrix::Stage5Matrix::new()),
            Box::new(stage6_report::Stage6Report::new()),
            Box::new(stage7_export::Stage7Export::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                ctx.emit(RunEvent::Failed(err.to_string()));
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
