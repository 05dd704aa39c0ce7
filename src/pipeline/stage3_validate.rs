use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::table::{resolve_schema, SchemaResolution};

pub struct Stage3Validate;

impl Stage3Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Validate {
    fn name(&self) -> &'static str {
        "stage3_validate"
    }

    /// Resolve the mutation and score columns once; every downstream
    /// consumer reads the resolution from `Ctx` instead of re-sniffing.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.halted() {
            return Ok(());
        }
        let table = match &ctx.raw_table {
            Some(table) if !table.headers.is_empty() => table,
            _ => return Ok(()),
        };

        let schema = resolve_schema(table);
        match schema {
            SchemaResolution::Resolved {
                mutation_idx,
                score_idx,
            } => {
                info!(mutation_idx, score_idx, "schema_resolved");
            }
            SchemaResolution::Unresolved => {
                warn!("no mutation or score column could be identified");
                ctx.warnings
                    .push("no mutation or score column could be identified".to_string());
            }
        }
        ctx.schema = Some(schema);
        Ok(())
    }
}
