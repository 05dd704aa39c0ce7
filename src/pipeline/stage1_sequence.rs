use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::v1::AnalysisKind;
use crate::seq::{fasta, pdb};

pub struct Stage1Sequence;

impl Stage1Sequence {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Sequence {
    fn name(&self) -> &'static str {
        "stage1_sequence"
    }

    /// Extract the one-letter residue sequence for display and the report.
    /// The scorer consumes the input file itself, so a parse failure here
    /// degrades to a warning rather than aborting the run.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let parsed = match ctx.kind {
            AnalysisKind::Sequence => fasta::read_sequence(&ctx.input),
            AnalysisKind::Structure => pdb::read_sequence(&ctx.input),
        };

        match parsed {
            Ok(sequence) if !sequence.is_empty() => {
                info!(residues = sequence.len(), "sequence_extracted");
                ctx.report.analysis.sequence_length = Some(sequence.len() as u64);
                ctx.sequence = Some(sequence);
            }
            Ok(_) => {
                warn!(input = %ctx.input.display(), "no residues found in input");
                ctx.warnings
                    .push(format!("no residues found in {}", ctx.input.display()));
            }
            Err(err) => {
                warn!(input = %ctx.input.display(), "sequence extraction failed");
                ctx.warnings
                    .push(format!("could not read sequence: {}", err));
            }
        }

        Ok(())
    }
}
