use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::{Ctx, RunEvent};
use crate::pipeline::Stage;
use crate::report::client::{resolve_api_key, AiClient};
use crate::report::prompt::build_analysis_prompt;
use crate::report::AiOutcome;

pub struct Stage6Report;

impl Stage6Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Report {
    fn name(&self) -> &'static str {
        "stage6_report"
    }

    /// Optional summarization path. Every failure here downgrades to an
    /// explanatory outcome on `Ctx`; the numeric artifacts are never
    /// blocked by a missing credential, a bad table, or a dead endpoint.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.enable_ai || ctx.halted() {
            return Ok(());
        }
        let table = match &ctx.raw_table {
            Some(table) if !table.is_empty() => table,
            _ => return Ok(()),
        };

        let provider = match ctx.providers.find(&ctx.provider) {
            Some(def) => *def,
            None => {
                ctx.ai_outcome = AiOutcome::Failed(format!("unknown provider '{}'", ctx.provider));
                return Ok(());
            }
        };

        let prompt = match build_analysis_prompt(table, &ctx.scorer) {
            Some(prompt) => prompt,
            None => {
                warn!("analysis prompt could not be built");
                ctx.ai_outcome = AiOutcome::NoPrompt;
                return Ok(());
            }
        };

        let api_key = match resolve_api_key(&provider, ctx.api_key.as_deref()) {
            Some(key) => key,
            None => {
                warn!(provider = provider.name, "no API key available");
                ctx.ai_outcome = AiOutcome::NoKey;
                return Ok(());
            }
        };

        ctx.emit(RunEvent::Summarizing);
        let outcome = match AiClient::new(&provider, api_key) {
            Ok(client) => match client.summarize(&prompt) {
                Ok(text) => {
                    info!(provider = provider.name, "ai_summary_received");
                    AiOutcome::Summary(text)
                }
                Err(err) => {
                    warn!(provider = provider.name, "ai_summary_failed");
                    AiOutcome::Failed(err.to_string())
                }
            },
            Err(err) => AiOutcome::Failed(err.to_string()),
        };

        ctx.report.ai.summary_available = outcome.summary_text().is_some();
        ctx.ai_outcome = outcome;
        Ok(())
    }
}
