use anyhow::Result;

use crate::ctx::Ctx;
use crate::report::AiOutcome;
use crate::scan::matrix;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");

    let mut out = String::new();
    out.push_str(&format!("kira-mutscan v{}\n", version));
    out.push_str(&format!(
        "Analysis: {} scan with {} on {}\n",
        ctx.kind.as_str(),
        ctx.scorer,
        ctx.input.display()
    ));

    if let Some(status) = &ctx.invoke_status {
        out.push_str(&format!("Status: {}\n", status.message()));
    }

    if let Some(table) = &ctx.raw_table {
        out.push_str(&format!(
            "Table: {} rows, {} valid mutations, {} positions\n",
            table.rows.len(),
            ctx.ranked.len(),
            matrix::total_residue_count(&ctx.ranked)
        ));
    }

    if ctx.enable_ai || !matches!(ctx.ai_outcome, AiOutcome::Disabled) {
        out.push_str(&format!("AI: {}\n", ctx.ai_outcome.message()));
    }

    if ctx.report.artifacts.bundle.is_some() {
        out.push_str(&format!("Bundle: {}\n", ctx.output.bundle_path.display()));
    }

    if ctx.warnings.is_empty() {
        out.push_str("Warnings: none\n");
    } else {
        out.push_str("Warnings:\n");
        for warning in &ctx.warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }

    Ok(out)
}
