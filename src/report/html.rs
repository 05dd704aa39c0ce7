use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::scan::matrix::{HeatmapData, HeatmapMatrices};

/// Bin 1 (least favorable) through bin 10 (most favorable), matching the
/// reversed red-yellow-green scale of the interactive viewer.
const BIN_COLORS: [&str; 10] = [
    "#006837", "#1a9850", "#66bd63", "#a6d96a", "#d9ef8b", "#fee08b", "#fdae61", "#f46d43",
    "#d73027", "#a50026",
];

const CELL_W: usize = 26;
const CELL_H: usize = 18;
const LEFT: usize = 64;
const TOP: usize = 34;

/// Write the self-contained interactive heatmap page.
pub fn write_heatmap(path: &Path, data: &HeatmapData) -> Result<()> {
    let html = match data {
        HeatmapData::NoData => render_empty()?,
        HeatmapData::Ready(matrices) => render(matrices)?,
    };
    let mut w = BufWriter::new(
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
    );
    w.write_all(html.as_bytes())?;
    Ok(())
}

fn render_empty() -> Result<String> {
    let mut html = String::new();
    page_head(&mut html)?;
    writeln!(html, "<p class=\"meta\">No data to display</p>")?;
    writeln!(html, "</body></html>")?;
    Ok(html)
}

fn render(matrices: &HeatmapMatrices) -> Result<String> {
    let n_rows = matrices.row_labels.len();
    let n_cols = matrices.column_labels.len();
    let width = LEFT + n_cols * CELL_W + 20;
    let height = TOP + n_rows * CELL_H + 20;

    let mut html = String::with_capacity(64 * 1024 + n_rows * n_cols * 128);
    page_head(&mut html)?;

    writeln!(html, "<h1>Prediction Heatmap</h1>")?;
    if matrices.is_partial() {
        writeln!(
            html,
            "<p class=\"meta\">Showing first {} of {} residues</p>",
            n_rows, matrices.total_positions
        )?;
    }
    legend(&mut html)?;

    writeln!(
        html,
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = width,
        h = height
    )?;
    for (x, aa) in matrices.column_labels.iter().enumerate() {
        writeln!(
            html,
            "<text class=\"axis\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
            LEFT + x * CELL_W + CELL_W / 2,
            TOP - 8,
            aa
        )?;
    }
    for (y, label) in matrices.row_labels.iter().enumerate() {
        writeln!(
            html,
            "<text class=\"axis\" x=\"{}\" y=\"{}\" text-anchor=\"end\">{}</text>",
            LEFT - 8,
            TOP + y * CELL_H + CELL_H / 2 + 4,
            label
        )?;
        for x in 0..n_cols {
            let px = LEFT + x * CELL_W;
            let py = TOP + y * CELL_H;
            match matrices.bins[y][x] {
                Some(bin) => {
                    let rank = matrices.ranks[y][x].unwrap_or(0);
                    let score = matrices.scores[y][x].unwrap_or(0.0);
                    writeln!(
                        html,
                        "<rect class=\"cell\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" data-pos=\"{}\" data-sub=\"{}\" data-rank=\"{}\" data-score=\"{}\"/>",
                        px,
                        py,
                        CELL_W - 1,
                        CELL_H - 1,
                        BIN_COLORS[(bin as usize).clamp(1, 10) - 1],
                        label,
                        matrices.column_labels[x],
                        rank,
                        score
                    )?;
                }
                None => {
                    writeln!(
                        html,
                        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#f0f0f0\"/>",
                        px,
                        py,
                        CELL_W - 1,
                        CELL_H - 1
                    )?;
                }
            }
        }
    }
    writeln!(html, "</svg>")?;
    writeln!(html, "<div id=\"tip\"></div>")?;

    html.push_str("<script>");
    html.push_str(
        r#"const tip=document.getElementById('tip');document.querySelectorAll('rect.cell').forEach(r=>{r.addEventListener('mousemove',e=>{tip.style.display='block';tip.style.left=(e.pageX+12)+'px';tip.style.top=(e.pageY+12)+'px';tip.innerHTML='<b>Position</b>: '+r.dataset.pos+'<br/><b>Mutation to</b>: '+r.dataset.sub+'<br/><b>Rank</b>: '+r.dataset.rank+'<br/><b>Score</b>: '+r.dataset.score;});r.addEventListener('mouseleave',()=>{tip.style.display='none';});});"#,
    );
    html.push_str("</script>");
    writeln!(html, "</body></html>")?;
    Ok(html)
}

fn page_head(html: &mut String) -> Result<()> {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(html, "<title>Prediction Heatmap</title>")?;
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}"
    )?;
    writeln!(html, "h1{{margin:0 0 8px 0;font-size:22px;}}")?;
    writeln!(html, ".meta{{color:#555;font-size:13px;margin:0 0 12px 0;}}")?;
    writeln!(html, ".axis{{font-size:11px;fill:#444;}}")?;
    writeln!(
        html,
        ".legend{{display:flex;align-items:center;gap:4px;font-size:12px;margin:0 0 10px 0;}}"
    )?;
    writeln!(
        html,
        "#tip{{display:none;position:absolute;background:#fff;border:1px solid #aaa;border-radius:3px;padding:6px 8px;font-size:12px;pointer-events:none;box-shadow:0 1px 4px rgba(0,0,0,0.2);}}"
    )?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    Ok(())
}

fn legend(html: &mut String) -> Result<()> {
    writeln!(html, "<div class=\"legend\">")?;
    writeln!(html, "<span>Rank Percentile:</span>")?;
    writeln!(html, "<span>Lowest 10%</span>")?;
    for color in BIN_COLORS {
        writeln!(
            html,
            "<span style=\"display:inline-block;width:18px;height:12px;background:{};\"></span>",
            color
        )?;
    }
    writeln!(html, "<span>Top 10%</span>")?;
    writeln!(html, "</div>")?;
    Ok(())
}
