use std::io::Write;

use shcov_trace::CoverageMap;

/// Writes a per-file text summary of the coverage map.
pub fn render_text(coverage: &CoverageMap, mut out: impl Write) -> std::io::Result<()> {
    if coverage.is_empty() {
        writeln!(out, "no coverage collected")?;
    }

    for (path, lines) in coverage.files() {
        writeln!(out, "{}: {} lines covered", path.display(), lines.len())?;
    }

    if coverage.skipped_records() > 0 {
        writeln!(
            out,
            "warning: {} malformed trace records skipped",
            coverage.skipped_records()
        )?;
    }

    Ok(())
}

/// Writes the coverage map as pretty-printed JSON.
pub fn render_json(coverage: &CoverageMap, mut out: impl Write) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, coverage)?;
    writeln!(out)?;

    Ok(())
}
