// src/presentation.rs
use announcement_id_shared_kernel::Result;
use announcement_id_usecase::UpdateReport;

use crate::cli::CliOutputFormat;

/// Render the report for stdout.
pub fn render(report: &UpdateReport, format: CliOutputFormat) -> Result<String> {
    match format {
        CliOutputFormat::Text => Ok(render_text(report)),
        CliOutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

fn render_text(report: &UpdateReport) -> String {
    let verb = if report.written { "Updated" } else { "Would update" };
    format!("{verb} {} to {}", report.field, report.version)
}
