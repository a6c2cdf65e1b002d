//! Report renderers. Each format renders the same fields from a shared
//! borrow of the report; none of them reorders or mutates it.

mod delimited;
mod structured;
mod table;

use anyhow::Result;

use hcpaudit_domain::AuditReport;

use crate::format::OutputFormat;

pub(crate) const COLUMN_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Drops the header row from table and CSV output.
    pub no_headers: bool,
}

pub fn render(
    report: &AuditReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(table::render(report, options)),
        OutputFormat::Json => structured::render_json(report),
        OutputFormat::Yaml => structured::render_yaml(report),
        OutputFormat::Csv => delimited::render(report, options),
    }
}
