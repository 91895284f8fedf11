//! Report rendering for terminals and machine consumers.

pub mod console;

use crate::error::Result;
use crate::model::AssetReport;

/// Machine-readable batch report (pretty JSON of the model types).
pub fn render_json(reports: &[AssetReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
