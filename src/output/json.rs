//! JSON output of a [`SubnetReport`].

use crate::error::Result;
use crate::models::SubnetReport;

/// Serialize the report as pretty-printed JSON.
pub fn render_json(report: &SubnetReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}
