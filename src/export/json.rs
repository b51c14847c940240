use crate::error::Result;
use crate::summary::TrainingSummary;

/// Render summaries as a pretty-printed JSON array
pub fn render_json(summaries: &[TrainingSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
