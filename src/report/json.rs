use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub input: String,
    pub stop_min: Option<f64>,
    pub stop_max: Option<f64>,
    pub lanes: Option<Vec<String>>,
    pub selected_buckets: Vec<u32>,
    pub columns: Vec<String>,
    pub dropped_columns: Vec<String>,
    pub shipments: usize,
    pub avg_ping_coverage: Option<f64>,
    pub prediction_rows: usize,
}

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
