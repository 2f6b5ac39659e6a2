use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::PredictionTable;
use crate::model::filter::FilterSpec;
use crate::pipeline::stage3_reduce::ShipmentRow;
use crate::pipeline::stage5_summary::Stage5Output;
use crate::report::csv::projected_csv_bytes;
use crate::report::json::{SummaryData, render_summary_json};
use crate::report::text::{ReportContext, render_report_text};

pub const REPORT_CSV_NAME: &str = "eta_shipment_level_filtered.csv";
pub const SUMMARY_JSON_NAME: &str = "summary.json";
pub const REPORT_TEXT_NAME: &str = "report.txt";

#[derive(Debug)]
pub struct Stage6Input<'a> {
    pub table: &'a PredictionTable,
    pub shipments: &'a [ShipmentRow],
    pub columns: &'a [String],
    pub dropped: &'a [String],
    pub selected_buckets: &'a [u32],
    pub kpis: &'a Stage5Output,
    pub filters: &'a FilterSpec,
    pub input_path: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage6Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let bytes = projected_csv_bytes(input.table, input.shipments, input.columns)?;
    write_bytes(&out_dir.join(REPORT_CSV_NAME), &bytes)?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_bytes(&out_dir.join(SUMMARY_JSON_NAME), json.as_bytes())?;

    let report = render_report_text(&build_report_context(input));
    write_bytes(&out_dir.join(REPORT_TEXT_NAME), report.as_bytes())?;

    Ok(())
}

fn build_summary(input: &Stage6Input<'_>) -> SummaryData {
    SummaryData {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        input: input.input_path.clone(),
        stop_min: input
            .filters
            .stop_range
            .map(|r| r.lo)
            .filter(|v| v.is_finite()),
        stop_max: input
            .filters
            .stop_range
            .map(|r| r.hi)
            .filter(|v| v.is_finite()),
        lanes: input
            .filters
            .lanes
            .as_ref()
            .map(|set| set.iter().cloned().collect()),
        selected_buckets: input.selected_buckets.to_vec(),
        columns: input.columns.to_vec(),
        dropped_columns: input.dropped.to_vec(),
        shipments: input.kpis.shipment_count,
        avg_ping_coverage: input.kpis.avg_ping_coverage,
        prediction_rows: input.kpis.prediction_rows,
    }
}

fn build_report_context(input: &Stage6Input<'_>) -> ReportContext {
    ReportContext {
        shipment_count: input.kpis.shipment_count,
        avg_ping_coverage: input.kpis.avg_ping_coverage,
        prediction_rows: input.kpis.prediction_rows,
        stop_range: input.filters.stop_range.map(|r| (r.lo, r.hi)),
        lanes: input
            .filters
            .lanes
            .as_ref()
            .map(|set| set.iter().cloned().collect()),
        selected_buckets: input.selected_buckets.to_vec(),
        columns: input.columns.to_vec(),
        dropped: input.dropped.to_vec(),
    }
}

fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
