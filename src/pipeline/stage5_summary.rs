use crate::input::PredictionTable;
use crate::model::schema::ResolvedSchema;
use crate::pipeline::stage2_filter::Stage2Output;
use crate::pipeline::stage3_reduce::Stage3Output;
use crate::report::mean;

#[derive(Debug, Clone, PartialEq)]
pub struct Stage5Output {
    pub shipment_count: usize,
    pub avg_ping_coverage: Option<f64>,
    pub prediction_rows: usize,
}

pub fn run_stage5(
    table: &PredictionTable,
    schema: &ResolvedSchema,
    filtered: &Stage2Output,
    reduced: &Stage3Output,
) -> Stage5Output {
    let coverage_col = schema
        .ping_coverage
        .as_deref()
        .and_then(|name| table.column_index(name));
    let avg_ping_coverage = coverage_col.and_then(|col| {
        let values: Vec<f64> = reduced
            .shipments
            .iter()
            .filter_map(|s| table.cell(s.row, col).as_number())
            .collect();
        mean(&values)
    });

    Stage5Output {
        shipment_count: reduced.shipments.len(),
        avg_ping_coverage,
        // Row volume after filtering, before reduction; intentionally not the
        // shipment count.
        prediction_rows: filtered.rows.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_summary.rs"]
mod tests;
