use crate::input::PredictionTable;
use crate::model::filter::FilterSpec;
use crate::model::schema::ResolvedSchema;
use crate::pipeline::PipelineError;

#[derive(Debug)]
pub struct Stage2Output {
    pub rows: Vec<usize>,
}

pub fn run_stage2(
    table: &PredictionTable,
    schema: &ResolvedSchema,
    spec: &FilterSpec,
) -> Result<Stage2Output, PipelineError> {
    let stop_col = schema
        .stop_number
        .as_deref()
        .and_then(|name| table.column_index(name));
    let lane_col = schema
        .shipment_lane
        .as_deref()
        .and_then(|name| table.column_index(name));

    let rows: Vec<usize> = (0..table.rows.len())
        .filter(|&row| row_passes(table, spec, stop_col, lane_col, row))
        .collect();

    if rows.is_empty() {
        return Err(PipelineError::NoMatchingRows);
    }
    Ok(Stage2Output { rows })
}

fn row_passes(
    table: &PredictionTable,
    spec: &FilterSpec,
    stop_col: Option<usize>,
    lane_col: Option<usize>,
    row: usize,
) -> bool {
    if let Some(range) = spec.stop_range {
        // A row without a usable stop index never matches an active stop filter.
        let stop = stop_col.and_then(|col| table.cell(row, col).as_number());
        match stop {
            Some(value) if range.contains(value) => {}
            _ => return false,
        }
    }
    if let Some(lanes) = &spec.lanes {
        let lane = lane_col.and_then(|col| table.cell(row, col).as_text());
        match lane {
            Some(value) if lanes.contains(value) => {}
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_filter.rs"]
mod tests;
