use crate::input::PredictionTable;
use crate::model::schema::ResolvedSchema;
use crate::pipeline::PipelineError;
use crate::pipeline::stage2_filter::Stage2Output;

#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentRow {
    pub bill_of_lading: String,
    pub row: usize,
}

#[derive(Debug)]
pub struct Stage3Output {
    pub shipments: Vec<ShipmentRow>,
}

pub fn run_stage3(
    table: &PredictionTable,
    schema: &ResolvedSchema,
    filtered: &Stage2Output,
) -> Result<Stage3Output, PipelineError> {
    let col = schema
        .bill_of_lading
        .as_deref()
        .and_then(|name| table.column_index(name))
        .ok_or(PipelineError::MissingShipmentColumn)?;

    // String coercion keeps the ordering total over mixed identifier types;
    // numeric-looking identifiers still compare lexicographically.
    let mut keyed: Vec<(String, usize)> = filtered
        .rows
        .iter()
        .map(|&row| (table.cell(row, col).render(), row))
        .collect();
    // Stable sort: among equal identifiers the first filtered row wins.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut shipments: Vec<ShipmentRow> = Vec::new();
    for (key, row) in keyed {
        if shipments.last().is_none_or(|s| s.bill_of_lading != key) {
            shipments.push(ShipmentRow {
                bill_of_lading: key,
                row,
            });
        }
    }

    Ok(Stage3Output { shipments })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_reduce.rs"]
mod tests;
