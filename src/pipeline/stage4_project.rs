use tracing::warn;

use crate::input::PredictionTable;
use crate::model::schema::ResolvedSchema;

#[derive(Debug)]
pub struct Stage4Output {
    pub columns: Vec<String>,
    pub selected_buckets: Vec<u32>,
    pub dropped: Vec<String>,
}

pub fn run_stage4(
    table: &PredictionTable,
    schema: &ResolvedSchema,
    requested_buckets: &[u32],
) -> Stage4Output {
    let selected_buckets = select_buckets(schema, requested_buckets);

    let mut columns: Vec<String> = Vec::new();
    for name in [
        &schema.bill_of_lading,
        &schema.carrier_name,
        &schema.shipment_lane,
        &schema.ping_coverage,
        &schema.total_predictions,
    ] {
        if let Some(name) = name {
            columns.push(name.clone());
        }
    }
    for &minutes in &selected_buckets {
        if let Some(bucket) = schema.bucket(minutes) {
            if let Some(count) = &bucket.count_col {
                columns.push(count.clone());
            }
            if let Some(accuracy) = &bucket.accuracy_col {
                columns.push(accuracy.clone());
            }
        }
    }

    let (columns, dropped): (Vec<String>, Vec<String>) = columns
        .into_iter()
        .partition(|name| table.column_index(name).is_some());
    if !dropped.is_empty() {
        warn!(
            "selected columns missing from the shipment table, skipping: {}",
            dropped.join(", ")
        );
    }

    Stage4Output {
        columns,
        selected_buckets,
        dropped,
    }
}

// The selection renders in fixed ascending bucket order no matter the order
// the thresholds were requested in.
fn select_buckets(schema: &ResolvedSchema, requested: &[u32]) -> Vec<u32> {
    let available = schema.available_buckets();
    if requested.is_empty() {
        return available;
    }
    let unknown: Vec<String> = requested
        .iter()
        .filter(|m| !available.contains(m))
        .map(|m| m.to_string())
        .collect();
    if !unknown.is_empty() {
        warn!(
            "requested buckets without a complete count/accuracy pair, skipping: {} mins",
            unknown.join(", ")
        );
    }
    available
        .into_iter()
        .filter(|m| requested.contains(m))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_project.rs"]
mod tests;
