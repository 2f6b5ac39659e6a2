use std::io::Cursor;

use super::*;
use crate::input::table::parse_prediction_csv;

const SAMPLE: &str = "BILL_OF_LADING,CARRIER_NAME,SHIPMENT_LANE,PING_COVERAGE,TOTAL_PREDICTIONS,\
COUNT_OF_ACCURATE_PREDICTIONS_30_MINS,ACCURACY_30_MINS,\
COUNT_OF_ACCURATE_PREDICTIONS_60_MINS,ACCURACY_60_MINS,ACCURACY_90_MINS\n\
BOL1,ABC Freight,ATL-DFW,98,12,3,25,6,50,75\n";

fn sample() -> (PredictionTable, ResolvedSchema) {
    let table = parse_prediction_csv(Cursor::new(SAMPLE)).unwrap();
    let schema = ResolvedSchema::resolve(&table.columns);
    (table, schema)
}

#[test]
fn test_fixed_columns_then_bucket_pairs() {
    let (table, schema) = sample();
    let out = run_stage4(&table, &schema, &[]);
    assert_eq!(
        out.columns,
        vec![
            "BILL_OF_LADING",
            "CARRIER_NAME",
            "SHIPMENT_LANE",
            "PING_COVERAGE",
            "TOTAL_PREDICTIONS",
            "COUNT_OF_ACCURATE_PREDICTIONS_30_MINS",
            "ACCURACY_30_MINS",
            "COUNT_OF_ACCURATE_PREDICTIONS_60_MINS",
            "ACCURACY_60_MINS",
        ]
    );
    // 90 has no count column, so the bucket is not selectable at all.
    assert_eq!(out.selected_buckets, vec![30, 60]);
    assert!(out.dropped.is_empty());
}

#[test]
fn test_selection_order_does_not_matter() {
    let (table, schema) = sample();
    let a = run_stage4(&table, &schema, &[60, 30]);
    let b = run_stage4(&table, &schema, &[30, 60]);
    assert_eq!(a.columns, b.columns);
    assert_eq!(a.selected_buckets, vec![30, 60]);
}

#[test]
fn test_subset_selection() {
    let (table, schema) = sample();
    let out = run_stage4(&table, &schema, &[60]);
    assert_eq!(out.selected_buckets, vec![60]);
    assert!(
        out.columns
            .contains(&"COUNT_OF_ACCURATE_PREDICTIONS_60_MINS".to_string())
    );
    assert!(!out.columns.contains(&"ACCURACY_30_MINS".to_string()));
}

#[test]
fn test_unavailable_bucket_skipped() {
    let (table, schema) = sample();
    let out = run_stage4(&table, &schema, &[90]);
    assert!(out.selected_buckets.is_empty());
    assert!(!out.columns.contains(&"ACCURACY_90_MINS".to_string()));
}

#[test]
fn test_absent_fixed_columns_skipped() {
    let table = parse_prediction_csv(Cursor::new("BILL_OF_LADING,SHIPMENT_LANE\nBOL1,ATL-DFW\n"))
        .unwrap();
    let schema = ResolvedSchema::resolve(&table.columns);
    let out = run_stage4(&table, &schema, &[]);
    assert_eq!(out.columns, vec!["BILL_OF_LADING", "SHIPMENT_LANE"]);
}

#[test]
fn test_columns_missing_from_table_are_dropped_and_reported() {
    let (table, _) = sample();
    let mut schema = ResolvedSchema::resolve(&table.columns);
    schema.carrier_name = Some("GHOST_COLUMN".to_string());

    let out = run_stage4(&table, &schema, &[]);
    assert_eq!(out.dropped, vec!["GHOST_COLUMN"]);
    assert!(!out.columns.contains(&"GHOST_COLUMN".to_string()));
    assert_eq!(out.columns[0], "BILL_OF_LADING");
}
