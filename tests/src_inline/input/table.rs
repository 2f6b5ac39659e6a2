use std::io::Cursor;

use super::*;

fn parse(csv: &str) -> PredictionTable {
    parse_prediction_csv(Cursor::new(csv)).unwrap()
}

#[test]
fn test_header_whitespace_trimmed() {
    let table = parse(" BILL_OF_LADING , STOP_NUMBER \nBOL1,5\n");
    assert_eq!(table.columns, vec!["BILL_OF_LADING", "STOP_NUMBER"]);
    assert_eq!(table.rows[0][1], Cell::Number(5.0));
}

#[test]
fn test_numeric_coercion_and_missing() {
    let table = parse(
        "BILL_OF_LADING,STOP_NUMBER,ACCURACY_30_MINS,CARRIER_NAME\n\
         BOL1,abc,91.5,\n",
    );
    assert_eq!(table.rows[0][0], Cell::Text("BOL1".to_string()));
    assert_eq!(table.rows[0][1], Cell::Missing);
    assert_eq!(table.rows[0][2], Cell::Number(91.5));
    assert_eq!(table.rows[0][3], Cell::Missing);
}

#[test]
fn test_numeric_column_matching() {
    assert!(numeric_column("STOP_NUMBER"));
    assert!(numeric_column(" stop_number "));
    assert!(numeric_column("Accuracy_60_Mins"));
    assert!(numeric_column("COUNT_OF_ACCURATE_PREDICTIONS_120_MINS"));
    assert!(!numeric_column("PING_COVERAGE"));
    assert!(!numeric_column("BILL_OF_LADING"));
}

#[test]
fn test_cell_number_handling() {
    assert_eq!(Cell::Text("42.5".to_string()).as_number(), Some(42.5));
    assert_eq!(Cell::Text("nan".to_string()).as_number(), None);
    assert_eq!(Cell::Text("lane-a".to_string()).as_number(), None);
    assert_eq!(Cell::Missing.as_number(), None);

    assert_eq!(Cell::Number(7.0).render(), "7");
    assert_eq!(Cell::Number(7.25).render(), "7.25");
    assert_eq!(Cell::Missing.render(), "");
}

#[test]
fn test_short_rows_fill_missing() {
    let table = parse("BILL_OF_LADING,SHIPMENT_LANE\nBOL1\n");
    assert_eq!(table.rows[0][0], Cell::Text("BOL1".to_string()));
    assert_eq!(table.rows[0][1], Cell::Missing);
}

#[test]
fn test_empty_input_rejected() {
    let err = parse_prediction_csv(Cursor::new("")).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_distinct_text_values_sorted_without_missing() {
    let table = parse(
        "BILL_OF_LADING,SHIPMENT_LANE\n\
         B1,DFW-ORD\n\
         B2,\n\
         B3,ATL-DFW\n\
         B4,DFW-ORD\n",
    );
    let col = table.column_index("SHIPMENT_LANE").unwrap();
    assert_eq!(table.distinct_text_values(col), vec!["ATL-DFW", "DFW-ORD"]);
}
