use std::collections::BTreeSet;
use std::io::BufRead;

use crate::input::InputError;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => parse_number(s),
            Cell::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => v.to_string(),
            Cell::Missing => String::new(),
        }
    }
}

// "nan" and "inf" parse as floats but carry no value a range check or a mean
// can use; they count as missing.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone)]
pub struct PredictionTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl PredictionTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.rows[row][col]
    }

    pub fn distinct_text_values(&self, col: usize) -> Vec<String> {
        let mut seen = BTreeSet::new();
        for row in &self.rows {
            if let Some(text) = row[col].as_text() {
                seen.insert(text.to_string());
            }
        }
        seen.into_iter().collect()
    }
}

pub fn numeric_column(name: &str) -> bool {
    let upper = name.trim().to_ascii_uppercase();
    upper == "STOP_NUMBER"
        || upper == "TOTAL_PREDICTIONS"
        || upper.starts_with("ACCURACY_")
        || upper.starts_with("COUNT_OF_ACCURATE_PREDICTIONS_")
}

pub fn parse_prediction_csv<R: BufRead>(reader: R) -> Result<PredictionTable, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::InvalidInput(
            "input CSV has no header row".to_string(),
        ));
    }
    let numeric: Vec<bool> = columns.iter().map(|c| numeric_column(c)).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Vec::with_capacity(columns.len());
        for (idx, &is_numeric) in numeric.iter().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            row.push(coerce_cell(raw, is_numeric));
        }
        rows.push(row);
    }

    Ok(PredictionTable { columns, rows })
}

fn coerce_cell(raw: &str, numeric: bool) -> Cell {
    if numeric {
        match parse_number(raw) {
            Some(v) => Cell::Number(v),
            None => Cell::Missing,
        }
    } else if raw.is_empty() {
        Cell::Missing
    } else {
        Cell::Text(raw.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
