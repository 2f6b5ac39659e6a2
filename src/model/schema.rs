use std::collections::HashMap;

pub const BUCKET_MINUTES: [u32; 5] = [30, 45, 60, 90, 120];

#[derive(Debug, Clone)]
pub struct BucketPair {
    pub minutes: u32,
    pub count_col: Option<String>,
    pub accuracy_col: Option<String>,
}

impl BucketPair {
    // A bucket only surfaces when both halves of the pair exist; a lone
    // accuracy or count column is never shown partially.
    pub fn is_available(&self) -> bool {
        self.count_col.is_some() && self.accuracy_col.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    pub bill_of_lading: Option<String>,
    pub carrier_name: Option<String>,
    pub shipment_lane: Option<String>,
    pub stop_number: Option<String>,
    pub ping_coverage: Option<String>,
    pub total_predictions: Option<String>,
    pub buckets: Vec<BucketPair>,
}

impl ResolvedSchema {
    pub fn resolve(columns: &[String]) -> Self {
        let mut by_upper: HashMap<String, String> = HashMap::new();
        for name in columns {
            let trimmed = name.trim();
            // The later column wins when two names collapse to the same key.
            by_upper.insert(trimmed.to_ascii_uppercase(), trimmed.to_string());
        }

        let exact = |wanted: &str| -> Option<String> {
            columns
                .iter()
                .map(|c| c.trim())
                .find(|c| *c == wanted)
                .map(str::to_string)
        };

        let buckets = BUCKET_MINUTES
            .iter()
            .map(|&minutes| BucketPair {
                minutes,
                count_col: exact(&format!("COUNT_OF_ACCURATE_PREDICTIONS_{minutes}_MINS")),
                accuracy_col: exact(&format!("ACCURACY_{minutes}_MINS")),
            })
            .collect();

        ResolvedSchema {
            bill_of_lading: by_upper.get("BILL_OF_LADING").cloned(),
            carrier_name: by_upper.get("CARRIER_NAME").cloned(),
            shipment_lane: by_upper.get("SHIPMENT_LANE").cloned(),
            stop_number: by_upper.get("STOP_NUMBER").cloned(),
            ping_coverage: by_upper.get("PING_COVERAGE").cloned(),
            total_predictions: by_upper.get("TOTAL_PREDICTIONS").cloned(),
            buckets,
        }
    }

    pub fn available_buckets(&self) -> Vec<u32> {
        self.buckets
            .iter()
            .filter(|b| b.is_available())
            .map(|b| b.minutes)
            .collect()
    }

    pub fn bucket(&self, minutes: u32) -> Option<&BucketPair> {
        self.buckets.iter().find(|b| b.minutes == minutes)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/schema.rs"]
mod tests;
