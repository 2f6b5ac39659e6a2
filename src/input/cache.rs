use std::collections::HashMap;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::sync::Arc;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;
use crate::input::table::{PredictionTable, parse_prediction_csv};

/// Read-through cache keyed by the raw byte content of the uploaded file, so
/// a file edited in place is re-parsed while repeated loads of the same
/// content reuse the parsed table.
pub struct TableCache {
    entries: HashMap<u64, Arc<PredictionTable>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<PredictionTable>, InputError> {
        if !path.exists() {
            return Err(InputError::MissingInput(format!(
                "{} not found",
                path.display()
            )));
        }
        let bytes = std::fs::read(path)?;
        let key = hash_bytes(&bytes);
        if let Some(table) = self.entries.get(&key) {
            return Ok(table.clone());
        }
        let table = Arc::new(parse_prediction_csv(reader_for(path, &bytes))?);
        self.entries.insert(key, table.clone());
        Ok(table)
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

fn reader_for<'a>(path: &Path, bytes: &'a [u8]) -> Box<dyn BufRead + 'a> {
    if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(bytes)))
    } else {
        Box::new(Cursor::new(bytes))
    }
}

pub fn hash_bytes(data: &[u8]) -> u64 {
    let mut hasher = Fnv64::new();
    hasher.update(data);
    hasher.finish()
}

struct Fnv64 {
    hash: u64,
}

impl Fnv64 {
    fn new() -> Self {
        Self {
            hash: 0xcbf29ce484222325,
        }
    }

    fn update(&mut self, data: &[u8]) {
        let mut h = self.hash;
        for &b in data {
            h ^= b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        self.hash = h;
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/cache.rs"]
mod tests;
