use crate::disc::{DiscRecord, FlightNumbers};
use crate::error::{BagResult, DiscBagError};
use serde::Deserialize;
use serde_json::Value;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load a bag from an inventory export, picking the parser by extension.
pub fn load_collection<P: AsRef<Path>>(path: P) -> BagResult<Vec<DiscRecord>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let discs = match ext.as_deref() {
        Some("json") => {
            debug!("Parsing JSON inventory: {}", path.display());
            parse_json_collection(&fs::read_to_string(path)?)?
        }
        Some("csv") => {
            debug!("Parsing CSV inventory: {}", path.display());
            parse_csv_collection(File::open(path)?)?
        }
        _ => {
            return Err(DiscBagError::Config(format!(
                "Unsupported inventory format: '{}' (expected .json or .csv)",
                path.display()
            )))
        }
    };

    info!("📂 Loaded {} discs from {}", discs.len(), path.display());
    Ok(discs)
}

/// Accepts a bare array of discs or an object with a `discs` array.
pub fn parse_json_collection(content: &str) -> BagResult<Vec<DiscRecord>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => Ok(serde_json::from_value(Value::Array(items))?),
        Value::Object(mut obj) => match obj.remove("discs") {
            Some(discs @ Value::Array(_)) => Ok(serde_json::from_value(discs)?),
            Some(_) => Err(DiscBagError::Validation(
                "'discs' must be an array".to_string(),
            )),
            None => Err(DiscBagError::Validation(
                "Inventory object has no 'discs' array".to_string(),
            )),
        },
        _ => Err(DiscBagError::Validation(
            "Inventory must be an array of discs or an object with a 'discs' array".to_string(),
        )),
    }
}

#[derive(Debug, Deserialize)]
struct CsvDiscRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    manufacturer: Option<String>,
    #[serde(default)]
    plastic: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    speed: Option<f64>,
    #[serde(default)]
    glide: Option<f64>,
    #[serde(default)]
    turn: Option<f64>,
    #[serde(default)]
    fade: Option<f64>,
}

impl CsvDiscRow {
    // `f64::from_str` accepts "NaN" and "inf"; JSON cannot carry either.
    fn into_record(self, line: u64) -> BagResult<DiscRecord> {
        for (column, value) in [
            ("speed", self.speed),
            ("glide", self.glide),
            ("turn", self.turn),
            ("fade", self.fade),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(DiscBagError::Validation(format!(
                        "line {}: column '{}' must be a finite number, got {}",
                        line, column, v
                    )));
                }
            }
        }

        let flight = FlightNumbers {
            speed: self.speed,
            glide: self.glide,
            turn: self.turn,
            fade: self.fade,
        };
        Ok(DiscRecord {
            id: self.id.unwrap_or_default(),
            manufacturer: self.manufacturer,
            plastic: self.plastic,
            color: self.color,
            category: self.category,
            flight_numbers: (!flight.is_empty()).then_some(flight),
        })
    }
}

/// Parse a CSV export. CSV cannot express null, so an empty cell is
/// treated as absent. Flight numbers must be finite.
pub fn parse_csv_collection<R: Read>(reader: R) -> BagResult<Vec<DiscRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut discs = Vec::new();
    let mut record = csv::StringRecord::new();
    let headers = rdr.headers()?.clone();
    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvDiscRow = record.deserialize(Some(&headers))?;
        discs.push(row.into_record(line)?);
    }
    Ok(discs)
}
