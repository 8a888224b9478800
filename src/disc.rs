use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One disc in a user's bag, as exported by the inventory backend.
///
/// Every attribute is optional. Absent and `null` both deserialize to `None`
/// and are excluded from the dimension they would have fed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscRecord {
    #[serde(default, deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub plastic: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub flight_numbers: Option<FlightNumbers>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightNumbers {
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub glide: Option<f64>,
    #[serde(default)]
    pub turn: Option<f64>,
    #[serde(default)]
    pub fade: Option<f64>,
}

impl FlightNumbers {
    pub fn is_empty(&self) -> bool {
        self.speed.is_none() && self.glide.is_none() && self.turn.is_none() && self.fade.is_none()
    }
}

// Backends hand out ids as strings or as integers.
fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(n)) => n.to_string(),
        None => String::new(),
    })
}

/// The disc categories the system recognizes.
///
/// Records carry categories as free text, so labels outside this list are
/// still aggregated. The catalogue is only used for coverage reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum DiscCategory {
    #[strum(serialize = "Putter")]
    Putter,
    #[strum(serialize = "Approach")]
    Approach,
    #[strum(serialize = "Midrange")]
    Midrange,
    #[strum(serialize = "Hybrid Driver")]
    HybridDriver,
    #[strum(serialize = "Control Driver")]
    ControlDriver,
    #[strum(serialize = "Fairway Driver")]
    FairwayDriver,
    #[strum(serialize = "Distance Driver")]
    DistanceDriver,
}

impl DiscCategory {
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}
