use crate::disc::DiscRecord;

/// The attributes of a disc that actually carry data.
///
/// Only speed and turn feed the statistics; glide and fade are never read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedDisc<'a> {
    pub manufacturer: Option<&'a str>,
    pub plastic: Option<&'a str>,
    pub color: Option<&'a str>,
    pub category: Option<&'a str>,
    pub speed: Option<f64>,
    pub turn: Option<f64>,
}

/// Borrow the present fields of `disc`. Empty strings count as present.
pub fn normalize(disc: &DiscRecord) -> NormalizedDisc<'_> {
    let flight = disc.flight_numbers.unwrap_or_default();

    NormalizedDisc {
        manufacturer: disc.manufacturer.as_deref(),
        plastic: disc.plastic.as_deref(),
        color: disc.color.as_deref(),
        category: disc.category.as_deref(),
        speed: flight.speed,
        turn: flight.turn,
    }
}
