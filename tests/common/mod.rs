#![allow(dead_code)]

use discbag::disc::{DiscRecord, FlightNumbers};

/// Builder for DiscRecord to keep fixtures short.
pub struct DiscBuilder {
    disc: DiscRecord,
}

impl DiscBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            disc: DiscRecord {
                id: id.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn manufacturer(mut self, name: &str) -> Self {
        self.disc.manufacturer = Some(name.to_string());
        self
    }

    pub fn plastic(mut self, name: &str) -> Self {
        self.disc.plastic = Some(name.to_string());
        self
    }

    pub fn color(mut self, name: &str) -> Self {
        self.disc.color = Some(name.to_string());
        self
    }

    pub fn category(mut self, name: &str) -> Self {
        self.disc.category = Some(name.to_string());
        self
    }

    pub fn flight(mut self, speed: f64, glide: f64, turn: f64, fade: f64) -> Self {
        self.disc.flight_numbers = Some(FlightNumbers {
            speed: Some(speed),
            glide: Some(glide),
            turn: Some(turn),
            fade: Some(fade),
        });
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.disc.flight_numbers.get_or_insert_with(Default::default).speed = Some(speed);
        self
    }

    pub fn turn(mut self, turn: f64) -> Self {
        self.disc.flight_numbers.get_or_insert_with(Default::default).turn = Some(turn);
        self
    }

    pub fn build(self) -> DiscRecord {
        self.disc
    }
}

/// Five discs spanning speeds 3..13 and turns -3..1.
pub fn mixed_bag() -> Vec<DiscRecord> {
    vec![
        DiscBuilder::new("1")
            .manufacturer("Innova")
            .plastic("Star")
            .color("Blue")
            .category("Putter")
            .flight(3.0, 3.0, 0.0, 1.0)
            .build(),
        DiscBuilder::new("2")
            .manufacturer("Discraft")
            .plastic("ESP")
            .color("Red")
            .category("Midrange")
            .flight(5.0, 4.0, -1.0, 1.0)
            .build(),
        DiscBuilder::new("3")
            .manufacturer("Innova")
            .plastic("Champion")
            .color("Blue")
            .category("Fairway Driver")
            .flight(7.0, 5.0, 0.0, 2.0)
            .build(),
        DiscBuilder::new("4")
            .manufacturer("Innova")
            .plastic("Star")
            .color("Yellow")
            .category("Distance Driver")
            .flight(12.0, 5.0, -3.0, 2.0)
            .build(),
        DiscBuilder::new("5")
            .manufacturer("Discmania")
            .plastic("C-Line")
            .color("Red")
            .category("Distance Driver")
            .flight(13.0, 5.0, 1.0, 3.0)
            .build(),
    ]
}
