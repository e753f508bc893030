// Location model representing a position on the warehouse floor grid

use crate::models::Distance;
use serde::Serialize;

/// A position on the warehouse grid, addressed by aisle and shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub aisle: i32,
    pub shelf: i32,
}

impl Location {
    /// Creates a new location at the given aisle and shelf
    pub fn new(aisle: i32, shelf: i32) -> Self {
        Self { aisle, shelf }
    }

    /// The depot where every pick route starts and ends
    pub fn depot() -> Self {
        Self { aisle: 0, shelf: 0 }
    }

    /// Manhattan distance between two locations
    pub fn manhattan_distance_to(&self, other: &Location) -> Distance {
        ((self.aisle - other.aisle).abs() + (self.shelf - other.shelf).abs()) as Distance
    }
}
