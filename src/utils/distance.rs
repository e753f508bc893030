// Distance calculation utilities

use crate::models::{Distance, Location};

/// Calculate the Manhattan distance between two grid locations
pub fn manhattan_distance(p1: &Location, p2: &Location) -> Distance {
    ((p1.aisle - p2.aisle).abs() + (p1.shelf - p2.shelf).abs()) as Distance
}
