// Route model for the computed pick trip of a single batch

use crate::models::Distance;
use serde::Serialize;

/// The walking route for one batch: the order in which to visit the pick
/// points (as indices into the batch's pick-point list) and the total
/// distance including the return leg to the depot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickRoute {
    /// Permutation of pick-point indices in visiting order
    pub sequence: Vec<usize>,

    /// Total Manhattan distance walked, depot to depot
    pub total_distance: Distance,
}

impl PickRoute {
    /// Creates a new route from a visiting sequence and its total distance
    pub fn new(sequence: Vec<usize>, total_distance: Distance) -> Self {
        Self {
            sequence,
            total_distance,
        }
    }

    /// Number of pick points the route visits
    pub fn stop_count(&self) -> usize {
        self.sequence.len()
    }
}
