// Pick point model: one shelf location to visit during a batch's pick trip

use crate::models::{Location, ProductId, Quantity};
use serde::Serialize;

/// A single pick location with the quantity needed there, aggregated
/// across every order in the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PickPoint {
    /// Product picked at this location
    pub product_id: ProductId,

    /// Shelf location, copied from the catalog at aggregation time
    pub location: Location,

    /// Total quantity of the product needed by the batch
    pub quantity: Quantity,
}

impl PickPoint {
    /// Creates a new pick point
    pub fn new(product_id: ProductId, location: Location, quantity: Quantity) -> Self {
        Self {
            product_id,
            location,
            quantity,
        }
    }
}
