// Product model representing catalog reference data

use crate::models::{Location, ProductId, Weight};
use serde::Serialize;

/// Represents a product stocked in the warehouse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: ProductId,

    /// Display name of the product
    pub name: String,

    /// Shelf location where the product is picked
    pub location: Location,

    /// Weight of a single unit
    pub unit_weight: Weight,
}

impl Product {
    /// Creates a new product with the given id, name, location and unit weight
    pub fn new<S: Into<String>>(id: ProductId, name: S, location: Location, unit_weight: Weight) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            unit_weight,
        }
    }
}
