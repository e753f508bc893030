// Order models representing customer requests to be picked

use crate::models::{OrderId, ProductId, Quantity};
use serde::Serialize;

/// A single requested product with its quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Identifier of the requested product
    pub product_id: ProductId,

    /// Requested quantity, always positive
    pub quantity: Quantity,
}

impl OrderLine {
    /// Creates a new order line
    pub fn new(product_id: ProductId, quantity: Quantity) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A customer order: an identifier and its ordered sequence of lines
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique identifier for the order
    pub id: OrderId,

    /// The requested lines, in the order they were placed
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Creates a new order from an id and its lines
    pub fn new(id: OrderId, lines: Vec<OrderLine>) -> Self {
        Self { id, lines }
    }

    /// Total number of units requested across all lines
    pub fn total_quantity(&self) -> Quantity {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
