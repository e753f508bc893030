// Batch model representing a capacity-bounded group of orders picked together

use crate::error::PickError;
use crate::models::{Order, OrderId, Quantity, Weight};
use serde::Serialize;

/// Capacity limits a batch must respect during assignment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchCapacity {
    /// Maximum total weight a batch may carry
    pub max_weight: Weight,

    /// Maximum total number of units a batch may carry
    pub max_items: Quantity,
}

impl BatchCapacity {
    /// Creates a new capacity limit
    pub fn new(max_weight: Weight, max_items: Quantity) -> Self {
        Self {
            max_weight,
            max_items,
        }
    }

    /// Rejects non-positive bounds before any order is processed
    pub fn validate(&self) -> Result<(), PickError> {
        // The negated comparison also rejects a NaN weight limit
        if !(self.max_weight > 0.0) || self.max_items == 0 {
            return Err(PickError::InvalidCapacity {
                max_weight: self.max_weight,
                max_items: self.max_items,
            });
        }
        Ok(())
    }

    /// Checks whether an additional load still fits under both limits
    pub fn admits(&self, current_weight: Weight, current_items: Quantity, extra_weight: Weight, extra_items: Quantity) -> bool {
        current_weight + extra_weight <= self.max_weight && current_items + extra_items <= self.max_items
    }
}

/// A group of orders picked in one trip, with running capacity totals.
/// Holds references to the assigned orders rather than copies; the batch
/// is only ever mutated by appending whole orders.
#[derive(Debug, Clone, Serialize)]
pub struct Batch<'a> {
    /// Identifier in assignment order (0-based)
    pub id: usize,

    /// Orders assigned to this batch, in insertion order
    pub orders: Vec<&'a Order>,

    /// Sum of weight over all assigned orders' lines
    pub total_weight: Weight,

    /// Sum of quantity over all assigned orders' lines
    pub total_items: Quantity,
}

impl<'a> Batch<'a> {
    /// Creates a new empty batch with the given assignment id
    pub fn new(id: usize) -> Self {
        Self {
            id,
            orders: Vec::new(),
            total_weight: 0.0,
            total_items: 0,
        }
    }

    /// Appends a whole order and updates the running totals incrementally
    pub fn add_order(&mut self, order: &'a Order, order_weight: Weight, order_items: Quantity) {
        self.orders.push(order);
        self.total_weight += order_weight;
        self.total_items += order_items;
    }

    /// Ids of the assigned orders, in insertion order
    pub fn order_ids(&self) -> Vec<OrderId> {
        self.orders.iter().map(|order| order.id).collect()
    }
}
