// Error types for the batching and routing core

use crate::models::{ProductId, Quantity, Weight};
use thiserror::Error;

/// Faults the core can raise. Both variants abort the operation that
/// triggered them; the core never returns partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickError {
    /// An order line or pick point referenced a product id the catalog
    /// does not know
    #[error("product {0} not found in catalog")]
    ProductNotFound(ProductId),

    /// Batch capacity limits must both be positive
    #[error("invalid batch capacity: max_weight={max_weight}, max_items={max_items}")]
    InvalidCapacity {
        max_weight: Weight,
        max_items: Quantity,
    },
}
