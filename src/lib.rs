// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{plan_batches, plan_batches_parallel, BatchPlan};
pub use error::PickError;
pub use models::{
    Batch, BatchCapacity, Catalog, InMemoryCatalog, Location, Order, OrderLine, PickPoint,
    PickRoute, Product,
};
