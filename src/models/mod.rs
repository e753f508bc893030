// Models module - exports all model types

mod batch;
mod catalog;
mod location;
mod order;
mod pick_point;
mod product;
mod route;

// Re-export model types
pub use self::batch::{Batch, BatchCapacity};
pub use self::catalog::{Catalog, InMemoryCatalog};
pub use self::location::Location;
pub use self::order::{Order, OrderLine};
pub use self::pick_point::PickPoint;
pub use self::product::Product;
pub use self::route::PickRoute;

// Common type aliases for improved code readability
pub type ProductId = u32;
pub type OrderId = u32;
pub type Quantity = u32;
pub type Weight = f64;
pub type Distance = f64;
