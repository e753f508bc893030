// Catalog lookup: resolves product ids to their reference data

use crate::error::PickError;
use crate::models::{Product, ProductId};
use std::collections::HashMap;

/// Lookup interface the batching and aggregation algorithms resolve
/// products through. Implementations only need resolve-by-id; how the
/// catalog is stored is their concern.
pub trait Catalog {
    /// Resolves a product id to its catalog entry, failing with
    /// `PickError::ProductNotFound` if the id is absent
    fn resolve(&self, product_id: ProductId) -> Result<&Product, PickError>;
}

/// Catalog backed by an in-memory map keyed by product id
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Builds a catalog from a collection of products, keyed by their ids
    pub fn from_products<I: IntoIterator<Item = Product>>(products: I) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id, product))
                .collect(),
        }
    }

    /// Adds a product, replacing any previous entry with the same id
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn resolve(&self, product_id: ProductId) -> Result<&Product, PickError> {
        self.products
            .get(&product_id)
            .ok_or(PickError::ProductNotFound(product_id))
    }
}
