// Aggregation of a batch's order lines into per-product pick points

use crate::error::PickError;
use crate::models::{Batch, Catalog, PickPoint, ProductId};
use std::collections::HashMap;

/// Merges every line of every order in the batch into one pick point per
/// distinct product, with the quantities summed. Output order is the order
/// in which products are first seen while walking the batch's orders and
/// lines; a map from product id to output index keeps repeat lookups O(1).
pub fn aggregate_pick_points<C: Catalog>(
    batch: &Batch,
    catalog: &C,
) -> Result<Vec<PickPoint>, PickError> {
    let mut pick_points: Vec<PickPoint> = Vec::new();
    let mut index_by_product: HashMap<ProductId, usize> = HashMap::new();

    for order in &batch.orders {
        for line in &order.lines {
            match index_by_product.get(&line.product_id) {
                Some(&index) => pick_points[index].quantity += line.quantity,
                None => {
                    let product = catalog.resolve(line.product_id)?;
                    index_by_product.insert(line.product_id, pick_points.len());
                    pick_points.push(PickPoint::new(
                        line.product_id,
                        product.location,
                        line.quantity,
                    ));
                }
            }
        }
    }

    Ok(pick_points)
}
