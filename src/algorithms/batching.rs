// First-fit assignment of orders to capacity-bounded batches

use crate::error::PickError;
use crate::models::{Batch, BatchCapacity, Catalog, Order, Quantity, Weight};

/// Partitions orders into batches under the given capacity limits using
/// first-fit packing: each order, in input order, goes into the first
/// existing batch that still admits it under BOTH the weight and the item
/// limit, or opens a new batch at the end of the list.
///
/// An order that alone exceeds the limits still gets its own batch; no
/// order is ever rejected. That case is logged as a warning but is not an
/// error.
pub fn assign_batches<'a, C: Catalog>(
    orders: &'a [Order],
    catalog: &C,
    capacity: BatchCapacity,
) -> Result<Vec<Batch<'a>>, PickError> {
    capacity.validate()?;

    let mut batches: Vec<Batch<'a>> = Vec::new();

    for order in orders {
        let (order_weight, order_items) = order_totals(order, catalog)?;

        let placed = batches.iter_mut().find(|batch| {
            capacity.admits(batch.total_weight, batch.total_items, order_weight, order_items)
        });

        match placed {
            Some(batch) => batch.add_order(order, order_weight, order_items),
            None => {
                if !capacity.admits(0.0, 0, order_weight, order_items) {
                    tracing::warn!(
                        order_id = order.id,
                        order_weight,
                        order_items,
                        "single order exceeds batch capacity, batching it alone"
                    );
                }
                let mut batch = Batch::new(batches.len());
                batch.add_order(order, order_weight, order_items);
                batches.push(batch);
            }
        }
    }

    Ok(batches)
}

/// Sums an order's total weight and unit count over its lines, resolving
/// each product through the catalog
pub fn order_totals<C: Catalog>(
    order: &Order,
    catalog: &C,
) -> Result<(Weight, Quantity), PickError> {
    let mut weight = 0.0;
    let mut items = 0;

    for line in &order.lines {
        let product = catalog.resolve(line.product_id)?;
        weight += product.unit_weight * line.quantity as Weight;
        items += line.quantity;
    }

    Ok((weight, items))
}
