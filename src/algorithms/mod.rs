pub mod aggregation;
pub mod batching;
pub mod routing;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::PickError;
use crate::models::{Batch, BatchCapacity, Catalog, Location, Order, PickPoint, PickRoute};

/// Everything a reporter needs about one batch: the batch itself, its
/// aggregated pick points and the planned route over them
#[derive(Debug, Clone, Serialize)]
pub struct BatchPlan<'a> {
    pub batch: Batch<'a>,
    pub pick_points: Vec<PickPoint>,
    pub route: PickRoute,
}

/// Runs the full pipeline: first-fit batch assignment, then per-batch
/// pick-point aggregation and route planning. Plans come back in batch
/// creation order.
pub fn plan_batches<'a, C: Catalog>(
    orders: &'a [Order],
    catalog: &C,
    capacity: BatchCapacity,
    depot: Location,
) -> Result<Vec<BatchPlan<'a>>, PickError> {
    let batches = batching::assign_batches(orders, catalog, capacity)?;

    batches
        .into_iter()
        .map(|batch| plan_one(batch, catalog, depot))
        .collect()
}

/// Same pipeline, but aggregation and routing fan out across batches on
/// the rayon thread pool. Batches are independent once assignment is done,
/// so this is purely a throughput option; the result is identical to
/// `plan_batches` and still in batch creation order.
pub fn plan_batches_parallel<'a, C: Catalog + Sync>(
    orders: &'a [Order],
    catalog: &C,
    capacity: BatchCapacity,
    depot: Location,
) -> Result<Vec<BatchPlan<'a>>, PickError> {
    let batches = batching::assign_batches(orders, catalog, capacity)?;

    batches
        .into_par_iter()
        .map(|batch| plan_one(batch, catalog, depot))
        .collect()
}

fn plan_one<'a, C: Catalog>(
    batch: Batch<'a>,
    catalog: &C,
    depot: Location,
) -> Result<BatchPlan<'a>, PickError> {
    let pick_points = aggregation::aggregate_pick_points(&batch, catalog)?;
    let route = routing::plan_route(&pick_points, depot);

    Ok(BatchPlan {
        batch,
        pick_points,
        route,
    })
}
