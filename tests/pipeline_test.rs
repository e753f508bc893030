// Integration test for the full batching -> aggregation -> routing pipeline
use warehouse_picker::{
    plan_batches, BatchCapacity, InMemoryCatalog, Location, Order, OrderLine, PickError, Product,
};

fn create_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_products(vec![
        Product::new(1, "Soap", Location::new(1, 1), 0.5),
        Product::new(2, "Shampoo", Location::new(1, 4), 1.0),
        Product::new(3, "Oil 1L", Location::new(2, 3), 1.5),
        Product::new(4, "Detergent", Location::new(2, 6), 3.0),
        Product::new(5, "Toothpaste", Location::new(3, 1), 0.2),
        Product::new(6, "Flour 5kg", Location::new(3, 5), 5.0),
    ])
}

fn create_orders() -> Vec<Order> {
    vec![
        Order::new(101, vec![OrderLine::new(1, 2), OrderLine::new(2, 1)]),
        Order::new(102, vec![OrderLine::new(3, 1), OrderLine::new(4, 1)]),
        Order::new(103, vec![OrderLine::new(2, 2), OrderLine::new(5, 3)]),
        Order::new(104, vec![OrderLine::new(6, 1)]),
    ]
}

#[test]
fn test_reference_scenario() {
    let catalog = create_catalog();
    let orders = create_orders();

    let plans = plan_batches(
        &orders,
        &catalog,
        BatchCapacity::new(6.0, 8),
        Location::depot(),
    )
    .unwrap();

    assert_eq!(plans.len(), 3);

    // Batch 1: orders 101 and 103 (first-fit keeps 103 with 101)
    let batch1 = &plans[0];
    assert_eq!(batch1.batch.order_ids(), vec![101, 103]);
    assert_eq!(batch1.batch.total_weight, 4.6);
    assert_eq!(batch1.batch.total_items, 8);

    // Pick points in first-seen order: soap, shampoo (2+1... then +2),
    // toothpaste
    assert_eq!(batch1.pick_points.len(), 3);
    assert_eq!(batch1.pick_points[0].product_id, 1);
    assert_eq!(batch1.pick_points[0].quantity, 2);
    assert_eq!(batch1.pick_points[1].product_id, 2);
    assert_eq!(batch1.pick_points[1].quantity, 3);
    assert_eq!(batch1.pick_points[2].product_id, 5);
    assert_eq!(batch1.pick_points[2].quantity, 3);

    // Nearest neighbor: (1,1) -> (3,1) -> (1,4) -> depot
    assert_eq!(batch1.route.sequence, vec![0, 2, 1]);
    assert_eq!(batch1.route.total_distance, 14.0);

    // Batch 2: order 102 alone
    let batch2 = &plans[1];
    assert_eq!(batch2.batch.order_ids(), vec![102]);
    assert_eq!(batch2.batch.total_weight, 4.5);
    assert_eq!(batch2.batch.total_items, 2);
    assert_eq!(batch2.route.sequence, vec![0, 1]);
    assert_eq!(batch2.route.total_distance, 16.0);

    // Batch 3: order 104, a single pick point at (3,5), 8 out and 8 back
    let batch3 = &plans[2];
    assert_eq!(batch3.batch.order_ids(), vec![104]);
    assert_eq!(batch3.pick_points.len(), 1);
    assert_eq!(batch3.route.sequence, vec![0]);
    assert_eq!(batch3.route.total_distance, 16.0);

    let grand_total: f64 = plans.iter().map(|plan| plan.route.total_distance).sum();
    assert_eq!(grand_total, 46.0);
}

#[test]
fn test_unknown_product_propagates() {
    let catalog = create_catalog();
    let orders = vec![Order::new(1, vec![OrderLine::new(77, 2)])];

    let result = plan_batches(
        &orders,
        &catalog,
        BatchCapacity::new(6.0, 8),
        Location::depot(),
    );

    assert_eq!(result.unwrap_err(), PickError::ProductNotFound(77));
}

#[test]
fn test_invalid_capacity_rejected_before_processing() {
    let catalog = create_catalog();
    let orders = create_orders();

    let result = plan_batches(
        &orders,
        &catalog,
        BatchCapacity::new(6.0, 0),
        Location::depot(),
    );

    assert!(matches!(
        result.unwrap_err(),
        PickError::InvalidCapacity { .. }
    ));
}

#[test]
fn test_no_orders_yields_no_plans() {
    let catalog = create_catalog();

    let plans = plan_batches(
        &[],
        &catalog,
        BatchCapacity::new(6.0, 8),
        Location::depot(),
    )
    .unwrap();

    assert!(plans.is_empty());
}

#[test]
fn test_plans_serialize_to_json() {
    let catalog = create_catalog();
    let orders = create_orders();

    let plans = plan_batches(
        &orders,
        &catalog,
        BatchCapacity::new(6.0, 8),
        Location::depot(),
    )
    .unwrap();

    let json = serde_json::to_string(&plans).unwrap();
    assert!(json.contains("\"total_distance\""));
    assert!(json.contains("\"pick_points\""));
}
