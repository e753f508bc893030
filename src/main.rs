use warehouse_picker::models::Catalog;
use warehouse_picker::{
    plan_batches, BatchCapacity, InMemoryCatalog, Location, Order, OrderLine, Product,
};

fn main() {
    let catalog = InMemoryCatalog::from_products(vec![
        Product::new(1, "Soap", Location::new(1, 1), 0.5),
        Product::new(2, "Shampoo", Location::new(1, 4), 1.0),
        Product::new(3, "Oil 1L", Location::new(2, 3), 1.5),
        Product::new(4, "Detergent", Location::new(2, 6), 3.0),
        Product::new(5, "Toothpaste", Location::new(3, 1), 0.2),
        Product::new(6, "Flour 5kg", Location::new(3, 5), 5.0),
    ]);

    let orders = vec![
        Order::new(101, vec![OrderLine::new(1, 2), OrderLine::new(2, 1)]),
        Order::new(102, vec![OrderLine::new(3, 1), OrderLine::new(4, 1)]),
        Order::new(103, vec![OrderLine::new(2, 2), OrderLine::new(5, 3)]),
        Order::new(104, vec![OrderLine::new(6, 1)]),
    ];

    let capacity = BatchCapacity::new(6.0, 8);
    let depot = Location::depot();

    let plans = match plan_batches(&orders, &catalog, capacity, depot) {
        Ok(plans) => plans,
        Err(e) => {
            eprintln!("Planning failed: {}", e);
            std::process::exit(1);
        }
    };

    if std::env::args().any(|arg| arg == "--json") {
        match serde_json::to_string_pretty(&plans) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize plans: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("======================");
    println!("WAREHOUSE OPTIMIZATION");
    println!("======================");

    let mut total_distance = 0.0;

    for plan in &plans {
        println!("\n--- Batch {} ---", plan.batch.id + 1);

        let order_ids: Vec<String> = plan
            .batch
            .order_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!("Orders: {}", order_ids.join(" "));
        println!(
            "Load: {:.2} weight, {} items",
            plan.batch.total_weight, plan.batch.total_items
        );

        println!("Pick Sequence:");
        for &index in &plan.route.sequence {
            let point = &plan.pick_points[index];
            let name = match catalog.resolve(point.product_id) {
                Ok(product) => product.name.clone(),
                Err(_) => format!("product {}", point.product_id),
            };
            println!(
                " -> {} at ({},{}) qty={}",
                name, point.location.aisle, point.location.shelf, point.quantity
            );
        }

        println!("Return to ({},{})", depot.aisle, depot.shelf);
        println!("Total distance for batch: {:.2}", plan.route.total_distance);

        total_distance += plan.route.total_distance;
    }

    println!("\nTotal batched distance = {:.2}", total_distance);
}
