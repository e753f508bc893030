// Nearest-neighbor route planning over a batch's pick points

use crate::models::{Distance, Location, PickPoint, PickRoute};
use crate::utils::distance::manhattan_distance;

/// Plans the walking route for one batch with the greedy nearest-neighbor
/// heuristic: starting at the depot, repeatedly walk to the closest
/// unvisited pick point by Manhattan distance, then return to the depot.
///
/// Ties on distance go to the lowest pick-point index: the scan uses a
/// strict less-than comparison, so the earliest candidate wins. Changing
/// that tie-break would change the output on tied inputs, so it is part of
/// the contract.
///
/// O(n^2) in the number of pick points, which is bounded by the distinct
/// products in one batch.
pub fn plan_route(pick_points: &[PickPoint], depot: Location) -> PickRoute {
    let mut visited = vec![false; pick_points.len()];
    let mut sequence = Vec::with_capacity(pick_points.len());
    let mut current = depot;
    let mut total_distance: Distance = 0.0;

    for _ in 0..pick_points.len() {
        let mut best: Option<(usize, Distance)> = None;

        for (index, point) in pick_points.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let distance = manhattan_distance(&current, &point.location);
            match best {
                // Strict comparison: equal distances keep the earlier index
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }

        // The loop runs exactly once per pick point, so an unvisited one
        // always remains here
        if let Some((index, distance)) = best {
            visited[index] = true;
            sequence.push(index);
            total_distance += distance;
            current = pick_points[index].location;
        }
    }

    total_distance += manhattan_distance(&current, &depot);

    PickRoute::new(sequence, total_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pick_point() {
        let pick_points = vec![PickPoint::new(6, Location::new(3, 5), 1)];

        let route = plan_route(&pick_points, Location::depot());

        assert_eq!(route.sequence, vec![0]);
        // 8 out to (3,5) plus 8 back
        assert_eq!(route.total_distance, 16.0);
    }

    #[test]
    fn test_empty_pick_points() {
        let route = plan_route(&[], Location::depot());

        assert!(route.sequence.is_empty());
        assert_eq!(route.total_distance, 0.0);
    }

    #[test]
    fn test_nearest_neighbor_order() {
        let pick_points = vec![
            PickPoint::new(1, Location::new(5, 5), 1),
            PickPoint::new(2, Location::new(1, 1), 1),
            PickPoint::new(3, Location::new(2, 1), 1),
        ];

        let route = plan_route(&pick_points, Location::depot());

        // Closest first: (1,1) at 2, then (2,1) at 1, then (5,5) at 7,
        // return leg 10
        assert_eq!(route.sequence, vec![1, 2, 0]);
        assert_eq!(route.total_distance, 20.0);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        // Both points are distance 2 from the depot
        let pick_points = vec![
            PickPoint::new(1, Location::new(0, 2), 1),
            PickPoint::new(2, Location::new(2, 0), 1),
        ];

        let route = plan_route(&pick_points, Location::depot());

        assert_eq!(route.sequence, vec![0, 1]);
        // 2 out, 4 across, 2 back
        assert_eq!(route.total_distance, 8.0);
    }

    #[test]
    fn test_sequence_is_permutation() {
        let pick_points: Vec<PickPoint> = (0..10)
            .map(|i| PickPoint::new(i, Location::new((i as i32 * 7) % 5, (i as i32 * 3) % 6), 1))
            .collect();

        let route = plan_route(&pick_points, Location::depot());

        let mut sorted = route.sequence.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        assert!(route.total_distance >= 0.0);
    }

    #[test]
    fn test_non_origin_depot() {
        let pick_points = vec![PickPoint::new(1, Location::new(3, 5), 1)];

        let route = plan_route(&pick_points, Location::new(3, 5));

        assert_eq!(route.sequence, vec![0]);
        assert_eq!(route.total_distance, 0.0);
    }
}
