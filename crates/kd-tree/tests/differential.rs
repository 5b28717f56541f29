//! Cross-checks the 2-d tree against the linear-scan point set on random data.

use kd_tree::{Axis, KdTree, Point, PointSet, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRIALS: u64 = 40;
const QUERIES: usize = 200;

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
}

/// Points on a coarse grid, so duplicates and shared coordinates are common.
fn random_grid_point(rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..=8) as f64 / 8.0,
        rng.gen_range(0..=8) as f64 / 8.0,
    )
}

fn random_rect(rng: &mut StdRng) -> Rect {
    let (x0, x1) = (rng.gen_range(-0.2f64..1.2), rng.gen_range(-0.2f64..1.2));
    let (y0, y1) = (rng.gen_range(-0.2f64..1.2), rng.gen_range(-0.2f64..1.2));
    Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

fn build(points: &[Point]) -> (KdTree, PointSet) {
    let tree: KdTree = points.iter().copied().collect();
    let set: PointSet = points.iter().copied().collect();
    (tree, set)
}

fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(|a, b| a.cmp_on(b, Axis::Y));
    points
}

fn assert_same_nearest(tree: &KdTree, set: &PointSet, query: Point) {
    let from_tree = tree.nearest(query).expect("tree is non-empty");
    let from_set = set.nearest(query).expect("set is non-empty");

    assert_eq!(
        from_tree.distance_squared_to(&query),
        from_set.distance_squared_to(&query),
        "query {}: tree gave {}, scan gave {}",
        query,
        from_tree,
        from_set
    );
}

#[test]
fn size_counts_distinct_points() {
    let mut rng = StdRng::seed_from_u64(1);
    for trial in 0..TRIALS {
        let n = rng.gen_range(1..300);
        let points: Vec<Point> = (0..n).map(|_| random_grid_point(&mut rng)).collect();
        let (tree, set) = build(&points);

        assert_eq!(tree.len(), set.len(), "trial {}", trial);
        assert_eq!(tree.root().map_or(0, |root| root.len()), tree.len());
        assert_eq!(sorted(tree.points()), set.points());
    }
}

#[test]
fn contains_matches_scan() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..TRIALS {
        let points: Vec<Point> = (0..100).map(|_| random_grid_point(&mut rng)).collect();
        let (tree, set) = build(&points);

        for point in &points {
            assert!(tree.contains(*point));
        }
        for _ in 0..QUERIES {
            let query = random_grid_point(&mut rng);
            assert_eq!(tree.contains(query), set.contains(query), "query {}", query);
        }
    }
}

#[test]
fn range_matches_scan() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..TRIALS {
        let n = rng.gen_range(1..500);
        let points: Vec<Point> = (0..n).map(|_| random_point(&mut rng)).collect();
        let (tree, set) = build(&points);

        for _ in 0..QUERIES / 4 {
            let rect = random_rect(&mut rng);
            assert_eq!(sorted(tree.range(&rect)), set.range(&rect), "rect {}", rect);
        }
    }
}

#[test]
fn range_matches_scan_on_grid_boundaries() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..TRIALS {
        let points: Vec<Point> = (0..120).map(|_| random_grid_point(&mut rng)).collect();
        let (tree, set) = build(&points);

        for _ in 0..QUERIES / 4 {
            let a = random_grid_point(&mut rng);
            let b = random_grid_point(&mut rng);
            let rect = Rect::new(
                a.x().min(b.x()),
                a.y().min(b.y()),
                a.x().max(b.x()),
                a.y().max(b.y()),
            );
            assert_eq!(sorted(tree.range(&rect)), set.range(&rect), "rect {}", rect);
        }
    }
}

#[test]
fn nearest_matches_scan() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..TRIALS {
        let n = rng.gen_range(1..500);
        let points: Vec<Point> = (0..n).map(|_| random_point(&mut rng)).collect();
        let (tree, set) = build(&points);

        for _ in 0..QUERIES {
            assert_same_nearest(&tree, &set, random_point(&mut rng));
        }
    }
}

#[test]
fn nearest_matches_scan_with_ties() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..TRIALS {
        let points: Vec<Point> = (0..60).map(|_| random_grid_point(&mut rng)).collect();
        let (tree, set) = build(&points);

        for _ in 0..QUERIES {
            let query = Point::new(
                rng.gen_range(0..=16) as f64 / 16.0,
                rng.gen_range(0..=16) as f64 / 16.0,
            );
            assert_same_nearest(&tree, &set, query);
        }
    }
}

#[test]
fn nearest_of_stored_points_is_exact() {
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Point> = (0..400).map(|_| random_point(&mut rng)).collect();
    let tree: KdTree = points.iter().copied().collect();

    for point in &points {
        assert_eq!(tree.nearest_with_distance(*point), Some((*point, 0.0)));
    }
}

#[test]
fn nearest_far_outside_domain() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..TRIALS {
        let points: Vec<Point> = (0..200).map(|_| random_point(&mut rng)).collect();
        let (tree, set) = build(&points);

        for _ in 0..QUERIES / 4 {
            let query = Point::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            assert_same_nearest(&tree, &set, query);
        }
    }
}

#[test]
fn sorted_insertion_order_still_answers_correctly() {
    // Degenerate, list-shaped tree.
    let points: Vec<Point> = (0..200)
        .map(|i| Point::new(i as f64 / 200.0, i as f64 / 200.0))
        .collect();
    let (tree, set) = build(&points);

    assert_eq!(tree.len(), 200);
    assert_eq!(tree.depth(), 200);

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..QUERIES {
        assert_same_nearest(&tree, &set, random_point(&mut rng));
        let rect = random_rect(&mut rng);
        assert_eq!(sorted(tree.range(&rect)), set.range(&rect));
    }
}

#[test]
fn queries_match_scan_with_points_outside_domain() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..TRIALS {
        let points: Vec<Point> = (0..150)
            .map(|_| Point::new(rng.gen_range(-2.0..3.0), rng.gen_range(-2.0..3.0)))
            .collect();
        let (tree, set) = build(&points);

        for _ in 0..QUERIES / 4 {
            let query = Point::new(rng.gen_range(-4.0..5.0), rng.gen_range(-4.0..5.0));
            assert_same_nearest(&tree, &set, query);

            let (x0, x1) = (rng.gen_range(-3.0f64..4.0), rng.gen_range(-3.0f64..4.0));
            let (y0, y1) = (rng.gen_range(-3.0f64..4.0), rng.gen_range(-3.0f64..4.0));
            let rect = Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
            assert_eq!(sorted(tree.range(&rect)), set.range(&rect), "rect {}", rect);
        }
    }
}
