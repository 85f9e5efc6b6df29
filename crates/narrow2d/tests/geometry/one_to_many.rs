use approx::assert_relative_eq;
use narrow2d::math::Vector;
use narrow2d::query::{self, CollisionAlgorithm};
use narrow2d::shape::Shape;

fn grid(nx: usize, ny: usize, spacing: f32) -> Vec<Shape> {
    (0..nx * ny)
        .map(|i| {
            let (x, y) = ((i % nx) as f32, (i / nx) as f32);
            Shape::regular_polygon(3 + i % 8, 0.15)
                .with_position(Vector::new(x * spacing, y * spacing))
        })
        .collect()
}

#[test]
fn probe_between_grid_cells_hits_nothing() {
    let targets = grid(8, 8, 1.0);
    let probe = Shape::regular_polygon(5, 0.15)
        .with_scale(Vector::new(0.5, 0.5))
        .with_position(Vector::new(3.5, 3.5));

    for algorithm in [CollisionAlgorithm::Gjk, CollisionAlgorithm::Sat] {
        let results = query::penetrations(&probe, &targets, algorithm);
        assert_eq!(results.len(), 64);
        assert!(results.iter().all(|r| *r == Ok(None)));
        assert_eq!(
            query::total_penetration(&probe, &targets, algorithm),
            Ok(Vector::zeros())
        );
    }
}

#[test]
fn resolving_pushes_the_probe_out() {
    let targets = grid(4, 4, 1.0);

    for algorithm in [CollisionAlgorithm::Gjk, CollisionAlgorithm::Sat] {
        let mut probe = Shape::regular_polygon(5, 0.15)
            .with_scale(Vector::new(0.5, 0.5))
            .with_position(Vector::new(2.05, 1.02));

        let hits = query::penetrations(&probe, &targets, algorithm)
            .into_iter()
            .filter(|r| matches!(r, Ok(Some(_))))
            .count();
        assert_eq!(hits, 1);

        // A single overlapping target: one step resolves it.
        let total = query::total_penetration(&probe, &targets, algorithm).unwrap();
        assert!(total.norm() > 0.0);
        probe.translate(&(total * 1.01));

        let after = query::total_penetration(&probe, &targets, algorithm).unwrap();
        assert_relative_eq!(after, Vector::zeros(), epsilon = 1.0e-4);
    }
}
