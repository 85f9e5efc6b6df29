use narrow2d::math::{Real, Vector};
use narrow2d::query::{self, CollisionAlgorithm};
use narrow2d::shape::Shape;
use oorandom::Rand32;

const SHAPE_RADIUS: Real = 0.15;

fn main() {
    let mut rng = Rand32::new(2);
    let targets = grid(&mut rng);
    println!("Grid of {} polygons.", targets.len());

    for algorithm in [CollisionAlgorithm::Gjk, CollisionAlgorithm::Sat] {
        println!("\nMode: {:?}", algorithm);

        // A small pentagon sweeping diagonally across the grid.
        let mut probe = Shape::regular_polygon(5, SHAPE_RADIUS)
            .with_scale(Vector::new(0.5, 0.5))
            .with_position(Vector::new(-1.0, -1.0));

        for step in 0..40 {
            probe.translate(&Vector::new(0.05, 0.05));
            probe.rotate(0.1);

            let results = query::penetrations(&probe, &targets, algorithm);
            let hits: Vec<_> = results
                .iter()
                .enumerate()
                .filter_map(|(i, res)| match res {
                    Ok(Some(mtv)) => Some((i, *mtv)),
                    _ => None,
                })
                .collect();

            if hits.is_empty() {
                continue;
            }

            for (i, mtv) in &hits {
                println!(
                    "step {:2}: probe at {:?} hits shape {:2} ({} sides), mtv = {:?}",
                    step,
                    probe.position().as_slice(),
                    i,
                    targets[*i].vertices().len(),
                    mtv.as_slice()
                );
            }

            // Push the probe out of everything it overlaps.
            match query::total_penetration(&probe, &targets, algorithm) {
                Ok(total) => {
                    probe.translate(&total);
                    println!("         resolved to {:?}", probe.position().as_slice());
                }
                Err(err) => println!("         cannot resolve: {}", err),
            }
        }
    }
}

/// Regular polygons from triangles upward, laid out row by row with random orientations.
fn grid(rng: &mut Rand32) -> Vec<Shape> {
    let count = rng.rand_range(20..35) as usize;
    let (mut x, mut y) = (-0.8, -0.8);
    let mut nsides = 3;
    let mut shapes = Vec::with_capacity(count);

    for i in 0..count {
        let angle = rng.rand_float() * std::f32::consts::TAU;
        shapes.push(
            Shape::regular_polygon(nsides, SHAPE_RADIUS)
                .with_position(Vector::new(x, y))
                .with_rotation(angle),
        );

        x += 0.4;
        if x > 0.8 {
            x = -0.8;
            y += 0.5;
        }
        if i % 4 != 0 {
            nsides += 1;
        }
    }

    shapes
}
