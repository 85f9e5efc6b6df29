use narrow2d::math::{Real, Vector};
use narrow2d::query;
use narrow2d::shape::Shape;
use oorandom::Rand32;

pub fn rand_range(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

/// A regular polygon with 3 to 10 sides, randomly scaled, rotated and placed in `[-2, 2]²`.
///
/// Regular polygons are centered on their local origin, so they stay convex under any
/// non-uniform scale.
pub fn random_polygon(rng: &mut Rand32) -> Shape {
    let nsides = rng.rand_range(3..11) as usize;
    let radius = rand_range(rng, 0.2, 1.0);

    Shape::regular_polygon(nsides, radius)
        .with_scale(Vector::new(
            rand_range(rng, 0.5, 2.0),
            rand_range(rng, 0.5, 2.0),
        ))
        .with_rotation(rand_range(rng, 0.0, 6.28))
        .with_position(Vector::new(
            rand_range(rng, -2.0, 2.0),
            rand_range(rng, -2.0, 2.0),
        ))
}

/// Are the two shapes close to touching?
///
/// Growing and shrinking the first shape by a few percent around its center must not change
/// the outcome of the separating axis test, otherwise the pair is too close to call.
pub fn nearly_touching(shape1: &Shape, shape2: &Shape) -> bool {
    let grown = shape1.clone().with_scale(shape1.scale() * 1.02);
    let shrunk = shape1.clone().with_scale(shape1.scale() * 0.98);

    let (grown_hit, _) = query::sat_check_collision(&grown, shape2).unwrap();
    let (shrunk_hit, _) = query::sat_check_collision(&shrunk, shape2).unwrap();
    grown_hit != shrunk_hit
}
