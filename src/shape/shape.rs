use crate::math::{Point, Real, Rotation, Vector};
use crate::query::CollisionError;
use crate::shape::SupportMap;
use crate::utils;
use na::RealField;

/// A 2D convex polygon with its own affine transform.
///
/// The shape stores its vertices in local-space. The world-space position of the `i`-th
/// vertex is `rotate(scale * vertices[i], rotation) + position`: the non-uniform scale is
/// applied first, then the rotation around the Z axis, then the translation.
///
/// Changing the transform is cheap and is the intended way of moving a shape around
/// every frame. The vertices themselves are only rewritten by [`Shape::bake_transform`].
///
/// All the collision queries of this crate borrow shapes immutably, so a shape can be
/// queried from multiple threads at the same time.
///
/// # Convexity
///
/// The vertices are assumed, but not checked, to describe a convex polygon. The winding
/// order does not matter for GJK and EPA. The separating axis test computes its candidate
/// axes from consecutive vertices, so the vertices must be given in polygon order (either
/// clockwise or counter-clockwise).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use narrow2d::shape::Shape;
/// use narrow2d::math::{Point, Vector};
///
/// let triangle = Shape::regular_polygon(3, 0.15)
///     .with_position(Vector::new(1.0, 2.0))
///     .with_scale(Vector::new(2.0, 2.0));
///
/// assert_eq!(triangle.vertices().len(), 3);
/// let v0 = triangle.world_vertex(0);
/// assert!((v0 - Point::new(1.3, 2.0)).norm() < 1.0e-6);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    vertices: Vec<Point<Real>>,
    position: Vector<Real>,
    rotation: Real,
    scale: Vector<Real>,
}

impl Shape {
    /// Creates a new shape from its local-space vertices, with an identity transform.
    ///
    /// An empty vertex list is accepted here but rejected with
    /// [`CollisionError::InvalidShape`] by every query.
    pub fn new(vertices: Vec<Point<Real>>) -> Self {
        Shape {
            vertices,
            position: Vector::zeros(),
            rotation: 0.0,
            scale: Vector::repeat(1.0),
        }
    }

    /// Creates a regular polygon with `nsides` vertices lying on a circle of the given radius.
    ///
    /// The `k`-th vertex is at angle `2π k / nsides`, so the first vertex lies on the
    /// positive X axis and the vertices are counter-clockwise. With `nsides == 1` the shape
    /// is a single point at `(radius, 0)`. With `nsides == 0` the shape is empty.
    pub fn regular_polygon(nsides: usize, radius: Real) -> Self {
        let step = Real::two_pi() / (nsides as Real);
        let vertices = (0..nsides)
            .map(|k| {
                let (sin, cos) = (step * k as Real).sin_cos();
                Point::new(cos * radius, sin * radius)
            })
            .collect();
        Self::new(vertices)
    }

    /// Creates an axis-aligned box centered at the local origin.
    ///
    /// The vertices are counter-clockwise, starting at the bottom-left corner.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let (hx, hy) = (half_extents.x, half_extents.y);
        Self::new(vec![
            Point::new(-hx, -hy),
            Point::new(hx, -hy),
            Point::new(hx, hy),
            Point::new(-hx, hy),
        ])
    }

    /// Sets the world-space position of this shape.
    #[must_use]
    pub fn with_position(mut self, position: Vector<Real>) -> Self {
        self.position = position;
        self
    }

    /// Sets the rotation (in radians, around the Z axis) of this shape.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Real) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the non-uniform scale of this shape.
    #[must_use]
    pub fn with_scale(mut self, scale: Vector<Real>) -> Self {
        self.scale = scale;
        self
    }

    /// The local-space vertices of this shape.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The world-space translation of this shape.
    #[inline]
    pub fn position(&self) -> Vector<Real> {
        self.position
    }

    /// The rotation angle of this shape, in radians.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// The non-uniform scale of this shape.
    #[inline]
    pub fn scale(&self) -> Vector<Real> {
        self.scale
    }

    /// Sets the world-space translation of this shape.
    #[inline]
    pub fn set_position(&mut self, position: Vector<Real>) {
        self.position = position;
    }

    /// Sets the rotation angle of this shape, in radians.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Real) {
        self.rotation = rotation;
    }

    /// Sets the non-uniform scale of this shape.
    #[inline]
    pub fn set_scale(&mut self, scale: Vector<Real>) {
        self.scale = scale;
    }

    /// Moves this shape by `shift`.
    #[inline]
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.position += shift;
    }

    /// Rotates this shape by `angle` radians around its position.
    #[inline]
    pub fn rotate(&mut self, angle: Real) {
        self.rotation += angle;
    }

    /// The rotation of this shape as a unit complex number.
    #[inline]
    pub fn rotation_unit(&self) -> Rotation<Real> {
        Rotation::new(self.rotation)
    }

    /// Transforms a local-space point into world-space.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation_unit() * pt.coords.component_mul(&self.scale) + self.position)
    }

    /// The world-space position of the `i`-th vertex.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.vertices().len()`.
    #[inline]
    pub fn world_vertex(&self, i: usize) -> Point<Real> {
        self.transform_point(&self.vertices[i])
    }

    /// Iterates through the world-space vertices of this shape, in order.
    pub fn world_vertices(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        let rot = self.rotation_unit();
        self.vertices
            .iter()
            .map(move |pt| Point::from(rot * pt.coords.component_mul(&self.scale) + self.position))
    }

    /// The average of the world-space vertices of this shape.
    ///
    /// Returns `None` if this shape has no vertex.
    pub fn center(&self) -> Option<Point<Real>> {
        utils::center(&self.vertices).map(|c| self.transform_point(&c))
    }

    /// Rewrites the vertices of this shape in world-space and resets its transform to identity.
    ///
    /// The world-space vertices are the same before and after this call.
    pub fn bake_transform(&mut self) {
        let baked: Vec<_> = self.world_vertices().collect();
        self.vertices = baked;
        self.position = Vector::zeros();
        self.rotation = 0.0;
        self.scale = Vector::repeat(1.0);
    }

    /// Checks that this shape can be used by the collision queries.
    ///
    /// Fails with [`CollisionError::InvalidShape`] if it has no vertex, or if any of its
    /// vertices or transform components is not finite.
    pub fn validate(&self) -> Result<(), CollisionError> {
        let finite_transform = self.position.iter().all(|e| e.is_finite())
            && self.rotation.is_finite()
            && self.scale.iter().all(|e| e.is_finite());
        let finite_vertices = self
            .vertices
            .iter()
            .all(|pt| pt.coords.iter().all(|e| e.is_finite()));

        if self.vertices.is_empty() || !finite_transform || !finite_vertices {
            Err(CollisionError::InvalidShape)
        } else {
            Ok(())
        }
    }

    /// The local-space vertex maximizing its dot product with the local-space direction `dir`.
    ///
    /// Ties are broken in favor of the vertex with the lowest index. Returns `None` if this
    /// shape has no vertex.
    #[inline]
    pub fn local_support_point(&self, dir: &Vector<Real>) -> Option<Point<Real>> {
        utils::point_cloud_support_point(dir, &self.vertices)
    }
}

impl SupportMap for Shape {
    /// The world-space vertex maximizing its dot product with the world-space direction `dir`.
    ///
    /// The direction is mapped into local-space through the transpose of the
    /// rotation-scale matrix, so that the projection of each local vertex on the mapped
    /// direction equals the projection of the world vertex on `dir`, up to a constant.
    /// An empty shape returns its position.
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let rot = self.rotation_unit();
        let local_dir = rot.inverse_transform_vector(dir).component_mul(&self.scale);

        match self.local_support_point(&local_dir) {
            Some(pt) => Point::from(rot * pt.coords.component_mul(&self.scale) + self.position),
            None => Point::from(self.position),
        }
    }
}
