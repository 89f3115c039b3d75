//! Core traits for threecrate geometry

use crate::{bounds::*, line_set::*, mesh::*, point::*, point_cloud::*};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

fn bounds_of<'a, I>(points: I) -> (Point3f, Point3f)
where
    I: IntoIterator<Item = &'a Point3f>,
{
    AxisAlignedBoundingBox::from_points(points)
        .map(|b| (b.min, b.max))
        .unwrap_or((Point3f::origin(), Point3f::origin()))
}

impl Drawable for PointCloud<Point3f> {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(&self.points)
    }
}

impl Drawable for PointCloud<ColoredPoint3f> {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(self.points.iter().map(|p| &p.position))
    }
}

impl Drawable for TriangleMesh {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(&self.vertices)
    }
}

impl Drawable for LineSet {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        bounds_of(&self.points)
    }
}

impl Drawable for AxisAlignedBoundingBox {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        (self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cloud_bounds_at_origin() {
        let cloud: PointCloud<Point3f> = PointCloud::new();
        assert_eq!(cloud.bounding_box(), (Point3f::origin(), Point3f::origin()));
    }

    #[test]
    fn test_colored_cloud_center() {
        let cloud = PointCloud::from_points(vec![
            ColoredPoint3f::new(Point3f::new(-1.0, 0.0, 0.0), [1.0, 0.0, 0.0]),
            ColoredPoint3f::new(Point3f::new(3.0, 2.0, 0.0), [0.0, 1.0, 0.0]),
        ]);
        assert_eq!(cloud.center(), Point3f::new(1.0, 1.0, 0.0));
    }
}
