//! Point cloud data structures and functionality

use crate::point::*;
use crate::transform::Transform3D;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A generic point cloud container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

/// A point cloud with 3D points
pub type PointCloud3f = PointCloud<Point3f>;

/// A point cloud with colored points
pub type ColoredPointCloud3f = PointCloud<ColoredPoint3f>;

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, T> IntoIterator for &'a PointCloud<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl PointCloud<Point3f> {
    /// Sample `count` points uniformly inside the axis-aligned cube of
    /// half-width `|radius|` around `center`. A non-finite radius collapses
    /// the cube to `center`.
    pub fn random_in_cube<R: Rng>(
        count: usize,
        center: Point3f,
        radius: f32,
        rng: &mut R,
    ) -> Self {
        let radius = if radius.is_finite() { radius.abs() } else { 0.0 };
        (0..count)
            .map(|_| {
                Point3f::new(
                    center.x + rng.gen_range(-radius..=radius),
                    center.y + rng.gen_range(-radius..=radius),
                    center.z + rng.gen_range(-radius..=radius),
                )
            })
            .collect()
    }

    /// Apply a transformation to all points in the cloud
    pub fn transform(&mut self, transform: &Transform3D) {
        for point in &mut self.points {
            *point = transform.transform_point(point);
        }
    }

    /// Translate every point by `offset`
    pub fn translate(&mut self, offset: Vector3f) {
        for point in &mut self.points {
            *point += offset;
        }
    }

    /// Attach one color per point
    pub fn with_colors(&self, colors: &[Rgb]) -> crate::Result<PointCloud<ColoredPoint3f>> {
        if colors.len() != self.points.len() {
            return Err(crate::Error::InvalidData(format!(
                "expected {} colors, got {}",
                self.points.len(),
                colors.len()
            )));
        }
        Ok(self
            .points
            .iter()
            .zip(colors)
            .map(|(p, c)| ColoredPoint3f::new(*p, clamp_rgb(*c)))
            .collect())
    }

    /// Give every point the same color
    pub fn painted(&self, color: Rgb) -> PointCloud<ColoredPoint3f> {
        let color = clamp_rgb(color);
        self.points
            .iter()
            .map(|p| ColoredPoint3f::new(*p, color))
            .collect()
    }
}

impl PointCloud<ColoredPoint3f> {
    /// Sample `count` points inside a cube with a random color per point
    pub fn random_colored_in_cube<R: Rng>(
        count: usize,
        center: Point3f,
        radius: f32,
        rng: &mut R,
    ) -> Self {
        let positions = PointCloud::<Point3f>::random_in_cube(count, center, radius, rng);
        positions
            .points
            .into_iter()
            .map(|p| ColoredPoint3f::new(p, [rng.gen(), rng.gen(), rng.gen()]))
            .collect()
    }

    /// Overwrite the color of every point
    pub fn paint_uniform_color(&mut self, color: Rgb) {
        let color = clamp_rgb(color);
        for point in &mut self.points {
            point.color = color;
        }
    }

    /// Apply a transformation to all point positions, keeping colors
    pub fn transform(&mut self, transform: &Transform3D) {
        for point in &mut self.points {
            point.position = transform.transform_point(&point.position);
        }
    }

    /// The colors of all points, in order
    pub fn colors(&self) -> Vec<Rgb> {
        self.points.iter().map(|p| p.color).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_in_cube_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Point3f::new(3.0, -2.0, 0.0);
        let cloud = PointCloud3f::random_in_cube(500, center, 1.0, &mut rng);
        assert_eq!(cloud.len(), 500);
        for p in &cloud {
            assert!((p.x - center.x).abs() <= 1.0);
            assert!((p.y - center.y).abs() <= 1.0);
            assert!((p.z - center.z).abs() <= 1.0);
        }
    }

    #[test]
    fn test_random_in_cube_degenerate_radius() {
        let mut rng = StdRng::seed_from_u64(3);
        let center = Point3f::new(1.0, 2.0, 3.0);
        let cloud = PointCloud3f::random_in_cube(50, center, -0.5, &mut rng);
        assert!(cloud.iter().all(|p| (p - center).amax() <= 0.5));

        let cloud = PointCloud3f::random_in_cube(5, center, f32::NAN, &mut rng);
        assert!(cloud.iter().all(|p| *p == center));
    }

    #[test]
    fn test_with_colors_length_mismatch() {
        let cloud = PointCloud::from_points(vec![Point3f::origin(); 3]);
        assert!(cloud.with_colors(&[[1.0, 0.0, 0.0]]).is_err());
        assert_eq!(cloud.with_colors(&[[1.0, 0.0, 0.0]; 3]).unwrap().len(), 3);
    }

    #[test]
    fn test_paint_uniform_color() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut cloud =
            ColoredPointCloud3f::random_colored_in_cube(20, Point3f::origin(), 1.0, &mut rng);
        cloud.paint_uniform_color([0.8, 0.8, 0.8]);
        assert!(cloud.iter().all(|p| p.color == [0.8, 0.8, 0.8]));
    }

    #[test]
    fn test_translate() {
        let mut cloud = PointCloud::from_points(vec![Point3f::new(1.0, 1.0, 1.0)]);
        cloud.translate(Vector3f::new(1.0, 0.0, -1.0));
        assert_eq!(cloud[0], Point3f::new(2.0, 1.0, 0.0));
    }
}
