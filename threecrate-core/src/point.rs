//! Point and color types

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use bytemuck::{Pod, Zeroable};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Linear RGB color with components in `[0, 1]`
pub type Rgb = [f32; 3];

/// Linear RGBA color with components in `[0, 1]`
pub type Rgba = [f32; 4];

/// A point with color information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct ColoredPoint3f {
    pub position: Point3f,
    pub color: Rgb,
}

unsafe impl Pod for ColoredPoint3f {}
unsafe impl Zeroable for ColoredPoint3f {}

impl ColoredPoint3f {
    pub fn new(position: Point3f, color: Rgb) -> Self {
        Self { position, color }
    }
}

impl Default for ColoredPoint3f {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            color: [1.0, 1.0, 1.0],
        }
    }
}

impl From<ColoredPoint3f> for Point3f {
    fn from(point: ColoredPoint3f) -> Self {
        point.position
    }
}

/// Clamp every component of a color into `[0, 1]`
pub fn clamp_rgb(color: Rgb) -> Rgb {
    [
        color[0].clamp(0.0, 1.0),
        color[1].clamp(0.0, 1.0),
        color[2].clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_rgb() {
        assert_eq!(clamp_rgb([-0.5, 0.5, 2.0]), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_colored_point_into_position() {
        let p = ColoredPoint3f::new(Point3f::new(1.0, 2.0, 3.0), [1.0, 0.0, 0.0]);
        assert_eq!(Point3f::from(p), Point3f::new(1.0, 2.0, 3.0));
    }
}
