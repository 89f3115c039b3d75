//! Axis-aligned bounding boxes

use crate::point::*;
use serde::{Deserialize, Serialize};

/// An axis-aligned box, drawable as a wireframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBoundingBox {
    pub min: Point3f,
    pub max: Point3f,
    /// Wireframe color; `None` leaves it to the renderer
    pub color: Option<Rgb>,
}

impl AxisAlignedBoundingBox {
    /// Create a box from two corners, in any order
    pub fn new(a: Point3f, b: Point3f) -> Self {
        Self {
            min: Point3f::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3f::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
            color: None,
        }
    }

    /// Smallest box enclosing all `points`, or `None` when there are none
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3f>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(mut min, mut max), p| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
            (min, max)
        });
        Some(Self { min, max, color: None })
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(clamp_rgb(color));
        self
    }

    /// Edge lengths along x, y and z
    pub fn extent(&self) -> Vector3f {
        self.max - self.min
    }

    pub fn center(&self) -> Point3f {
        nalgebra::center(&self.min, &self.max)
    }

    /// The eight corners; bit 0 of the index selects max x, bit 1 max y, bit 2 max z
    pub fn corners(&self) -> [Point3f; 8] {
        std::array::from_fn(|i| {
            Point3f::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }
}
