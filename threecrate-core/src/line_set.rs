//! Line segment sets

use crate::bounds::AxisAlignedBoundingBox;
use crate::point::*;
use serde::{Deserialize, Serialize};

/// Indexed line segments over a shared point list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSet {
    pub points: Vec<Point3f>,
    pub lines: Vec<[usize; 2]>,
    /// Per-line colors
    pub colors: Option<Vec<Rgb>>,
}

impl LineSet {
    pub fn new(points: Vec<Point3f>, lines: Vec<[usize; 2]>) -> Self {
        Self {
            points,
            lines,
            colors: None,
        }
    }

    /// The twelve edges of a box
    pub fn from_axis_aligned_bounding_box(bounds: &AxisAlignedBoundingBox) -> Self {
        // Corners differing in exactly one bit share an edge
        let lines = (0..8usize)
            .flat_map(|i| [1usize, 2, 4].into_iter().map(move |bit| [i, i | bit]))
            .filter(|[a, b]| a != b)
            .collect();
        let mut set = Self::new(bounds.corners().to_vec(), lines);
        if let Some(color) = bounds.color {
            set.paint_uniform_color(color);
        }
        set
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Give every line the same color
    pub fn paint_uniform_color(&mut self, color: Rgb) {
        self.colors = Some(vec![clamp_rgb(color); self.lines.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_edges() {
        let bounds = AxisAlignedBoundingBox::new(Point3f::origin(), Point3f::new(1.0, 1.0, 1.0));
        let set = LineSet::from_axis_aligned_bounding_box(&bounds);
        assert_eq!(set.points.len(), 8);
        assert_eq!(set.line_count(), 12);
        for [a, b] in &set.lines {
            let d = set.points[*b] - set.points[*a];
            assert_eq!(d.norm(), 1.0);
        }
        assert!(set.colors.is_none());
    }

    #[test]
    fn test_inherits_box_color() {
        let bounds = AxisAlignedBoundingBox::new(Point3f::origin(), Point3f::new(1.0, 1.0, 1.0))
            .with_color([1.0, 0.5, 0.0]);
        let set = LineSet::from_axis_aligned_bounding_box(&bounds);
        assert_eq!(set.colors.unwrap(), vec![[1.0, 0.5, 0.0]; 12]);
    }
}
