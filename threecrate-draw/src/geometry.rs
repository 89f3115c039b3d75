//! Drawable payloads carried by scene entries

use threecrate_core::{
    AxisAlignedBoundingBox, ColoredPoint3f, Drawable, LineSet, Point3f, PointCloud, TriangleMesh,
};

/// Geometry handed to the render backend. The registry stores it but
/// never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    PointCloud(PointCloud<Point3f>),
    ColoredPointCloud(PointCloud<ColoredPoint3f>),
    Mesh(TriangleMesh),
    BoundingBox(AxisAlignedBoundingBox),
    LineSet(LineSet),
}

impl Geometry {
    /// Short type name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::PointCloud(_) => "point cloud",
            Geometry::ColoredPointCloud(_) => "colored point cloud",
            Geometry::Mesh(_) => "triangle mesh",
            Geometry::BoundingBox(_) => "bounding box",
            Geometry::LineSet(_) => "line set",
        }
    }

    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Geometry::PointCloud(g) => g,
            Geometry::ColoredPointCloud(g) => g,
            Geometry::Mesh(g) => g,
            Geometry::BoundingBox(g) => g,
            Geometry::LineSet(g) => g,
        }
    }
}

impl Drawable for Geometry {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        self.as_drawable().bounding_box()
    }
}

impl From<PointCloud<Point3f>> for Geometry {
    fn from(cloud: PointCloud<Point3f>) -> Self {
        Geometry::PointCloud(cloud)
    }
}

impl From<PointCloud<ColoredPoint3f>> for Geometry {
    fn from(cloud: PointCloud<ColoredPoint3f>) -> Self {
        Geometry::ColoredPointCloud(cloud)
    }
}

impl From<TriangleMesh> for Geometry {
    fn from(mesh: TriangleMesh) -> Self {
        Geometry::Mesh(mesh)
    }
}

impl From<AxisAlignedBoundingBox> for Geometry {
    fn from(bounds: AxisAlignedBoundingBox) -> Self {
        Geometry::BoundingBox(bounds)
    }
}

impl From<LineSet> for Geometry {
    fn from(lines: LineSet) -> Self {
        Geometry::LineSet(lines)
    }
}
