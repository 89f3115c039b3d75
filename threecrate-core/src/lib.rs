//! Geometry payloads for threecrate scenes
//!
//! This crate provides the drawable value types that scenes are built from:
//! points, point clouds, triangle meshes, bounding boxes and line sets,
//! along with the few constructors needed to assemble demo scenes.

pub mod point;
pub mod point_cloud;
pub mod mesh;
pub mod bounds;
pub mod line_set;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use mesh::*;
pub use bounds::*;
pub use line_set::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix4, UnitQuaternion};

// Type aliases for easier imports
pub type Point = Point3f;
pub type Mesh = TriangleMesh;
