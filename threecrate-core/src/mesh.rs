//! Mesh data structures and functionality

use crate::bounds::AxisAlignedBoundingBox;
use crate::point::*;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
    /// Per-vertex normals
    pub normals: Option<Vec<Vector3f>>,
    /// Per-face normals
    pub triangle_normals: Option<Vec<Vector3f>>,
    pub colors: Option<Vec<Rgb>>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
            triangle_normals: None,
            colors: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            ..Self::new()
        }
    }

    /// Box spanning `(0, 0, 0)` to `(width, height, depth)`
    pub fn create_box(width: f32, height: f32, depth: f32) -> Self {
        let bounds = AxisAlignedBoundingBox::new(
            Point3f::origin(),
            Point3f::new(width, height, depth),
        );
        let vertices = bounds.corners().to_vec();
        // Outward winding, corner indices as in `AxisAlignedBoundingBox::corners`
        let faces = vec![
            [0, 2, 3], [0, 3, 1], // -z
            [4, 5, 7], [4, 7, 6], // +z
            [0, 4, 6], [0, 6, 2], // -x
            [1, 3, 7], [1, 7, 5], // +x
            [0, 1, 5], [0, 5, 4], // -y
            [2, 6, 7], [2, 7, 3], // +y
        ];
        Self::from_vertices_and_faces(vertices, faces)
    }

    /// UV sphere centered at the origin. `resolution` is the number of
    /// latitude bands; longitude uses twice as many segments.
    pub fn create_sphere(radius: f32, resolution: usize) -> Self {
        let rings = resolution.max(2);
        let segments = 2 * rings;
        let mut vertices = Vec::with_capacity(2 + (rings - 1) * segments);

        vertices.push(Point3f::new(0.0, 0.0, radius));
        vertices.push(Point3f::new(0.0, 0.0, -radius));
        for i in 1..rings {
            let theta = PI * i as f32 / rings as f32;
            for j in 0..segments {
                let phi = 2.0 * PI * j as f32 / segments as f32;
                vertices.push(Point3f::new(
                    radius * theta.sin() * phi.cos(),
                    radius * theta.sin() * phi.sin(),
                    radius * theta.cos(),
                ));
            }
        }

        let ring_start = |i: usize| 2 + (i - 1) * segments;
        let mut faces = Vec::with_capacity(2 * (rings - 1) * segments);
        for j in 0..segments {
            let next = (j + 1) % segments;
            faces.push([0, ring_start(1) + j, ring_start(1) + next]);
            faces.push([1, ring_start(rings - 1) + next, ring_start(rings - 1) + j]);
        }
        for i in 1..rings - 1 {
            for j in 0..segments {
                let next = (j + 1) % segments;
                let a = ring_start(i) + j;
                let b = ring_start(i + 1) + j;
                let c = ring_start(i + 1) + next;
                let d = ring_start(i) + next;
                faces.push([a, b, c]);
                faces.push([a, c, d]);
            }
        }

        Self::from_vertices_and_faces(vertices, faces)
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Unnormalized face normals; their length is twice the face area
    fn weighted_face_normals(&self) -> impl Iterator<Item = Vector3f> + '_ {
        self.faces.iter().map(|face| {
            let v0 = self.vertices[face[0]];
            let v1 = self.vertices[face[1]];
            let v2 = self.vertices[face[2]];
            (v1 - v0).cross(&(v2 - v0))
        })
    }

    /// Calculate unit face normals
    pub fn calculate_face_normals(&self) -> Vec<Vector3f> {
        self.weighted_face_normals()
            .map(|n| n.try_normalize(f32::EPSILON).unwrap_or_else(Vector3f::zeros))
            .collect()
    }

    /// Store unit face normals on the mesh
    pub fn compute_triangle_normals(&mut self) {
        self.triangle_normals = Some(self.calculate_face_normals());
    }

    /// Store area-weighted vertex normals on the mesh
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vector3f::zeros(); self.vertices.len()];
        let weighted: Vec<Vector3f> = self.weighted_face_normals().collect();
        for (face, n) in self.faces.iter().zip(weighted) {
            for &i in face {
                normals[i] += n;
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(f32::EPSILON).unwrap_or_else(Vector3f::zeros);
        }
        self.normals = Some(normals);
    }

    /// Give every vertex the same color
    pub fn paint_uniform_color(&mut self, color: Rgb) {
        self.colors = Some(vec![clamp_rgb(color); self.vertices.len()]);
    }

    /// Translate every vertex by `offset`
    pub fn translate(&mut self, offset: Vector3f) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Transform vertices, and rotate/scale any stored normals
    pub fn transform(&mut self, transform: &Transform3D) {
        for vertex in &mut self.vertices {
            *vertex = transform.transform_point(vertex);
        }
        for normals in [&mut self.normals, &mut self.triangle_normals].into_iter().flatten() {
            for n in normals.iter_mut() {
                *n = transform
                    .transform_vector(n)
                    .try_normalize(f32::EPSILON)
                    .unwrap_or_else(Vector3f::zeros);
            }
        }
    }

    /// Bounding box of the vertices; an empty mesh yields a degenerate box at the origin
    pub fn axis_aligned_bounding_box(&self) -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::from_points(&self.vertices)
            .unwrap_or_else(|| AxisAlignedBoundingBox::new(Point3f::origin(), Point3f::origin()))
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_create_box() {
        let mesh = TriangleMesh::create_box(1.0, 2.0, 4.0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        let bounds = mesh.axis_aligned_bounding_box();
        assert_eq!(bounds.min, Point3f::origin());
        assert_eq!(bounds.max, Point3f::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn test_box_normals_point_outward() {
        let mesh = TriangleMesh::create_box(1.0, 1.0, 1.0);
        let center = mesh.axis_aligned_bounding_box().center();
        for (face, n) in mesh.faces.iter().zip(mesh.calculate_face_normals()) {
            let to_face = mesh.vertices[face[0]] - center;
            assert!(to_face.dot(&n) > 0.0, "face {:?} points inward", face);
        }
    }

    #[test]
    fn test_create_sphere() {
        let mesh = TriangleMesh::create_sphere(0.5, 10);
        assert_eq!(mesh.vertex_count(), 2 + 9 * 20);
        assert_eq!(mesh.face_count(), 2 * 9 * 20);
        for v in &mesh.vertices {
            assert_relative_eq!(v.coords.norm(), 0.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_vertex_normals_radial() {
        let mut mesh = TriangleMesh::create_sphere(2.0, 12);
        mesh.compute_vertex_normals();
        let normals = mesh.normals.as_ref().unwrap();
        for (v, n) in mesh.vertices.iter().zip(normals) {
            assert!(v.coords.normalize().dot(n) > 0.95);
        }
    }

    #[test]
    fn test_paint_and_translate() {
        let mut mesh = TriangleMesh::create_sphere(0.4, 6);
        mesh.paint_uniform_color([1.0, 0.0, 0.0]);
        mesh.translate(Vector3f::new(2.0, 1.0, 0.0));
        assert_eq!(mesh.colors.as_ref().unwrap().len(), mesh.vertex_count());
        assert_relative_eq!(
            mesh.axis_aligned_bounding_box().center(),
            Point3f::new(2.0, 1.0, 0.0),
            epsilon = 1e-5
        );
    }
}
