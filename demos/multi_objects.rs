//! Point clouds, lit and unlit spheres, bounding boxes and line sets, all
//! passed as bare geometry with generated names

mod common;

use common::Scene;
use rand::Rng;
use threecrate_core::{
    AxisAlignedBoundingBox, ColoredPointCloud3f, LineSet, Point3f, PointCloud3f, TriangleMesh,
    Vector3f,
};

fn multi_objects<R: Rng>(rng: &mut R) -> Scene {
    let pc_rad = 1.0;
    let pc_nocolor = PointCloud3f::random_in_cube(100, Point3f::new(0.0, -2.0, 0.0), pc_rad, rng);
    let pc_color =
        ColoredPointCloud3f::random_colored_in_cube(100, Point3f::new(3.0, -2.0, 0.0), pc_rad, rng);

    let r = 0.4;
    let sphere = |offset: Vector3f| {
        let mut mesh = TriangleMesh::create_sphere(r, 20);
        mesh.translate(offset);
        mesh
    };
    let sphere_unlit = sphere(Vector3f::new(0.0, 1.0, 0.0));
    let mut sphere_colored_unlit = sphere(Vector3f::new(2.0, 1.0, 0.0));
    sphere_colored_unlit.paint_uniform_color([1.0, 0.0, 0.0]);
    let mut sphere_lit = sphere(Vector3f::new(4.0, 1.0, 0.0));
    sphere_lit.compute_vertex_normals();
    let mut sphere_colored_lit = sphere(Vector3f::new(6.0, 1.0, 0.0));
    sphere_colored_lit.compute_vertex_normals();
    sphere_colored_lit.paint_uniform_color([0.0, 1.0, 0.0]);

    let big_bbox = AxisAlignedBoundingBox::new(
        Point3f::new(-pc_rad, -3.0, -pc_rad),
        Point3f::new(6.0 + r, 1.0 + r, pc_rad),
    );
    let sphere_bbox = sphere_unlit
        .axis_aligned_bounding_box()
        .with_color([1.0, 0.5, 0.0]);
    let lines = LineSet::from_axis_aligned_bounding_box(&sphere_lit.axis_aligned_bounding_box());
    let mut lines_colored =
        LineSet::from_axis_aligned_bounding_box(&sphere_colored_lit.axis_aligned_bounding_box());
    lines_colored.paint_uniform_color([0.0, 0.0, 1.0]);

    Scene::new(
        "Multiple objects",
        vec![
            pc_nocolor.into(),
            pc_color.into(),
            sphere_unlit.into(),
            sphere_colored_unlit.into(),
            sphere_lit.into(),
            sphere_colored_lit.into(),
            big_bbox.into(),
            sphere_bbox.into(),
            lines.into(),
            lines_colored.into(),
        ],
    )
}

fn main() -> anyhow::Result<()> {
    common::run(|rng| multi_objects(rng))
}
