//! A point cloud sampled from a mesh, with actions that rebuild the surface
//! and flip between the rebuilt and the ground-truth mesh

mod common;

use common::Scene;
use threecrate_core::{PointCloud3f, TriangleMesh};
use threecrate_draw::{Action, SceneEntry, Session};

const SOURCE_NAME: &str = "Source";
const RESULT_NAME: &str = "Result (mesh from points)";
const TRUTH_NAME: &str = "Ground truth";

fn actions() -> Scene {
    let mut truth = TriangleMesh::create_sphere(1.0, 24);
    truth.paint_uniform_color([1.0, 0.75, 0.0]);
    truth.compute_vertex_normals();
    let cloud = PointCloud3f::from_points(truth.vertices.clone());

    let source = cloud.clone();
    let faces = truth.faces.clone();
    let make_mesh = move |s: &mut Session| {
        let mut mesh = TriangleMesh::from_vertices_and_faces(source.points.clone(), faces.clone());
        mesh.paint_uniform_color([1.0, 1.0, 1.0]);
        mesh.compute_vertex_normals();
        s.add_geometry(SceneEntry::new(RESULT_NAME, mesh))?;
        s.show_geometry(SOURCE_NAME, false)
    };

    let toggle_result = |s: &mut Session| {
        let truth_visible = s.get_geometry(TRUTH_NAME)?.is_visible;
        s.show_geometry(TRUTH_NAME, !truth_visible)?;
        s.show_geometry(RESULT_NAME, truth_visible)
    };

    let mut scene = Scene::new(
        "Actions",
        vec![
            SceneEntry::new(SOURCE_NAME, cloud).into(),
            SceneEntry::new(TRUTH_NAME, truth).with_visible(false).into(),
        ],
    );
    scene.actions = vec![
        Action::new("Create Mesh", make_mesh),
        Action::new("Toggle truth/result", toggle_result),
    ];
    scene
}

fn main() -> anyhow::Result<()> {
    common::run(|_| actions())
}
