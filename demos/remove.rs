//! Four tagged spheres and a bounding box, with actions that remove them

mod common;

use common::Scene;
use threecrate_core::{TriangleMesh, Vector3f};
use threecrate_draw::{Action, Material, SceneEntry, Session};

fn sphere_at(center: Vector3f) -> TriangleMesh {
    let mut sphere = TriangleMesh::create_sphere(0.5, 20);
    sphere.compute_vertex_normals();
    sphere.translate(center);
    sphere
}

fn tagged(name: &str, sphere: TriangleMesh, color: [f32; 4], time: f64) -> SceneEntry {
    SceneEntry::new(name, sphere)
        .with_material(Material::lit(color))
        .with_group("spheres")
        .with_time(time)
}

fn remover(label: &str, name: &'static str) -> Action {
    Action::new(label, move |s: &mut Session| s.remove_geometry(name))
}

fn remove() -> Scene {
    let red_sphere = sphere_at(Vector3f::zeros());
    let bbox = red_sphere.axis_aligned_bounding_box();
    let red = tagged("red", red_sphere, [1.0, 0.0, 0.0, 1.0], 0.0);
    let green = tagged("green", sphere_at(Vector3f::new(2.0, 0.0, 0.0)), [0.0, 1.0, 0.0, 1.0], 0.0);
    let blue = tagged("blue", sphere_at(Vector3f::new(4.0, 0.0, 0.0)), [0.0, 0.0, 1.0, 1.0], 0.0);
    let yellow = tagged("yellow", sphere_at(Vector3f::zeros()), [1.0, 1.0, 0.0, 1.0], 1.0);

    let mut scene = Scene::new(
        "Remove",
        vec![
            red.into(),
            green.into(),
            blue.into(),
            yellow.into(),
            SceneEntry::new("bbox", bbox).into(),
        ],
    );
    scene.actions = vec![
        remover("Remove Green", "green"),
        remover("Remove Yellow", "yellow"),
        remover("Remove Bounds", "bbox"),
    ];
    scene
}

fn main() -> anyhow::Result<()> {
    common::run(|_| remove())
}
