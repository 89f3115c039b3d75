//! A 10x10 city block under two point-cloud layers, each in its own group

mod common;

use common::Scene;
use rand::Rng;
use threecrate_core::{Point3f, PointCloud3f, TriangleMesh, Vector3f};
use threecrate_draw::{DrawItem, Material, SceneEntry};

fn groups<R: Rng>(rng: &mut R) -> Scene {
    let building_mat = Material::lit([1.0, 0.90, 0.75, 1.0]).with_reflectance(0.1);
    let midrise_mat = Material::lit([0.475, 0.450, 0.425, 1.0]).with_reflectance(0.1);
    let skyscraper_mat = Material::lit([0.05, 0.20, 0.55, 1.0])
        .with_reflectance(0.9)
        .with_roughness(0.01);

    let size = 10.0_f32;
    let half = size / 2.0;
    let min_height = 1.0_f32;
    let max_height = 20.0_f32;

    let mut entries: Vec<DrawItem> = Vec::with_capacity(102);
    for z in 0..10 {
        for x in 0..10 {
            let (xf, zf) = (x as f32, z as f32);
            let max_h = max_height * (1.0 - (half - xf).abs() / half) * (1.0 - (half - zf).abs() / half);
            let h = rng.gen_range(min_height..max_h.max(min_height + 1.0));
            let mut building = TriangleMesh::create_box(0.9, h, 0.9);
            building.compute_triangle_normals();
            building.translate(Vector3f::new(xf + 0.05, 0.0, zf + 0.05));

            let material = if h > 0.333 * max_height {
                skyscraper_mat.clone()
            } else if h > 0.1 * max_height {
                midrise_mat.clone()
            } else {
                building_mat.clone()
            };
            entries.push(
                SceneEntry::new(format!("building_{}_{}", x, z), building)
                    .with_material(material)
                    .with_group("buildings")
                    .into(),
            );
        }
    }

    let haze = PointCloud3f::random_in_cube(5000, Point3f::new(half, 0.333 * max_height, half), 1.414 * half, rng)
        .painted([0.8, 0.8, 0.8]);
    let smog = PointCloud3f::random_in_cube(10000, Point3f::new(half, 0.25 * max_height, half), 1.2 * half, rng)
        .painted([0.95, 0.85, 0.75]);
    entries.push(SceneEntry::new("haze", haze).with_group("haze").into());
    entries.push(SceneEntry::new("smog", smog).with_group("smog").into());

    Scene::new("Groups", entries)
}

fn main() -> anyhow::Result<()> {
    common::run(|rng| groups(rng))
}
