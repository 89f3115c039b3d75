//! A single box with no colors and no normals, so it appears unlit black

mod common;

use common::Scene;
use threecrate_core::TriangleMesh;

fn main() -> anyhow::Result<()> {
    common::run(|_| {
        let cube = TriangleMesh::create_box(1.0, 2.0, 4.0);
        Scene::new("Single object", vec![cube.into()])
    })
}
