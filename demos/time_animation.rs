//! A colored cloud that expands and drifts over 20 time steps

mod common;

use common::Scene;
use rand::Rng;
use threecrate_core::{ColoredPoint3f, ColoredPointCloud3f, Point3f, Vector3f};
use threecrate_draw::{DrawItem, SceneEntry};

const STEPS: usize = 20;

fn time_animation<R: Rng>(rng: &mut R) -> Scene {
    let orig = ColoredPointCloud3f::random_colored_in_cube(200, Point3f::origin(), 1.0, rng);
    let drift = Vector3f::new(1.0, 0.0, 0.0);
    let expand = 1.0;

    let mut entries: Vec<DrawItem> = vec![SceneEntry::new("t=0", orig.clone()).with_time(0.0).into()];
    for i in 1..STEPS {
        let amount = i as f32 / (STEPS - 1) as f32;
        let cloud: ColoredPointCloud3f = orig
            .iter()
            .map(|p| {
                let position = p.position.coords * (1.0 + amount * expand) + drift * amount;
                ColoredPoint3f::new(Point3f::from(position), p.color)
            })
            .collect();
        entries.push(
            SceneEntry::new(format!("t={}", i), cloud)
                .with_time(i as f64)
                .into(),
        );
    }
    Scene::new("Time animation", entries)
}

fn main() -> anyhow::Result<()> {
    common::run(|rng| time_animation(rng))
}
