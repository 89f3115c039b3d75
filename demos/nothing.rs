//! Empty white window

mod common;

use common::Scene;

fn main() -> anyhow::Result<()> {
    common::run(|_| Scene::new("Nothing", Vec::new()))
}
