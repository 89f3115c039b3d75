//! Toolbar and menu laid out with one very long label and three short ones

mod common;

use common::Scene;
use threecrate_core::{ColoredPointCloud3f, Point3f};
use threecrate_draw::{Action, ActionHandler, Session};
use tracing::info;

/// Handler that only reports that it ran
struct Announce {
    label: String,
}

impl ActionHandler for Announce {
    fn call(&mut self, _session: &mut Session) -> threecrate_draw::Result<()> {
        info!("Triggered action \"{}\"", self.label);
        Ok(())
    }
}

const LABELS: [&str; 4] = [
    "Supercalifragilisticexpialidocious",
    "Action 1",
    "Action 2",
    "Action 3",
];

fn announcers() -> Vec<Action> {
    LABELS
        .iter()
        .map(|label| {
            Action::from_handler(
                *label,
                Announce {
                    label: label.to_string(),
                },
            )
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    common::run(|rng| {
        let cloud = ColoredPointCloud3f::random_colored_in_cube(200, Point3f::origin(), 1.0, rng);
        let mut scene = Scene::new("Actions layout", vec![cloud.into()]);
        scene.actions = announcers();
        scene.menu_actions = announcers();
        scene
    })
}
