//! Command line and viewer plumbing shared by the draw demos
//!
//! Every demo opens its scene in a window. With `--headless` the scene is
//! driven by a scripted event list instead, which is handy on machines
//! without a display:
//!
//! ```text
//! remove --headless --events toolbar:0,time:1,hide:spheres
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use threecrate_draw::{draw, Action, DrawItem, HeadlessBackend, UiEvent, WindowBackend, WindowOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A ready-to-draw scene: the initial batch plus its actions
pub struct Scene {
    pub title: &'static str,
    pub entries: Vec<DrawItem>,
    pub actions: Vec<Action>,
    pub menu_actions: Vec<Action>,
}

impl Scene {
    pub fn new(title: &'static str, entries: Vec<DrawItem>) -> Self {
        Self {
            title,
            entries,
            actions: Vec::new(),
            menu_actions: Vec::new(),
        }
    }
}

#[derive(Parser)]
struct DemoArgs {
    /// Run without a window, playing back `--events`
    #[arg(long)]
    headless: bool,

    /// Scripted events for headless runs: toolbar:N, menu:N, time:T,
    /// show:NAME, hide:NAME or close
    #[arg(long, value_delimiter = ',', value_parser = parse_event)]
    events: Vec<UiEvent>,

    /// Window options as a JSON file; flags below override its values
    #[arg(long)]
    options: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Background color as r,g,b,a
    #[arg(long, value_delimiter = ',', num_args = 4)]
    bg_color: Option<Vec<f32>>,

    #[arg(long)]
    skybox: bool,

    /// Seed for the random point clouds
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_event(arg: &str) -> std::result::Result<UiEvent, String> {
    let (kind, value) = arg.split_once(':').unwrap_or((arg, ""));
    let index = || {
        value
            .parse::<usize>()
            .map_err(|e| format!("invalid action index '{}': {}", value, e))
    };
    match kind {
        "toolbar" => Ok(UiEvent::toolbar(index()?)),
        "menu" => Ok(UiEvent::menu(index()?)),
        "time" => value
            .parse::<f64>()
            .map(UiEvent::SetTime)
            .map_err(|e| format!("invalid time '{}': {}", value, e)),
        "show" | "hide" if !value.is_empty() => Ok(UiEvent::ShowGeometry {
            name: value.to_string(),
            visible: kind == "show",
        }),
        "close" => Ok(UiEvent::Close),
        _ => Err(format!("unrecognized event '{}'", arg)),
    }
}

impl DemoArgs {
    fn window_options(&self, scene: &Scene) -> Result<WindowOptions> {
        let mut options = match &self.options {
            Some(path) => WindowOptions::from_json_file(path)
                .with_context(|| format!("Failed to load window options from {}", path.display()))?,
            None => WindowOptions::default().with_title(scene.title),
        };
        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(color) = &self.bg_color {
            match color.as_slice() {
                &[r, g, b, a] => options.bg_color = [r, g, b, a],
                _ => bail!("--bg-color takes four components"),
            }
        }
        if self.skybox {
            options.show_skybox = true;
        }
        Ok(options)
    }
}

/// Parse the command line, build the scene and draw it until the window
/// closes
pub fn run(build: impl FnOnce(&mut StdRng) -> Scene) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = DemoArgs::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = build(&mut rng);
    let options = args.window_options(&scene)?;
    info!(title = %options.title, entries = scene.entries.len(), "drawing scene");

    let remaining = if args.headless {
        let viewer = draw(
            HeadlessBackend::with_events(args.events.iter().cloned()),
            scene.entries,
            scene.actions,
            scene.menu_actions,
            &options,
        )?;
        for (i, frame) in viewer.backend().frames().iter().enumerate() {
            info!(frame = i, visible = ?frame.visible, time = ?frame.time, "frame");
        }
        viewer.session().scene().len()
    } else {
        let viewer = draw(
            WindowBackend::new(),
            scene.entries,
            scene.actions,
            scene.menu_actions,
            &options,
        )?;
        viewer.session().scene().len()
    };
    info!(remaining, "scene closed");
    Ok(())
}
