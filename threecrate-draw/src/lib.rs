//! Declarative scene drawing for threecrate geometry
//!
//! This crate turns a batch of named geometry into a live viewer session:
//! - a registry of uniquely named [`SceneEntry`] values with optional
//!   material, group and time tags
//! - incremental add / remove / show / hide while the window is open
//! - toolbar and menu [`Action`]s that receive the live [`Session`]
//! - time-tag playback for frame-by-frame animations
//!
//! Drawing is delegated to a [`RenderBackend`]. [`HeadlessBackend`] records
//! frames without a window; `WindowBackend` (feature `window`) opens a
//! native window with winit.
//!
//! ```no_run
//! use threecrate_core::TriangleMesh;
//! use threecrate_draw::{draw, Action, HeadlessBackend, SceneEntry, WindowOptions};
//!
//! let sphere = TriangleMesh::create_sphere(0.5, 20);
//! let actions = vec![Action::new("Hide", |s| s.show_geometry("sphere", false))];
//! draw(
//!     HeadlessBackend::new(),
//!     [SceneEntry::new("sphere", sphere)],
//!     actions,
//!     vec![],
//!     &WindowOptions::default(),
//! )?;
//! # Ok::<(), threecrate_draw::DrawError>(())
//! ```

pub mod action;
pub mod backend;
pub mod entry;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod material;
pub mod options;
pub mod registry;
pub mod session;
pub mod viewer;
#[cfg(feature = "window")]
pub mod window;

pub use action::*;
pub use backend::*;
pub use entry::*;
pub use error::*;
pub use geometry::*;
pub use headless::*;
pub use material::*;
pub use options::*;
pub use registry::*;
pub use session::*;
pub use viewer::*;
#[cfg(feature = "window")]
pub use window::*;

/// Draw `entries` with `backend` and block until the window closes.
///
/// Returns the closed viewer so the final scene can be inspected.
pub fn draw<B, I, T>(
    backend: B,
    entries: I,
    actions: Vec<Action>,
    menu_actions: Vec<Action>,
    options: &WindowOptions,
) -> Result<Viewer<B>>
where
    B: RenderBackend,
    I: IntoIterator<Item = T>,
    T: Into<DrawItem>,
{
    let mut viewer = Viewer::new(backend);
    viewer.start(entries, actions, menu_actions, options)?;
    Ok(viewer)
}
