//! The seam between the viewer and whatever engine draws the scene

use crate::action::{ActionLayout, ActionSurface};
use crate::error::Result;
use crate::options::WindowOptions;
use crate::session::Session;

/// Input produced by a backend and applied by the viewer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The user triggered the `index`-th action of `surface`
    Action { surface: ActionSurface, index: usize },
    /// Playback moved to a new time
    SetTime(f64),
    /// A per-entry visibility toggle was flipped
    ShowGeometry { name: String, visible: bool },
    /// The window was closed
    Close,
}

impl UiEvent {
    pub fn toolbar(index: usize) -> Self {
        UiEvent::Action {
            surface: ActionSurface::Toolbar,
            index,
        }
    }

    pub fn menu(index: usize) -> Self {
        UiEvent::Action {
            surface: ActionSurface::Menu,
            index,
        }
    }
}

/// A rendering engine that can present a session and report user input.
///
/// All calls happen on the thread running [`crate::Viewer::start`].
pub trait RenderBackend {
    /// Open the window. Failure here is fatal for the session.
    fn open(&mut self, options: &WindowOptions, layout: &ActionLayout) -> Result<()>;

    /// Redraw from the current state of the session
    fn refresh(&mut self, session: &Session) -> Result<()>;

    /// Block until the next input event. `None` means the window is gone.
    fn poll_event(&mut self) -> Result<Option<UiEvent>>;

    /// Release the window; called once after the event loop ends
    fn close(&mut self) {}
}
