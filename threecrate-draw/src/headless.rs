//! Scripted backend that records what would have been drawn

use std::collections::VecDeque;

use tracing::debug;

use crate::action::ActionLayout;
use crate::backend::{RenderBackend, UiEvent};
use crate::error::{DrawError, Result};
use crate::options::WindowOptions;
use crate::session::Session;

/// Snapshot of the scene taken at one refresh
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub visible: Vec<String>,
    pub hidden: Vec<String>,
    pub time: Option<f64>,
}

impl Frame {
    fn capture(session: &Session) -> Self {
        let (visible, hidden): (Vec<_>, Vec<_>) =
            session.scene().iter().partition(|e| e.is_visible);
        Self {
            visible: visible.into_iter().map(|e| e.name.clone()).collect(),
            hidden: hidden.into_iter().map(|e| e.name.clone()).collect(),
            time: session.current_time(),
        }
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.iter().any(|n| n == name)
    }
}

/// Backend without a window. Events come from a script; once the script
/// runs out the "window" is considered closed.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    script: VecDeque<UiEvent>,
    frames: Vec<Frame>,
    options: Option<WindowOptions>,
    layout: ActionLayout,
    open_error: Option<String>,
    is_open: bool,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that plays back `events` in order
    pub fn with_events(events: impl IntoIterator<Item = UiEvent>) -> Self {
        Self {
            script: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Backend whose window can never be opened
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            open_error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn push_event(&mut self, event: UiEvent) {
        self.script.push_back(event);
    }

    /// Every frame drawn so far, oldest first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Options the window was opened with, if it was opened
    pub fn options(&self) -> Option<&WindowOptions> {
        self.options.as_ref()
    }

    pub fn layout(&self) -> &ActionLayout {
        &self.layout
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

impl RenderBackend for HeadlessBackend {
    fn open(&mut self, options: &WindowOptions, layout: &ActionLayout) -> Result<()> {
        if let Some(message) = &self.open_error {
            return Err(DrawError::Backend(message.clone()));
        }
        self.options = Some(options.clone());
        self.layout = layout.clone();
        self.is_open = true;
        Ok(())
    }

    fn refresh(&mut self, session: &Session) -> Result<()> {
        let frame = Frame::capture(session);
        debug!(
            frame = self.frames.len(),
            visible = frame.visible.len(),
            hidden = frame.hidden.len(),
            "headless frame"
        );
        self.frames.push(frame);
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Option<UiEvent>> {
        Ok(self.script.pop_front())
    }

    fn close(&mut self) {
        self.is_open = false;
    }
}
