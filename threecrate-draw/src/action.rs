//! User-triggered actions bound to toolbar buttons and menu items

use std::fmt;

use crate::error::Result;
use crate::session::Session;

/// Callback run when the user triggers an action.
///
/// Closures of the form `FnMut(&mut Session) -> Result<()>` implement this
/// trait. Handlers that carry configuration can instead be written as a
/// struct holding that state explicitly.
pub trait ActionHandler {
    fn call(&mut self, session: &mut Session) -> Result<()>;
}

impl<F> ActionHandler for F
where
    F: FnMut(&mut Session) -> Result<()>,
{
    fn call(&mut self, session: &mut Session) -> Result<()> {
        (self)(session)
    }
}

/// Which UI surface an action is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSurface {
    Toolbar,
    Menu,
}

/// A labelled handler
pub struct Action {
    label: String,
    handler: Box<dyn ActionHandler>,
}

impl Action {
    pub fn new<F>(label: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&mut Session) -> Result<()> + 'static,
    {
        Self::from_handler(label, handler)
    }

    pub fn from_handler(label: impl Into<String>, handler: impl ActionHandler + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Box::new(handler),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&mut self, session: &mut Session) -> Result<()> {
        self.handler.call(session)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("label", &self.label).finish_non_exhaustive()
    }
}

/// Action labels per surface, as handed to a backend when it opens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLayout {
    pub toolbar: Vec<String>,
    pub menu: Vec<String>,
}

impl ActionLayout {
    pub fn new(toolbar: &[Action], menu: &[Action]) -> Self {
        Self {
            toolbar: toolbar.iter().map(|a| a.label.clone()).collect(),
            menu: menu.iter().map(|a| a.label.clone()).collect(),
        }
    }

    pub fn labels(&self, surface: ActionSurface) -> &[String] {
        match surface {
            ActionSurface::Toolbar => &self.toolbar,
            ActionSurface::Menu => &self.menu,
        }
    }
}
