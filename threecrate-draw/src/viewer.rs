//! Viewer session: initial batch, event loop and action dispatch

use tracing::{debug, error, info, warn};

use crate::action::{Action, ActionLayout, ActionSurface};
use crate::backend::{RenderBackend, UiEvent};
use crate::entry::DrawItem;
use crate::error::{DrawError, Result};
use crate::options::WindowOptions;
use crate::registry::SceneRegistry;
use crate::session::Session;

/// Interactive viewer driving one [`Session`] through a [`RenderBackend`].
///
/// Mutations may be made through [`Viewer::session_mut`] before
/// [`Viewer::start`]; once started, the viewer owns the thread until the
/// backend reports that the window closed.
pub struct Viewer<B: RenderBackend> {
    session: Session,
    actions: Vec<Action>,
    menu_actions: Vec<Action>,
    backend: B,
    running: bool,
    refresh_count: usize,
}

impl<B: RenderBackend> Viewer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            session: Session::new(),
            actions: Vec::new(),
            menu_actions: Vec::new(),
            backend,
            running: false,
            refresh_count: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Number of refreshes performed while the window was open
    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }

    /// Register another action. Only actions added before `start` appear
    /// in the layout the backend opens with.
    pub fn add_action(&mut self, surface: ActionSurface, action: Action) {
        self.actions_mut(surface).push(action);
    }

    pub fn actions(&self, surface: ActionSurface) -> &[Action] {
        match surface {
            ActionSurface::Toolbar => &self.actions,
            ActionSurface::Menu => &self.menu_actions,
        }
    }

    fn actions_mut(&mut self, surface: ActionSurface) -> &mut Vec<Action> {
        match surface {
            ActionSurface::Toolbar => &mut self.actions,
            ActionSurface::Menu => &mut self.menu_actions,
        }
    }

    /// Load the initial batch, open the window and run until it closes.
    ///
    /// The batch is validated before anything is opened: two entries with
    /// the same name fail with [`DrawError::DuplicateName`]. Entries added
    /// during setup with a name that reappears in the batch are replaced.
    #[tracing::instrument(skip_all, fields(title = %options.title))]
    pub fn start<I, T>(
        &mut self,
        entries: I,
        actions: Vec<Action>,
        menu_actions: Vec<Action>,
        options: &WindowOptions,
    ) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<DrawItem>,
    {
        let batch = SceneRegistry::from_batch_excluding(entries, self.session.scene())?;
        options.validate()?;

        let (toolbar_len, menu_len) = (self.actions.len(), self.menu_actions.len());
        self.actions.extend(actions);
        self.menu_actions.extend(menu_actions);
        let layout = ActionLayout::new(&self.actions, &self.menu_actions);
        if let Err(err) = self.backend.open(options, &layout) {
            self.actions.truncate(toolbar_len);
            self.menu_actions.truncate(menu_len);
            error!(%err, "failed to open window");
            return Err(err);
        }
        self.running = true;

        let result = self
            .load_batch(batch)
            .and_then(|()| {
                info!(
                    entries = self.session.scene().len(),
                    actions = layout.toolbar.len(),
                    menu_actions = layout.menu.len(),
                    "viewer opened"
                );
                self.refresh()
            })
            .and_then(|()| self.run_event_loop());

        self.running = false;
        self.backend.close();
        match &result {
            Ok(()) => info!(refreshes = self.refresh_count, "viewer closed"),
            Err(err) => error!(%err, "viewer stopped"),
        }
        result
    }

    /// Merge the validated batch and move playback to the first time tag
    fn load_batch(&mut self, batch: SceneRegistry) -> Result<()> {
        for entry in batch.into_entries() {
            self.session.add_geometry(entry)?;
        }
        if let Some((first, _)) = self.session.scene().time_range() {
            self.session.set_time(first)?;
        }
        Ok(())
    }

    fn run_event_loop(&mut self) -> Result<()> {
        while let Some(event) = self.backend.poll_event()? {
            if event == UiEvent::Close {
                break;
            }
            self.handle_event(event)?;
        }
        Ok(())
    }

    /// Apply one backend event. Only backend failures are returned; errors
    /// from handlers or from bad identifiers are logged and the session
    /// carries on.
    fn handle_event(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Action { surface, index } => {
                if index >= self.actions(surface).len() {
                    warn!(?surface, index, "no action bound");
                    return Ok(());
                }
                if let Err(err) = self.invoke_action(surface, index) {
                    let label = self.actions(surface)[index].label();
                    error!(label, %err, "action failed");
                }
                self.session.take_refresh();
                self.refresh()
            }
            UiEvent::SetTime(time) => {
                if let Err(err) = self.session.set_time(time) {
                    warn!(%err, "ignored playback time");
                }
                self.refresh_if_requested()
            }
            UiEvent::ShowGeometry { name, visible } => {
                if let Err(err) = self.session.show_geometry(&name, visible) {
                    warn!(%err, "ignored visibility toggle");
                }
                self.refresh_if_requested()
            }
            UiEvent::Close => Ok(()),
        }
    }

    /// Run the action labelled `label` as if the user had triggered it.
    ///
    /// The handler's own error is returned, after the scene has been
    /// refreshed exactly once.
    pub fn trigger_action(&mut self, surface: ActionSurface, label: &str) -> Result<()> {
        let index = self
            .actions(surface)
            .iter()
            .position(|a| a.label() == label)
            .ok_or_else(|| DrawError::NotFound {
                name: label.to_string(),
            })?;
        let outcome = self.invoke_action(surface, index);
        self.session.take_refresh();
        self.refresh()?;
        outcome
    }

    fn invoke_action(&mut self, surface: ActionSurface, index: usize) -> Result<()> {
        let actions = match surface {
            ActionSurface::Toolbar => &mut self.actions,
            ActionSurface::Menu => &mut self.menu_actions,
        };
        let action = &mut actions[index];
        info!(label = action.label(), "triggered action");
        action.invoke(&mut self.session)
    }

    fn refresh_if_requested(&mut self) -> Result<()> {
        if self.session.take_refresh() {
            self.refresh()
        } else {
            Ok(())
        }
    }

    fn refresh(&mut self) -> Result<()> {
        self.session.take_refresh();
        if !self.running {
            return Ok(());
        }
        self.backend.refresh(&self.session)?;
        self.refresh_count += 1;
        debug!(
            refresh = self.refresh_count,
            visible = self.session.scene().visible_names().len(),
            "refreshed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SceneEntry;
    use crate::headless::HeadlessBackend;
    use threecrate_core::TriangleMesh;

    fn entry(name: &str) -> SceneEntry {
        SceneEntry::new(name, TriangleMesh::create_box(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_start_opens_and_refreshes_once() {
        let mut viewer = Viewer::new(HeadlessBackend::new());
        viewer
            .start([entry("a")], vec![], vec![], &WindowOptions::default())
            .unwrap();
        assert_eq!(viewer.refresh_count(), 1);
        assert_eq!(viewer.backend().frames().len(), 1);
        assert!(!viewer.backend().is_open());
    }

    #[test]
    fn test_setup_phase_mutations_do_not_refresh() {
        let mut viewer = Viewer::new(HeadlessBackend::new());
        viewer.session_mut().add_geometry(entry("early")).unwrap();
        viewer.add_action(ActionSurface::Toolbar, Action::new("noop", |_| Ok(())));
        viewer.trigger_action(ActionSurface::Toolbar, "noop").unwrap();
        assert_eq!(viewer.refresh_count(), 0);
        assert!(viewer.backend().frames().is_empty());
    }

    #[test]
    fn test_trigger_unknown_label() {
        let mut viewer = Viewer::new(HeadlessBackend::new());
        assert!(matches!(
            viewer.trigger_action(ActionSurface::Menu, "missing"),
            Err(DrawError::NotFound { .. })
        ));
    }

    #[test]
    fn test_backend_open_failure_is_fatal() {
        let mut viewer = Viewer::new(HeadlessBackend::failing("no display"));
        let result = viewer.start([entry("a")], vec![], vec![], &WindowOptions::default());
        assert!(matches!(result, Err(DrawError::Backend(_))));
        assert_eq!(viewer.refresh_count(), 0);
    }

    #[test]
    fn test_failed_open_leaves_viewer_untouched() {
        let mut viewer = Viewer::new(HeadlessBackend::failing("no display"));
        viewer.add_action(ActionSurface::Toolbar, Action::new("kept", |_| Ok(())));
        for _ in 0..2 {
            let result = viewer.start(
                [entry("a")],
                vec![Action::new("retry", |_| Ok(()))],
                vec![Action::new("menu", |_| Ok(()))],
                &WindowOptions::default(),
            );
            assert!(result.is_err());
        }
        assert_eq!(viewer.actions(ActionSurface::Toolbar).len(), 1);
        assert!(viewer.actions(ActionSurface::Menu).is_empty());
        assert!(viewer.session().scene().is_empty());
    }
}
