//! Live session handle shared by setup code and action handlers

use tracing::debug;

use crate::entry::{EntryHandle, SceneEntry};
use crate::error::Result;
use crate::registry::{Insertion, SceneRegistry};

/// The scene of one viewer session plus its playback position.
///
/// Mutations request a refresh; the viewer performs it once control
/// returns to the event loop. [`Session::get_geometry_mut`] is the one
/// exception: editing an entry through it never requests a refresh.
#[derive(Debug, Default)]
pub struct Session {
    registry: SceneRegistry,
    current_time: Option<f64>,
    refresh_requested: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry`, replacing any entry of the same name in place
    pub fn add_geometry(&mut self, entry: SceneEntry) -> Result<()> {
        let name = entry.name.clone();
        let kind = entry.geometry.kind();
        match self.registry.add(entry)? {
            Insertion::Inserted => debug!(%name, kind, "added geometry"),
            Insertion::Replaced => debug!(%name, kind, "replaced geometry"),
        }
        self.refresh_requested = true;
        Ok(())
    }

    pub fn remove_geometry(&mut self, name: &str) -> Result<()> {
        self.registry.remove(name)?;
        debug!(name, "removed geometry");
        self.refresh_requested = true;
        Ok(())
    }

    /// Show or hide an entry by name, or a whole group by tag. An entry
    /// name takes precedence over a group of the same name.
    pub fn show_geometry(&mut self, name_or_group: &str, visible: bool) -> Result<()> {
        let count = self.registry.show(name_or_group, visible)?;
        debug!(name_or_group, visible, count, "changed visibility");
        self.refresh_requested = true;
        Ok(())
    }

    pub fn get_geometry(&self, name: &str) -> Result<&SceneEntry> {
        self.registry.get(name)
    }

    /// Live handle to an entry. Changes made through it are drawn on the
    /// next refresh triggered by some other operation.
    pub fn get_geometry_mut(&mut self, name: &str) -> Result<EntryHandle<'_>> {
        self.registry.get_mut(name)
    }

    /// Move playback to `time`: time-tagged entries are shown exactly when
    /// their tag equals `time`
    pub fn set_time(&mut self, time: f64) -> Result<()> {
        let shown = self.registry.set_time(time)?;
        debug!(time, shown, "set playback time");
        self.current_time = Some(time);
        self.refresh_requested = true;
        Ok(())
    }

    pub fn current_time(&self) -> Option<f64> {
        self.current_time
    }

    pub fn scene(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn refresh_requested(&self) -> bool {
        self.refresh_requested
    }

    /// Clear and return the pending refresh request
    pub(crate) fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawError;
    use threecrate_core::TriangleMesh;

    fn entry(name: &str) -> SceneEntry {
        SceneEntry::new(name, TriangleMesh::create_box(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_mutations_request_refresh() {
        let mut session = Session::new();
        assert!(!session.refresh_requested());
        session.add_geometry(entry("a")).unwrap();
        assert!(session.take_refresh());
        assert!(!session.refresh_requested());
        session.show_geometry("a", false).unwrap();
        assert!(session.take_refresh());
        session.remove_geometry("a").unwrap();
        assert!(session.take_refresh());
    }

    #[test]
    fn test_failed_mutation_requests_nothing() {
        let mut session = Session::new();
        assert!(matches!(
            session.remove_geometry("missing"),
            Err(DrawError::NotFound { .. })
        ));
        assert!(!session.refresh_requested());
    }

    #[test]
    fn test_live_handle_does_not_request_refresh() {
        let mut session = Session::new();
        session.add_geometry(entry("a")).unwrap();
        session.take_refresh();
        session.get_geometry_mut("a").unwrap().set_visible(false);
        assert!(!session.refresh_requested());
        assert!(!session.get_geometry("a").unwrap().is_visible);
    }

    #[test]
    fn test_names_stay_unique_after_live_edits() {
        let mut session = Session::new();
        session.add_geometry(entry("a").with_time(1.0)).unwrap();
        {
            let mut handle = session.get_geometry_mut("a").unwrap();
            handle.set_visible(false);
            *handle.geometry_mut() = TriangleMesh::create_box(2.0, 2.0, 2.0).into();
        }
        session.add_geometry(entry("b")).unwrap();

        let scene = session.scene();
        assert_eq!(scene.names(), vec!["a", "b"]);
        assert_eq!(scene.get("a").unwrap().name, "a");
        assert_eq!(scene.time_range(), Some((1.0, 1.0)));
    }

    #[test]
    fn test_set_time_records_position() {
        let mut session = Session::new();
        session.add_geometry(entry("t0").with_time(0.0)).unwrap();
        session.add_geometry(entry("t1").with_time(1.0)).unwrap();
        session.set_time(1.0).unwrap();
        assert_eq!(session.current_time(), Some(1.0));
        assert_eq!(session.scene().visible_names(), vec!["t1"]);
    }
}
