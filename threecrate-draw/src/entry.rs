//! Named scene entries and the forms accepted by an initial batch

use crate::error::{DrawError, Result};
use crate::geometry::Geometry;
use crate::material::Material;

/// A single named drawable unit in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntry {
    pub name: String,
    pub geometry: Geometry,
    pub material: Option<Material>,
    /// Tag shared by entries toggled together
    pub group: Option<String>,
    /// Playback time at which this entry is shown; untagged entries are always active
    pub time: Option<f64>,
    pub is_visible: bool,
}

impl SceneEntry {
    pub fn new(name: impl Into<String>, geometry: impl Into<Geometry>) -> Self {
        Self {
            name: name.into(),
            geometry: geometry.into(),
            material: None,
            group: None,
            time: None,
            is_visible: true,
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.group.as_deref() == Some(group)
    }

    /// Reject tags that cannot be compared for playback
    pub(crate) fn validate(&self) -> Result<()> {
        match self.time {
            Some(value) if !value.is_finite() => Err(DrawError::InvalidTag {
                name: self.name.clone(),
                value,
            }),
            _ => Ok(()),
        }
    }
}

/// Live, mutable view of a registered entry.
///
/// Only the fields that do not take part in lookup can change here. Name,
/// group and time tag are fixed until the entry is replaced through
/// `add_geometry`.
#[derive(Debug)]
pub struct EntryHandle<'a> {
    entry: &'a mut SceneEntry,
}

impl<'a> EntryHandle<'a> {
    pub(crate) fn new(entry: &'a mut SceneEntry) -> Self {
        Self { entry }
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn group(&self) -> Option<&str> {
        self.entry.group.as_deref()
    }

    pub fn time(&self) -> Option<f64> {
        self.entry.time
    }

    pub fn is_visible(&self) -> bool {
        self.entry.is_visible
    }

    pub fn set_visible(&mut self, is_visible: bool) {
        self.entry.is_visible = is_visible;
    }

    pub fn material_mut(&mut self) -> &mut Option<Material> {
        &mut self.entry.material
    }

    pub fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.entry.geometry
    }
}

/// One element of an initial scene batch: a full entry, or bare geometry
/// that receives a generated name
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Entry(SceneEntry),
    Geometry(Geometry),
}

impl From<SceneEntry> for DrawItem {
    fn from(entry: SceneEntry) -> Self {
        DrawItem::Entry(entry)
    }
}

impl From<Geometry> for DrawItem {
    fn from(geometry: Geometry) -> Self {
        DrawItem::Geometry(geometry)
    }
}

macro_rules! bare_geometry_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DrawItem {
                fn from(geometry: $ty) -> Self {
                    DrawItem::Geometry(geometry.into())
                }
            }
        )*
    };
}

bare_geometry_item!(
    threecrate_core::PointCloud<threecrate_core::Point3f>,
    threecrate_core::PointCloud<threecrate_core::ColoredPoint3f>,
    threecrate_core::TriangleMesh,
    threecrate_core::AxisAlignedBoundingBox,
    threecrate_core::LineSet,
);

#[cfg(test)]
mod tests {
    use super::*;
    use threecrate_core::TriangleMesh;

    #[test]
    fn test_entry_defaults() {
        let entry = SceneEntry::new("box", TriangleMesh::create_box(1.0, 1.0, 1.0));
        assert!(entry.is_visible);
        assert!(entry.material.is_none());
        assert!(entry.group.is_none());
        assert!(entry.time.is_none());
    }

    #[test]
    fn test_non_finite_time_rejected() {
        let entry = SceneEntry::new("t", TriangleMesh::new()).with_time(f64::NAN);
        assert!(matches!(entry.validate(), Err(DrawError::InvalidTag { .. })));
        let entry = SceneEntry::new("t", TriangleMesh::new()).with_time(3.0);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_handle_edits_presentation_only() {
        let mut entry = SceneEntry::new("a", TriangleMesh::new()).with_time(2.0);
        let mut handle = EntryHandle::new(&mut entry);
        handle.set_visible(false);
        *handle.material_mut() = Some(Material::default());
        assert_eq!(handle.name(), "a");
        assert_eq!(handle.time(), Some(2.0));
        assert!(!handle.is_visible());
        assert!(entry.material.is_some());
        assert_eq!(entry.name, "a");
    }

    #[test]
    fn test_draw_item_forms() {
        let bare: DrawItem = TriangleMesh::new().into();
        assert!(matches!(bare, DrawItem::Geometry(Geometry::Mesh(_))));
        let named: DrawItem = SceneEntry::new("m", TriangleMesh::new()).into();
        assert!(matches!(named, DrawItem::Entry(_)));
    }
}
