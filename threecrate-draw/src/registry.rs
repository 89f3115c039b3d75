//! Name-keyed registry of scene entries
//!
//! The registry is the authoritative mapping from entry name to
//! [`SceneEntry`]. Entries keep their insertion order, which is also the
//! order a backend draws them in. Groups are not stored separately; they
//! are derived from the `group` tags of the current entries.

use std::collections::{HashMap, HashSet};

use crate::entry::{DrawItem, EntryHandle, SceneEntry};
use crate::error::{DrawError, Result};

/// Prefix of the names given to bare geometry in an initial batch
pub const AUTO_NAME_PREFIX: &str = "Object ";

/// What `SceneRegistry::add` did with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    Replaced,
}

/// Ordered, name-unique collection of scene entries
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    entries: Vec<SceneEntry>,
    index: HashMap<String, usize>,
}

impl SceneRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an initial batch.
    ///
    /// Unlike [`SceneRegistry::add`], a name appearing twice in the batch is
    /// an error rather than a replacement. Bare geometry is named
    /// `"Object N"` with the smallest `N` not taken by any other item.
    pub fn from_batch<I, T>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<DrawItem>,
    {
        Self::from_batch_excluding(items, &Self::new())
    }

    /// Like [`SceneRegistry::from_batch`], but generated names also avoid
    /// every name already in `existing`
    pub fn from_batch_excluding<I, T>(items: I, existing: &SceneRegistry) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<DrawItem>,
    {
        let items: Vec<DrawItem> = items.into_iter().map(Into::into).collect();

        let mut taken = HashSet::new();
        for item in &items {
            if let DrawItem::Entry(entry) = item {
                if !taken.insert(entry.name.as_str()) {
                    return Err(DrawError::DuplicateName {
                        name: entry.name.clone(),
                    });
                }
                entry.validate()?;
            }
        }
        let mut taken: HashSet<String> = taken
            .into_iter()
            .chain(existing.names())
            .map(str::to_owned)
            .collect();

        let mut registry = Self::new();
        let mut next_auto = 1usize;
        for item in items {
            let entry = match item {
                DrawItem::Entry(entry) => entry,
                DrawItem::Geometry(geometry) => {
                    let name = loop {
                        let candidate = format!("{AUTO_NAME_PREFIX}{next_auto}");
                        next_auto += 1;
                        if !taken.contains(&candidate) {
                            break candidate;
                        }
                    };
                    taken.insert(name.clone());
                    SceneEntry::new(name, geometry)
                }
            };
            registry.push(entry);
        }
        Ok(registry)
    }

    fn push(&mut self, entry: SceneEntry) {
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Insert `entry`, or replace the entry of the same name in place.
    ///
    /// On replacement the geometry and visibility always come from `entry`;
    /// material, group and time come from `entry` only when it sets them.
    pub fn add(&mut self, entry: SceneEntry) -> Result<Insertion> {
        entry.validate()?;
        match self.index.get(&entry.name) {
            Some(&slot) => {
                let existing = &mut self.entries[slot];
                existing.geometry = entry.geometry;
                existing.is_visible = entry.is_visible;
                if entry.material.is_some() {
                    existing.material = entry.material;
                }
                if entry.group.is_some() {
                    existing.group = entry.group;
                }
                if entry.time.is_some() {
                    existing.time = entry.time;
                }
                Ok(Insertion::Replaced)
            }
            None => {
                self.push(entry);
                Ok(Insertion::Inserted)
            }
        }
    }

    /// Remove and return the entry called `name`
    pub fn remove(&mut self, name: &str) -> Result<SceneEntry> {
        let slot = self
            .index
            .remove(name)
            .ok_or_else(|| DrawError::not_found(name))?;
        let entry = self.entries.remove(slot);
        for later in &self.entries[slot..] {
            if let Some(i) = self.index.get_mut(&later.name) {
                *i -= 1;
            }
        }
        Ok(entry)
    }

    /// Set visibility of the entry called `name_or_group`, or, when no entry
    /// has that name, of every entry tagged with that group. Returns the
    /// number of entries addressed.
    pub fn show(&mut self, name_or_group: &str, visible: bool) -> Result<usize> {
        if let Some(&slot) = self.index.get(name_or_group) {
            self.entries[slot].is_visible = visible;
            return Ok(1);
        }

        let mut count = 0;
        for entry in self.entries.iter_mut().filter(|e| e.in_group(name_or_group)) {
            entry.is_visible = visible;
            count += 1;
        }
        if count == 0 {
            return Err(DrawError::not_found(name_or_group));
        }
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Result<&SceneEntry> {
        self.index
            .get(name)
            .map(|&slot| &self.entries[slot])
            .ok_or_else(|| DrawError::not_found(name))
    }

    /// Mutable handle to the entry called `name`. The handle cannot rename
    /// or retag the entry, so the name index stays valid.
    pub fn get_mut(&mut self, name: &str) -> Result<EntryHandle<'_>> {
        match self.index.get(name) {
            Some(&slot) => Ok(EntryHandle::new(&mut self.entries[slot])),
            None => Err(DrawError::not_found(name)),
        }
    }

    /// Show exactly the time-tagged entries whose tag equals `time`.
    /// Untagged entries are left alone. Returns how many entries are shown.
    pub fn set_time(&mut self, time: f64) -> Result<usize> {
        if !time.is_finite() {
            return Err(DrawError::InvalidTag {
                name: "playback time".to_string(),
                value: time,
            });
        }
        let mut shown = 0;
        for entry in &mut self.entries {
            if let Some(tag) = entry.time {
                entry.is_visible = tag == time;
                if entry.is_visible {
                    shown += 1;
                }
            }
        }
        Ok(shown)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, SceneEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn visible_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_visible)
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Distinct group tags, in order of first appearance
    pub fn groups(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter_map(|e| e.group.as_deref())
            .filter(|g| seen.insert(*g))
            .collect()
    }

    /// Names of the entries currently tagged with `group`
    pub fn group_members(&self, group: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.in_group(group))
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Distinct time tags in ascending order
    pub fn time_tags(&self) -> Vec<f64> {
        let mut tags: Vec<f64> = self.entries.iter().filter_map(|e| e.time).collect();
        tags.sort_by(f64::total_cmp);
        tags.dedup();
        tags
    }

    /// Smallest and largest time tag, if any entry is tagged
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let tags = self.time_tags();
        Some((*tags.first()?, *tags.last()?))
    }

    pub(crate) fn into_entries(self) -> Vec<SceneEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a SceneRegistry {
    type Item = &'a SceneEntry;
    type IntoIter = std::slice::Iter<'a, SceneEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use threecrate_core::{Point3f, PointCloud, TriangleMesh};

    fn sphere(name: &str) -> SceneEntry {
        SceneEntry::new(name, TriangleMesh::create_sphere(0.5, 6))
    }

    #[test]
    fn test_batch_rejects_duplicate_names() {
        let result = SceneRegistry::from_batch([sphere("box"), sphere("box")]);
        match result {
            Err(DrawError::DuplicateName { name }) => assert_eq!(name, "box"),
            other => panic!("expected DuplicateName, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_names_bare_geometry() {
        let items: Vec<DrawItem> = vec![
            TriangleMesh::create_box(1.0, 1.0, 1.0).into(),
            SceneEntry::new("Object 2", TriangleMesh::new()).into(),
            PointCloud::from_points(vec![Point3f::origin()]).into(),
        ];
        let registry = SceneRegistry::from_batch(items).unwrap();
        assert_eq!(registry.names(), vec!["Object 1", "Object 2", "Object 3"]);
    }

    #[test]
    fn test_generated_names_skip_existing_entries() {
        let existing = SceneRegistry::from_batch([sphere("Object 1").with_group("setup")]).unwrap();
        let batch = SceneRegistry::from_batch_excluding(
            [Geometry::from(TriangleMesh::create_box(1.0, 1.0, 1.0))],
            &existing,
        )
        .unwrap();
        assert_eq!(batch.names(), vec!["Object 2"]);
    }

    #[test]
    fn test_batch_rejects_non_finite_time() {
        let result = SceneRegistry::from_batch([sphere("a").with_time(f64::INFINITY)]);
        assert!(matches!(result, Err(DrawError::InvalidTag { .. })));
    }

    #[test]
    fn test_add_replaces_in_place() {
        let mut registry = SceneRegistry::from_batch([
            sphere("a").with_group("g").with_time(1.0),
            sphere("b"),
        ])
        .unwrap();

        let replacement = SceneEntry::new("a", TriangleMesh::create_box(1.0, 1.0, 1.0))
            .with_visible(false);
        assert_eq!(registry.add(replacement).unwrap(), Insertion::Replaced);

        assert_eq!(registry.names(), vec!["a", "b"]);
        let a = registry.get("a").unwrap();
        assert_eq!(a.group.as_deref(), Some("g"));
        assert_eq!(a.time, Some(1.0));
        assert!(!a.is_visible);
        assert_eq!(a.geometry, Geometry::from(TriangleMesh::create_box(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_add_overrides_tags_when_set() {
        let mut registry = SceneRegistry::from_batch([sphere("a").with_group("g")]).unwrap();
        registry.add(sphere("a").with_group("h")).unwrap();
        assert_eq!(registry.groups(), vec!["h"]);
    }

    #[test]
    fn test_remove_reindexes() {
        let mut registry =
            SceneRegistry::from_batch([sphere("a"), sphere("b"), sphere("c")]).unwrap();
        let removed = registry.remove("a").unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(registry.get("c").unwrap().name, "c");
        assert!(matches!(registry.remove("a"), Err(DrawError::NotFound { .. })));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_show_prefers_entry_name_over_group() {
        let mut registry = SceneRegistry::from_batch([
            sphere("spheres"),
            sphere("a").with_group("spheres"),
        ])
        .unwrap();
        assert_eq!(registry.show("spheres", false).unwrap(), 1);
        assert!(!registry.get("spheres").unwrap().is_visible);
        assert!(registry.get("a").unwrap().is_visible);
    }

    #[test]
    fn test_show_unknown_identifier() {
        let mut registry = SceneRegistry::from_batch([sphere("a")]).unwrap();
        assert!(matches!(
            registry.show("nothing", true),
            Err(DrawError::NotFound { .. })
        ));
    }

    #[test]
    fn test_groups_and_time_range() {
        let registry = SceneRegistry::from_batch([
            sphere("a").with_group("x").with_time(2.0),
            sphere("b").with_group("y"),
            sphere("c").with_group("x").with_time(0.0),
            sphere("d"),
        ])
        .unwrap();
        assert_eq!(registry.groups(), vec!["x", "y"]);
        assert_eq!(registry.group_members("x"), vec!["a", "c"]);
        assert_eq!(registry.time_tags(), vec![0.0, 2.0]);
        assert_eq!(registry.time_range(), Some((0.0, 2.0)));
    }

    #[test]
    fn test_set_time_rejects_nan() {
        let mut registry = SceneRegistry::from_batch([sphere("a").with_time(0.0)]).unwrap();
        assert!(registry.set_time(f64::NAN).is_err());
        assert!(registry.get("a").unwrap().is_visible);
    }
}
