//! Named object store with z-ordered rendering.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use pips_types::backend::SdiBackend;
use pips_types::error::{PipsError, Result};
use pips_types::geometry::CoordMap;

use crate::object::{SdiObject, Shape};

/// The scene graph: every shape on the surface, keyed by name.
#[derive(Debug, Default)]
pub struct SdiRegistry {
    objects: HashMap<String, SdiObject>,
    next_z: i32,
}

impl SdiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the object called `name` on top of the stack and
    /// return it for styling.
    pub fn create(&mut self, name: &str, shape: Shape) -> &mut SdiObject {
        let mut obj = SdiObject::new(shape);
        obj.z = self.next_z;
        self.next_z += 1;
        match self.objects.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                log::trace!("SDI object '{name}' replaced");
                slot.insert(obj);
                slot.into_mut()
            },
            Entry::Vacant(slot) => slot.insert(obj),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&SdiObject> {
        self.objects
            .get(name)
            .ok_or_else(|| PipsError::Sdi(format!("object not found: {name}")))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut SdiObject> {
        self.objects
            .get_mut(name)
            .ok_or_else(|| PipsError::Sdi(format!("object not found: {name}")))
    }

    /// Remove the object from the surface for good.
    pub fn destroy(&mut self, name: &str) -> Result<()> {
        self.objects
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| PipsError::Sdi(format!("object not found: {name}")))
    }

    /// Raise an object above everything else.
    pub fn move_to_top(&mut self, name: &str) -> Result<()> {
        let z = self.next_z;
        let obj = self.get_mut(name)?;
        obj.z = z;
        self.next_z += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Names of all objects, bottom of the stack first.
    pub fn names(&self) -> Vec<&str> {
        let mut entries: Vec<_> = self.objects.iter().collect();
        entries.sort_by_key(|(_, obj)| obj.z);
        entries.into_iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of objects whose name starts with `prefix`.
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.objects
            .keys()
            .filter(|name| name.starts_with(prefix))
            .count()
    }

    /// Draw every visible object, lowest z first.
    pub fn draw(&self, backend: &mut dyn SdiBackend, map: &CoordMap) -> Result<()> {
        let mut visible: Vec<&SdiObject> = self.objects.values().filter(|o| o.visible).collect();
        visible.sort_by_key(|o| o.z);
        for obj in visible {
            obj.draw(backend, map)?;
        }
        Ok(())
    }
}
