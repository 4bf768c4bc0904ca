use slotmap::SlotMap;

use crate::error::CollisionError;
use crate::geometry::Shape;

use super::{Collider, CollisionManager};

slotmap::new_key_type! {
    /// Handle of a scene object owning a collider.
    pub struct ObjectId;
}

/// A collider that records who it hit during the last sweep.
#[derive(Debug, Clone)]
pub struct Body {
    id: ObjectId,
    shape: Shape,
    deep: bool,
    hits: Vec<ObjectId>,
}

impl Body {
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn is_deep(&self) -> bool {
        self.deep
    }

    /// Owners hit during the most recent sweep, in notification order.
    #[must_use]
    pub fn hits(&self) -> &[ObjectId] {
        &self.hits
    }
}

impl Collider for Body {
    fn owner(&self) -> ObjectId {
        self.id
    }

    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn is_deep_collision(&self) -> bool {
        self.deep
    }

    fn on_collision(&mut self, other: ObjectId) {
        self.hits.push(other);
    }
}

/// Arena owning the bodies of a scene.
///
/// Bodies are addressed by generational [`ObjectId`]s, so a removed body's
/// id never aliases a later one.
#[derive(Debug, Default)]
pub struct BodyStore {
    bodies: SlotMap<ObjectId, Body>,
}

impl BodyStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a body and returns its ID.
    pub fn insert(&mut self, shape: impl Into<Shape>, deep: bool) -> ObjectId {
        let shape = shape.into();
        self.bodies.insert_with_key(|id| Body {
            id,
            shape,
            deep,
            hits: Vec::new(),
        })
    }

    /// Removes a body, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not in the store.
    pub fn remove(&mut self, id: ObjectId) -> Result<Body, CollisionError> {
        self.bodies
            .remove(id)
            .ok_or_else(|| CollisionError::BodyNotFound(format!("{id:?}")))
    }

    /// Returns a reference to the body, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not in the store.
    pub fn body(&self, id: ObjectId) -> Result<&Body, CollisionError> {
        self.bodies
            .get(id)
            .ok_or_else(|| CollisionError::BodyNotFound(format!("{id:?}")))
    }

    /// Replaces the shape of a body, typically after moving it.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not in the store.
    pub fn set_shape(
        &mut self,
        id: ObjectId,
        shape: impl Into<Shape>,
    ) -> Result<(), CollisionError> {
        let body = self
            .bodies
            .get_mut(id)
            .ok_or_else(|| CollisionError::BodyNotFound(format!("{id:?}")))?;
        body.shape = shape.into();
        Ok(())
    }

    /// Number of bodies in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates over every body, in no particular order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    /// Clears the previous hits and runs a full sweep over every body.
    /// Returns the number of colliding pairs.
    pub fn sweep(&mut self) -> usize {
        let mut bodies: Vec<&mut Body> = self.bodies.values_mut().collect();
        for body in &mut bodies {
            body.hits.clear();
        }
        CollisionManager::detect_collisions(&mut bodies)
    }

    /// Returns `true` if `shape` collides with any body in the store.
    #[must_use]
    pub fn collides_any(&self, shape: &Shape) -> bool {
        CollisionManager::collides_any(shape, self.bodies.values())
    }

    /// Owners of the bodies the given body currently collides with.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not in the store.
    pub fn collisions_of(&self, id: ObjectId) -> Result<Vec<ObjectId>, CollisionError> {
        let body = self.body(id)?;
        Ok(CollisionManager::collisions_of(body, self.bodies.values()))
    }
}
