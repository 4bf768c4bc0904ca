//! Brute-force pairwise collision detection.
//!
//! Every tick the scene hands over its colliders and the sweep tests each
//! unordered pair once. There is no spatial index.

mod store;

pub use store::{Body, BodyStore, ObjectId};

use tracing::{debug, trace};

use crate::geometry::{Geometric, Shape};

/// A shape attached to a scene object.
pub trait Collider {
    /// Handle of the object this collider belongs to.
    fn owner(&self) -> ObjectId;

    /// Current shape in world coordinates.
    fn shape(&self) -> &Shape;

    /// When set, containment in either direction also counts as a
    /// collision, not only boundary contact.
    fn is_deep_collision(&self) -> bool;

    /// Called once per sweep for each object this collider hit.
    fn on_collision(&mut self, other: ObjectId);
}

impl<C: Collider + ?Sized> Collider for &mut C {
    fn owner(&self) -> ObjectId {
        (**self).owner()
    }

    fn shape(&self) -> &Shape {
        (**self).shape()
    }

    fn is_deep_collision(&self) -> bool {
        (**self).is_deep_collision()
    }

    fn on_collision(&mut self, other: ObjectId) {
        (**self).on_collision(other);
    }
}

/// Collision rules and the all-pairs sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionManager;

impl CollisionManager {
    /// Tests every unordered pair and notifies both colliders of each hit,
    /// the earlier one first. Returns the number of colliding pairs.
    pub fn detect_collisions<C: Collider>(colliders: &mut [C]) -> usize {
        let n = colliders.len();
        let mut pairs = 0;
        for j in 1..n {
            let (head, tail) = colliders.split_at_mut(j);
            let collided = &mut tail[0];
            for collider in head.iter_mut() {
                if !Self::collides(&*collider, &*collided) {
                    continue;
                }
                let (a, b) = (collider.owner(), collided.owner());
                trace!(?a, ?b, "collision");
                collider.on_collision(b);
                collided.on_collision(a);
                pairs += 1;
            }
        }
        debug!(colliders = n, pairs, "collision sweep finished");
        pairs
    }

    /// Returns `true` if two colliders of different owners collide.
    /// Touching shapes collide.
    #[must_use]
    pub fn collides<A, B>(a: &A, b: &B) -> bool
    where
        A: Collider + ?Sized,
        B: Collider + ?Sized,
    {
        if a.owner() == b.owner() {
            return false;
        }
        shapes_collide(
            a.shape(),
            a.is_deep_collision(),
            b.shape(),
            b.is_deep_collision(),
        )
    }

    /// Returns `true` if `shape` collides with any collider in `pool`.
    ///
    /// The free shape has no owner and is never deep; a deep collider in
    /// the pool still counts containment.
    pub fn collides_any<'a, C>(shape: &Shape, pool: impl IntoIterator<Item = &'a C>) -> bool
    where
        C: Collider + 'a,
    {
        pool.into_iter()
            .any(|c| shapes_collide(shape, false, c.shape(), c.is_deep_collision()))
    }

    /// Returns `true` if `collider` collides with any other collider in `pool`.
    pub fn collides_any_with<'a, A, C>(collider: &A, pool: impl IntoIterator<Item = &'a C>) -> bool
    where
        A: Collider + ?Sized,
        C: Collider + 'a,
    {
        pool.into_iter().any(|c| Self::collides(collider, c))
    }

    /// Owners of every collider in `pool` that `collider` collides with.
    pub fn collisions_of<'a, A, C>(
        collider: &A,
        pool: impl IntoIterator<Item = &'a C>,
    ) -> Vec<ObjectId>
    where
        A: Collider + ?Sized,
        C: Collider + 'a,
    {
        pool.into_iter()
            .filter(|c| Self::collides(collider, *c))
            .map(Collider::owner)
            .collect()
    }
}

fn shapes_collide(a: &Shape, a_deep: bool, b: &Shape, b_deep: bool) -> bool {
    if a.intersects_inclusive(b) {
        return true;
    }
    (a_deep || b_deep) && (a.contains(b) || b.contains(a))
}
