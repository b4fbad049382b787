//! Arena that owns every body in a scene.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::objects::Body;

/// Stable handle to a body in a [`Bodies`] store.
///
/// A handle outlives its body: once the body is purged the handle resolves to
/// nothing, even if the slot is later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId {
    key: usize,
    generation: u64,
}

struct Slot {
    generation: u64,
    body: Body,
}

/// Body storage keyed by [`BodyId`], remembering insertion order.
pub struct Bodies {
    slots: Slab<Slot>,
    order: Vec<BodyId>,
    next_generation: u64,
}

impl Bodies {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Bodies {
            slots: Slab::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            next_generation: 0,
        }
    }

    pub(crate) fn insert(&mut self, body: Body) -> BodyId {
        let generation = self.next_generation;
        self.next_generation += 1;
        let key = self.slots.insert(Slot { generation, body });
        let id = BodyId { key, generation };
        self.order.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        match self.slots.get(id.key) {
            Some(slot) if slot.generation == id.generation => Some(&slot.body),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        match self.slots.get_mut(id.key) {
            Some(slot) if slot.generation == id.generation => Some(&mut slot.body),
            _ => None,
        }
    }

    /// Mutable access to two distinct bodies at once.
    ///
    /// Panics if `a == b`. Returns `None` if either handle is stale.
    pub fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut Body, &mut Body)> {
        assert!(a != b, "cannot borrow the same body twice");
        // Same slot under two generations: at most one of them is live.
        if a.key == b.key {
            return None;
        }
        let (slot_a, slot_b) = self.slots.get2_mut(a.key, b.key)?;
        if slot_a.generation != a.generation || slot_b.generation != b.generation {
            return None;
        }
        Some((&mut slot_a.body, &mut slot_b.body))
    }

    /// True if the body is marked removed or has already been purged.
    pub fn is_removed(&self, id: BodyId) -> bool {
        self.get(id).map_or(true, Body::is_removed)
    }

    /// Handle of the `index`-th live body in insertion order.
    pub fn id_at(&self, index: usize) -> Option<BodyId> {
        self.order.get(index).copied()
    }

    /// Live bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.order.iter().filter_map(move |&id| self.get(id).map(|body| (id, body)))
    }

    /// Ticks every body still in play and drops the ones marked removed.
    /// Returns how many were dropped.
    pub(crate) fn integrate_and_purge(&mut self, dt: f64) -> usize {
        let slots = &mut self.slots;
        let before = self.order.len();
        self.order.retain(|id| {
            let removed = slots[id.key].body.is_removed();
            if removed {
                // Dropping the slot runs the body's release hook.
                drop(slots.remove(id.key));
            } else {
                slots[id.key].body.tick(dt);
            }
            !removed
        });
        before - self.order.len()
    }
}

impl Index<BodyId> for Bodies {
    type Output = Body;

    /// Panics if the handle is stale.
    fn index(&self, id: BodyId) -> &Body {
        match self.get(id) {
            Some(body) => body,
            None => panic!("stale body handle {:?}", id),
        }
    }
}

impl IndexMut<BodyId> for Bodies {
    fn index_mut(&mut self, id: BodyId) -> &mut Body {
        match self.get_mut(id) {
            Some(body) => body,
            None => panic!("stale body handle {:?}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RgbColor;
    use crate::math::vec2::Vec2;
    use crate::shapes::make_rectangle;

    fn body_at(x: f64) -> Body {
        let mut body = Body::new(make_rectangle(Vec2::ZERO, Vec2::new(1.0, 1.0)), 1.0, RgbColor::BLACK);
        body.set_centroid(Vec2::new(x, 0.0));
        body
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut bodies = Bodies::with_capacity(4);
        let a = bodies.insert(body_at(1.0));
        let b = bodies.insert(body_at(2.0));
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies.id_at(0), Some(a));
        assert_eq!(bodies.id_at(1), Some(b));
        assert_eq!(bodies.id_at(2), None);
        assert_eq!(bodies.get(b).unwrap().centroid(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_pair_mut_borrows_both() {
        let mut bodies = Bodies::with_capacity(2);
        let a = bodies.insert(body_at(1.0));
        let b = bodies.insert(body_at(2.0));
        let (body_a, body_b) = bodies.pair_mut(a, b).unwrap();
        body_a.set_velocity(Vec2::new(1.0, 0.0));
        body_b.set_velocity(Vec2::new(-1.0, 0.0));
        assert_eq!(bodies.get(a).unwrap().velocity(), Vec2::new(1.0, 0.0));
        assert_eq!(bodies.get(b).unwrap().velocity(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_pair_mut_same_body_panics() {
        let mut bodies = Bodies::with_capacity(1);
        let a = bodies.insert(body_at(0.0));
        bodies.pair_mut(a, a);
    }

    #[test]
    fn test_purge_drops_removed_and_keeps_order() {
        let mut bodies = Bodies::with_capacity(3);
        let a = bodies.insert(body_at(1.0));
        let b = bodies.insert(body_at(2.0));
        let c = bodies.insert(body_at(3.0));
        bodies.get_mut(b).unwrap().remove();
        assert!(bodies.is_removed(b));

        assert_eq!(bodies.integrate_and_purge(0.1), 1);
        assert_eq!(bodies.len(), 2);
        assert!(!bodies.contains(b));
        assert!(bodies.is_removed(b));
        let order: Vec<_> = bodies.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn test_stale_handle_does_not_alias_reused_slot() {
        let mut bodies = Bodies::with_capacity(1);
        let old = bodies.insert(body_at(1.0));
        bodies.get_mut(old).unwrap().remove();
        bodies.integrate_and_purge(0.1);

        let new = bodies.insert(body_at(5.0));
        assert!(bodies.get(old).is_none());
        assert!(bodies.get(new).is_some());
        assert_ne!(old, new);
    }
}
