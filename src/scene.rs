//! The scene: every shape the editor still knows about, addressed by a
//! stable [`ShapeId`], plus the draw order of the shapes that are live.
//!
//! A shape can leave the live order (undo of a create, delete) while the
//! history stack or the deleted buffer still refers to it; it stays in the
//! arena until [`Scene::retain_detached`] lets it go.

use std::collections::HashMap;

use egui::Pos2;

use crate::shape::Shape;

/// Stable handle of a shape in the scene arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct Scene {
    arena: HashMap<ShapeId, Shape>,
    /// Live shapes, back to front.
    order: Vec<ShapeId>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new shape and appends it on top of the live order.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        self.next_id += 1;
        let id = ShapeId(self.next_id);
        self.arena.insert(id, shape);
        self.order.push(id);
        id
    }

    /// Re-appends a detached shape on top of the live order. Returns false if
    /// the shape is unknown or already live.
    pub fn attach(&mut self, id: ShapeId) -> bool {
        if !self.arena.contains_key(&id) || self.is_live(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Removes a shape from the live order, keeping it in the arena.
    pub fn detach(&mut self, id: ShapeId) -> bool {
        match self.order.iter().position(|&live| live == id) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes a shape from both the live order and the arena.
    pub fn discard(&mut self, id: ShapeId) -> Option<Shape> {
        self.detach(id);
        self.arena.remove(&id)
    }

    /// Drops detached shapes for which `keep` returns false.
    pub fn retain_detached(&mut self, mut keep: impl FnMut(ShapeId) -> bool) {
        let order = &self.order;
        self.arena
            .retain(|id, _| order.contains(id) || keep(*id));
    }

    pub fn is_live(&self, id: ShapeId) -> bool {
        self.order.contains(&id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.arena.get(&id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.arena.get_mut(&id)
    }

    /// Live shapes in draw order, back to front.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.arena.get(id).map(|shape| (*id, shape)))
    }

    pub fn ids(&self) -> &[ShapeId] {
        &self.order
    }

    /// Number of live shapes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of shapes held by the arena, live or not.
    pub fn stored_len(&self) -> usize {
        self.arena.len()
    }

    /// Topmost live shape under `pos`.
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> Option<ShapeId> {
        self.order.iter().rev().copied().find(|id| {
            self.arena
                .get(id)
                .is_some_and(|shape| shape.hit_test(pos, tolerance))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeStyle;
    use egui::pos2;

    fn square(at: f32) -> Shape {
        let mut shape = Shape::rectangle_at(pos2(at, at), ShapeStyle::default());
        shape.resize_to(pos2(at, at), pos2(at + 20.0, at + 20.0));
        shape
    }

    #[test]
    fn topmost_shape_wins_hit_test() {
        let mut scene = Scene::new();
        let below = scene.insert(square(0.0));
        let above = scene.insert(square(10.0));
        assert_eq!(scene.hit_test(pos2(15.0, 15.0), 4.0), Some(above));
        assert_eq!(scene.hit_test(pos2(5.0, 5.0), 4.0), Some(below));
        assert_eq!(scene.hit_test(pos2(100.0, 100.0), 4.0), None);
    }

    #[test]
    fn detached_shapes_survive_until_released() {
        let mut scene = Scene::new();
        let id = scene.insert(square(0.0));
        assert!(scene.detach(id));
        assert!(!scene.is_live(id));
        assert!(scene.get(id).is_some());

        scene.retain_detached(|kept| kept == id);
        assert!(scene.get(id).is_some());

        scene.retain_detached(|_| false);
        assert!(scene.get(id).is_none());
        assert!(!scene.attach(id));
    }

    #[test]
    fn attach_appends_on_top() {
        let mut scene = Scene::new();
        let first = scene.insert(square(0.0));
        let second = scene.insert(square(0.0));
        scene.detach(first);
        assert!(scene.attach(first));
        assert!(!scene.attach(first));
        assert_eq!(scene.ids(), &[second, first]);
    }
}
