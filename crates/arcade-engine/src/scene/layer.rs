use std::collections::BTreeMap;

use super::{Attrs, DrawCmd, DrawList, Shape, ShapeId, ShapeKind, ZIndex};

/// Owner of every drawable on one surface.
///
/// Shapes are iterated in id order, which is creation order; `zIndex`
/// reorders them at draw time.
#[derive(Debug, Default)]
pub struct Layer {
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u64,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape and returns its new id.
    pub fn add(&mut self, kind: ShapeKind, attrs: Attrs) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, Shape::new(kind, attrs));
        id
    }

    #[inline]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Merges `attrs` into the shape. Returns `false` if the shape is gone.
    pub fn set_attrs(&mut self, id: ShapeId, attrs: Attrs) -> bool {
        match self.shapes.get_mut(&id) {
            Some(shape) => {
                shape.attrs.merge(attrs);
                true
            }
            None => false,
        }
    }

    /// Removes the shape, returning it if it existed.
    pub fn destroy(&mut self, id: ShapeId) -> Option<Shape> {
        self.shapes.remove(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Records the whole layer into `list`, replacing its previous content.
    pub fn draw(&self, list: &mut DrawList) {
        list.clear();
        for (&id, shape) in &self.shapes {
            let z = shape
                .attrs
                .number("zIndex")
                .map(|z| ZIndex(z as i32))
                .unwrap_or_default();
            list.push(z, DrawCmd::new(id, shape.kind, shape.attrs.clone()));
        }
    }
}
