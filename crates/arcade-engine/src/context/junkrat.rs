use std::collections::HashMap;

use log::trace;

use crate::coords::SurfaceSize;
use crate::input::{CapturedEvent, EventKind, EventQueue, SurfaceEvent};
use crate::scene::{Attrs, Layer, ShapeId, ShapeKind};

use super::{normalize, ContextError, ContextProvider, ContextRevision};

/// The `junkrat` context revision.
///
/// Games address drawables by free-form string identifiers. Configs are unit
/// fractions, normalised to surface pixels on every `create`/`update`.
#[derive(Debug, Default)]
pub struct JunkratProvider {
    shape_dict: HashMap<String, ShapeId>,
    owners: HashMap<ShapeId, String>,
    events: EventQueue,
}

impl JunkratProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier currently mapped to `shape`.
    pub fn identifier_of(&self, shape: ShapeId) -> Option<&str> {
        self.owners.get(&shape).map(String::as_str)
    }

    fn lookup(&self, identifier: &str) -> Result<ShapeId, ContextError> {
        self.shape_dict
            .get(identifier)
            .copied()
            .ok_or_else(|| ContextError::UnknownIdentifier(identifier.to_string()))
    }
}

impl ContextProvider for JunkratProvider {
    fn revision(&self) -> ContextRevision {
        ContextRevision::Junkrat
    }

    fn create(
        &mut self,
        layer: &mut Layer,
        size: SurfaceSize,
        identifier: &str,
        kind: ShapeKind,
        config: Attrs,
    ) -> Result<ShapeId, ContextError> {
        if self.shape_dict.contains_key(identifier) {
            return Err(ContextError::DuplicateIdentifier(identifier.to_string()));
        }

        let normalized = normalize(config, size)?;
        if normalized.rename.is_some() {
            return Err(ContextError::RenameInCreate(identifier.to_string()));
        }

        let id = layer.add(kind, normalized.attrs);
        self.shape_dict.insert(identifier.to_string(), id);
        self.owners.insert(id, identifier.to_string());

        trace!("create {} {identifier:?} -> {id}", kind.name());
        Ok(id)
    }

    fn update(
        &mut self,
        layer: &mut Layer,
        size: SurfaceSize,
        identifier: &str,
        config: Attrs,
    ) -> Result<(), ContextError> {
        let id = self.lookup(identifier)?;
        let normalized = normalize(config, size)?;

        // Validate the rename before touching anything.
        let rename = normalized.rename.filter(|to| to != identifier);
        if let Some(to) = &rename {
            if self.shape_dict.contains_key(to) {
                return Err(ContextError::RenameCollision {
                    from: identifier.to_string(),
                    to: to.clone(),
                });
            }
        }

        if !layer.set_attrs(id, normalized.attrs) {
            return Err(ContextError::UnknownIdentifier(identifier.to_string()));
        }

        if let Some(to) = rename {
            self.shape_dict.remove(identifier);
            self.shape_dict.insert(to.clone(), id);
            self.events.rename(identifier, &to);
            trace!("rename {identifier:?} -> {to:?} ({id})");
            self.owners.insert(id, to);
        }

        Ok(())
    }

    fn remove(&mut self, layer: &mut Layer, identifier: &str) -> Result<(), ContextError> {
        let id = self.lookup(identifier)?;

        layer
            .destroy(id)
            .ok_or_else(|| ContextError::UnknownIdentifier(identifier.to_string()))?;

        self.shape_dict.remove(identifier);
        self.owners.remove(&id);
        self.events.forget(identifier);

        trace!("remove {identifier:?} ({id})");
        Ok(())
    }

    fn dequeue_event(&mut self, identifier: &str, kind: EventKind) -> Option<CapturedEvent> {
        self.events.pop(identifier, kind)
    }

    fn capture(&mut self, layer: &Layer, event: SurfaceEvent) -> bool {
        let Some(identifier) = self.owners.get(&event.target) else {
            return false;
        };
        let listening = layer
            .get(event.target)
            .is_some_and(|shape| shape.listens_to(event.event.kind.name()));
        if !listening {
            return false;
        }

        self.events.push(identifier, event.event);
        true
    }

    fn resolve(&self, identifier: &str) -> Option<ShapeId> {
        self.shape_dict.get(identifier).copied()
    }

    fn len(&self) -> usize {
        self.shape_dict.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: SurfaceSize = SurfaceSize::new(100, 50);

    fn setup() -> (JunkratProvider, Layer) {
        (JunkratProvider::new(), Layer::new())
    }

    fn text(p: &mut JunkratProvider, layer: &mut Layer, id: &str) -> ShapeId {
        p.create(layer, SIZE, id, ShapeKind::Text, Attrs::new().with("text", id))
            .unwrap()
    }

    // ── create ────────────────────────────────────────────────────────────

    #[test]
    fn create_maps_identifier_and_normalizes() {
        let (mut p, mut layer) = setup();
        let id = p
            .create(&mut layer, SIZE, "a", ShapeKind::Rect, Attrs::new().with("x", 0.5).with("y", 0.5))
            .unwrap();
        assert_eq!(p.resolve("a"), Some(id));
        let shape = layer.get(id).unwrap();
        assert_eq!(shape.attrs.number("x"), Some(50.0));
        assert_eq!(shape.attrs.number("y"), Some(25.0));
    }

    #[test]
    fn create_duplicate_is_refused() {
        let (mut p, mut layer) = setup();
        text(&mut p, &mut layer, "a");
        let err = p
            .create(&mut layer, SIZE, "a", ShapeKind::Text, Attrs::new())
            .unwrap_err();
        assert_eq!(err, ContextError::DuplicateIdentifier("a".into()));
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn create_with_rename_is_refused() {
        let (mut p, mut layer) = setup();
        let err = p
            .create(&mut layer, SIZE, "a", ShapeKind::Text, Attrs::new().with("identifier", "b"))
            .unwrap_err();
        assert_eq!(err, ContextError::RenameInCreate("a".into()));
        assert!(layer.is_empty());
        assert!(p.is_empty());
    }

    // ── update / rename ───────────────────────────────────────────────────

    #[test]
    fn update_merges_attrs() {
        let (mut p, mut layer) = setup();
        let id = text(&mut p, &mut layer, "a");
        p.update(&mut layer, SIZE, "a", Attrs::new().with("text", "changed").with("x", 1.0))
            .unwrap();
        let shape = layer.get(id).unwrap();
        assert_eq!(shape.attrs.text("text"), Some("changed"));
        assert_eq!(shape.attrs.number("x"), Some(100.0));
    }

    #[test]
    fn update_unknown_identifier_fails() {
        let (mut p, mut layer) = setup();
        let err = p.update(&mut layer, SIZE, "ghost", Attrs::new()).unwrap_err();
        assert_eq!(err, ContextError::UnknownIdentifier("ghost".into()));
    }

    #[test]
    fn rename_keeps_identity_and_drops_old_key() {
        let (mut p, mut layer) = setup();
        let id = text(&mut p, &mut layer, "old");
        p.update(&mut layer, SIZE, "old", Attrs::new().with("identifier", "new"))
            .unwrap();
        assert_eq!(p.resolve("old"), None);
        assert_eq!(p.resolve("new"), Some(id));
        assert_eq!(p.identifier_of(id), Some("new"));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn rename_onto_live_key_changes_nothing() {
        let (mut p, mut layer) = setup();
        let a = text(&mut p, &mut layer, "a");
        let b = text(&mut p, &mut layer, "b");
        let err = p
            .update(&mut layer, SIZE, "a", Attrs::new().with("identifier", "b").with("text", "x"))
            .unwrap_err();
        assert!(matches!(err, ContextError::RenameCollision { .. }));
        assert_eq!(p.resolve("a"), Some(a));
        assert_eq!(p.resolve("b"), Some(b));
        // attrs were not applied either
        assert_eq!(layer.get(a).unwrap().attrs.text("text"), Some("a"));
    }

    #[test]
    fn rename_to_itself_is_plain_update() {
        let (mut p, mut layer) = setup();
        let id = text(&mut p, &mut layer, "a");
        p.update(&mut layer, SIZE, "a", Attrs::new().with("identifier", "a")).unwrap();
        assert_eq!(p.resolve("a"), Some(id));
    }

    // ── remove ────────────────────────────────────────────────────────────

    #[test]
    fn remove_destroys_drawable_and_mapping() {
        let (mut p, mut layer) = setup();
        let id = text(&mut p, &mut layer, "a");
        p.remove(&mut layer, "a").unwrap();
        assert!(!layer.contains(id));
        assert_eq!(p.resolve("a"), None);
        assert_eq!(p.identifier_of(id), None);
        assert_eq!(
            p.remove(&mut layer, "a").unwrap_err(),
            ContextError::UnknownIdentifier("a".into())
        );
    }

    // ── events ────────────────────────────────────────────────────────────

    fn listening(p: &mut JunkratProvider, layer: &mut Layer, id: &str) -> ShapeId {
        p.create(
            layer,
            SIZE,
            id,
            ShapeKind::Rect,
            Attrs::new().with("eventList", vec!["mousedown"]),
        )
        .unwrap()
    }

    #[test]
    fn capture_respects_event_list() {
        let (mut p, mut layer) = setup();
        let id = listening(&mut p, &mut layer, "btn");

        let down = SurfaceEvent { target: id, event: CapturedEvent::new(EventKind::MouseDown) };
        let up = SurfaceEvent { target: id, event: CapturedEvent::new(EventKind::MouseUp) };
        assert!(p.capture(&layer, down));
        assert!(!p.capture(&layer, up));

        assert!(p.dequeue_event("btn", EventKind::MouseDown).is_some());
        assert!(p.dequeue_event("btn", EventKind::MouseDown).is_none());
        assert!(p.dequeue_event("btn", EventKind::MouseUp).is_none());
    }

    #[test]
    fn capture_for_unmapped_shape_is_dropped() {
        let (mut p, layer) = setup();
        let ev = SurfaceEvent { target: ShapeId(9), event: CapturedEvent::new(EventKind::MouseDown) };
        assert!(!p.capture(&layer, ev));
    }

    #[test]
    fn pending_events_follow_rename_and_die_with_remove() {
        let (mut p, mut layer) = setup();
        let id = listening(&mut p, &mut layer, "old");
        p.capture(&layer, SurfaceEvent { target: id, event: CapturedEvent::new(EventKind::MouseDown) });

        p.update(&mut layer, SIZE, "old", Attrs::new().with("identifier", "new")).unwrap();
        assert!(p.dequeue_event("old", EventKind::MouseDown).is_none());
        p.capture(&layer, SurfaceEvent { target: id, event: CapturedEvent::new(EventKind::MouseDown) });
        assert!(p.dequeue_event("new", EventKind::MouseDown).is_some());

        p.remove(&mut layer, "new").unwrap();
        assert!(p.dequeue_event("new", EventKind::MouseDown).is_none());
    }
}
