use std::collections::{HashMap, VecDeque};

use super::{CapturedEvent, EventKind};

/// Pending events per drawable identifier and event kind.
///
/// Events of one kind are handed out in arrival order.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: HashMap<String, HashMap<EventKind, VecDeque<CapturedEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, identifier: &str, event: CapturedEvent) {
        self.pending
            .entry(identifier.to_string())
            .or_default()
            .entry(event.kind)
            .or_default()
            .push_back(event);
    }

    /// Removes and returns the oldest pending event of `kind` for `identifier`.
    pub fn pop(&mut self, identifier: &str, kind: EventKind) -> Option<CapturedEvent> {
        let by_kind = self.pending.get_mut(identifier)?;
        let event = by_kind.get_mut(&kind)?.pop_front();

        if by_kind.get(&kind).is_some_and(VecDeque::is_empty) {
            by_kind.remove(&kind);
        }
        if by_kind.is_empty() {
            self.pending.remove(identifier);
        }
        event
    }

    /// Moves everything pending for `from` to `to`.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(events) = self.pending.remove(from) {
            self.pending.insert(to.to_string(), events);
        }
    }

    /// Drops everything pending for `identifier`.
    pub fn forget(&mut self, identifier: &str) {
        self.pending.remove(identifier);
    }

    pub fn pending_for(&self, identifier: &str) -> usize {
        self.pending
            .get(identifier)
            .map(|by_kind| by_kind.values().map(VecDeque::len).sum())
            .unwrap_or(0)
    }
}
