//! Scope Events
//!
//! The event kinds delivered within a scope and the listener
//! bookkeeping that records who observes them.

use crate::ElementId;

/// Event kinds a scope listener can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    TouchStart,
    MouseUp,
    TouchEnd,
    FocusIn,
}

/// Input or focus event delivered within a scope
///
/// For pointer events the target is the innermost element hit, or the
/// scope root itself for presses on empty space. For `FocusIn` it is
/// the newly focused element.
#[derive(Debug, Clone, Copy)]
pub struct ScopeEvent {
    pub kind: EventKind,
    pub target: ElementId,
}

impl ScopeEvent {
    /// Create a mouse press event
    pub fn mouse_down(target: ElementId) -> Self {
        Self { kind: EventKind::MouseDown, target }
    }

    /// Create a touch press event
    pub fn touch_start(target: ElementId) -> Self {
        Self { kind: EventKind::TouchStart, target }
    }

    /// Create a mouse release event
    pub fn mouse_up(target: ElementId) -> Self {
        Self { kind: EventKind::MouseUp, target }
    }

    /// Create a touch release event
    pub fn touch_end(target: ElementId) -> Self {
        Self { kind: EventKind::TouchEnd, target }
    }

    /// Create a focus-gained event
    pub fn focus_in(target: ElementId) -> Self {
        Self { kind: EventKind::FocusIn, target }
    }
}

/// Listener registration handle
///
/// The same handle passed to registration must be passed to removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Single listener registration
#[derive(Debug, Clone)]
struct ListenerRecord {
    id: ListenerId,
    root: ElementId,
    kind: EventKind,
}

/// Listener registrations for one tree
#[derive(Debug, Default)]
pub(crate) struct ListenerRegistry {
    records: Vec<ListenerRecord>,
    next_id: u64,
}

impl ListenerRegistry {
    /// Register a listener for `kind` scoped to `root`
    pub(crate) fn add(&mut self, root: ElementId, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.records.push(ListenerRecord { id, root, kind });
        id
    }

    /// Remove a registration; false if the handle is unknown
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(index);
        true
    }

    pub(crate) fn count(&self, root: ElementId, kind: EventKind) -> usize {
        self.records
            .iter()
            .filter(|r| r.root == root && r.kind == kind)
            .count()
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }
}
