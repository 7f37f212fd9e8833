//! fv-dom - Scoped element tree
//!
//! The host surface an outline controller observes and mutates.
//!
//! Features:
//! - Arena-backed element tree with attributes and inline style
//! - Document focus tracking
//! - Listener bookkeeping for the observed event kinds
//! - `ElementScope`, the trait seam controllers consume

mod attributes;
mod events;
mod scope;
mod style;
mod tree;

pub use attributes::{Attribute, AttributeMap};
pub use events::{EventKind, ListenerId, ScopeEvent};
pub use scope::ElementScope;
pub use style::{Declaration, InlineStyle};
pub use tree::{Element, ElementTree};

/// Element identifier (index into the tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) u32);

/// Tree mutation error
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("unknown element {0:?}")]
    UnknownElement(ElementId),

    #[error("element {0:?} already has a parent")]
    AlreadyAttached(ElementId),

    #[error("appending {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: ElementId, child: ElementId },

    #[error("element {0:?} is not attached to the tree")]
    DetachedElement(ElementId),
}
