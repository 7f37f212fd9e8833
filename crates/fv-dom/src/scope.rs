//! Scope Capability Surface
//!
//! What a controller needs from its host document: root-scoped queries,
//! attribute and inline-style mutation, listener registration. All
//! methods are total; unknown ids behave as absent elements (queries
//! come back empty, mutations do nothing).

use crate::{ElementId, ElementTree, EventKind, ListenerId};

/// Host surface consumed by controllers observing one subtree
pub trait ElementScope {
    /// Top-level element of the document
    fn document_root(&self) -> ElementId;

    /// Check whether `el` is `root` or one of its descendants
    fn contains(&self, root: ElementId, el: ElementId) -> bool;

    /// Focused element, only if it lies under `root`
    fn focused_within(&self, root: ElementId) -> Option<ElementId>;

    /// Elements under `root` (root included) carrying the attribute
    fn descendants_with_attribute(&self, root: ElementId, name: &str) -> Vec<ElementId>;

    /// Check if an attribute exists
    fn has_attribute(&self, el: ElementId, name: &str) -> bool;

    /// Set an attribute
    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str);

    /// Remove an attribute
    fn remove_attribute(&mut self, el: ElementId, name: &str);

    /// Set an inline style property
    fn set_style_property(&mut self, el: ElementId, property: &str, value: &str);

    /// Remove an inline style property, leaving the `style` attribute
    /// in place
    fn remove_style_property(&mut self, el: ElementId, property: &str);

    /// Number of inline declarations (0 when no `style` attribute)
    fn style_property_count(&self, el: ElementId) -> usize;

    /// Drop the whole `style` attribute
    fn remove_style(&mut self, el: ElementId);

    /// Register a listener for `kind` scoped to `root`
    fn add_listener(&mut self, root: ElementId, kind: EventKind) -> ListenerId;

    /// Remove a listener registration
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

impl ElementScope for ElementTree {
    fn document_root(&self) -> ElementId {
        ElementTree::root(self)
    }

    fn contains(&self, root: ElementId, el: ElementId) -> bool {
        ElementTree::contains(self, root, el)
    }

    fn focused_within(&self, root: ElementId) -> Option<ElementId> {
        ElementTree::focused_within(self, root)
    }

    fn descendants_with_attribute(&self, root: ElementId, name: &str) -> Vec<ElementId> {
        ElementTree::descendants_with_attribute(self, root, name)
    }

    fn has_attribute(&self, el: ElementId, name: &str) -> bool {
        ElementTree::has_attribute(self, el, name)
    }

    fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        ElementTree::set_attribute(self, el, name, value);
    }

    fn remove_attribute(&mut self, el: ElementId, name: &str) {
        ElementTree::remove_attribute(self, el, name);
    }

    fn set_style_property(&mut self, el: ElementId, property: &str, value: &str) {
        ElementTree::set_style_property(self, el, property, value);
    }

    fn remove_style_property(&mut self, el: ElementId, property: &str) {
        ElementTree::remove_style_property(self, el, property);
    }

    fn style_property_count(&self, el: ElementId) -> usize {
        ElementTree::style_property_count(self, el)
    }

    fn remove_style(&mut self, el: ElementId) {
        ElementTree::remove_style(self, el);
    }

    fn add_listener(&mut self, root: ElementId, kind: EventKind) -> ListenerId {
        ElementTree::add_listener(self, root, kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        ElementTree::remove_listener(self, id)
    }
}
