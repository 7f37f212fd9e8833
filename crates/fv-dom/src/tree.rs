//! Element Tree (arena-based)
//!
//! Parent/child topology, attributes, inline style, document focus and
//! listener bookkeeping for one tree.

use crate::events::ListenerRegistry;
use crate::{AttributeMap, DomError, ElementId, EventKind, InlineStyle, ListenerId};

const NO_CHILDREN: &[ElementId] = &[];

/// Single element node
#[derive(Debug)]
pub struct Element {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: AttributeMap,
    /// `None` means the element has no `style` attribute at all; the
    /// distinction from an empty style is observable.
    style: Option<InlineStyle>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            parent: None,
            children: Vec::new(),
            attributes: AttributeMap::new(),
            style: None,
        }
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute collection
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Inline style, if the element carries a `style` attribute
    pub fn style(&self) -> Option<&InlineStyle> {
        self.style.as_ref()
    }
}

/// Arena-based element tree
///
/// Nodes are addressed by `ElementId` (an index into the arena), never
/// by reference. The tree also tracks which element currently holds
/// document focus and which listeners are registered against which
/// subtree roots.
#[derive(Debug)]
pub struct ElementTree {
    nodes: Vec<Element>,
    focused: Option<ElementId>,
    listeners: ListenerRegistry,
}

impl ElementTree {
    /// Create a tree holding only the root element
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("root")],
            focused: None,
            listeners: ListenerRegistry::default(),
        }
    }

    /// Root element ID
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Number of elements in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get an element by ID
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0 as usize)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(Element::new(tag));
        id
    }

    /// Append a detached element as the last child of `parent`
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        if self.get(parent).is_none() {
            return Err(DomError::UnknownElement(parent));
        }
        let Some(node) = self.get(child) else {
            return Err(DomError::UnknownElement(child));
        };
        if child == self.root() || node.parent.is_some() {
            return Err(DomError::AlreadyAttached(child));
        }
        if self.contains(child, parent) {
            return Err(DomError::CycleDetected { parent, child });
        }

        self.nodes[child.0 as usize].parent = Some(parent);
        self.nodes[parent.0 as usize].children.push(child);
        Ok(())
    }

    /// Parent of an element
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.parent)
    }

    /// Children of an element, in document order
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map_or(NO_CHILDREN, |e| e.children.as_slice())
    }

    /// Check whether `el` is `root` or one of its descendants
    pub fn contains(&self, root: ElementId, el: ElementId) -> bool {
        if self.get(root).is_none() {
            return false;
        }
        let mut cursor = Some(el);
        while let Some(id) = cursor {
            if id == root {
                return true;
            }
            cursor = self.get(id).and_then(|e| e.parent);
        }
        false
    }

    /// Depth-first walk of `root` and everything under it
    pub fn descendants(&self, root: ElementId) -> Descendants<'_> {
        let stack = if self.get(root).is_some() {
            vec![root]
        } else {
            Vec::new()
        };
        Descendants { tree: self, stack }
    }

    /// Elements under `root` (root included) carrying `name`
    pub fn descendants_with_attribute(&self, root: ElementId, name: &str) -> Vec<ElementId> {
        self.descendants(root)
            .filter(|&id| self.has_attribute(id, name))
            .collect()
    }

    // === Focus ===

    /// Move document focus to an attached element
    pub fn focus(&mut self, el: ElementId) -> Result<(), DomError> {
        if self.get(el).is_none() {
            return Err(DomError::UnknownElement(el));
        }
        if !self.contains(self.root(), el) {
            return Err(DomError::DetachedElement(el));
        }
        self.focused = Some(el);
        tracing::trace!(element = ?el, "focus moved");
        Ok(())
    }

    /// Clear document focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Element currently holding document focus
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Focused element, only if it lies under `root`
    pub fn focused_within(&self, root: ElementId) -> Option<ElementId> {
        self.focused.filter(|&el| self.contains(root, el))
    }

    // === Attributes ===

    /// Set an attribute
    pub fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        if let Some(node) = self.get_mut(el) {
            node.attributes.set(name, value);
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, el: ElementId, name: &str) -> Option<&str> {
        self.get(el)?.attributes.get(name)
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, el: ElementId, name: &str) {
        if let Some(node) = self.get_mut(el) {
            node.attributes.remove(name);
        }
    }

    /// Check if an attribute exists
    pub fn has_attribute(&self, el: ElementId, name: &str) -> bool {
        self.get(el).is_some_and(|node| node.attributes.has(name))
    }

    // === Inline style ===

    /// Set an inline style property, creating the `style` attribute on
    /// first use
    pub fn set_style_property(&mut self, el: ElementId, property: &str, value: &str) {
        if let Some(node) = self.get_mut(el) {
            node.style
                .get_or_insert_with(InlineStyle::new)
                .set_property(property, value);
        }
    }

    /// Remove an inline style property
    ///
    /// The `style` attribute stays in place even when its last
    /// declaration goes; dropping the empty attribute is the caller's
    /// decision, via [`remove_style`](Self::remove_style).
    pub fn remove_style_property(&mut self, el: ElementId, property: &str) {
        if let Some(style) = self.get_mut(el).and_then(|node| node.style.as_mut()) {
            style.remove_property(property);
        }
    }

    /// Number of inline declarations (0 when no `style` attribute)
    pub fn style_property_count(&self, el: ElementId) -> usize {
        self.get(el)
            .and_then(|node| node.style.as_ref())
            .map_or(0, InlineStyle::len)
    }

    /// Check if the element carries a `style` attribute, even an empty one
    pub fn has_style(&self, el: ElementId) -> bool {
        self.get(el).is_some_and(|node| node.style.is_some())
    }

    /// Inline style of an element
    pub fn style(&self, el: ElementId) -> Option<&InlineStyle> {
        self.get(el)?.style()
    }

    /// Drop the whole `style` attribute
    pub fn remove_style(&mut self, el: ElementId) {
        if let Some(node) = self.get_mut(el) {
            node.style = None;
        }
    }

    // === Listeners ===

    /// Register a listener for `kind` scoped to `root`
    pub fn add_listener(&mut self, root: ElementId, kind: EventKind) -> ListenerId {
        self.listeners.add(root, kind)
    }

    /// Remove a listener registration
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of listeners registered for `kind` on `root`
    pub fn listener_count(&self, root: ElementId, kind: EventKind) -> usize {
        self.listeners.count(root, kind)
    }

    /// Check if a registration is still live
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first element iterator
pub struct Descendants<'a> {
    tree: &'a ElementTree,
    stack: Vec<ElementId>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> (ElementTree, ElementId, ElementId, ElementId) {
        let mut tree = ElementTree::new();
        let panel = tree.create_element("div");
        let a = tree.create_element("button");
        let b = tree.create_element("button");
        tree.append_child(tree.root(), panel).unwrap();
        tree.append_child(panel, a).unwrap();
        tree.append_child(panel, b).unwrap();
        (tree, panel, a, b)
    }

    #[test]
    fn test_build_and_walk() {
        let (tree, panel, a, b) = small_tree();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get(a).unwrap().tag(), "button");
        assert_eq!(tree.parent(a), Some(panel));
        assert_eq!(tree.children(panel), &[a, b]);

        assert!(tree.contains(tree.root(), b));
        assert!(tree.contains(panel, panel));
        assert!(!tree.contains(a, b));

        let walk: Vec<_> = tree.descendants(tree.root()).collect();
        assert_eq!(walk, vec![tree.root(), panel, a, b]);
    }

    #[test]
    fn test_append_rejects_bad_topology() {
        let (mut tree, panel, a, _) = small_tree();
        let ghost = ElementId(99);

        assert_eq!(
            tree.append_child(panel, ghost),
            Err(DomError::UnknownElement(ghost))
        );
        assert_eq!(
            tree.append_child(panel, a),
            Err(DomError::AlreadyAttached(a))
        );

        let outer = tree.create_element("div");
        let root = tree.root();
        assert_eq!(
            tree.append_child(outer, root),
            Err(DomError::AlreadyAttached(root))
        );
    }

    #[test]
    fn test_append_rejects_cycle() {
        let mut tree = ElementTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");

        // b under a while both are detached, then a under b
        tree.append_child(a, b).unwrap();
        assert_eq!(
            tree.append_child(b, a),
            Err(DomError::CycleDetected { parent: b, child: a })
        );
    }

    #[test]
    fn test_focus_tracking() {
        let (mut tree, panel, a, _) = small_tree();

        assert_eq!(tree.focused(), None);
        tree.focus(a).unwrap();
        assert_eq!(tree.focused(), Some(a));
        assert_eq!(tree.focused_within(panel), Some(a));

        let other = tree.create_element("div");
        let sibling = tree.create_element("button");
        tree.append_child(tree.root(), other).unwrap();
        tree.append_child(other, sibling).unwrap();
        tree.focus(sibling).unwrap();
        assert_eq!(tree.focused_within(panel), None);

        tree.blur();
        assert_eq!(tree.focused(), None);
    }

    #[test]
    fn test_focus_requires_attached_element() {
        let mut tree = ElementTree::new();
        let loose = tree.create_element("button");

        assert_eq!(tree.focus(loose), Err(DomError::DetachedElement(loose)));
        assert_eq!(
            tree.focus(ElementId(42)),
            Err(DomError::UnknownElement(ElementId(42)))
        );
    }

    #[test]
    fn test_style_surface() {
        let (mut tree, _, a, _) = small_tree();

        assert!(!tree.has_style(a));
        tree.set_style_property(a, "outline", "none");
        assert!(tree.has_style(a));
        assert_eq!(tree.style_property_count(a), 1);
        assert_eq!(tree.style(a).unwrap().get("outline"), Some("none"));

        // Removing the last declaration leaves an empty attribute behind
        tree.remove_style_property(a, "outline");
        assert!(tree.has_style(a));
        assert_eq!(tree.style_property_count(a), 0);

        tree.remove_style(a);
        assert!(!tree.has_style(a));
    }

    #[test]
    fn test_attribute_query() {
        let (mut tree, panel, a, b) = small_tree();

        tree.set_attribute(a, "data-active", "1");
        tree.set_attribute(b, "data-active", "1");
        assert_eq!(
            tree.descendants_with_attribute(panel, "data-active"),
            vec![a, b]
        );

        tree.remove_attribute(a, "data-active");
        assert!(!tree.has_attribute(a, "data-active"));
        assert_eq!(
            tree.descendants_with_attribute(panel, "data-active"),
            vec![b]
        );

        let names: Vec<_> = tree
            .get(b)
            .unwrap()
            .attributes()
            .iter()
            .map(|attr| attr.name.as_str())
            .collect();
        assert_eq!(names, vec!["data-active"]);
    }

    #[test]
    fn test_listener_bookkeeping() {
        let (mut tree, panel, _, _) = small_tree();

        let id = tree.add_listener(panel, EventKind::FocusIn);
        assert!(tree.has_listener(id));
        assert_eq!(tree.listener_count(panel, EventKind::FocusIn), 1);
        assert_eq!(tree.listener_count(panel, EventKind::MouseDown), 0);

        assert!(tree.remove_listener(id));
        assert!(!tree.has_listener(id));
        assert!(!tree.remove_listener(id));
    }
}
