//! Outline Visibility Controller
//!
//! Classifies focus changes inside one subtree as pointer-caused or
//! keyboard/programmatic, and suppresses or restores the native focus
//! outline accordingly.

use fv_dom::{ElementId, ElementScope, EventKind, ListenerId, ScopeEvent};

/// Focus-visible controller for one subtree
///
/// A press within the scope arms the controller; a focus change that
/// lands while armed gets its outline suppressed (marker attribute plus
/// inline `outline: none`). A focus change with no press in flight
/// clears any suppression, so keyboard navigation always shows the
/// native indicator. At most one element in the scope carries the
/// marker at any time, and every handler restores that invariant before
/// returning.
///
/// Construction subscribes immediately; `stop` detaches and clears all
/// suppression in scope. Several controllers can observe disjoint or
/// nested subtrees of the same tree without interfering.
#[derive(Debug)]
pub struct OutlineController {
    scope_root: ElementId,
    enabled: bool,
    pointer_down: bool,
    /// Presses currently in flight; the gesture ends when the last one
    /// releases (multi-touch, chorded mouse buttons).
    active_presses: u32,
    listeners: Vec<ListenerId>,
}

impl OutlineController {
    /// Attribute marking the element whose outline is suppressed.
    ///
    /// Presence is the contract; the value carries no meaning.
    /// Stylesheets may key off it to substitute their own focus
    /// styling.
    pub const MARKER_ATTRIBUTE: &'static str = "data-a11y-outline";

    /// Event kinds the controller subscribes to on its scope root
    pub const OBSERVED_KINDS: [EventKind; 5] = [
        EventKind::MouseDown,
        EventKind::TouchStart,
        EventKind::MouseUp,
        EventKind::TouchEnd,
        EventKind::FocusIn,
    ];

    const MARKER_VALUE: &'static str = "none";
    const OUTLINE_PROPERTY: &'static str = "outline";
    const SUPPRESSED_OUTLINE: &'static str = "none";

    /// Create a controller over the whole document and start it
    pub fn for_document(scope: &mut impl ElementScope) -> Self {
        let root = scope.document_root();
        Self::new(scope, root)
    }

    /// Create a controller over `scope_root` and start it
    pub fn new(scope: &mut impl ElementScope, scope_root: ElementId) -> Self {
        let mut controller = Self {
            scope_root,
            enabled: false,
            pointer_down: false,
            active_presses: 0,
            listeners: Vec::with_capacity(Self::OBSERVED_KINDS.len()),
        };
        controller.start(scope);
        controller
    }

    /// Root of the observed subtree
    pub fn scope_root(&self) -> ElementId {
        self.scope_root
    }

    /// Whether the controller is currently subscribed
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begin observing interactions; idempotent
    ///
    /// Does not inspect the current focus state: only future events
    /// change anything.
    pub fn start(&mut self, scope: &mut impl ElementScope) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.subscribe(scope);
        tracing::debug!(root = ?self.scope_root, "outline controller started");
    }

    /// Stop observing and clear all suppression in scope; idempotent
    pub fn stop(&mut self, scope: &mut impl ElementScope) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        self.unsubscribe(scope);
        self.reset_outline(scope);
        // Cancellation leaves no pending gesture behind
        self.pointer_down = false;
        self.active_presses = 0;
        tracing::debug!(root = ?self.scope_root, "outline controller stopped");
    }

    /// Re-target the controller to a different scope root
    ///
    /// While enabled this detaches from the old root, clears any
    /// suppression left under it, then resubscribes on the new root.
    /// While disabled only the stored root changes.
    pub fn update_focus_scope(&mut self, scope: &mut impl ElementScope, new_root: ElementId) {
        if self.enabled {
            self.unsubscribe(scope);
            self.reset_outline(scope);
        }
        self.scope_root = new_root;
        if self.enabled {
            self.subscribe(scope);
        }
        tracing::debug!(root = ?self.scope_root, "outline controller rescoped");
    }

    /// Deliver one event observed within the host tree
    ///
    /// Events are ignored while stopped, as are events whose target
    /// lies outside the scope root.
    pub fn handle_event(&mut self, scope: &mut impl ElementScope, event: ScopeEvent) {
        if !self.enabled || !scope.contains(self.scope_root, event.target) {
            return;
        }
        match event.kind {
            EventKind::MouseDown | EventKind::TouchStart => self.on_press(),
            EventKind::MouseUp | EventKind::TouchEnd => self.on_release(scope),
            EventKind::FocusIn => self.on_focus_in(scope),
        }
    }

    fn on_press(&mut self) {
        self.active_presses += 1;
        self.pointer_down = true;
    }

    fn on_release(&mut self, scope: &mut impl ElementScope) {
        self.active_presses = self.active_presses.saturating_sub(1);
        if self.active_presses > 0 {
            // Another pointer still holds the gesture open
            return;
        }
        self.pointer_down = false;
        if let Some(focused) = scope.focused_within(self.scope_root) {
            if scope.has_attribute(focused, Self::MARKER_ATTRIBUTE) {
                // Suppression already matches the focused element; a
                // release must not flicker it away
                return;
            }
        }
        self.reset_outline(scope);
    }

    fn on_focus_in(&mut self, scope: &mut impl ElementScope) {
        if self.pointer_down {
            self.suppress_outline(scope);
        } else {
            self.reset_outline(scope);
        }
    }

    /// Mark the focused element and hide its outline
    fn suppress_outline(&mut self, scope: &mut impl ElementScope) {
        // Clear any stale marker before adding the new one
        self.reset_outline(scope);
        let Some(focused) = scope.focused_within(self.scope_root) else {
            return;
        };
        scope.set_attribute(focused, Self::MARKER_ATTRIBUTE, Self::MARKER_VALUE);
        scope.set_style_property(focused, Self::OUTLINE_PROPERTY, Self::SUPPRESSED_OUTLINE);
        tracing::trace!(element = ?focused, "outline suppressed");
    }

    /// Clear marker and suppression style from every marked element in
    /// scope
    ///
    /// Tolerates more than one marked element even though handlers never
    /// leave more than one behind.
    fn reset_outline(&self, scope: &mut impl ElementScope) {
        for el in scope.descendants_with_attribute(self.scope_root, Self::MARKER_ATTRIBUTE) {
            scope.remove_attribute(el, Self::MARKER_ATTRIBUTE);
            scope.remove_style_property(el, Self::OUTLINE_PROPERTY);
            if scope.style_property_count(el) == 0 {
                // No declarations left: drop the attribute rather than
                // keep an empty one
                scope.remove_style(el);
            }
            tracing::trace!(element = ?el, "outline restored");
        }
    }

    fn subscribe(&mut self, scope: &mut impl ElementScope) {
        debug_assert!(self.listeners.is_empty());
        for kind in Self::OBSERVED_KINDS {
            self.listeners.push(scope.add_listener(self.scope_root, kind));
        }
    }

    fn unsubscribe(&mut self, scope: &mut impl ElementScope) {
        for id in self.listeners.drain(..) {
            scope.remove_listener(id);
        }
    }
}
