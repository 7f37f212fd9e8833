//! Scripted walkthrough of the outline controller
//!
//! Builds a toolbar of focusable buttons, then replays the gestures a
//! host would deliver: a pointer click (outline suppressed), keyboard
//! navigation (outline restored), a click on empty space, and a
//! rescope to a second pane. Run with `RUST_LOG=trace` to watch the
//! controller's decisions.

use fv_a11y::OutlineController;
use fv_dom::{ElementId, ElementTree, ScopeEvent};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = ElementTree::new();
    let toolbar = tree.create_element("div");
    let save = tree.create_element("button");
    let open = tree.create_element("button");
    tree.append_child(tree.root(), toolbar).expect("attach toolbar");
    tree.append_child(toolbar, save).expect("attach save");
    tree.append_child(toolbar, open).expect("attach open");

    let pane = tree.create_element("div");
    let search = tree.create_element("input");
    tree.append_child(tree.root(), pane).expect("attach pane");
    tree.append_child(pane, search).expect("attach search");

    let buttons = [("save", save), ("open", open), ("search", search)];
    let mut controller = OutlineController::new(&mut tree, toolbar);

    tracing::info!("pointer click on save");
    controller.handle_event(&mut tree, ScopeEvent::mouse_down(save));
    tree.focus(save).expect("focus save");
    controller.handle_event(&mut tree, ScopeEvent::focus_in(save));
    controller.handle_event(&mut tree, ScopeEvent::mouse_up(save));
    describe(&tree, "after pointer click on save", &buttons);

    tracing::info!("tab to open");
    tree.focus(open).expect("focus open");
    controller.handle_event(&mut tree, ScopeEvent::focus_in(open));
    describe(&tree, "after keyboard focus on open", &buttons);

    tracing::info!("pointer click back on save");
    controller.handle_event(&mut tree, ScopeEvent::mouse_down(save));
    tree.focus(save).expect("focus save");
    controller.handle_event(&mut tree, ScopeEvent::focus_in(save));
    controller.handle_event(&mut tree, ScopeEvent::mouse_up(save));
    describe(&tree, "after pointer click on save", &buttons);

    tracing::info!("click on empty toolbar space");
    controller.handle_event(&mut tree, ScopeEvent::mouse_down(toolbar));
    tree.blur();
    controller.handle_event(&mut tree, ScopeEvent::mouse_up(toolbar));
    describe(&tree, "after click on empty space", &buttons);

    tracing::info!("rescope to the search pane");
    controller.update_focus_scope(&mut tree, pane);
    controller.handle_event(&mut tree, ScopeEvent::mouse_down(search));
    tree.focus(search).expect("focus search");
    controller.handle_event(&mut tree, ScopeEvent::focus_in(search));
    controller.handle_event(&mut tree, ScopeEvent::mouse_up(search));
    describe(&tree, "after pointer click on search", &buttons);

    controller.stop(&mut tree);
    describe(&tree, "after stop", &buttons);
}

fn describe(tree: &ElementTree, label: &str, elements: &[(&str, ElementId)]) {
    println!("-- {label}");
    for (name, id) in elements {
        let suppressed = tree
            .get_attribute(*id, OutlineController::MARKER_ATTRIBUTE)
            .is_some();
        let style = tree
            .style(*id)
            .map(|s| s.to_css_string())
            .unwrap_or_else(|| "<no style attribute>".to_string());
        println!("   {name:<7} suppressed={suppressed:<5} style={style}");
    }
}
