//! fv-a11y - Focus-visible behavior
//!
//! Decides whether the focused element inside a scoped subtree should
//! show its focus outline: keyboard and programmatic focus keep the
//! native indicator, pointer-caused focus suppresses it.
//!
//! Features:
//! - Pointer-caused focus detection
//! - Scoped outline suppression behind a queryable marker attribute
//! - Idempotent start/stop/rescope lifecycle

mod outline;

pub use outline::OutlineController;
