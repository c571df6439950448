//! Controllers layer - the state machines behind the page.
//!
//! Controllers own transitions, not visuals: they decide what changed and
//! the dispatch loop in `state.rs` applies the result to the widgets.
//! - Theme resolution and persistence policy
//! - Navigation (menu, active section)
//! - Scroll effects (reveals, stat counters, smooth anchor scroll)
//! - Contact form (validation states, submission lifecycle)
//! - Notifications
//! - Preview modals

pub mod form;
pub mod modal;
pub mod navigation;
pub mod notification;
pub mod scroll_effects;
pub mod theme;
