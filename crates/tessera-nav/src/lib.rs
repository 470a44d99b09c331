//! Derived navigation state for the Tessera console.
//!
//! Everything here is a pure projection of (route table, current path):
//! which sidebar keys are highlighted and expanded, what the breadcrumb
//! chain reads, and whether the layout chrome is suppressed. The single
//! consumer-facing surface is [`Navigator`]; the underlying projections are
//! exported for callers that manage menu state themselves (the interactive
//! accordion in particular).

pub mod breadcrumb;
pub mod facade;
pub mod menu;

pub use breadcrumb::{BreadcrumbEntry, CrumbLabel, HOME_KEY, breadcrumb_chain};
pub use facade::{NavigationState, Navigator};
pub use menu::{
	MenuItem, MenuSelection, SelectionPolicy, apply_open_change, menu_items, seed_open_keys,
	selected_keys,
};
