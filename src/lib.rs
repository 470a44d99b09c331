//! Navigation core for the Tessera low-code platform console.
//!
//! The console renders project management, data-source and model browsing,
//! API authoring, flow management, storage and member administration over a
//! remote backend; everything here is the client-side shell's navigation
//! model. This crate is a unified interface over the member crates:
//!
//! - `tessera-routes`: route table and path template matching
//! - `tessera-nav`: menu, breadcrumb and layout projection
//! - `tessera-state`: application context and persisted preferences
//! - `tessera-i18n`: message catalog and translation interface
//!
//! plus the console's own route declarations and bundled catalogs.

pub use tessera_i18n as i18n;
pub use tessera_nav as nav;
pub use tessera_routes as routing;
pub use tessera_state as state;

pub mod messages;
pub mod routes;

/// Re-export of the types most embedders touch.
pub mod prelude {
	pub use crate::messages::console_catalog;
	pub use crate::routes::{platform_routes, project_routes};
	pub use tessera_i18n::{MessageCatalog, Translator};
	pub use tessera_nav::{
		BreadcrumbEntry, MenuSelection, NavigationState, Navigator, SelectionPolicy,
		apply_open_change,
	};
	pub use tessera_routes::{IconRef, RouteNode, RouteParams, RouteTable};
	pub use tessera_state::{AppContext, JsonFileStore, Lang, MemoryStore, Project, StateStore};
}
