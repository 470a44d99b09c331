//! The navigation facade consumed by layout, sidebar and breadcrumb code.

use tessera_i18n::Translator;
use tessera_routes::{ResolvedTable, RouteParams, RouteTable};

use crate::breadcrumb::{BreadcrumbEntry, breadcrumb_chain};
use crate::menu::{MenuItem, MenuSelection, SelectionPolicy, menu_items, seed_open_keys, selected_keys};

/// Everything the shell needs to render navigation for one location.
#[derive(Debug, Clone)]
pub struct NavigationState {
	pub selected_keys: Vec<String>,
	pub open_keys: Vec<String>,
	pub breadcrumb: Vec<BreadcrumbEntry>,
}

/// Pure query surface over a route table and one parameter assignment.
///
/// Holds no mutable state: every answer is a function of the table, the
/// parameters captured at construction, and the path passed to the query.
/// Rebuild the navigator when the parameters change (a different project,
/// typically).
#[derive(Debug)]
pub struct Navigator<'t> {
	table: &'t RouteTable,
	resolved: ResolvedTable<'t>,
	params: RouteParams,
	project_name: Option<String>,
}

impl<'t> Navigator<'t> {
	/// Creates a navigator over `table` for the given parameter assignment.
	pub fn new(table: &'t RouteTable, params: RouteParams) -> Self {
		let resolved = table.resolved(&params);
		Self {
			table,
			resolved,
			params,
			project_name: None,
		}
	}

	/// Derives the parameter assignment from the current location instead of
	/// taking one up front.
	pub fn from_path(table: &'t RouteTable, current_path: &str) -> Self {
		let params = table.capture_params(current_path).unwrap_or_default();
		Self::new(table, params)
	}

	/// Names the current project for the breadcrumb's project crumb.
	pub fn with_project(mut self, name: impl Into<String>) -> Self {
		self.project_name = Some(name.into());
		self
	}

	/// The highlighted and expanded menu keys for `path`.
	///
	/// Open keys are the mount-time seeding; interactive accordion toggles go
	/// through [`crate::menu::apply_open_change`] against this baseline.
	pub fn active_menu_selection(&self, path: &str, policy: SelectionPolicy) -> MenuSelection {
		let selection = MenuSelection {
			selected_keys: selected_keys(&self.resolved, path, policy),
			open_keys: seed_open_keys(&self.resolved, path),
		};
		tracing::debug!(
			path,
			?policy,
			selected = ?selection.selected_keys,
			open = ?selection.open_keys,
			"resolved menu selection"
		);
		selection
	}

	/// The root-to-leaf breadcrumb chain for `path`.
	pub fn active_breadcrumb(&self, path: &str) -> Vec<BreadcrumbEntry> {
		breadcrumb_chain(&self.resolved, path, self.project_name.as_deref())
	}

	/// Whether the location at `path` renders without layout chrome.
	pub fn is_layout_hidden(&self, path: &str) -> bool {
		self.table.should_hide_layout(path)
	}

	/// The sidebar item tree, labels translated.
	pub fn menu(&self, translator: &dyn Translator) -> Vec<MenuItem> {
		menu_items(self.table.nodes(), &self.params, translator)
	}

	/// The full derived navigation state for `path`.
	pub fn navigation_state(&self, path: &str, policy: SelectionPolicy) -> NavigationState {
		let MenuSelection {
			selected_keys,
			open_keys,
		} = self.active_menu_selection(path, policy);
		NavigationState {
			selected_keys,
			open_keys,
			breadcrumb: self.active_breadcrumb(path),
		}
	}
}
