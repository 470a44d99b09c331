//! Sidebar menu projection: selection, open groups, and item data.

use tessera_i18n::Translator;
use tessera_routes::{IconRef, ResolvedTable, RouteNode, RouteParams, normalize_path, resolve_template};

/// How the sidebar highlights the current location.
///
/// The platform sidebar shows a flat section list and wants the owning
/// section lit even when a sub-page is active; the project sidebar renders
/// sub-pages as their own items and highlights the exact leaf. Both policies
/// are legitimate, so the caller picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
	/// A registered child path highlights its parent's key.
	BubbleToParent,
	/// A registered path highlights its own key, child or not.
	LeafExact,
}

/// The menu highlight and expansion state for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSelection {
	pub selected_keys: Vec<String>,
	pub open_keys: Vec<String>,
}

/// One sidebar item, parameters substituted and label translated.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MenuItem {
	pub key: String,
	pub icon: IconRef,
	pub label: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<MenuItem>,
}

/// Computes the highlighted keys for `current_path` under `policy`.
pub fn selected_keys(
	resolved: &ResolvedTable<'_>,
	current_path: &str,
	policy: SelectionPolicy,
) -> Vec<String> {
	let current = normalize_path(current_path);
	match policy {
		SelectionPolicy::BubbleToParent => {
			if resolved.is_top_level(current) {
				vec![current.to_string()]
			} else if let Some(parent) = resolved.parent_key_of(current) {
				vec![parent.to_string()]
			} else {
				Vec::new()
			}
		}
		SelectionPolicy::LeafExact => match resolved.get(current) {
			Some(entry) => vec![entry.path().to_string()],
			None => Vec::new(),
		},
	}
}

/// Computes the groups to expand when the sidebar first mounts.
///
/// Every group whose own path or any child path prefixes the current location
/// contributes its key; several branches may seed at once. Interactive
/// toggling afterwards goes through [`apply_open_change`], which enforces the
/// accordion — the two paths are intentionally separate.
pub fn seed_open_keys(resolved: &ResolvedTable<'_>, current_path: &str) -> Vec<String> {
	let current = normalize_path(current_path);
	let mut open = Vec::new();
	for parent in resolved.iter_top() {
		if parent.node().children().is_empty() {
			continue;
		}
		for child in resolved.children_of(parent.path()) {
			if current.starts_with(child.path()) || current.starts_with(parent.path()) {
				let key = parent.path().to_string();
				if !open.contains(&key) {
					open.push(key);
				}
			}
		}
	}
	open
}

/// Applies an interactive open/close request to the current open set.
///
/// Opening a group collapses everything else (accordion); requests that only
/// close groups pass through unchanged.
pub fn apply_open_change(open: &[String], requested: &[String]) -> Vec<String> {
	match requested.iter().find(|&key| !open.contains(key)) {
		Some(newly_opened) => vec![newly_opened.clone()],
		None => requested.to_vec(),
	}
}

/// Builds the sidebar item tree for the given parameters.
///
/// `hide_in_menu` nodes are dropped, keys are substituted concrete paths, and
/// labels come from the translator.
pub fn menu_items(
	nodes: &[RouteNode],
	params: &RouteParams,
	translator: &dyn Translator,
) -> Vec<MenuItem> {
	nodes
		.iter()
		.filter(|node| !node.hide_in_menu())
		.map(|node| MenuItem {
			key: resolve_template(node.path(), params),
			icon: node.icon(),
			label: translator.translate(node.translation_key()),
			children: menu_items(node.children(), params, translator),
		})
		.collect()
}
