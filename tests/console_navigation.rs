//! End-to-end navigation behavior over the real console route tables.

use tessera::prelude::*;
use tessera_nav::CrumbLabel;
use tessera_state::Lang;

fn project_params(id: &str) -> RouteParams {
	RouteParams::from([("projectId".to_string(), id.to_string())])
}

#[test]
fn child_selection_under_both_policies() {
	let navigator = Navigator::new(project_routes(), project_params("42"));

	let bubbled = navigator
		.active_menu_selection("/project/42/data/modeling", SelectionPolicy::BubbleToParent);
	assert_eq!(bubbled.selected_keys, &["/project/42/data"]);

	let leaf = navigator.active_menu_selection("/project/42/data/modeling", SelectionPolicy::LeafExact);
	assert_eq!(leaf.selected_keys, &["/project/42/data/modeling"]);
}

#[test]
fn platform_sidebar_bubbles_to_parent() {
	let navigator = Navigator::new(platform_routes(), RouteParams::new());
	let selection = navigator.active_menu_selection("/member", SelectionPolicy::BubbleToParent);
	assert_eq!(selection.selected_keys, &["/member"]);
	assert!(selection.open_keys.is_empty());
}

#[test]
fn root_path_yields_home_breadcrumb_and_no_selection() {
	let navigator = Navigator::new(project_routes(), project_params("42"));

	let breadcrumb = navigator.active_breadcrumb("/");
	assert_eq!(breadcrumb.len(), 1);
	assert_eq!(breadcrumb[0].path, "/");

	let selection = navigator.active_menu_selection("/", SelectionPolicy::LeafExact);
	assert!(selection.selected_keys.is_empty());
}

#[test]
fn design_route_hides_layout_for_concrete_path() {
	let navigator = Navigator::new(project_routes(), project_params("7"));
	assert!(navigator.is_layout_hidden("/project/7/flow/design/99"));
	assert!(navigator.is_layout_hidden("/project/abc/flow/design/xyz"));
	assert!(!navigator.is_layout_hidden("/project/7/flow/definition"));
}

#[test]
fn missing_param_degrades_without_error() {
	let navigator = Navigator::new(project_routes(), RouteParams::new());
	// Every key resolves with a blank project segment; queries still answer.
	let selection =
		navigator.active_menu_selection("/project//data", SelectionPolicy::BubbleToParent);
	assert_eq!(selection.selected_keys, &["/project//data"]);
}

#[test]
fn unknown_path_resolves_to_nothing() {
	let table = project_routes();
	assert!(table.get_by_path("/nonexistent").is_none());

	let navigator = Navigator::new(table, project_params("42"));
	assert!(!navigator.is_layout_hidden("/nonexistent"));
	let selection = navigator.active_menu_selection("/nonexistent", SelectionPolicy::LeafExact);
	assert!(selection.selected_keys.is_empty());
	assert_eq!(navigator.active_breadcrumb("/nonexistent").len(), 1);
}

#[test]
fn breadcrumb_skips_unregistered_prefixes() {
	let navigator = Navigator::new(project_routes(), project_params("42")).with_project("CRM");
	let chain = navigator.active_breadcrumb("/project/42/data/modeling");

	let paths: Vec<&str> = chain.iter().map(|entry| entry.path.as_str()).collect();
	// "/project" belongs to the platform table, not this one, and "/project/42"
	// is the overview route; both registered prefixes appear, nothing blank.
	assert_eq!(
		paths,
		vec!["/", "", "/project/42", "/project/42/data", "/project/42/data/modeling"]
	);
	assert_eq!(chain[1].label, CrumbLabel::Literal("CRM".to_string()));
}

#[test]
fn accordion_keeps_single_open_group() {
	let navigator = Navigator::new(project_routes(), project_params("42"));
	let mounted = navigator
		.active_menu_selection("/project/42/data/modeling", SelectionPolicy::LeafExact)
		.open_keys;
	assert_eq!(mounted, &["/project/42/data"]);

	// User opens the flow group: data collapses.
	let mut requested = mounted.clone();
	requested.push("/project/42/flow".to_string());
	assert_eq!(apply_open_change(&mounted, &requested), &["/project/42/flow"]);
}

#[test]
fn menu_labels_follow_locale() {
	let navigator = Navigator::new(project_routes(), project_params("42"));

	let zh = navigator.menu(&console_catalog(Lang::Zh));
	let en = navigator.menu(&console_catalog(Lang::En));
	assert_eq!(zh.len(), en.len());

	let zh_data = zh.iter().find(|item| item.key == "/project/42/data").unwrap();
	let en_data = en.iter().find(|item| item.key == "/project/42/data").unwrap();
	assert_eq!(zh_data.label, "数据");
	assert_eq!(en_data.label, "Data");

	// Hidden designer/detail routes never show up.
	assert!(zh.iter().all(|item| !item.key.contains("/flow/design")));
}

#[test]
fn default_child_of_data_section() {
	let child = project_routes()
		.default_child_of("/project/:projectId/data")
		.unwrap();
	assert_eq!(child.translation_key(), "data_modeling");
}
