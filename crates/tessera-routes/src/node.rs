//! Route tree data model.

use serde::Serialize;

/// Opaque reference to a UI icon capability.
///
/// The console resolves these identifiers to actual glyphs; the navigation
/// core only carries them through projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconRef(&'static str);

impl IconRef {
	pub const fn new(name: &'static str) -> Self {
		Self(name)
	}

	pub fn name(&self) -> &'static str {
		self.0
	}
}

/// One navigable location in the console.
///
/// Nodes form a tree of at most two levels (section → sub-page) and are
/// declared once at startup; nothing mutates them afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RouteNode {
	path: String,
	icon: IconRef,
	translation_key: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	children: Vec<RouteNode>,
	hide_in_menu: bool,
	hide_layout: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	default_child: Option<String>,
}

impl RouteNode {
	/// Creates a leaf node for the given template path.
	pub fn new(path: impl Into<String>, icon: IconRef, translation_key: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			icon,
			translation_key: translation_key.into(),
			children: Vec::new(),
			hide_in_menu: false,
			hide_layout: false,
			default_child: None,
		}
	}

	/// Attaches ordered child nodes.
	pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
		self.children = children;
		self
	}

	/// Names the child considered active when this node's path is hit exactly.
	///
	/// The key is the child's trailing path segment.
	pub fn with_default_child(mut self, key: impl Into<String>) -> Self {
		self.default_child = Some(key.into());
		self
	}

	/// Excludes this node from menu projection. Matching and breadcrumbs are
	/// unaffected.
	pub fn hidden_in_menu(mut self) -> Self {
		self.hide_in_menu = true;
		self
	}

	/// Marks locations under this node as rendering without the console
	/// layout chrome.
	pub fn hidden_layout(mut self) -> Self {
		self.hide_layout = true;
		self
	}

	/// The template path.
	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn icon(&self) -> IconRef {
		self.icon
	}

	pub fn translation_key(&self) -> &str {
		&self.translation_key
	}

	pub fn children(&self) -> &[RouteNode] {
		&self.children
	}

	pub fn hide_in_menu(&self) -> bool {
		self.hide_in_menu
	}

	pub fn hide_layout(&self) -> bool {
		self.hide_layout
	}

	pub fn default_child(&self) -> Option<&str> {
		self.default_child.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_defaults() {
		let node = RouteNode::new("/member", IconRef::new("user"), "platform.member");
		assert_eq!(node.path(), "/member");
		assert_eq!(node.icon().name(), "user");
		assert!(!node.hide_in_menu());
		assert!(!node.hide_layout());
		assert!(node.children().is_empty());
		assert!(node.default_child().is_none());
	}

	#[test]
	fn test_builder_flags() {
		let node = RouteNode::new(
			"/project/:projectId/flow/design/:flowModuleId",
			IconRef::new("database"),
			"flow_design",
		)
		.hidden_in_menu()
		.hidden_layout();
		assert!(node.hide_in_menu());
		assert!(node.hide_layout());
	}

	#[test]
	fn test_serializes_without_empty_fields() {
		let node = RouteNode::new("/settings", IconRef::new("setting"), "platform.settings");
		let json = serde_json::to_value(&node).unwrap();
		assert!(json.get("children").is_none());
		assert!(json.get("default_child").is_none());
		assert_eq!(json["path"], "/settings");
	}
}
