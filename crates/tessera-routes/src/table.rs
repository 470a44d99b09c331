//! The route table: startup-declared tree plus lookup helpers.

use crate::error::PatternError;
use crate::node::RouteNode;
use crate::pattern::{PathPattern, RouteParams, normalize_path, resolve_template};

/// A flattened node with its compiled pattern.
#[derive(Debug)]
struct CompiledRoute {
	pattern: PathPattern,
	hide_layout: bool,
}

/// The static declarative tree describing all navigable locations.
///
/// Built once at startup from declarations and never mutated. Lookup by
/// template path is exact; structural matching (templates against concrete
/// paths) goes through the compiled patterns.
#[derive(Debug)]
pub struct RouteTable {
	nodes: Vec<RouteNode>,
	compiled: Vec<CompiledRoute>,
}

impl RouteTable {
	/// Builds a table from top-level declarations, compiling every template.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if any template in the tree fails to compile.
	pub fn new(nodes: Vec<RouteNode>) -> Result<Self, PatternError> {
		let mut compiled = Vec::new();
		for node in &nodes {
			compiled.push(CompiledRoute {
				pattern: PathPattern::new(node.path())?,
				hide_layout: node.hide_layout(),
			});
			for child in node.children() {
				compiled.push(CompiledRoute {
					pattern: PathPattern::new(child.path())?,
					hide_layout: child.hide_layout(),
				});
			}
		}
		Ok(Self { nodes, compiled })
	}

	/// The top-level nodes in declaration order.
	pub fn nodes(&self) -> &[RouteNode] {
		&self.nodes
	}

	/// Looks a node up by its exact template path.
	///
	/// Top-level nodes are searched first, then one level of children. The
	/// search deliberately stops at depth 2, the maximum nesting the console
	/// declares; a deeper declaration would flatten (see
	/// [`all_paths`](Self::all_paths)) but not resolve here.
	pub fn get_by_path(&self, path: &str) -> Option<&RouteNode> {
		if let Some(node) = self.nodes.iter().find(|node| node.path() == path) {
			return Some(node);
		}
		self.nodes
			.iter()
			.flat_map(|node| node.children())
			.find(|child| child.path() == path)
	}

	/// Pre-order flattening of every template path in the tree.
	pub fn all_paths(&self) -> Vec<&str> {
		fn collect<'a>(nodes: &'a [RouteNode], out: &mut Vec<&'a str>) {
			for node in nodes {
				out.push(node.path());
				collect(node.children(), out);
			}
		}
		let mut paths = Vec::new();
		collect(&self.nodes, &mut paths);
		paths
	}

	/// Whether the location at `current_path` renders without layout chrome.
	///
	/// The path is matched structurally against every template in declaration
	/// order (parameters as single-segment wildcards); the first match decides.
	pub fn should_hide_layout(&self, current_path: &str) -> bool {
		self.compiled
			.iter()
			.find(|route| route.pattern.matches(current_path))
			.map(|route| route.hide_layout)
			.unwrap_or(false)
	}

	/// Resolves a parent's `default_child` key to the child node itself.
	pub fn default_child_of(&self, parent_path: &str) -> Option<&RouteNode> {
		let parent = self.nodes.iter().find(|node| node.path() == parent_path)?;
		let key = parent.default_child()?;
		parent
			.children()
			.iter()
			.find(|child| trailing_segment(child.path()) == key)
	}

	/// Derives parameter values for `current_path` from the first structurally
	/// matching template.
	pub fn capture_params(&self, current_path: &str) -> Option<RouteParams> {
		self.compiled
			.iter()
			.find(|route| route.pattern.matches(current_path))
			.and_then(|route| route.pattern.capture(current_path))
	}

	/// Substitutes `params` into the whole tree, yielding concrete-path
	/// lookup maps for the projector.
	pub fn resolved(&self, params: &RouteParams) -> ResolvedTable<'_> {
		let mut entries = Vec::new();
		for node in &self.nodes {
			let parent_index = entries.len();
			entries.push(ResolvedEntry {
				path: resolve_template(node.path(), params),
				node,
				parent: None,
			});
			for child in node.children() {
				entries.push(ResolvedEntry {
					path: resolve_template(child.path(), params),
					node: child,
					parent: Some(parent_index),
				});
			}
		}
		ResolvedTable { entries }
	}
}

fn trailing_segment(path: &str) -> &str {
	normalize_path(path).rsplit('/').next().unwrap_or_default()
}

/// One node of a [`ResolvedTable`], carrying its concrete path.
#[derive(Debug)]
pub struct ResolvedEntry<'t> {
	path: String,
	node: &'t RouteNode,
	parent: Option<usize>,
}

impl<'t> ResolvedEntry<'t> {
	/// The concrete path, parameters substituted and trailing slash stripped.
	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn node(&self) -> &'t RouteNode {
		self.node
	}

	pub fn is_top_level(&self) -> bool {
		self.parent.is_none()
	}
}

/// A view of the route table with parameters substituted.
///
/// All projector comparisons are concrete path against concrete path; this is
/// where templates stop participating.
#[derive(Debug)]
pub struct ResolvedTable<'t> {
	entries: Vec<ResolvedEntry<'t>>,
}

impl<'t> ResolvedTable<'t> {
	/// All entries, parents immediately followed by their children.
	pub fn entries(&self) -> &[ResolvedEntry<'t>] {
		&self.entries
	}

	/// Looks an entry up by concrete path, trailing slash ignored.
	pub fn get(&self, path: &str) -> Option<&ResolvedEntry<'t>> {
		let path = normalize_path(path);
		self.entries.iter().find(|entry| entry.path == path)
	}

	/// Whether `path` is a registered top-level key.
	pub fn is_top_level(&self, path: &str) -> bool {
		self.get(path).is_some_and(ResolvedEntry::is_top_level)
	}

	/// The parent's concrete path for a registered child path.
	pub fn parent_key_of(&self, path: &str) -> Option<&str> {
		let entry = self.get(path)?;
		let parent = entry.parent?;
		Some(self.entries[parent].path())
	}

	/// Top-level entries in declaration order.
	pub fn iter_top(&self) -> impl Iterator<Item = &ResolvedEntry<'t>> {
		self.entries.iter().filter(|entry| entry.is_top_level())
	}

	/// Children of the top-level entry at `parent_path`, in order.
	pub fn children_of(&self, parent_path: &str) -> impl Iterator<Item = &ResolvedEntry<'t>> {
		let parent_index = self
			.entries
			.iter()
			.position(|entry| entry.path == parent_path && entry.is_top_level());
		self.entries
			.iter()
			.filter(move |entry| entry.parent.is_some() && entry.parent == parent_index)
	}
}
