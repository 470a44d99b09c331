//! Breadcrumb chains for the console header.

use serde::Serialize;
use tessera_i18n::Translator;
use tessera_routes::{IconRef, ResolvedTable, normalize_path};

/// Translation key of the fixed home crumb.
pub const HOME_KEY: &str = "platform.home";

/// Icon of the fixed home crumb.
pub const HOME_ICON: IconRef = IconRef::new("home");

/// Icon used for the current-project crumb.
pub const PROJECT_ICON: IconRef = IconRef::new("apartment");

/// The text shown for one crumb.
///
/// Route crumbs carry a translation key; the project crumb shows the project
/// name as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CrumbLabel {
	Key(String),
	Literal(String),
}

impl CrumbLabel {
	/// Renders the label through the translator; literals pass through.
	pub fn display(&self, translator: &dyn Translator) -> String {
		match self {
			Self::Key(key) => translator.translate(key),
			Self::Literal(text) => text.clone(),
		}
	}
}

/// One entry of the root-to-leaf breadcrumb chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
	pub path: String,
	pub label: CrumbLabel,
	pub icon: IconRef,
}

impl BreadcrumbEntry {
	fn home() -> Self {
		Self {
			path: "/".to_string(),
			label: CrumbLabel::Key(HOME_KEY.to_string()),
			icon: HOME_ICON,
		}
	}
}

/// Builds the breadcrumb chain for `current_path`.
///
/// The chain always opens with the home crumb, followed by the current
/// project's crumb when one is set. Path prefixes are then resolved left to
/// right against the route table; prefixes no route claims are skipped, so an
/// unregistered location degrades to the home crumb alone rather than to
/// blank entries.
pub fn breadcrumb_chain(
	resolved: &ResolvedTable<'_>,
	current_path: &str,
	project_name: Option<&str>,
) -> Vec<BreadcrumbEntry> {
	let mut chain = vec![BreadcrumbEntry::home()];
	if let Some(name) = project_name {
		chain.push(BreadcrumbEntry {
			path: String::new(),
			label: CrumbLabel::Literal(name.to_string()),
			icon: PROJECT_ICON,
		});
	}

	let current = normalize_path(current_path);
	let mut prefix = String::new();
	for segment in current.split('/').filter(|segment| !segment.is_empty()) {
		prefix.push('/');
		prefix.push_str(segment);
		if let Some(entry) = resolved.get(&prefix) {
			chain.push(BreadcrumbEntry {
				path: entry.path().to_string(),
				label: CrumbLabel::Key(entry.node().translation_key().to_string()),
				icon: entry.node().icon(),
			});
		}
	}
	chain
}
