//! The console's application context.
//!
//! Theme, locale, sidebar and project selection live in an explicit value the
//! embedder constructs and passes down; nothing reads ambient globals, and
//! the only way state leaves the process is through the [`crate::StateStore`]
//! boundary.

use serde::{Deserialize, Serialize};

/// Interface language of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
	#[default]
	Zh,
	En,
}

impl Lang {
	pub fn toggled(self) -> Self {
		match self {
			Self::Zh => Self::En,
			Self::En => Self::Zh,
		}
	}
}

/// A project the console can scope itself to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
	pub id: String,
	pub name: String,
}

/// Dark-mode preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
	pub dark: bool,
}

impl ThemeState {
	pub fn toggle(&mut self) {
		self.dark = !self.dark;
	}
}

/// Interface-language preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocaleState {
	pub lang: Lang,
}

impl LocaleState {
	pub fn set(&mut self, lang: Lang) {
		self.lang = lang;
	}

	pub fn toggle(&mut self) {
		self.lang = self.lang.toggled();
	}
}

/// Sidebar collapse preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
	pub collapsed: bool,
}

impl SidebarState {
	pub fn set(&mut self, collapsed: bool) {
		self.collapsed = collapsed;
	}

	pub fn toggle(&mut self) {
		self.collapsed = !self.collapsed;
	}
}

/// The current project selection and the known project list.
#[derive(Debug, Clone, Default)]
pub struct ProjectState {
	current: Option<Project>,
	projects: Vec<Project>,
	remembered_id: Option<String>,
}

impl ProjectState {
	pub fn current(&self) -> Option<&Project> {
		self.current.as_ref()
	}

	pub fn projects(&self) -> &[Project] {
		&self.projects
	}

	/// The id to persist across sessions.
	pub fn remembered_id(&self) -> Option<&str> {
		self.remembered_id.as_deref()
	}

	/// Selects a project by id from the known list.
	///
	/// An unknown id leaves the selection untouched, mirroring the console's
	/// dropdown which can only offer known projects.
	pub fn select(&mut self, id: &str) {
		if let Some(project) = self.projects.iter().find(|project| project.id == id) {
			self.remembered_id = Some(project.id.clone());
			self.current = Some(project.clone());
		}
	}

	/// Seeds the remembered id ahead of the first list load.
	pub(crate) fn remember(&mut self, id: String) {
		self.remembered_id = Some(id);
	}

	/// Clears the selection and the remembered id.
	pub fn clear(&mut self) {
		self.current = None;
		self.remembered_id = None;
	}

	/// Installs a freshly fetched project list and reconciles the selection.
	///
	/// A remembered id wins when it is still present in the list; otherwise
	/// the first project is selected and remembered. An empty list clears the
	/// current selection but keeps the remembered id for the next load.
	pub fn load(&mut self, projects: Vec<Project>) {
		self.projects = projects;
		if self.projects.is_empty() {
			self.current = None;
			return;
		}

		let remembered = self
			.remembered_id
			.as_deref()
			.and_then(|id| self.projects.iter().find(|project| project.id == id));
		let selected = match remembered {
			Some(project) => project.clone(),
			None => self.projects[0].clone(),
		};
		self.remembered_id = Some(selected.id.clone());
		self.current = Some(selected);
	}
}

/// Remote profile values the console caches after fetching.
///
/// The fetch itself lives with the HTTP layer; the context only holds the
/// result.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
	pub values: serde_json::Map<String, serde_json::Value>,
	pub api_root_path: String,
}

impl ConfigState {
	pub fn apply_profile(
		&mut self,
		values: serde_json::Map<String, serde_json::Value>,
		api_root_path: impl Into<String>,
	) {
		self.values = values;
		self.api_root_path = api_root_path.into();
	}
}

/// The explicit application context passed to components and handlers.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
	pub theme: ThemeState,
	pub locale: LocaleState,
	pub sidebar: SidebarState,
	pub project: ProjectState,
	pub config: ConfigState,
}
