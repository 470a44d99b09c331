//! The serialization boundary for user preferences.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::context::{AppContext, Lang};

/// Error raised by a [`StateStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
	#[error("state store I/O error: {0}")]
	Io(#[from] std::io::Error),
	#[error("state serialization error: {0}")]
	Serde(#[from] serde_json::Error),
}

/// The subset of [`AppContext`] that survives a restart.
///
/// Only preferences persist: theme, language, sidebar collapse, plus the
/// remembered project id. Everything else is refetched or recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
	pub dark: bool,
	pub lang: Lang,
	pub sidebar_collapsed: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub project_id: Option<String>,
}

impl PersistedState {
	/// Extracts the persisted subset from a context.
	pub fn capture(context: &AppContext) -> Self {
		Self {
			dark: context.theme.dark,
			lang: context.locale.lang,
			sidebar_collapsed: context.sidebar.collapsed,
			project_id: context.project.remembered_id().map(str::to_string),
		}
	}
}

/// Where the persisted subset lives between sessions.
pub trait StateStore {
	/// Loads the stored state; `None` when nothing usable is stored.
	fn load(&self) -> Result<Option<PersistedState>, StateError>;

	/// Stores the state, replacing whatever was there.
	fn save(&self, state: &PersistedState) -> Result<(), StateError>;
}

impl AppContext {
	/// Builds a context from a store, falling back to defaults.
	///
	/// A missing or unusable store yields the default context; restore never
	/// blocks startup.
	pub fn restore(store: &dyn StateStore) -> Self {
		let mut context = Self::default();
		match store.load() {
			Ok(Some(persisted)) => {
				context.theme.dark = persisted.dark;
				context.locale.lang = persisted.lang;
				context.sidebar.collapsed = persisted.sidebar_collapsed;
				if let Some(id) = persisted.project_id {
					context.project.remember(id);
				}
			}
			Ok(None) => {}
			Err(error) => {
				tracing::warn!(%error, "failed to load persisted state, using defaults");
			}
		}
		context
	}

	/// Writes the persisted subset through the store.
	pub fn persist(&self, store: &dyn StateStore) -> Result<(), StateError> {
		store.save(&PersistedState::capture(self))
	}
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
	slot: Mutex<Option<PersistedState>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl StateStore for MemoryStore {
	fn load(&self) -> Result<Option<PersistedState>, StateError> {
		Ok(self.slot.lock().expect("state store lock").clone())
	}

	fn save(&self, state: &PersistedState) -> Result<(), StateError> {
		*self.slot.lock().expect("state store lock") = Some(state.clone());
		Ok(())
	}
}

/// JSON-file-backed store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &std::path::Path {
		&self.path
	}
}

impl StateStore for JsonFileStore {
	fn load(&self) -> Result<Option<PersistedState>, StateError> {
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(error) => return Err(error.into()),
		};
		match serde_json::from_str(&raw) {
			Ok(state) => Ok(Some(state)),
			Err(error) => {
				// A corrupt preferences file is not worth failing startup
				// over; the console falls back to defaults.
				tracing::warn!(path = %self.path.display(), %error, "ignoring corrupt state file");
				Ok(None)
			}
		}
	}

	fn save(&self, state: &PersistedState) -> Result<(), StateError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
		Ok(())
	}
}
