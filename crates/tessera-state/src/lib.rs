//! Application context and persisted preferences for the Tessera console.
//!
//! An explicit [`AppContext`] value plus a [`StateStore`] serialization
//! boundary: state is constructed by the embedder, passed to whatever needs
//! it, and only touches disk at the restore/persist call sites.

pub mod context;
pub mod store;

pub use context::{AppContext, ConfigState, Lang, LocaleState, Project, ProjectState, SidebarState, ThemeState};
pub use store::{JsonFileStore, MemoryStore, PersistedState, StateError, StateStore};
