//! Message catalog and translation interface for the Tessera console.
//!
//! Navigation projection needs labels, not locale machinery: the [`Translator`]
//! trait is the whole contract, and [`MessageCatalog`] is the in-memory
//! implementation the console ships with.

mod catalog;

pub use catalog::MessageCatalog;

/// Resolves a translation key to display text.
///
/// Consumed by menu and breadcrumb projection for labels only; matching logic
/// never touches translations.
pub trait Translator {
	fn translate(&self, key: &str) -> String;
}
