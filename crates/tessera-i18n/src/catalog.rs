//! Message catalog for storing translations

use std::collections::HashMap;

use crate::Translator;

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use tessera_i18n::{MessageCatalog, Translator};
///
/// let mut catalog = MessageCatalog::new("zh");
/// catalog.add("platform.member", "成员");
///
/// assert_eq!(catalog.translate("platform.member"), "成员");
/// // Missing keys echo back, so labels never go blank.
/// assert_eq!(catalog.translate("platform.unknown"), "platform.unknown");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation
	pub fn add(&mut self, key: impl Into<String>, text: impl Into<String>) {
		self.messages.insert(key.into(), text.into());
	}

	/// Get a translation, if present
	pub fn get(&self, key: &str) -> Option<&String> {
		self.messages.get(key)
	}

	/// Number of stored translations
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

impl Translator for MessageCatalog {
	fn translate(&self, key: &str) -> String {
		self.messages
			.get(key)
			.cloned()
			.unwrap_or_else(|| key.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_catalog_lookup() {
		let mut catalog = MessageCatalog::new("en");
		catalog.add("platform.settings", "Settings");
		assert_eq!(catalog.locale(), "en");
		assert_eq!(catalog.get("platform.settings"), Some(&"Settings".to_string()));
		assert!(catalog.get("platform.member").is_none());
	}

	#[rstest]
	#[case("data", "数据")]
	#[case("never.registered", "never.registered")]
	fn test_translate_falls_back_to_key(#[case] key: &str, #[case] expected: &str) {
		let mut catalog = MessageCatalog::new("zh");
		catalog.add("data", "数据");
		assert_eq!(catalog.translate(key), expected);
	}
}
