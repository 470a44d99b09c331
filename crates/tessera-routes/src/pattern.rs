//! Path template matching for console routes.
//!
//! Templates embed named parameters as `:name` segments
//! (`/project/:projectId/data`). A parameter stands for exactly one path
//! segment and is substituted whole, never partially matched.

use std::collections::HashMap;

use crate::error::PatternError;

/// Parameter assignment used when resolving templates to concrete paths.
pub type RouteParams = HashMap<String, String>;

/// Maximum allowed length for a route template string in bytes.
const MAX_TEMPLATE_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a route template.
const MAX_TEMPLATE_SEGMENTS: usize = 32;

/// Maximum allowed size for the compiled expression (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// Strips one trailing slash, keeping the root path intact.
pub fn normalize_path(path: &str) -> &str {
	if path.len() > 1 {
		path.strip_suffix('/').unwrap_or(path)
	} else {
		path
	}
}

/// Substitutes every `:name` token in `template` with its value from `params`.
///
/// A parameter without a value substitutes the empty string, so a half-known
/// location degrades to a blank segment instead of failing. Callers that need
/// stricter validation can check the result with [`has_empty_segments`].
pub fn resolve_template(template: &str, params: &RouteParams) -> String {
	let template = normalize_path(template);
	let resolved = template
		.split('/')
		.map(|segment| match segment.strip_prefix(':') {
			Some(name) if !name.is_empty() => match params.get(name) {
				Some(value) => value.as_str(),
				None => {
					tracing::debug!(template, param = name, "no value for route parameter");
					""
				}
			},
			_ => segment,
		})
		.collect::<Vec<_>>()
		.join("/");
	if resolved.is_empty() {
		"/".to_string()
	} else {
		normalize_path(&resolved).to_string()
	}
}

/// Returns true when `path` contains an empty segment (`/project//data`).
pub fn has_empty_segments(path: &str) -> bool {
	if path == "/" {
		return false;
	}
	normalize_path(path).split('/').skip(1).any(str::is_empty)
}

/// A compiled route template.
///
/// Matching is anchored, case-sensitive, and ignores a single trailing slash
/// on either side. Parameter segments match any single segment, including the
/// empty one, so a path resolved with a missing parameter value still matches
/// its own template.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original template string.
	template: String,
	/// Compiled expression.
	regex: regex::Regex,
	/// Parameter names in order of appearance.
	param_names: Vec<String>,
	/// Whether the template carries no parameters.
	is_exact: bool,
}

impl PathPattern {
	/// Compiles a template into a pattern.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if the template exceeds the length or segment
	/// limits, or compiles to an invalid expression.
	pub fn new(template: &str) -> Result<Self, PatternError> {
		if template.len() > MAX_TEMPLATE_LENGTH {
			return Err(PatternError::TooLong {
				len: template.len(),
				max: MAX_TEMPLATE_LENGTH,
			});
		}

		let segment_count = template.split('/').count();
		if segment_count > MAX_TEMPLATE_SEGMENTS {
			return Err(PatternError::TooManySegments {
				count: segment_count,
				max: MAX_TEMPLATE_SEGMENTS,
			});
		}

		let normalized = normalize_path(template);
		let (regex_str, param_names) = Self::compile(normalized);

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()?;

		Ok(Self {
			template: template.to_string(),
			regex,
			is_exact: param_names.is_empty(),
			param_names,
		})
	}

	/// Builds the anchored expression and collects parameter names.
	fn compile(template: &str) -> (String, Vec<String>) {
		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();
		let segments: Vec<&str> = template.split('/').collect();

		for (index, segment) in segments.iter().enumerate() {
			let is_last = index + 1 == segments.len();
			match segment.strip_prefix(':') {
				Some(name) if !name.is_empty() => {
					// Empty segments are accepted so that a template still
					// matches its own resolution when a value was absent. A
					// trailing parameter additionally absorbs its separator,
					// since an empty final segment normalizes away entirely.
					if is_last && index > 0 {
						regex_str.push_str(&format!("(?:/(?P<{}>[^/]*))?", name));
					} else {
						if index > 0 {
							regex_str.push('/');
						}
						regex_str.push_str(&format!("(?P<{}>[^/]*)", name));
					}
					param_names.push(name.to_string());
				}
				_ => {
					if index > 0 {
						regex_str.push('/');
					}
					for c in segment.chars() {
						if matches!(
							c,
							'.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\'
						) {
							regex_str.push('\\');
						}
						regex_str.push(c);
					}
				}
			}
		}

		regex_str.push('$');
		(regex_str, param_names)
	}

	/// Returns the original template string.
	pub fn template(&self) -> &str {
		&self.template
	}

	/// Returns the parameter names in order of appearance.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether the template carries no parameters.
	pub fn is_exact(&self) -> bool {
		self.is_exact
	}

	/// Checks whether a concrete path satisfies this template.
	pub fn matches(&self, path: &str) -> bool {
		let path = normalize_path(path);
		if self.is_exact {
			normalize_path(&self.template) == path
		} else {
			self.regex.is_match(path)
		}
	}

	/// Extracts parameter values from a matching concrete path.
	///
	/// Returns `None` when the path does not satisfy the template.
	pub fn capture(&self, path: &str) -> Option<RouteParams> {
		let path = normalize_path(path);
		self.regex.captures(path).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect()
		})
	}

	/// Resolves the template to a concrete path with the given parameters.
	pub fn resolve(&self, params: &RouteParams) -> String {
		resolve_template(&self.template, params)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.template == other.template
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.template)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	fn params(pairs: &[(&str, &str)]) -> RouteParams {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_exact_template() {
		let pattern = PathPattern::new("/member").unwrap();
		assert!(pattern.is_exact());
		assert!(pattern.matches("/member"));
		assert!(pattern.matches("/member/"));
		assert!(!pattern.matches("/member/roles"));
	}

	#[test]
	fn test_single_param() {
		let pattern = PathPattern::new("/project/:projectId/data").unwrap();
		assert!(!pattern.is_exact());
		assert!(pattern.matches("/project/42/data"));
		assert!(pattern.matches("/project/abc/data/"));
		assert!(!pattern.matches("/project/42/data/modeling"));

		let captured = pattern.capture("/project/42/data").unwrap();
		assert_eq!(captured.get("projectId"), Some(&"42".to_string()));
	}

	#[test]
	fn test_multiple_params() {
		let pattern = PathPattern::new("/project/:projectId/flow/design/:flowModuleId").unwrap();
		assert_eq!(pattern.param_names(), &["projectId", "flowModuleId"]);

		let captured = pattern.capture("/project/7/flow/design/99").unwrap();
		assert_eq!(captured.get("projectId"), Some(&"7".to_string()));
		assert_eq!(captured.get("flowModuleId"), Some(&"99".to_string()));
	}

	#[test]
	fn test_empty_segment_accepted() {
		// A missing parameter value degrades to an empty segment; the
		// template must keep matching the degraded path.
		let pattern = PathPattern::new("/project/:projectId/data").unwrap();
		assert!(pattern.matches("/project//data"));
	}

	#[test]
	fn test_resolve_substitutes_all_params() {
		let pattern = PathPattern::new("/project/:projectId/flow/design/:flowModuleId").unwrap();
		let resolved = pattern.resolve(&params(&[("projectId", "7"), ("flowModuleId", "99")]));
		assert_eq!(resolved, "/project/7/flow/design/99");
	}

	#[test]
	fn test_resolve_missing_param_is_blank() {
		let pattern = PathPattern::new("/project/:projectId/data").unwrap();
		let resolved = pattern.resolve(&RouteParams::new());
		assert_eq!(resolved, "/project//data");
		assert!(has_empty_segments(&resolved));
		assert!(pattern.matches(&resolved));
	}

	#[test]
	fn test_resolve_strips_trailing_slash() {
		let pattern = PathPattern::new("/project/:projectId/").unwrap();
		let resolved = pattern.resolve(&params(&[("projectId", "42")]));
		assert_eq!(resolved, "/project/42");
	}

	#[rstest]
	#[case("/", "/", true)]
	#[case("/project", "/project/", true)]
	#[case("/project/", "/project", true)]
	#[case("/Project", "/project", false)]
	fn test_trailing_slash_and_case(
		#[case] template: &str,
		#[case] path: &str,
		#[case] expected: bool,
	) {
		let pattern = PathPattern::new(template).unwrap();
		assert_eq!(pattern.matches(path), expected);
	}

	#[test]
	fn test_literal_dots_escaped() {
		let pattern = PathPattern::new("/api/v1.0").unwrap();
		assert!(pattern.matches("/api/v1.0"));
		assert!(!pattern.matches("/api/v1X0"));
	}

	#[test]
	fn test_has_empty_segments() {
		assert!(has_empty_segments("/project//data"));
		assert!(!has_empty_segments("/project/42/data"));
		assert!(!has_empty_segments("/"));
	}

	#[test]
	fn test_rejects_excessive_length() {
		let template = "/".to_string() + &"a".repeat(1025);
		assert!(matches!(
			PathPattern::new(&template),
			Err(PatternError::TooLong { .. })
		));
	}

	#[test]
	fn test_rejects_excessive_segments() {
		let segments: Vec<&str> = (0..35).map(|_| "seg").collect();
		let template = format!("/{}", segments.join("/"));
		assert!(matches!(
			PathPattern::new(&template),
			Err(PatternError::TooManySegments { .. })
		));
	}

	proptest! {
		// Every registered template matches its own resolution, whatever the
		// parameter assignment.
		#[test]
		fn resolve_then_match_roundtrip(
			project in "[a-z0-9]{0,12}",
			module in "[a-z0-9]{0,12}",
		) {
			let pattern =
				PathPattern::new("/project/:projectId/flow/design/:flowModuleId").unwrap();
			let mut assignment = RouteParams::new();
			if !project.is_empty() {
				assignment.insert("projectId".to_string(), project);
			}
			if !module.is_empty() {
				assignment.insert("flowModuleId".to_string(), module);
			}
			prop_assert!(pattern.matches(&pattern.resolve(&assignment)));
		}
	}
}
