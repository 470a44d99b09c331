//! Error types for route template compilation.

/// Error raised when a path template cannot be compiled into a pattern.
///
/// Route *resolution* never fails: unmatched lookups are `None` and missing
/// parameter values substitute the empty string. Compilation is the only
/// fallible step, and only for templates that exceed the structural limits.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
	/// Template exceeds the maximum allowed length in bytes.
	#[error("template length {len} exceeds maximum of {max} bytes")]
	TooLong { len: usize, max: usize },
	/// Template has more path segments than allowed.
	#[error("template has {count} path segments, exceeding maximum of {max}")]
	TooManySegments { count: usize, max: usize },
	/// Template compiled to an invalid or oversized expression.
	#[error("failed to compile template expression: {0}")]
	Compile(#[from] regex::Error),
}
