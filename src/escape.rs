//! String escaping and name mangling helpers.
//!
//! These are the leaf collaborators of the builder: pure string
//! functions with no state of their own. Text content goes through
//! [`escape_text`]; quoted attribute values through
//! [`escape_attribute`]; inline script and style code only needs its
//! own closing sequence neutralized, which [`escape_script`] and
//! [`escape_style`] handle.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// A pre-escaped HTML string that the builder embeds verbatim.
///
/// Wrap markup you have already escaped (or that is trusted) to keep
/// the builder from escaping it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(pub String);

impl Raw {
	/// Wraps markup that must not be escaped.
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// The wrapped markup.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Raw {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Raw {
	fn from(html: &str) -> Self {
		Self(html.to_string())
	}
}

impl From<String> for Raw {
	fn from(html: String) -> Self {
		Self(html)
	}
}

/// Escapes text for safe embedding in element content.
pub fn escape_text(text: &str) -> String {
	html_escape::encode_text(text).into_owned()
}

/// Escapes a value for embedding inside a double-quoted attribute.
pub(crate) fn escape_attribute(value: &str) -> String {
	html_escape::encode_double_quoted_attribute(value).into_owned()
}

// Inline scripts and styles only escape their own closing sequence.
static SCRIPT_END: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)</(script>)").unwrap());
static STYLE_END: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)</(style>)").unwrap());

/// Escapes only the `</script>` sequence in inline script code.
pub fn escape_script(code: &str) -> String {
	SCRIPT_END.replace_all(code, r"<\/$1").into_owned()
}

/// Escapes only the `</style>` sequence in inline style code.
pub fn escape_style(code: &str) -> String {
	STYLE_END.replace_all(code, r"<\/$1").into_owned()
}

/// Mangles an identifier into an HTML tag or attribute name.
///
/// One trailing underscore is stripped and remaining underscores become
/// hyphens, so `type_` maps to `type` and `data_role` to `data-role`.
pub fn mangle(name: &str) -> String {
	name.strip_suffix('_').unwrap_or(name).replace('_', "-")
}
