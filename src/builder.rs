//! Fluent HTML5 builder.
//!
//! A [`Builder`] accumulates markup as a flat, append-only sequence of
//! pieces: finalized literals, the most recently opened tag (whose
//! attribute segment stays mutable until the next piece arrives), and
//! references into a map of named template slots. The flat model keeps
//! rendering a straight concatenation while still supporting deferred
//! attribute attachment, scoped nesting and late slot mutation.

use std::collections::HashMap;
use std::fmt;

use crate::error::BuilderError;
use crate::escape::{
	Raw, escape_attribute, escape_script, escape_style, escape_text, mangle,
};
use crate::html5;

/// One attribute value in the builder API.
///
/// `Omit` drops the attribute entirely, `Flag` renders a bare attribute
/// without a value, and `Value` renders `name=value`, quoting the value
/// unless it is purely alphanumeric.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// Attribute omitted entirely.
	Omit,
	/// Bare attribute without a value.
	Flag,
	/// Attribute with a value.
	Value(String),
}

impl AttrValue {
	fn render_into(&self, name: &str, out: &mut String) {
		match self {
			AttrValue::Omit => {}
			AttrValue::Flag => {
				out.push(' ');
				out.push_str(name);
			}
			AttrValue::Value(value) => {
				out.push(' ');
				out.push_str(name);
				out.push('=');
				if !value.is_empty() && value.chars().all(char::is_alphanumeric) {
					out.push_str(value);
				} else {
					out.push('"');
					out.push_str(&escape_attribute(value));
					out.push('"');
				}
			}
		}
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		if value { AttrValue::Flag } else { AttrValue::Omit }
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Value(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Value(value)
	}
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => AttrValue::Omit,
		}
	}
}

macro_rules! numeric_attr_value {
	($($ty:ty),* $(,)?) => {$(
		impl From<$ty> for AttrValue {
			fn from(value: $ty) -> Self {
				AttrValue::Value(value.to_string())
			}
		}
	)*};
}

numeric_attr_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// An opening tag whose attribute segment is still mutable.
#[derive(Debug, Clone, PartialEq)]
struct OpenTag {
	tag: String,
	attrs: String,
}

impl OpenTag {
	fn render(&self) -> String {
		format!("<{}{}>", self.tag, self.attrs)
	}
}

/// One unit of a builder's flat output sequence.
#[derive(Debug, Clone, PartialEq)]
enum Piece {
	/// Finalized markup text.
	Literal(String),
	/// The most recently opened tag, attributes still attachable.
	Open(OpenTag),
	/// Reference to a named template slot.
	Slot(String),
}

/// Values the builder accepts as content.
///
/// Strings and numbers are escaped, [`Raw`] passes through verbatim,
/// a [`Builder`] is merged into the receiver, and `None` is skipped.
pub trait Content {
	/// Appends the value to the builder without closing the current tag.
	fn append_to(self, builder: &mut Builder);
}

impl Content for &str {
	fn append_to(self, builder: &mut Builder) {
		builder.pieces.push(Piece::Literal(escape_text(self)));
	}
}

impl Content for String {
	fn append_to(self, builder: &mut Builder) {
		builder.pieces.push(Piece::Literal(escape_text(&self)));
	}
}

impl Content for &String {
	fn append_to(self, builder: &mut Builder) {
		builder.pieces.push(Piece::Literal(escape_text(self)));
	}
}

impl Content for Raw {
	fn append_to(self, builder: &mut Builder) {
		builder.pieces.push(Piece::Literal(self.0));
	}
}

impl Content for &Raw {
	fn append_to(self, builder: &mut Builder) {
		builder.pieces.push(Piece::Literal(self.0.clone()));
	}
}

impl Content for Builder {
	fn append_to(self, builder: &mut Builder) {
		builder.merge(self);
	}
}

impl<T: Content> Content for Option<T> {
	fn append_to(self, builder: &mut Builder) {
		if let Some(value) = self {
			value.append_to(builder);
		}
	}
}

macro_rules! numeric_content {
	($($ty:ty),* $(,)?) => {$(
		impl Content for $ty {
			fn append_to(self, builder: &mut Builder) {
				builder
					.pieces
					.push(Piece::Literal(escape_text(&self.to_string())));
			}
		}
	)*};
}

numeric_content!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A mutable accumulator for one element, document or template scope.
///
/// All operations chain on `&mut Self`; the fallible ones return
/// `Result` and report misuse at the call site. Rendering via
/// [`fmt::Display`] (or [`Builder::html`]) always yields balanced
/// markup: the pending end tag and any unclosed scopes are appended
/// after the pieces, innermost first.
#[derive(Clone)]
pub struct Builder {
	name: String,
	pieces: Vec<Piece>,
	end_tag: Option<String>,
	scopes: Vec<String>,
	templates: HashMap<String, Builder>,
}

impl Builder {
	/// Creates an empty builder with an identifying name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			pieces: Vec::new(),
			end_tag: None,
			scopes: Vec::new(),
			templates: HashMap::new(),
		}
	}

	/// Shorthand for an unnamed snippet builder.
	pub fn snippet() -> Self {
		Self::new("E")
	}

	/// The builder's identifying name.
	pub fn name(&self) -> &str {
		&self.name
	}

	fn close_end_tag(&mut self) {
		if let Some(end) = self.end_tag.take() {
			self.pieces.push(Piece::Literal(end));
		}
	}

	/// Closes the pending end tag, if any.
	pub fn close(&mut self) -> &mut Self {
		self.close_end_tag();
		self
	}

	/// Opens a new element.
	///
	/// Any pending end tag is closed first. The name goes through the
	/// identifier mangling rule, and the omit-set decides whether an
	/// end tag becomes pending for the new element.
	pub fn tag(&mut self, name: &str) -> &mut Self {
		let tag = mangle(name);
		self.close_end_tag();
		self.end_tag = if html5::omits_end_tag(&tag) {
			None
		} else {
			Some(format!("</{tag}>"))
		};
		self.pieces.push(Piece::Open(OpenTag {
			tag,
			attrs: String::new(),
		}));
		self
	}

	/// Attaches an attribute to the most recently opened tag.
	///
	/// The value is anything convertible to [`AttrValue`]: `false` and
	/// `None` omit the attribute, `true` renders it bare, and other
	/// values are stringified and quoted unless alphanumeric.
	pub fn attr(
		&mut self,
		name: &str,
		value: impl Into<AttrValue>,
	) -> Result<&mut Self, BuilderError> {
		let value = value.into();
		let name = mangle(name);
		match self.pieces.last_mut() {
			Some(Piece::Open(open)) => value.render_into(&name, &mut open.attrs),
			Some(Piece::Slot(slot)) => {
				return Err(BuilderError::AttributesOnSlot(slot.clone()));
			}
			Some(Piece::Literal(text)) => {
				return Err(BuilderError::AttributesWithoutTag(text.clone()));
			}
			None => {
				return Err(BuilderError::AttributesWithoutTag(String::new()));
			}
		}
		Ok(self)
	}

	/// Attaches several attributes at once.
	pub fn attrs(
		&mut self,
		pairs: &[(&str, AttrValue)],
	) -> Result<&mut Self, BuilderError> {
		for (name, value) in pairs {
			self.attr(name, value.clone())?;
		}
		Ok(self)
	}

	/// Appends content without closing the current tag.
	pub fn text(&mut self, value: impl Content) -> &mut Self {
		value.append_to(self);
		self
	}

	/// Appends pre-escaped markup verbatim.
	pub fn raw(&mut self, html: impl Into<String>) -> &mut Self {
		self.pieces.push(Piece::Literal(html.into()));
		self
	}

	/// Merges another builder into this one.
	///
	/// When the argument's name matches an existing template slot, a
	/// live reference to that slot is pushed instead, so later slot
	/// mutation stays visible here. Otherwise the argument is flushed
	/// and its pieces and slot map are spliced in.
	pub fn append(&mut self, other: Builder) -> &mut Self {
		self.merge(other);
		self
	}

	fn merge(&mut self, mut other: Builder) {
		if self.templates.contains_key(&other.name) {
			self.pieces.push(Piece::Slot(other.name));
			return;
		}
		other.close_end_tag();
		while let Some(end) = other.scopes.pop() {
			other.pieces.push(Piece::Literal(end));
		}
		self.templates.extend(other.templates);
		self.pieces.extend(other.pieces);
	}

	/// Appends content the call-form way.
	///
	/// When the preceding piece is a template slot reference the value
	/// goes into that slot; otherwise it is appended here and the
	/// pending end tag is closed afterwards.
	pub fn content(&mut self, value: impl Content) -> &mut Self {
		if let Some(Piece::Slot(name)) = self.pieces.last() {
			let name = name.clone();
			if let Some(template) = self.templates.get_mut(&name) {
				template.content(value);
			}
			return self;
		}
		value.append_to(self);
		self.close_end_tag();
		self
	}

	/// Reads the named template slot for further composition.
	pub fn slot(&mut self, name: &str) -> Result<&mut Builder, BuilderError> {
		self.templates
			.get_mut(name)
			.ok_or_else(|| BuilderError::TemplateNotFound(name.to_string()))
	}

	/// Inserts the named template slot by reference, creating it empty
	/// on first use.
	///
	/// The same slot may be inserted at several points; all of them
	/// render the slot's current content.
	pub fn insert_slot(&mut self, name: &str) -> &mut Self {
		if !self.templates.contains_key(name) {
			self.templates
				.insert(name.to_string(), Builder::new(name));
		}
		self.pieces.push(Piece::Slot(name.to_string()));
		self
	}

	/// Overwrites the named slot's content in place.
	///
	/// The slot keeps its identity, so every insertion point reflects
	/// the new value.
	pub fn set_slot(
		&mut self,
		name: &str,
		value: impl Content,
	) -> Result<&mut Self, BuilderError> {
		let template = self
			.templates
			.get_mut(name)
			.ok_or_else(|| BuilderError::TemplateNotFound(name.to_string()))?;
		template.clear();
		template.content(value);
		Ok(self)
	}

	fn clear(&mut self) {
		self.pieces.clear();
		self.templates.clear();
		self.end_tag = None;
		self.scopes.clear();
	}

	/// Enters a nested scope under the currently open element.
	///
	/// Void and end-tag-omitting elements cannot be scoped.
	pub fn enter(&mut self) -> Result<&mut Self, BuilderError> {
		match self.end_tag.take() {
			Some(end) => {
				self.scopes.push(end);
				Ok(self)
			}
			None => Err(BuilderError::ScopeOnVoidElement),
		}
	}

	/// Leaves the innermost scope, closing whatever is still open in it.
	pub fn leave(&mut self) -> Result<&mut Self, BuilderError> {
		self.close_end_tag();
		match self.scopes.pop() {
			Some(end) => {
				self.pieces.push(Piece::Literal(end));
				Ok(self)
			}
			None => Err(BuilderError::ScopeUnderflow),
		}
	}

	/// Runs `f` inside a scope under the currently open element.
	pub fn scope(
		&mut self,
		f: impl FnOnce(&mut Builder),
	) -> Result<&mut Self, BuilderError> {
		self.enter()?;
		f(self);
		self.leave()
	}

	/// Appends an HTML comment.
	///
	/// A literal `-->` inside the text is replaced with a lookalike so
	/// the output stays a single comment.
	pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
		let text = text.into().replace("-->", "‒‒>");
		self.pieces.push(Piece::Literal(format!("<!--{text}-->")));
		self
	}

	/// Appends an inline script element with only `</script` escaped.
	pub fn script(&mut self, code: &str) -> &mut Self {
		self.script_with(code, &[])
	}

	/// Appends an inline script element with attributes.
	pub fn script_with(&mut self, code: &str, attrs: &[(&str, AttrValue)]) -> &mut Self {
		self.inline_element("script", &escape_script(code), attrs)
	}

	/// Appends an inline style element with only `</style` escaped.
	pub fn style(&mut self, code: &str) -> &mut Self {
		self.style_with(code, &[])
	}

	/// Appends an inline style element with attributes.
	pub fn style_with(&mut self, code: &str, attrs: &[(&str, AttrValue)]) -> &mut Self {
		self.inline_element("style", &escape_style(code), attrs)
	}

	fn inline_element(
		&mut self,
		tag: &str,
		code: &str,
		attrs: &[(&str, AttrValue)],
	) -> &mut Self {
		self.close_end_tag();
		let mut piece = format!("<{tag}");
		for (name, value) in attrs {
			value.render_into(&mangle(name), &mut piece);
		}
		piece.push('>');
		piece.push_str(code);
		piece.push_str(&format!("</{tag}>"));
		self.pieces.push(Piece::Literal(piece));
		self
	}

	/// Joins adjacent literal pieces in place.
	///
	/// Slot references and the still-mutable open tag are preserved.
	/// Rendering is unchanged.
	pub fn optimize(&mut self) {
		let mut merged: Vec<Piece> = Vec::with_capacity(self.pieces.len());
		let mut run = String::new();
		for piece in self.pieces.drain(..) {
			match piece {
				Piece::Literal(text) => run.push_str(&text),
				other => {
					if !run.is_empty() {
						merged.push(Piece::Literal(std::mem::take(&mut run)));
					}
					merged.push(other);
				}
			}
		}
		if !run.is_empty() {
			merged.push(Piece::Literal(run));
		}
		self.pieces = merged;
	}

	/// Renders the builder to a complete markup string.
	pub fn html(&self) -> String {
		self.to_string()
	}

	/// Flattens the builder into final markup fragments, resolving
	/// slot references recursively, depth-first, in order.
	pub(crate) fn flat_pieces(&self) -> Vec<String> {
		let mut out = Vec::new();
		self.flatten_into(&mut out);
		out
	}

	fn flatten_into(&self, out: &mut Vec<String>) {
		for piece in &self.pieces {
			match piece {
				Piece::Literal(text) => out.push(text.clone()),
				Piece::Open(open) => out.push(open.render()),
				Piece::Slot(name) => {
					if let Some(template) = self.templates.get(name) {
						template.flatten_into(out);
					}
				}
			}
		}
		if let Some(end) = &self.end_tag {
			out.push(end.clone());
		}
		for end in self.scopes.iter().rev() {
			out.push(end.clone());
		}
	}
}

impl fmt::Display for Builder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for fragment in self.flat_pieces() {
			f.write_str(&fragment)?;
		}
		Ok(())
	}
}

impl fmt::Debug for Builder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let rendered = self.to_string();
		if rendered.is_empty() {
			write!(f, "《{}》", self.name)
		} else if rendered.chars().count() > 100 {
			let prefix: String = rendered.chars().take(20).collect();
			write!(f, "《{}:{prefix} ···》", self.name)
		} else {
			write!(f, "《{}:{rendered}》", self.name)
		}
	}
}
