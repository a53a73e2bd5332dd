//! Document convenience constructor.
//!
//! Seeds a [`Builder`] with a doctype declaration and optional head
//! boilerplate: charset and title, a viewport meta element, and one
//! linked resource element per URL routed by filename or extension.

use crate::builder::{AttrValue, Builder};
use crate::error::BuilderError;

pub(crate) const DOCTYPE: &str = "<!DOCTYPE html>";

/// Link-element arguments routed by exact resource filename.
const LINK_BY_NAME: &[(&str, &[(&str, &str)])] =
	&[("manifest.json", &[("rel", "manifest")])];

/// Link-element arguments routed by resource extension.
const LINK_BY_EXT: &[(&str, &[(&str, &str)])] = &[
	("css", &[("rel", "stylesheet")]),
	("png", &[("rel", "icon"), ("type", "image/png")]),
	("svg", &[("rel", "icon"), ("type", "image/svg+xml")]),
	("ico", &[("rel", "icon"), ("type", "image/x-icon")]),
	("webp", &[("rel", "icon"), ("type", "image/webp")]),
	("avif", &[("rel", "icon"), ("type", "image/avif")]),
];

#[derive(Debug, Clone, Default, PartialEq)]
enum Viewport {
	#[default]
	Off,
	Device,
	Custom(String),
}

/// Options for the document convenience constructor.
///
/// ```
/// use tagwright::DocumentOptions;
///
/// let doc = DocumentOptions::new()
/// 	.title("Hello")
/// 	.html_attr("lang", "en")
/// 	.url("/style.css")
/// 	.build()
/// 	.unwrap();
/// assert!(doc.html().starts_with("<!DOCTYPE html><html lang=en>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
	title: Option<String>,
	urls: Vec<String>,
	viewport: Viewport,
	html_attrs: Vec<(String, AttrValue)>,
}

impl DocumentOptions {
	/// Creates new default options: a bare doctype declaration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the document title; also emits the charset meta element.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Links one resource URL.
	pub fn url(mut self, url: impl Into<String>) -> Self {
		self.urls.push(url.into());
		self
	}

	/// Links several resource URLs.
	pub fn urls<I, S>(mut self, urls: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.urls.extend(urls.into_iter().map(Into::into));
		self
	}

	/// Emits the device-scaling viewport meta element.
	pub fn viewport(mut self, enabled: bool) -> Self {
		self.viewport = if enabled { Viewport::Device } else { Viewport::Off };
		self
	}

	/// Emits a viewport meta element with a custom setting.
	pub fn viewport_content(mut self, content: impl Into<String>) -> Self {
		self.viewport = Viewport::Custom(content.into());
		self
	}

	/// Adds an attribute to the root `html` element, which is emitted
	/// only when at least one attribute is given.
	pub fn html_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.html_attrs.push((name.into(), value.into()));
		self
	}

	/// Builds the seeded document builder.
	///
	/// Fails with [`BuilderError::UnknownResource`] when a URL matches
	/// no entry in the routing table.
	pub fn build(self) -> Result<Builder, BuilderError> {
		let mut doc = Builder::new("Document");
		doc.raw(DOCTYPE);
		if !self.html_attrs.is_empty() {
			doc.tag("html");
			for (name, value) in self.html_attrs {
				doc.attr(&name, value)?;
			}
		}
		if let Some(title) = self.title {
			doc.tag("meta").attr("charset", "utf-8")?;
			doc.tag("title").content(title);
		}
		match self.viewport {
			Viewport::Off => {}
			Viewport::Device => {
				doc.tag("meta")
					.attr("name", "viewport")?
					.attr("content", "width=device-width,initial-scale=1")?;
			}
			Viewport::Custom(content) => {
				doc.tag("meta")
					.attr("name", "viewport")?
					.attr("content", content)?;
			}
		}
		for url in &self.urls {
			link_resource(&mut doc, url)?;
		}
		Ok(doc)
	}
}

/// Shorthand for a titled document with charset boilerplate.
pub fn document(title: impl Into<String>) -> Result<Builder, BuilderError> {
	DocumentOptions::new().title(title).build()
}

fn link_resource(doc: &mut Builder, url: &str) -> Result<(), BuilderError> {
	let filename = url.rsplit('/').next().unwrap_or(url);
	let ext = filename.rsplit('.').next().unwrap_or(filename);
	let link_args = LINK_BY_NAME
		.iter()
		.find(|(name, _)| *name == filename)
		.or_else(|| LINK_BY_EXT.iter().find(|(e, _)| *e == ext))
		.map(|(_, args)| *args);
	if let Some(args) = link_args {
		doc.tag("link").attr("href", url)?;
		for (name, value) in args {
			doc.attr(name, *value)?;
		}
	} else if url.ends_with(".js") {
		doc.tag("script").attr("src", url)?.attr("defer", true)?.close();
	} else if url.ends_with(".mjs") {
		doc.tag("script").attr("src", url)?.attr("type", "module")?.close();
	} else {
		return Err(BuilderError::UnknownResource(url.to_string()));
	}
	Ok(())
}
