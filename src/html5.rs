//! Static HTML5 element tables.
//!
//! Three kinds of shared, read-only data live here: the omit-set (void
//! elements plus elements whose end tag is optional), the text-allowed
//! set, and the content-model table mapping each tag to the child tags
//! its content model permits. The table is derived from the HTML5
//! content-category algebra (phrasing, flow, sectioning, heading, media,
//! form and script-supporting content).

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// A set of tag names.
pub type TagSet = HashSet<&'static str>;

/// Void elements never take an end tag.
const VOID: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "keygen",
	"link", "menuitem", "meta", "param", "source", "track", "wbr",
];

/// Elements whose end tag may be omitted per HTML5.
const OPTIONAL_END: &[&str] = &[
	"html", "head", "body", "p", "colgroup", "thead", "tbody", "tfoot",
	"tr", "th", "td", "li", "dt", "dd", "optgroup", "option",
];

const BASIC_INLINE: &[&str] = &[
	"a", "abbr", "area", "b", "bdi", "bdo", "br", "button", "cite", "code",
	"data", "datalist", "del", "dfn", "em", "i", "input", "ins", "kbd",
	"label", "map", "mark", "meter", "noscript", "output", "q", "ruby",
	"s", "samp", "select", "slot", "small", "span", "strong", "sub", "sup",
	"u", "var", "wbr",
];

const MEDIA_ELEMENTS: &[&str] = &[
	"audio", "canvas", "embed", "iframe", "img", "object", "picture",
	"svg", "video",
];

const FORM_ELEMENTS: &[&str] = &["fieldset", "form", "option", "textarea"];

const SCRIPT_SUPPORTING: &[&str] = &["script", "template"];

const HEADING_ELEMENTS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

const SECTIONING_ELEMENTS: &[&str] = &["article", "aside", "nav", "section"];

/// Elements that may accumulate text content directly.
const TEXT_ALLOWED: &[&str] = &[
	"a", "abbr", "address", "article", "aside", "b", "bdi", "bdo",
	"blockquote", "button", "caption", "cite", "code", "data", "datalist",
	"dd", "del", "details", "dfn", "div", "dl", "dt", "em", "fieldset",
	"figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
	"h5", "h6", "header", "hgroup", "i", "ins", "kbd", "label", "legend",
	"li", "main", "mark", "menu", "meter", "nav", "noscript", "ol",
	"option", "output", "p", "pre", "progress", "q", "rb", "rp", "rt",
	"rtc", "ruby", "s", "samp", "section", "select", "small", "span",
	"strong", "sub", "summary", "sup", "table", "tbody", "td", "textarea",
	"tfoot", "th", "thead", "time", "tr", "u", "ul", "var",
];

fn set(items: &[&'static str]) -> TagSet {
	items.iter().copied().collect()
}

static OMIT_END_TAG: LazyLock<TagSet> =
	LazyLock::new(|| VOID.iter().chain(OPTIONAL_END).copied().collect());

static TEXT_ALLOWED_SET: LazyLock<TagSet> = LazyLock::new(|| set(TEXT_ALLOWED));

static PHRASING_CONTENT: LazyLock<TagSet> = LazyLock::new(|| {
	let mut tags = set(BASIC_INLINE);
	tags.extend(MEDIA_ELEMENTS);
	tags.extend(["time", "template"]);
	tags
});

static HEADING_CONTENT: LazyLock<TagSet> = LazyLock::new(|| {
	let mut tags = PHRASING_CONTENT.clone();
	tags.extend(HEADING_ELEMENTS);
	tags
});

static FLOW_CONTENT: LazyLock<TagSet> = LazyLock::new(|| {
	let mut tags = set(BASIC_INLINE);
	tags.extend(MEDIA_ELEMENTS);
	tags.extend(FORM_ELEMENTS);
	tags.extend([
		"address", "article", "aside", "blockquote", "caption", "details",
		"dialog", "div", "dl", "dt", "fieldset", "figure", "footer", "h1",
		"h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "main",
		"math", "menu", "nav", "ol", "p", "pre", "progress", "section",
		"table", "template", "time", "ul",
	]);
	tags
});

/// Content-model table keyed by parent tag.
///
/// Transparent elements (`a`, `ins`, `del`, `map`, `object`, `video`,
/// `audio`, `noscript`, `slot`, `canvas`) and `template` are deliberately
/// absent, so they carry no restriction.
static CONTENT_MODEL: LazyLock<HashMap<&'static str, Option<TagSet>>> =
	LazyLock::new(|| {
		let phrasing = || PHRASING_CONTENT.clone();
		let flow = || FLOW_CONTENT.clone();
		let phrasing_minus = |tags: &[&'static str]| {
			let mut out = phrasing();
			for tag in tags {
				out.remove(tag);
			}
			out
		};
		let flow_minus = |tags: &[&'static str]| {
			let mut out = flow();
			for tag in tags {
				out.remove(tag);
			}
			out
		};
		let flow_minus_sets = |extra: &[&'static str]| {
			let mut out = flow();
			for tag in HEADING_CONTENT.iter() {
				out.remove(tag);
			}
			for tag in SECTIONING_ELEMENTS {
				out.remove(tag);
			}
			for tag in extra {
				out.remove(tag);
			}
			out
		};
		let with = |base: TagSet, extra: &[&'static str]| {
			let mut out = base;
			out.extend(extra);
			out
		};

		let mut table: HashMap<&'static str, Option<TagSet>> = HashMap::new();
		table.insert("abbr", Some(phrasing()));
		table.insert("address", Some(flow_minus_sets(&["address", "header", "footer"])));
		table.insert("area", None);
		table.insert("article", Some(flow()));
		table.insert("aside", Some(flow()));
		table.insert("b", Some(phrasing()));
		table.insert("bdi", Some(phrasing()));
		table.insert("bdo", Some(phrasing()));
		table.insert("blockquote", Some(flow()));
		table.insert("body", Some(flow()));
		table.insert("br", None);
		table.insert("button", Some(phrasing()));
		table.insert("canvas", None);
		table.insert("caption", Some(flow_minus(&["table"])));
		table.insert("cite", Some(phrasing()));
		table.insert("code", Some(phrasing()));
		table.insert("col", None);
		table.insert("colgroup", Some(set(&["col", "template"])));
		table.insert("datalist", Some(with(with(phrasing(), SCRIPT_SUPPORTING), &["option"])));
		table.insert("data", Some(phrasing()));
		table.insert("dd", Some(flow()));
		table.insert("details", Some(flow_minus(&["summary"])));
		table.insert("dfn", Some(phrasing_minus(&["dfn"])));
		table.insert("dialog", Some(flow()));
		table.insert("div", Some(with(with(flow(), SCRIPT_SUPPORTING), &["dt", "dd"])));
		table.insert("dl", Some(with(set(&["dt", "dd", "div"]), SCRIPT_SUPPORTING)));
		table.insert("dt", Some(flow_minus_sets(&["header", "footer"])));
		table.insert("em", Some(phrasing()));
		table.insert("embed", None);
		table.insert("fieldset", Some(with(flow(), &["legend"])));
		table.insert("figcaption", Some(flow()));
		table.insert("figure", Some(with(flow(), &["figcaption"])));
		table.insert("footer", Some(flow_minus(&["header", "footer"])));
		table.insert("form", Some(flow_minus(&["form"])));
		table.insert("h1", Some(phrasing()));
		table.insert("h2", Some(phrasing()));
		table.insert("h3", Some(phrasing()));
		table.insert("h4", Some(phrasing()));
		table.insert("h5", Some(phrasing()));
		table.insert("h6", Some(phrasing()));
		table.insert("header", Some(flow_minus(&["header", "footer"])));
		table.insert("hgroup", Some(set(&["h1", "h2", "h3", "h4", "h5", "h6", "p"])));
		table.insert("hr", None);
		table.insert("i", Some(phrasing()));
		table.insert("iframe", None);
		table.insert("img", None);
		table.insert("input", None);
		table.insert("kbd", Some(phrasing()));
		table.insert("label", Some(phrasing_minus(&["label"])));
		table.insert("legend", Some(HEADING_CONTENT.clone()));
		table.insert("li", Some(flow()));
		table.insert("link", None);
		table.insert("main", Some(flow()));
		table.insert("mark", Some(phrasing()));
		table.insert("menu", Some(with(set(&["li"]), SCRIPT_SUPPORTING)));
		table.insert("meta", None);
		table.insert("meter", Some(phrasing_minus(&["meter"])));
		table.insert("nav", Some(flow()));
		table.insert("ol", Some(with(set(&["li"]), SCRIPT_SUPPORTING)));
		table.insert("optgroup", Some(with(set(&["option"]), SCRIPT_SUPPORTING)));
		table.insert("option", None);
		table.insert("output", Some(phrasing()));
		table.insert("p", Some(phrasing()));
		table.insert("picture", Some(set(&["source", "img"])));
		table.insert("pre", Some(phrasing()));
		table.insert("progress", Some(phrasing_minus(&["progress"])));
		table.insert("q", Some(phrasing()));
		table.insert("rp", None);
		table.insert("rt", Some(phrasing()));
		table.insert("ruby", Some(with(phrasing(), &["rt", "rp"])));
		table.insert("s", Some(phrasing()));
		table.insert("samp", Some(phrasing()));
		table.insert("script", None);
		table.insert("search", Some(flow()));
		table.insert("section", Some(flow()));
		table.insert("select", Some(set(&["option", "optgroup", "hr"])));
		table.insert("small", Some(phrasing()));
		table.insert("source", None);
		table.insert("span", Some(phrasing()));
		table.insert("strong", Some(phrasing()));
		table.insert("style", None);
		table.insert("sub", Some(phrasing()));
		table.insert("summary", Some(HEADING_CONTENT.clone()));
		table.insert("sup", Some(phrasing()));
		table.insert(
			"table",
			Some(with(
				set(&["tbody", "thead", "tfoot", "tr", "caption", "colgroup"]),
				SCRIPT_SUPPORTING,
			)),
		);
		table.insert("tbody", Some(set(&["tr"])));
		table.insert("td", Some(flow()));
		table.insert("textarea", None);
		table.insert("tfoot", Some(set(&["tr"])));
		table.insert("th", Some(flow_minus_sets(&["header", "footer"])));
		table.insert("thead", Some(set(&["tr"])));
		table.insert("time", Some(phrasing()));
		table.insert("title", None);
		table.insert("tr", Some(set(&["th", "td"])));
		table.insert("track", None);
		table.insert("u", Some(phrasing()));
		table.insert("ul", Some(with(set(&["li"]), SCRIPT_SUPPORTING)));
		table.insert("var", Some(phrasing()));
		table.insert("wbr", None);
		table
	});

/// Result of a content-model lookup for one parent tag.
#[derive(Debug, Clone, Copy)]
pub enum ContentModel {
	/// No table entry: any child is permitted.
	Unrestricted,
	/// The element takes no children at all.
	Empty,
	/// Only the named tags may nest directly.
	Only(&'static TagSet),
}

/// Looks up the content model for `tag`.
pub fn content_model(tag: &str) -> ContentModel {
	let table: &'static HashMap<&'static str, Option<TagSet>> = &CONTENT_MODEL;
	match table.get(tag) {
		None => ContentModel::Unrestricted,
		Some(None) => ContentModel::Empty,
		Some(Some(children)) => ContentModel::Only(children),
	}
}

/// Whether `tag` must be emitted without an end tag.
pub fn omits_end_tag(tag: &str) -> bool {
	OMIT_END_TAG.contains(tag)
}

/// Whether `tag` is a void element.
pub fn is_void(tag: &str) -> bool {
	VOID.contains(&tag)
}

/// Whether `tag` may hold text content directly.
pub fn allows_text(tag: &str) -> bool {
	TEXT_ALLOWED_SET.contains(tag)
}
