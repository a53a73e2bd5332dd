//! Reconstructed tree nodes.

use crate::document::DOCTYPE;
use crate::html5::{self, ContentModel};

/// Index of a node within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// What kind of node a reconstructed entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
	/// Invisible wrapper; accepts any child, never closed implicitly.
	Root,
	/// Content-less doctype marker.
	Doctype,
	/// Comment; its text renders inside the comment markers.
	Comment,
	/// A reconstructed element.
	Element,
}

/// One reconstructed node: tag name, attributes in insertion order,
/// accumulated text content, children, and closing state.
#[derive(Debug, Clone)]
pub struct HtmlNode {
	pub(crate) kind: NodeKind,
	pub(crate) name: String,
	pub(crate) attributes: Vec<(String, String)>,
	pub(crate) content: String,
	pub(crate) children: Vec<NodeId>,
	pub(crate) parent: Option<NodeId>,
	pub(crate) expects_end_tag: bool,
	pub(crate) closed: bool,
}

impl HtmlNode {
	pub(crate) fn root() -> Self {
		Self::with_kind(NodeKind::Root, String::new(), Vec::new(), false)
	}

	pub(crate) fn doctype() -> Self {
		Self::with_kind(NodeKind::Doctype, String::new(), Vec::new(), false)
	}

	pub(crate) fn comment(text: String) -> Self {
		let mut node =
			Self::with_kind(NodeKind::Comment, String::new(), Vec::new(), false);
		node.content = text;
		node
	}

	pub(crate) fn element(name: String, attributes: Vec<(String, String)>) -> Self {
		let expects_end_tag = !html5::omits_end_tag(&name);
		Self::with_kind(NodeKind::Element, name, attributes, expects_end_tag)
	}

	fn with_kind(
		kind: NodeKind,
		name: String,
		attributes: Vec<(String, String)>,
		expects_end_tag: bool,
	) -> Self {
		Self {
			kind,
			name,
			attributes,
			content: String::new(),
			children: Vec::new(),
			parent: None,
			expects_end_tag,
			closed: false,
		}
	}

	/// The node's kind.
	pub fn kind(&self) -> NodeKind {
		self.kind
	}

	/// The element's tag name (empty for root, doctype and comments).
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Attributes in insertion order, values verbatim.
	pub fn attributes(&self) -> &[(String, String)] {
		&self.attributes
	}

	/// Accumulated text content.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Child node ids in document order.
	pub fn children(&self) -> &[NodeId] {
		&self.children
	}

	/// The parent node id, if any.
	pub fn parent(&self) -> Option<NodeId> {
		self.parent
	}

	/// Whether the node has been closed.
	pub fn is_closed(&self) -> bool {
		self.closed
	}

	/// Whether this node's content model permits `tag` as a direct child.
	pub fn can_contain(&self, tag: &str) -> bool {
		match self.kind {
			NodeKind::Root => true,
			NodeKind::Doctype | NodeKind::Comment => false,
			NodeKind::Element => match html5::content_model(&self.name) {
				ContentModel::Unrestricted => true,
				ContentModel::Empty => false,
				ContentModel::Only(children) => children.contains(tag),
			},
		}
	}

	/// Whether text content may accumulate on this node.
	pub fn allows_text(&self) -> bool {
		self.kind == NodeKind::Element && html5::allows_text(&self.name)
	}

	pub(crate) fn opening_tag(&self) -> String {
		match self.kind {
			NodeKind::Root => String::new(),
			NodeKind::Doctype => DOCTYPE.to_string(),
			NodeKind::Comment => format!("<!-- {} -->", self.content),
			NodeKind::Element => {
				let mut tag = format!("<{}", self.name);
				for (name, value) in &self.attributes {
					tag.push(' ');
					tag.push_str(name);
					tag.push('=');
					tag.push_str(value);
				}
				tag.push('>');
				tag
			}
		}
	}

	pub(crate) fn closing_tag(&self) -> Option<String> {
		if self.kind == NodeKind::Element && self.expects_end_tag {
			Some(format!("</{}>", self.name))
		} else {
			None
		}
	}
}
