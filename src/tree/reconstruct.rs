//! Replays a builder's flattened piece sequence into a node tree.
//!
//! A single pass drives one explicit stack of open nodes seeded with
//! the root. Each piece is classified first (doctype, comment, text,
//! closing tag, opening tag) and then applied; every outward walk over
//! the stack is an iterative loop so closing cascades stay bounded.
//!
//! Only builder-produced markup is contracted to replay correctly;
//! this is not a general-purpose HTML parser.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::node::{HtmlNode, NodeId};
use crate::builder::Builder;
use crate::document::DOCTYPE;
use crate::error::TreeError;

// First alternative captures a tag open/close, second an attribute.
static PARSE_TAG: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"<(/?)(\w+)|([\w-]+)=('[^']*'|"[^"]*"|\w+)"#).unwrap()
});

enum PieceKind {
	Doctype,
	Comment(String),
	Text(String),
	Close(String),
	Open {
		name: String,
		attributes: Vec<(String, String)>,
	},
}

fn classify(piece: &str) -> PieceKind {
	if piece == DOCTYPE {
		return PieceKind::Doctype;
	}
	if piece.starts_with("<!") {
		let text = piece
			.strip_prefix("<!--")
			.and_then(|rest| rest.strip_suffix("-->"))
			.unwrap_or(piece);
		return PieceKind::Comment(text.to_string());
	}
	let mut matches = PARSE_TAG.captures_iter(piece);
	let Some(first) = matches.next() else {
		return PieceKind::Text(piece.to_string());
	};
	let Some(name) = first.get(2) else {
		// leading match was an attribute-shaped fragment, not a tag
		return PieceKind::Text(piece.to_string());
	};
	let name = name.as_str().to_string();
	if first.get(1).is_some_and(|m| m.as_str() == "/") {
		return PieceKind::Close(name);
	}
	let attributes = matches
		.filter_map(|capture| match (capture.get(3), capture.get(4)) {
			(Some(key), Some(value)) => {
				Some((key.as_str().to_string(), value.as_str().to_string()))
			}
			_ => None,
		})
		.collect();
	PieceKind::Open { name, attributes }
}

pub(crate) struct Reconstructor {
	nodes: Vec<HtmlNode>,
	stack: Vec<NodeId>,
}

const ROOT: NodeId = NodeId(0);

impl Reconstructor {
	/// Runs the full pass and returns the node arena with the root id.
	pub(crate) fn run(builder: &Builder) -> Result<(Vec<HtmlNode>, NodeId), TreeError> {
		let mut reconstructor = Reconstructor {
			nodes: vec![HtmlNode::root()],
			stack: vec![ROOT],
		};
		for piece in builder.flat_pieces() {
			reconstructor.step(&piece)?;
		}
		reconstructor.close_node(ROOT);
		Ok((reconstructor.nodes, ROOT))
	}

	fn step(&mut self, piece: &str) -> Result<(), TreeError> {
		match classify(piece) {
			PieceKind::Doctype => self.handle_doctype(),
			PieceKind::Comment(text) => self.handle_comment(text),
			PieceKind::Text(text) => {
				self.handle_text(text);
				Ok(())
			}
			PieceKind::Close(name) => {
				self.close_by_name(&name);
				Ok(())
			}
			PieceKind::Open { name, attributes } => self.handle_open(name, attributes),
		}
	}

	fn handle_doctype(&mut self) -> Result<(), TreeError> {
		if self.stack.len() > 1 {
			return Err(TreeError::DoctypeNotFirst);
		}
		let id = self.push_node(HtmlNode::doctype());
		self.add_child(ROOT, id)
	}

	fn handle_comment(&mut self, text: String) -> Result<(), TreeError> {
		let parent = self
			.stack
			.iter()
			.rev()
			.copied()
			.find(|id| !self.nodes[id.0].closed)
			.unwrap_or(ROOT);
		let id = self.push_node(HtmlNode::comment(text));
		self.add_child(parent, id)
	}

	fn handle_text(&mut self, text: String) {
		for id in self.stack.iter().rev() {
			let node = &mut self.nodes[id.0];
			if node.allows_text() && !node.closed {
				node.content.push_str(&text);
				return;
			}
		}
		debug!(%text, "text dropped: no text-capable open ancestor");
	}

	fn handle_open(
		&mut self,
		name: String,
		attributes: Vec<(String, String)>,
	) -> Result<(), TreeError> {
		let node = HtmlNode::element(name, attributes);
		loop {
			let top = *self.stack.last().unwrap_or(&ROOT);
			if self.nodes[top.0].can_contain(&node.name) {
				let id = self.push_node(node);
				self.add_child(top, id)?;
				self.stack.push(id);
				return Ok(());
			}
			trace!(
				parent = %self.nodes[top.0].name,
				child = %node.name,
				"content model forbids child, auto-closing ancestor"
			);
			self.close_node(top);
			self.stack.pop();
		}
	}

	/// Closes open nodes from the top of the stack until the named one
	/// is closed and popped; an out-of-order close therefore closes
	/// every intervening node instead of erroring. The root is never
	/// closed this way.
	fn close_by_name(&mut self, name: &str) {
		while self.stack.len() > 1 {
			let Some(top) = self.stack.pop() else {
				break;
			};
			self.close_node(top);
			if self.nodes[top.0].name == name {
				break;
			}
		}
	}

	/// Marks the node and all of its still-open descendants closed,
	/// via an explicit worklist.
	fn close_node(&mut self, id: NodeId) {
		let mut worklist = vec![id];
		while let Some(current) = worklist.pop() {
			if self.nodes[current.0].closed {
				continue;
			}
			self.nodes[current.0].closed = true;
			let children = self.nodes[current.0].children.clone();
			for child in children {
				if !self.nodes[child.0].closed {
					worklist.push(child);
				}
			}
		}
	}

	fn push_node(&mut self, node: HtmlNode) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(node);
		id
	}

	fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
		if self.nodes[parent.0].closed {
			return Err(TreeError::NodeClosed(self.nodes[parent.0].name.clone()));
		}
		self.nodes[child.0].parent = Some(parent);
		self.nodes[parent.0].children.push(child);
		Ok(())
	}
}
