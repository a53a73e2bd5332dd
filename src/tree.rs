//! Validated tree reconstruction and pretty-printing.
//!
//! [`SyntaxTree`] rebuilds a nested node tree from a builder's flat
//! output, auto-closing elements whose content model forbids a new
//! child. Plain serialization returns the builder's original flat
//! rendering verbatim; pretty serialization walks the reconstructed
//! tree with indentation.

pub mod node;
mod reconstruct;

pub use node::{HtmlNode, NodeId, NodeKind};

use crate::builder::Builder;
use crate::error::TreeError;
use reconstruct::Reconstructor;

/// A validated tree reconstructed from a builder's flat output.
#[derive(Debug)]
pub struct SyntaxTree {
	nodes: Vec<HtmlNode>,
	root: NodeId,
	source: String,
}

impl SyntaxTree {
	/// Reconstructs a tree from the builder's flattened piece sequence.
	pub fn from_builder(builder: &Builder) -> Result<Self, TreeError> {
		let source = builder.to_string();
		let (nodes, root) = Reconstructor::run(builder)?;
		Ok(Self { nodes, root, source })
	}

	/// The invisible root wrapper node.
	pub fn root(&self) -> &HtmlNode {
		&self.nodes[self.root.0]
	}

	/// Resolves a node id within this tree.
	pub fn node(&self, id: NodeId) -> &HtmlNode {
		&self.nodes[id.0]
	}

	/// Iterates over the root's direct children.
	pub fn iter(&self) -> impl Iterator<Item = &HtmlNode> {
		self.root().children.iter().map(|id| &self.nodes[id.0])
	}

	/// Returns the original flat rendering, bit-identical to the
	/// builder's own output.
	pub fn to_html(&self) -> &str {
		&self.source
	}

	/// Pretty-prints the reconstructed tree, one node per line.
	///
	/// A node's own text content is indented one level deeper than its
	/// tags; children of the root get no extra indent level.
	pub fn to_pretty(&self, indent: &str) -> String {
		let mut out = String::new();
		self.pretty_node(self.root, indent, 0, &mut out);
		out
	}

	fn pretty_node(&self, id: NodeId, indent: &str, level: usize, out: &mut String) {
		let node = &self.nodes[id.0];
		let opening = node.opening_tag();
		if !opening.is_empty() {
			out.push_str(&indent.repeat(level));
			out.push_str(&opening);
			out.push('\n');
		}
		if node.kind == NodeKind::Element && !node.content.is_empty() {
			out.push_str(&indent.repeat(level + 1));
			out.push_str(&node.content);
			out.push('\n');
		}
		let child_level = if node.kind == NodeKind::Root {
			level
		} else {
			level + 1
		};
		for child in &node.children {
			self.pretty_node(*child, indent, child_level, out);
		}
		if let Some(closing) = node.closing_tag() {
			out.push_str(&indent.repeat(level));
			out.push_str(&closing);
			out.push('\n');
		}
	}
}
