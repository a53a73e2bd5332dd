//! Tree reconstruction integration tests
//!
//! Success Criteria:
//! 1. Plain serialization is bit-identical to the builder's render
//! 2. Reconstruction is deterministic (same tree twice)
//! 3. Content-model violations auto-close ancestors; no forbidden
//!    direct nesting survives
//! 4. Doctype, comments and bare text map to their node kinds
//! 5. Pretty output indents tags, text and children consistently

use rstest::*;
use tagwright::{
	Builder, DocumentOptions, HtmlNode, NodeKind, SyntaxTree, TreeError,
};

fn shape(tree: &SyntaxTree, node: &HtmlNode, out: &mut Vec<String>) {
	out.push(format!(
		"{:?}:{}:{:?}:{}",
		node.kind(),
		node.name(),
		node.attributes(),
		node.content()
	));
	for child in node.children() {
		shape(tree, tree.node(*child), out);
	}
}

fn tree_shape(tree: &SyntaxTree) -> Vec<String> {
	let mut out = Vec::new();
	shape(tree, tree.root(), &mut out);
	out
}

// ============================================================================
// Round-trip and determinism
// ============================================================================

/// Plain mode reproduces the builder's output exactly.
#[rstest]
fn test_plain_round_trip() {
	let mut doc = DocumentOptions::new()
		.title("Round Trip")
		.url("/style.css")
		.build()
		.unwrap();
	doc.tag("main").scope(|b| {
		b.tag("h1").content("Title");
		b.tag("p").text("First paragraph.");
		b.comment("boundary");
		b.tag("div").attr("id", "x").unwrap().content("boxed");
	})
	.unwrap();

	let tree = SyntaxTree::from_builder(&doc).unwrap();
	assert_eq!(tree.to_html(), doc.html());
}

/// Reconstructing twice yields structurally identical trees.
#[rstest]
fn test_reconstruction_is_deterministic() {
	let mut b = Builder::new("page");
	b.tag("div").attr("class", "wrap").unwrap().scope(|b| {
		b.tag("span").content("a");
		b.tag("span").content("b");
	})
	.unwrap();

	let first = SyntaxTree::from_builder(&b).unwrap();
	let second = SyntaxTree::from_builder(&b).unwrap();
	assert_eq!(tree_shape(&first), tree_shape(&second));
}

/// Every node ends up closed after reconstruction.
#[rstest]
fn test_all_nodes_closed() {
	let mut b = Builder::new("page");
	b.tag("div").enter().unwrap().tag("em").text("open ended");
	let tree = SyntaxTree::from_builder(&b).unwrap();
	assert!(tree.root().is_closed());
	for child in tree.iter() {
		assert!(child.is_closed());
	}
}

// ============================================================================
// Content-model enforcement
// ============================================================================

/// A child forbidden under the open element closes ancestors until a
/// permitting one is found.
#[rstest]
fn test_auto_close_on_forbidden_child() {
	// <div><p>text<div>… : p cannot contain div, so p is closed and
	// the inner div attaches to the outer div.
	let mut b = Builder::new("page");
	b.tag("div").enter().unwrap();
	b.tag("p").text("para");
	b.tag("div").content("inner");
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	let outer = tree.iter().next().unwrap();
	assert_eq!(outer.name(), "div");
	let names: Vec<&str> = outer
		.children()
		.iter()
		.map(|id| tree.node(*id).name())
		.collect();
	assert_eq!(names, ["p", "div"]);
	// the p kept its text and was closed before the inner div opened
	let p = tree.node(outer.children()[0]);
	assert_eq!(p.content(), "para");
	assert!(p.is_closed());
}

/// A list cannot directly contain a paragraph; the paragraph escapes
/// to the list's parent.
#[rstest]
fn test_paragraph_escapes_list() {
	let mut b = Builder::new("page");
	b.tag("div").enter().unwrap();
	b.tag("ul").enter().unwrap();
	b.tag("p").content("stray");
	b.leave().unwrap();
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	let div = tree.iter().next().unwrap();
	let names: Vec<&str> = div
		.children()
		.iter()
		.map(|id| tree.node(*id).name())
		.collect();
	assert_eq!(names, ["ul", "p"]);
	let ul = tree.node(div.children()[0]);
	assert!(ul.children().is_empty());
	let p = tree.node(div.children()[1]);
	assert_eq!(p.content(), "stray");
}

/// No forbidden parent/child pair survives as direct nesting.
#[rstest]
fn test_no_forbidden_nesting_survives() {
	let mut b = Builder::new("page");
	b.tag("table").enter().unwrap();
	b.tag("tr");
	b.tag("td").content("cell");
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	fn check(tree: &SyntaxTree, node: &HtmlNode) {
		for id in node.children() {
			let child = tree.node(*id);
			if child.kind() == NodeKind::Element && node.kind() == NodeKind::Element {
				assert!(
					node.can_contain(child.name()),
					"{} may not contain {}",
					node.name(),
					child.name()
				);
			}
			check(tree, child);
		}
	}
	check(&tree, tree.root());
}

// ============================================================================
// Special pieces
// ============================================================================

/// The doctype becomes a dedicated node under the root.
#[rstest]
fn test_doctype_node_first() {
	let doc = DocumentOptions::new().title("T").build().unwrap();
	let tree = SyntaxTree::from_builder(&doc).unwrap();
	let first = tree.iter().next().unwrap();
	assert_eq!(first.kind(), NodeKind::Doctype);
}

/// A doctype after content is rejected.
#[rstest]
fn test_doctype_after_content_is_error() {
	let mut b = Builder::new("page");
	b.tag("div").text("early");
	b.raw("<!DOCTYPE html>");
	assert_eq!(
		SyntaxTree::from_builder(&b).unwrap_err(),
		TreeError::DoctypeNotFirst
	);
}

/// Comments attach to the innermost open node.
#[rstest]
fn test_comment_attaches_inside() {
	let mut b = Builder::new("page");
	b.tag("div").enter().unwrap();
	b.comment("marker");
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	let div = tree.iter().next().unwrap();
	let comment = tree.node(div.children()[0]);
	assert_eq!(comment.kind(), NodeKind::Comment);
	assert_eq!(comment.content(), "marker");
}

/// Text aimed at a non-text element lands on the nearest text-capable
/// ancestor.
#[rstest]
fn test_text_redirected_to_text_capable_ancestor() {
	let mut b = Builder::new("page");
	b.tag("div").enter().unwrap();
	b.tag("picture").enter().unwrap();
	b.text("stray");
	b.leave().unwrap();
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	let div = tree.iter().next().unwrap();
	assert_eq!(div.content(), "stray");
	let picture = tree.node(div.children()[0]);
	assert_eq!(picture.name(), "picture");
	assert_eq!(picture.content(), "");
}

/// Text with no text-capable ancestor is dropped from the tree but
/// stays in the plain rendering.
#[rstest]
fn test_dropped_text_only_in_plain_rendering() {
	let mut b = Builder::new("page");
	b.tag("picture").enter().unwrap();
	b.text("gone");
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	assert!(tree.to_html().contains("gone"));
	assert!(!tree.to_pretty("  ").contains("gone"));
}

/// Attributes survive reconstruction in insertion order.
#[rstest]
fn test_attributes_preserved_in_order() {
	let mut b = Builder::new("page");
	b.tag("div")
		.attr("id", "main")
		.unwrap()
		.attr("class", "a b")
		.unwrap()
		.content("x");

	let tree = SyntaxTree::from_builder(&b).unwrap();
	let div = tree.iter().next().unwrap();
	let attrs: Vec<(&str, &str)> = div
		.attributes()
		.iter()
		.map(|(k, v)| (k.as_str(), v.as_str()))
		.collect();
	assert_eq!(attrs, [("id", "main"), ("class", "\"a b\"")]);
}

// ============================================================================
// Pretty printing
// ============================================================================

/// Exact indented rendering of a small tree.
#[rstest]
fn test_pretty_output_exact() {
	let mut b = Builder::new("page");
	b.tag("div")
		.attr("id", "x")
		.unwrap()
		.enter()
		.unwrap()
		.tag("em")
		.content("hi");
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	assert_eq!(
		tree.to_pretty("  "),
		"<div id=x>\n  <em>\n    hi\n  </em>\n</div>\n"
	);
}

/// Comments render as comment markers in pretty mode.
#[rstest]
fn test_pretty_comment() {
	let mut b = Builder::new("page");
	b.tag("div").enter().unwrap();
	b.comment("note");
	b.leave().unwrap();

	let tree = SyntaxTree::from_builder(&b).unwrap();
	assert_eq!(
		tree.to_pretty("  "),
		"<div>\n  <!-- note -->\n</div>\n"
	);
}

/// Omitted end tags do not print a closing line.
#[rstest]
fn test_pretty_omits_optional_end_tags() {
	let mut b = Builder::new("page");
	b.tag("p").content("solo");

	let tree = SyntaxTree::from_builder(&b).unwrap();
	assert_eq!(tree.to_pretty("  "), "<p>\n  solo\n");
}
