//! Fluent HTML5 document builder with content-model-aware tree
//! reconstruction.
//!
//! Two layers, leaves first. A [`Builder`] accumulates markup as a
//! flat, mutable sequence of fragments and named template slots,
//! supporting deferred attribute attachment, scoped nesting and late
//! slot mutation. A [`SyntaxTree`] replays that flat output through a
//! miniature HTML5 content-model grammar to rebuild a validated node
//! tree, auto-closing elements whose content model forbids a new
//! child, for pretty-printing and structural checks.
//!
//! ## Example
//!
//! ```
//! use tagwright::{Builder, SyntaxTree};
//!
//! let mut page = Builder::new("page");
//! page.tag("div").attr("id", "main").unwrap().content("Hello World!");
//! assert_eq!(page.html(), "<div id=main>Hello World!</div>");
//!
//! let tree = SyntaxTree::from_builder(&page).unwrap();
//! assert_eq!(tree.to_html(), page.html());
//! ```
//!
//! Documents come pre-seeded with a doctype and head boilerplate:
//!
//! ```
//! use tagwright::DocumentOptions;
//!
//! let doc = DocumentOptions::new().title("Home").build().unwrap();
//! assert!(doc.html().starts_with("<!DOCTYPE html>"));
//! ```

pub mod builder;
pub mod document;
pub mod error;
pub mod escape;
pub mod html5;
pub mod tree;

pub use builder::{AttrValue, Builder, Content};
pub use document::{DocumentOptions, document};
pub use error::{BuilderError, TreeError};
pub use escape::Raw;
pub use tree::{HtmlNode, NodeId, NodeKind, SyntaxTree};
