//! Error types for builder misuse and tree reconstruction.

use thiserror::Error;

/// Error type for builder and document operations.
///
/// Every variant is a misuse of the API detected synchronously at the
/// offending call; nothing is retried or recovered internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuilderError {
	/// Attributes were attached where the preceding piece is not an opening tag.
	#[error("can only add attributes to an opening tag, got {0:?}")]
	AttributesWithoutTag(String),

	/// Attributes were attached right after a template slot reference.
	#[error("cannot add attributes to template slot {0:?}")]
	AttributesOnSlot(String),

	/// Scoped nesting was entered while no end tag was pending.
	#[error("scoped nesting requires a non-void element with an end tag")]
	ScopeOnVoidElement,

	/// A scope was left without a matching enter.
	#[error("no open scope to leave")]
	ScopeUnderflow,

	/// A template slot was read before being created.
	#[error("template {0:?} not found; insert it into the document to create it")]
	TemplateNotFound(String),

	/// A linked resource URL matched no entry in the routing table.
	#[error("unknown extension in resource URL {0:?}")]
	UnknownResource(String),
}

/// Error type for tree reconstruction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeError {
	/// A node already marked closed was mutated.
	#[error("tag {0:?} is already closed")]
	NodeClosed(String),

	/// A doctype piece appeared after other content had opened.
	#[error("doctype must be the first element")]
	DoctypeNotFirst,
}
