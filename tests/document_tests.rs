//! Document constructor integration tests
//!
//! Success Criteria:
//! 1. A bare document is only a doctype declaration
//! 2. Title, charset, viewport and root attributes are seeded on demand
//! 3. Resource URLs route to the right link/script elements
//! 4. Unknown extensions are a reported configuration error

use rstest::*;
use tagwright::{BuilderError, DocumentOptions, document};

/// Default options produce only the doctype.
#[rstest]
fn test_empty_document_is_doctype_only() {
	let doc = DocumentOptions::new().build().unwrap();
	assert_eq!(doc.html(), "<!DOCTYPE html>");
}

/// A title brings the charset meta along.
#[rstest]
fn test_title_adds_charset_and_title() {
	let doc = document("My Page").unwrap();
	assert_eq!(
		doc.html(),
		"<!DOCTYPE html><meta charset=\"utf-8\"><title>My Page</title>"
	);
}

/// Root attributes emit the html element; none means no html element.
#[rstest]
fn test_html_element_only_with_attributes() {
	let with = DocumentOptions::new()
		.html_attr("lang", "en")
		.build()
		.unwrap();
	assert_eq!(with.html(), "<!DOCTYPE html><html lang=en>");

	let without = DocumentOptions::new().build().unwrap();
	assert!(!without.html().contains("<html"));
}

/// The default viewport disables device scaling.
#[rstest]
fn test_viewport_default_content() {
	let doc = DocumentOptions::new().viewport(true).build().unwrap();
	assert_eq!(
		doc.html(),
		"<!DOCTYPE html><meta name=viewport \
		 content=\"width=device-width,initial-scale=1\">"
	);
}

/// A custom viewport value passes through.
#[rstest]
fn test_viewport_custom_content() {
	let doc = DocumentOptions::new()
		.viewport_content("width=600")
		.build()
		.unwrap();
	assert!(doc.html().contains("content=\"width=600\""));
}

/// Each URL kind routes to its element.
#[rstest]
#[case("/assets/site.css", "<link href=\"/assets/site.css\" rel=stylesheet>")]
#[case("/favicon.ico", "<link href=\"/favicon.ico\" rel=icon type=\"image/x-icon\">")]
#[case("/icon.png", "<link href=\"/icon.png\" rel=icon type=\"image/png\">")]
#[case("/icon.svg", "<link href=\"/icon.svg\" rel=icon type=\"image/svg+xml\">")]
#[case("/manifest.json", "<link href=\"/manifest.json\" rel=manifest>")]
#[case("/app.js", "<script src=\"/app.js\" defer></script>")]
#[case("/app.mjs", "<script src=\"/app.mjs\" type=module></script>")]
fn test_resource_routing(#[case] url: &str, #[case] expected: &str) {
	let doc = DocumentOptions::new().url(url).build().unwrap();
	assert_eq!(doc.html(), format!("<!DOCTYPE html>{expected}"));
}

/// Several URLs link in order.
#[rstest]
fn test_urls_preserve_order() {
	let doc = DocumentOptions::new()
		.urls(["/a.css", "/b.js"])
		.build()
		.unwrap();
	let html = doc.html();
	let css = html.find("/a.css").unwrap();
	let js = html.find("/b.js").unwrap();
	assert!(css < js);
}

/// An unrecognized extension is an error, not a silent skip.
#[rstest]
fn test_unknown_extension_is_error() {
	let err = DocumentOptions::new()
		.url("/data.wasm")
		.build()
		.unwrap_err();
	assert_eq!(err, BuilderError::UnknownResource("/data.wasm".to_string()));
}
