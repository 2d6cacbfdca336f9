use lol_html::errors::RewritingError;
use lol_html::{HtmlRewriter, Selector, Settings, element};
use thiserror::Error;
use tracing::debug;

/// An `<a>` element picked out by the link query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: Option<String>,
}

/// Streams `html` through the rewriter and collects every element matching
/// `query`, in document order.
///
/// Parsing and selection happen in the same pass; nothing of the document is
/// kept beyond the matched anchors. Zero matches is an empty vec, not an error.
pub fn select_anchors(html: &[u8], query: &str) -> Result<Vec<Anchor>, ParseError> {
    // `element!` unwraps the selector parse, so reject bad queries up front.
    query
        .parse::<Selector>()
        .map_err(|e| ParseError::InvalidSelector(format!("{query}: {e}")))?;

    let mut anchors = Vec::new();

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![element!(query, |el| {
                let href = el.get_attribute("href");
                debug!(href = ?href, "matched anchor");
                anchors.push(Anchor { href });
                Ok(())
            })],
            ..Settings::new()
        },
        |_: &[u8]| {},
    );

    rewriter.write(html)?;
    rewriter.end()?;

    Ok(anchors)
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid selector {0}")]
    InvalidSelector(String),
    #[error("html rewriting failed: {0}")]
    Rewriting(#[from] RewritingError),
}
