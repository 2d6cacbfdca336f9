use thiserror::Error;

use crate::parser::Anchor;

/// Turns each anchor's href into an absolute link by prefixing `base_url`.
///
/// Plain concatenation: no slash normalisation, no decoding. The first anchor
/// without an href aborts the whole list.
pub fn format_links(base_url: &str, anchors: &[Anchor]) -> Result<Vec<String>, FormatError> {
    anchors
        .iter()
        .enumerate()
        .map(|(index, anchor)| match &anchor.href {
            Some(href) => Ok(format!("{base_url}{href}")),
            None => Err(FormatError::MissingHref { index }),
        })
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("matched anchor #{index} has no href attribute")]
    MissingHref { index: usize },
}
