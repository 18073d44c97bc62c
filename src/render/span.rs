//! Flatten a styled content tree into a run of styled spans.

use super::style::Style;
use crate::content::ContentNode;

/// A run of text drawn with one resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text.
    pub text: String,
    /// Fully resolved style.
    pub style: Style,
}

/// Walk `node` in document order, resolving each leaf's style.
///
/// Empty leaves produce nothing and adjacent leaves with the same
/// resolved style are merged.
pub fn flatten(node: &ContentNode<Style>, base: Style) -> Vec<Span> {
    let mut spans = Vec::new();
    flatten_into(node, base, &mut spans);
    spans
}

fn flatten_into(node: &ContentNode<Style>, inherited: Style, spans: &mut Vec<Span>) {
    match node {
        ContentNode::Leaf(text) if text.is_empty() => {}
        ContentNode::Leaf(text) => match spans.last_mut() {
            Some(last) if last.style == inherited => last.text.push_str(text),
            _ => spans.push(Span {
                text: text.clone(),
                style: inherited,
            }),
        },
        ContentNode::Container { children, meta } => {
            let style = inherited.patch(*meta);
            for child in children {
                flatten_into(child, style, spans);
            }
        }
        ContentNode::Empty => {}
    }
}
