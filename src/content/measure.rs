//! Budget counting: how many characters a content tree can reveal.
//!
//! A "character" is one extended grapheme cluster, so a reveal never
//! splits a combining sequence or an emoji ZWJ sequence in half.

use super::node::ContentNode;
use unicode_segmentation::UnicodeSegmentation;

/// Number of revealable characters in `text`.
#[inline]
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// The first `count` characters of `text`.
///
/// Returns the whole string when it is shorter than `count`.
pub fn grapheme_prefix(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    match text.grapheme_indices(true).nth(count) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Total revealable length of a tree, summed over its leaves depth-first.
pub fn length<M>(node: &ContentNode<M>) -> usize {
    match node {
        ContentNode::Leaf(text) => grapheme_len(text),
        ContentNode::Container { children, .. } => children.iter().map(length).sum(),
        ContentNode::Empty => 0,
    }
}
