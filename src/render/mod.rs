//! Terminal rendering for revealed content.
//!
//! This is the one place that gives container metadata a meaning:
//! a `ContentNode<Style>` is flattened into styled [`Span`]s and written
//! as ANSI sequences through an [`OutputBuffer`].

mod output;
mod span;
mod style;
mod terminal;

pub use output::OutputBuffer;
pub use span::{flatten, Span};
pub use style::{Modifiers, Rgb, Style};
pub use terminal::InlineSurface;
