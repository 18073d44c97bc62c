//! # Flywheel Reveal
//!
//! Typewriter-style reveal of nested, styled content for terminal UIs.
//!
//! A content tree (text leaves inside decorated containers) is revealed
//! one character at a time, in document order, while keeping the shape
//! of the tree and every container's metadata intact.
//!
//! ## Core Concepts
//!
//! - **Budget counting**: [`length`] counts the characters a tree can reveal
//! - **Projection**: [`project`] cuts a tree down to a reveal budget without
//!   touching the original
//! - **Scheduling**: [`RevealScheduler`] grows the budget on a timer and
//!   reports `on_update` / `on_complete` exactly as often as they happen
//! - **Presentation**: [`Typewriter`] restarts on new trees and adds a
//!   cursor while typing
//!
//! ## Example
//!
//! ```rust
//! use reveal::{project, ContentNode};
//!
//! let tree: ContentNode<&str> = ContentNode::container(
//!     "line",
//!     [ContentNode::text("AB"), ContentNode::container("bold", [ContentNode::text("CD")]), "E".into()],
//! );
//!
//! assert_eq!(project(&tree, 3).plain_text(), "ABC");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod content;
pub mod error;
pub mod render;
pub mod schedule;
pub mod typewriter;

// Re-exports for convenience
pub use content::{length, project, project_arc, ContentNode};
pub use error::{Result, RevealError};
pub use render::{InlineSurface, Modifiers, OutputBuffer, Rgb, Span, Style};
pub use schedule::{
    on_events, NoopObserver, RevealConfig, RevealObserver, RevealScheduler, TickOutcome, TimerMode,
};
pub use typewriter::{Frame, Typewriter, TypewriterConfig};
