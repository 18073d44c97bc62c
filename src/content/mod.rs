//! Content trees and the pure half of the reveal engine.
//!
//! - [`ContentNode`]: leaves of text, decorated containers, and `Empty`
//! - [`length`]: how many characters a tree can reveal
//! - [`project`]: the partial tree visible at a given budget
//!
//! Nothing here has side effects. The scheduler in [`crate::schedule`]
//! decides *when* the budget grows; this module decides *what* that
//! budget shows.

mod measure;
mod node;
mod project;

pub use measure::{grapheme_len, grapheme_prefix, length};
pub use node::ContentNode;
pub use project::{project, project_arc, project_with};
