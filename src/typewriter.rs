//! Typewriter: presents a content tree as if it were being typed.
//!
//! The typewriter ties the pieces together. It hands each presented tree
//! to the [`RevealScheduler`], and on request projects that tree at the
//! current revealed count, adding a trailing cursor while the reveal is
//! still running.
//!
//! # Example
//!
//! ```rust,no_run
//! use reveal::{ContentNode, NoopObserver, OutputBuffer, Style, Typewriter, TypewriterConfig};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let mut typewriter = Typewriter::with_config(TypewriterConfig::default())?;
//! let tree = Arc::new(ContentNode::container(Style::PLAIN, [ContentNode::text("hello")]));
//! typewriter.present(tree, NoopObserver)?;
//!
//! let mut out = OutputBuffer::new();
//! while typewriter.wait_tick(Duration::from_millis(50)).is_some() {
//!     out.clear();
//!     typewriter.render(&mut out);
//! }
//! # Ok::<(), reveal::RevealError>(())
//! ```

use crate::content::{project_arc, ContentNode};
use crate::error::Result;
use crate::render::{Modifiers, OutputBuffer, Rgb, Style};
use crate::schedule::{RevealConfig, RevealObserver, RevealScheduler, TickOutcome};
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the typewriter.
#[derive(Debug, Clone, Copy)]
pub struct TypewriterConfig {
    /// Reveal pacing.
    pub reveal: RevealConfig,
    /// Glyph drawn after the revealed text while typing.
    pub cursor_glyph: char,
    /// Style of the cursor glyph.
    pub cursor_style: Style,
    /// Style every rendered leaf starts from.
    pub base_style: Style,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            cursor_glyph: '█',
            cursor_style: Style::new().fg(Rgb::TERMINAL_GREEN).add(Modifiers::BLINK),
            base_style: Style::PLAIN,
        }
    }
}

/// What to draw right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<M> {
    /// The revealed part of the tree. When the reveal is complete this is
    /// the presented tree itself.
    pub content: Arc<ContentNode<M>>,
    /// Whether a typing cursor follows the content.
    pub cursor: bool,
}

/// Progressive reveal of one content tree at a time.
pub struct Typewriter<M> {
    config: TypewriterConfig,
    scheduler: RevealScheduler<M>,
}

impl<M: Clone> Typewriter<M> {
    /// Create a typewriter with default cursor settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the reveal configuration is invalid.
    pub fn new(reveal: RevealConfig) -> Result<Self> {
        Self::with_config(TypewriterConfig {
            reveal,
            ..TypewriterConfig::default()
        })
    }

    /// Create a typewriter with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the reveal configuration is invalid.
    pub fn with_config(config: TypewriterConfig) -> Result<Self> {
        Ok(Self {
            scheduler: RevealScheduler::new(config.reveal)?,
            config,
        })
    }

    /// Get the configuration.
    pub const fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// Present `tree`.
    ///
    /// A tree that is not the currently presented `Arc` starts a new
    /// reveal from zero. Presenting the same `Arc` again keeps progress
    /// and only swaps in `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer thread cannot be spawned.
    pub fn present(
        &mut self,
        tree: Arc<ContentNode<M>>,
        observer: impl RevealObserver + 'static,
    ) -> Result<()> {
        self.scheduler.restart(&tree, observer)
    }

    /// Pause or resume typing. A stopped typewriter shows no cursor.
    pub fn set_stopped(&mut self, stopped: bool) {
        self.scheduler.set_stopped(stopped);
    }

    /// Check if typing is paused.
    pub const fn is_stopped(&self) -> bool {
        self.scheduler.is_stopped()
    }

    /// Drop the presented tree without completing it.
    pub fn clear(&mut self) {
        self.scheduler.cancel();
    }

    /// Apply a tick by hand. See [`RevealScheduler::advance`].
    pub fn advance(&mut self) -> TickOutcome {
        self.scheduler.advance()
    }

    /// Apply ticks that are already due. See [`RevealScheduler::pump`].
    pub fn pump(&mut self) -> usize {
        self.scheduler.pump()
    }

    /// Wait for and apply the next tick. See [`RevealScheduler::wait_tick`].
    pub fn wait_tick(&mut self, timeout: Duration) -> Option<TickOutcome> {
        self.scheduler.wait_tick(timeout)
    }

    /// Type until done or `timeout` passes.
    pub fn run_until_complete(&mut self, timeout: Duration) -> bool {
        self.scheduler.run_until_complete(timeout)
    }

    /// Check if the presented tree is fully revealed.
    pub fn is_complete(&self) -> bool {
        self.scheduler.is_complete()
    }

    /// Characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.scheduler.revealed()
    }

    /// Characters in the presented tree.
    pub fn total(&self) -> usize {
        self.scheduler.total()
    }

    /// Build the frame for the current revealed count.
    pub fn frame(&self) -> Frame<M> {
        let Some(tree) = self.scheduler.session() else {
            return Frame {
                content: Arc::new(ContentNode::Empty),
                cursor: false,
            };
        };
        let complete = self.scheduler.is_complete();
        Frame {
            content: project_arc(tree, self.scheduler.revealed()),
            cursor: !complete && !self.scheduler.is_stopped(),
        }
    }
}

impl Typewriter<Style> {
    /// Write the current frame as ANSI output.
    pub fn render(&self, out: &mut OutputBuffer) {
        out.write_frame(&self.frame(), &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{on_events, NoopObserver};
    use std::cell::Cell;
    use std::rc::Rc;

    fn scenario() -> Arc<ContentNode<Style>> {
        Arc::new(ContentNode::container(
            Style::PLAIN,
            [
                "AB".into(),
                ContentNode::container(
                    Style::new().add(Modifiers::BOLD),
                    [ContentNode::text("CD")],
                ),
                "E".into(),
            ],
        ))
    }

    fn manual(step: usize) -> Typewriter<Style> {
        Typewriter::new(RevealConfig::default().with_step(step).manual()).unwrap()
    }

    fn screen(typewriter: &Typewriter<Style>) -> String {
        let mut out = OutputBuffer::new();
        typewriter.render(&mut out);
        let mut parser = vt100::Parser::new(4, 40, 0);
        parser.process(out.as_bytes());
        parser.screen().contents()
    }

    #[test]
    fn test_frames_follow_document_order() {
        let mut typewriter = manual(2);
        typewriter.present(scenario(), NoopObserver).unwrap();

        let mut texts = vec![typewriter.frame().content.plain_text()];
        while typewriter.advance() != TickOutcome::Idle {
            texts.push(typewriter.frame().content.plain_text());
        }
        assert_eq!(texts, ["", "AB", "ABCD", "ABCDE"]);
    }

    #[test]
    fn test_cursor_only_while_typing() {
        let mut typewriter = manual(2);
        let tree = scenario();
        typewriter.present(Arc::clone(&tree), NoopObserver).unwrap();

        assert!(typewriter.frame().cursor);
        assert_eq!(screen(&typewriter), "█");

        typewriter.advance();
        assert_eq!(screen(&typewriter), "AB█");

        typewriter.advance();
        typewriter.advance();
        let frame = typewriter.frame();
        assert!(!frame.cursor);
        assert!(Arc::ptr_eq(&frame.content, &tree));
        assert_eq!(screen(&typewriter), "ABCDE");
    }

    #[test]
    fn test_stopped_hides_cursor_and_freezes() {
        let mut typewriter = manual(1);
        typewriter.present(scenario(), NoopObserver).unwrap();
        typewriter.advance();

        typewriter.set_stopped(true);
        assert_eq!(typewriter.advance(), TickOutcome::Suppressed);
        assert!(!typewriter.frame().cursor);
        assert_eq!(screen(&typewriter), "A");

        typewriter.set_stopped(false);
        typewriter.advance();
        assert_eq!(screen(&typewriter), "AB█");
    }

    #[test]
    fn test_replacing_tree_restarts() {
        let mut typewriter = manual(1);
        let completes = Rc::new(Cell::new(0));
        let seen = completes.clone();
        typewriter
            .present(scenario(), on_events(|| {}, move || seen.set(seen.get() + 1)))
            .unwrap();
        typewriter.advance();
        typewriter.advance();

        let next = Arc::new(ContentNode::text("xy"));
        typewriter.present(Arc::clone(&next), NoopObserver).unwrap();
        assert_eq!(typewriter.revealed(), 0);
        assert_eq!(typewriter.total(), 2);
        assert_eq!(typewriter.frame().content.plain_text(), "");

        while typewriter.advance() != TickOutcome::Idle {}
        assert_eq!(typewriter.frame().content.plain_text(), "xy");
        assert_eq!(completes.get(), 0);
    }

    #[test]
    fn test_empty_tree_is_complete_immediately() {
        let mut typewriter = manual(1);
        let updates = Rc::new(Cell::new(0));
        let completes = Rc::new(Cell::new(0));
        let (u, c) = (updates.clone(), completes.clone());
        typewriter
            .present(
                Arc::new(ContentNode::Empty),
                on_events(move || u.set(u.get() + 1), move || c.set(c.get() + 1)),
            )
            .unwrap();

        assert!(typewriter.is_complete());
        assert!(!typewriter.frame().cursor);
        assert_eq!((updates.get(), completes.get()), (0, 1));
    }

    #[test]
    fn test_no_tree_renders_nothing() {
        let typewriter = manual(1);
        let frame = typewriter.frame();
        assert!(!frame.cursor);
        assert_eq!(*frame.content, ContentNode::Empty);
        assert_eq!(screen(&typewriter), "");
    }

    #[test]
    fn test_threaded_typewriter_and_teardown() {
        let config = RevealConfig::default().with_interval(Duration::from_millis(1));
        let mut typewriter = Typewriter::new(config).unwrap();
        typewriter.present(scenario(), NoopObserver).unwrap();
        assert!(typewriter.run_until_complete(Duration::from_secs(5)));
        assert_eq!(screen(&typewriter), "ABCDE");

        // Dropping mid-reveal stops the timer thread
        let mut unfinished: Typewriter<Style> = Typewriter::new(config).unwrap();
        unfinished
            .present(Arc::new(ContentNode::text("long text")), NoopObserver)
            .unwrap();
        unfinished.wait_tick(Duration::from_secs(1));
        drop(unfinished);
    }
}
