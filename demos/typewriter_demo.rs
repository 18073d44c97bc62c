//! Typewriter Demo: Reveals a styled terminal transcript as if typed.
//!
//! Each line of output is its own content tree. A line starts typing only
//! after the previous one reports completion.
//!
//! Run with `RUST_LOG=reveal=debug` to watch session events on stderr.

use reveal::{
    on_events, ContentNode, InlineSurface, Modifiers, OutputBuffer, RevealConfig, Rgb, Style,
    Typewriter, TypewriterConfig,
};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn prompt(command: &str) -> ContentNode<Style> {
    ContentNode::container(
        Style::PLAIN,
        [
            ContentNode::container(
                Style::new().fg(Rgb::TERMINAL_GREEN).add(Modifiers::BOLD),
                [ContentNode::text("guest@portfolio")],
            ),
            ContentNode::text(":~$ "),
            ContentNode::text(command),
            ContentNode::text("\n"),
        ],
    )
}

fn transcript() -> Vec<ContentNode<Style>> {
    let heading = Style::new().fg(Rgb::from(0x61_af_ef)).add(Modifiers::BOLD);
    let dim = Style::new().add(Modifiers::DIM);
    vec![
        prompt("whoami"),
        ContentNode::container(
            Style::PLAIN,
            [
                ContentNode::container(heading, [ContentNode::text("Systems engineer")]),
                ContentNode::text(" building terminal tooling since "),
                ContentNode::number(2014),
                ContentNode::text(".\n"),
            ],
        ),
        prompt("ls projects"),
        ContentNode::container(
            dim,
            [
                ContentNode::text("flywheel/  "),
                ContentNode::container(
                    Style::new().fg(Rgb::from(0xe5_c0_7b)),
                    [ContentNode::text("reveal/  ")],
                ),
                ContentNode::Empty,
                ContentNode::text("dotfiles/\n"),
            ],
        ),
    ]
}

fn main() -> reveal::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = TypewriterConfig {
        reveal: RevealConfig::new(1, Duration::from_millis(15))?,
        ..TypewriterConfig::default()
    };
    let mut typewriter = Typewriter::with_config(config)?;
    let mut surface = InlineSurface::new(std::io::stdout())?;
    let mut out = OutputBuffer::new();

    // Finished lines are kept as rendered bytes above the active one
    let mut history = OutputBuffer::new();

    for line in transcript() {
        let finished = Rc::new(Cell::new(false));
        let flag = finished.clone();
        typewriter.present(Arc::new(line), on_events(|| {}, move || flag.set(true)))?;

        loop {
            out.clear();
            out.write_raw(history.as_bytes());
            typewriter.render(&mut out);
            surface.present(&out)?;

            if finished.get() {
                break;
            }
            typewriter.wait_tick(Duration::from_millis(100));
        }

        history.clear();
        history.write_raw(out.as_bytes());
    }

    Ok(())
}
