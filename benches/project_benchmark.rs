//! Projection benchmark: cost of building one frame.
//!
//! Every tick re-projects the whole tree, so this bounds the per-tick cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reveal::{length, project, ContentNode, Modifiers, Style};

/// A transcript-shaped tree: `lines` containers of a few styled leaves each.
fn transcript(lines: usize) -> ContentNode<Style> {
    let bold = Style::new().add(Modifiers::BOLD);
    ContentNode::container(
        Style::PLAIN,
        (0..lines).map(|i| {
            ContentNode::container(
                Style::PLAIN,
                [
                    ContentNode::container(bold, [ContentNode::text("guest@portfolio")]),
                    ContentNode::text(":~$ "),
                    ContentNode::number(i),
                    ContentNode::text(" the quick brown fox jumps over the lazy dog\n"),
                ],
            )
        }),
    )
}

fn count_length(c: &mut Criterion) {
    let tree = transcript(100);
    c.bench_function("length_100_lines", |b| {
        b.iter(|| length(black_box(&tree)));
    });
}

fn project_midway(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_midway");
    for lines in [10, 100, 1000] {
        let tree = transcript(lines);
        let budget = length(&tree) / 2;
        group.bench_with_input(BenchmarkId::from_parameter(lines), &tree, |b, tree| {
            b.iter(|| project(black_box(tree), black_box(budget)));
        });
    }
    group.finish();
}

fn project_full(c: &mut Criterion) {
    let tree = transcript(100);
    let total = length(&tree);
    c.bench_function("project_full_100_lines", |b| {
        b.iter(|| project(black_box(&tree), black_box(total)));
    });
}

criterion_group!(benches, count_length, project_midway, project_full);
criterion_main!(benches);
