// SPDX-License-Identifier: MIT
//
// Criterion benchmarks for the layout engine: word-wrapping and full
// block rendering of a long justification-sized text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kdv_layout::flow::{PageGeometry, SUBHEADING_SIZE};
use kdv_layout::{wrap, BlockRenderer, ContentBlock, HelveticaMetrics};

/// Roughly five printed pages of body prose.
fn long_text() -> String {
    "Mein Gewissen verbietet mir jede Mitwirkung an bewaffneter Gewalt. "
        .repeat(400)
}

fn bench_wrap(c: &mut Criterion) {
    let text = long_text();
    let measurer = HelveticaMetrics;
    let usable = PageGeometry::a4().usable_width();

    c.bench_function("wrap long paragraph", |b| {
        b.iter(|| {
            let lines = wrap(black_box(&text), usable, 11.0, &measurer);
            black_box(lines);
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let text = long_text();
    let measurer = HelveticaMetrics;
    let blocks = vec![
        ContentBlock::heading("Persönliche Gewissensbegründung", 16.0),
        ContentBlock::heading("Weshalb Waffengewalt unvereinbar ist", SUBHEADING_SIZE),
        ContentBlock::paragraph(text),
    ];

    c.bench_function("render multi-page document", |b| {
        b.iter(|| {
            let mut renderer = BlockRenderer::new(PageGeometry::a4(), &measurer);
            let cursor = renderer.start();
            renderer.render(black_box(&blocks), cursor);
            black_box(renderer.into_document());
        });
    });
}

criterion_group!(benches, bench_wrap, bench_render);
criterion_main!(benches);
