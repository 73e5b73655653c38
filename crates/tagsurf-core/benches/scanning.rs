use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use tagsurf_core::bracket::{classify, find_partner};
use tagsurf_core::{
    Command, CommandExecutor, Position, ScanLimits, Selection, TagKind, TagScanner, TextDocument,
};
use tagsurf_lang::MarkupDialect;

/// `<section>` holding `row_count` three-line rows.
fn large_markup(row_count: usize) -> String {
    let mut out = String::with_capacity(row_count * 80);
    out.push_str("<section>\n");
    for i in 0..row_count {
        out.push_str(&format!(
            "  <div class=\"row\">\n    <span>{i:06}</span> {{ call(a, [b, c]) }}\n  </div>\n"
        ));
    }
    out.push_str("</section>");
    out
}

fn unbounded() -> TagScanner {
    TagScanner::with_limits(ScanLimits {
        enclosing_lines: 100,
        paired_lines: 1_000_000,
        surrounding_lines: 1_000_000,
    })
}

fn bench_partner_across_document(c: &mut Criterion) {
    let doc = TextDocument::new(&large_markup(10_000));
    let scanner = unbounded();
    let open = scanner
        .find_enclosing(&doc, Position::new(0, 1))
        .unwrap();
    assert_eq!(open.kind, TagKind::Opening);

    c.bench_function("tag_partner/forward_30k_lines", |b| {
        b.iter(|| black_box(scanner.find_partner(&doc, black_box(&open))))
    });

    let close = scanner.find_partner(&doc, &open).unwrap();
    c.bench_function("tag_partner/backward_30k_lines", |b| {
        b.iter(|| black_box(scanner.find_partner(&doc, black_box(&close))))
    });
}

fn bench_surrounding_tag(c: &mut Criterion) {
    let doc = TextDocument::new(&large_markup(10_000));
    let scanner = TagScanner::new();
    // Inside the content of a row well into the file.
    let position = Position::new(15_002, 12);

    c.bench_function("surrounding_tag/mid_document", |b| {
        b.iter(|| black_box(scanner.surrounding_tag(&doc, black_box(position))))
    });
}

fn bench_bracket_partner(c: &mut Criterion) {
    let doc = TextDocument::new(&large_markup(10_000));
    let loc = classify('{', Position::new(15_002, 24)).unwrap();

    c.bench_function("bracket_partner/single_line", |b| {
        b.iter(|| black_box(find_partner(&doc, black_box(loc))))
    });
}

fn bench_delete_surrounding_pair(c: &mut Criterion) {
    let text = large_markup(10_000);
    c.bench_function("delete_surrounding_pair/mid_document", |b| {
        b.iter_batched(
            || {
                let mut executor = CommandExecutor::new(&text, MarkupDialect::Html);
                executor.set_selections(vec![Selection::caret(Position::new(15_002, 12))]);
                executor
            },
            |mut executor| {
                let result = executor
                    .execute(Command::DeleteSurroundingTagPair)
                    .unwrap();
                black_box(result);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_partner_across_document,
    bench_surrounding_tag,
    bench_bracket_partner,
    bench_delete_surrounding_pair
);
criterion_main!(benches);
