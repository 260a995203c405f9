use binix_search::color::get_rgb;
use binix_search::dom::{get_container_and_button, HtmlDocument};
use binix_search::recent_searches::{filter_recent_searches, RecentSearchItem, SearchParams};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PAGE: &str = r#"<html><body><header><form class="search"><input id="query"><input type="submit"></form></header></body></html>"#;

/// Benchmark group for page preparation
fn benchmark_dom(c: &mut Criterion) {
    let mut group = c.benchmark_group("dom");

    group.bench_function("parse_and_extract_form", |b| {
        b.iter(|| {
            let mut doc = HtmlDocument::parse(black_box(PAGE));
            black_box(get_container_and_button(&mut doc, "#query"))
        })
    });

    group.finish();
}

/// Benchmark group for color resolution
fn benchmark_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    for input in ["#1f73b7", "rebeccapurple", "hsl(210deg 70% 42%)"] {
        group.bench_function(input, |b| b.iter(|| black_box(get_rgb(black_box(input)))));
    }

    group.finish();
}

fn benchmark_recent_searches(c: &mut Criterion) {
    let items: Vec<_> = (0..5)
        .map(|i| RecentSearchItem::from_query(&format!("query {i}")))
        .collect();

    c.bench_function("filter_recent_searches", |b| {
        b.iter(|| {
            black_box(filter_recent_searches(&SearchParams {
                query: black_box("query"),
                items: &items,
                limit: 5,
            }))
        })
    });
}

criterion_group!(benches, benchmark_dom, benchmark_color, benchmark_recent_searches);
criterion_main!(benches);
