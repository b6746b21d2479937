// benches/classify.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use dex_export::{
    classify::{self, CATALOGUE},
    emit,
    specs::pokedex,
};

const NAMES: [&str; 8] = [
    "<a>Bulbasaur</a>",
    "<a>Venusaur</a><br> <small>Mega Venusaur</small>",
    "<a>Rotom</a><br> <small>Wash Rotom</small>",
    "<a>Meowth</a><br> <small>Galarian Meowth</small>",
    "<a>Hoopa</a><br> <small>Hoopa Unbound</small>",
    "<a>Ogerpon</a><br> <small>Teal Mask</small>",
    "<a>Farfetch&rsquo;d</a>",
    "<a>Type: Null</a>",
];

// Roughly the size of the live page: ~1200 rows.
fn synthetic_page() -> String {
    let mut rows = String::new();
    for i in 0..1200u32 {
        let name = NAMES[i as usize % NAMES.len()];
        rows.push_str(&format!(
            "<tr><td class=\"cell-num cell-fixed\"><span>{:04}</span></td><td class=\"cell-name\">{}</td>\
             <td class=\"cell-icon\"><a>Normal</a></td><td class=\"cell-num cell-total\">0</td>",
            i % 1025 + 1,
            name
        ));
        for s in 0..6 {
            rows.push_str(&format!("<td class=\"cell-num\">{}</td>", (i + s) % 256));
        }
        rows.push_str("</tr>\n");
    }
    format!("<html><body><table class=\"data-table\" id=\"pokedex\"><thead></thead><tbody>{rows}</tbody></table></body></html>")
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = synthetic_page();
    let entries = pokedex::parse_entries(&doc).expect("synthetic page parses");

    c.bench_function("parse_entries", |b| {
        b.iter(|| {
            let list = pokedex::parse_entries(black_box(&doc)).unwrap();
            black_box(list.len())
        })
    });

    c.bench_function("classify_and_render", |b| {
        b.iter(|| {
            let base = classify::base_bucket(black_box(&entries), CATALOGUE);
            let buckets = classify::classify(black_box(&entries), CATALOGUE);
            black_box(emit::render(&base, &buckets).len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
