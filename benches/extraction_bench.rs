use criterion::{black_box, criterion_group, criterion_main, Criterion};
use equipment_randomizer::extraction::TableExtractor;
use equipment_randomizer::items::{sample, LevelRange};

fn weapons_page(rows: usize) -> String {
    let mut html = String::from(
        "<html><body><table><tr><th>Name</th><th>Level</th><th>Price</th><th>Damage</th></tr>",
    );
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td><a href=\"WeaponDisplay.aspx?ItemName={i}\">Laser pistol {i}</a></td><td>{}</td><td>{}</td><td>1d4 F</td></tr>",
            i % 20 + 1,
            i * 10
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = weapons_page(500);
    c.bench_function("extract_items_500_rows", |b| {
        b.iter(|| TableExtractor::extract_items(black_box(&page)))
    });
}

fn bench_filter_and_sample(c: &mut Criterion) {
    let items = TableExtractor::extract_items(&weapons_page(2000)).unwrap_or_default();
    let range = LevelRange::new(3, 12);
    c.bench_function("filter_sample_2000", |b| {
        b.iter(|| sample(range.filter(black_box(items.clone())), 10, 42))
    });
}

criterion_group!(benches, bench_extract, bench_filter_and_sample);
criterion_main!(benches);
