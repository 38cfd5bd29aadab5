use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frontfilter::summary::{date_range, number_range, unique_string_values};
use frontfilter::{filter_records, ActiveFilters, FieldValue, FilterCriterion, Record};
use serde_json::json;

fn make_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let published = format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1);
            Record::from_frontmatter([
                ("rating", FieldValue::from((i % 10) as f64)),
                ("published", FieldValue::from(published.as_str())),
                ("tags", FieldValue::from(json!([format!("tag{}", i % 40), "common"]))),
                ("draft", FieldValue::from(i % 3 == 0)),
            ])
        })
        .collect()
}

fn bench_filter_records(c: &mut Criterion) {
    let records = make_records(10_000);
    let filters: ActiveFilters = [
        ("rating", FilterCriterion::number(Some(3.0), Some(7.0))),
        ("published", FilterCriterion::date(Some("2024-03-01"), Some("2024-09-30"))),
        ("tags", FilterCriterion::tags(["tag1", "tag2", "tag3"])),
        ("draft", FilterCriterion::boolean(false)),
    ]
    .into_iter()
    .collect();

    c.bench_function("filter_records 10k x 4 criteria", |b| {
        b.iter(|| filter_records(black_box(&records), black_box(&filters)).len())
    });
}

fn bench_summaries(c: &mut Criterion) {
    let records = make_records(10_000);
    let mut group = c.benchmark_group("summaries 10k");
    group.bench_function("unique_string_values", |b| {
        b.iter(|| unique_string_values(black_box(&records), "tags"))
    });
    group.bench_function("number_range", |b| {
        b.iter(|| number_range(black_box(&records), "rating"))
    });
    group.bench_function("date_range", |b| {
        b.iter(|| date_range(black_box(&records), "published"))
    });
    group.finish();
}

criterion_group!(benches, bench_filter_records, bench_summaries);
criterion_main!(benches);
