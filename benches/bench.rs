// Criterion benchmarks for Product Recommender

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use product_recommender::core::{count_matches, Recommender};
use product_recommender::models::{sample_catalog, PreferenceSet, Product, TieBreak};

const TAGS: &[&str] = &[
    "eco-friendly", "durable", "recyclable", "water-resistant", "lightweight",
    "vegan", "stylish", "compact", "biodegradable", "tech", "portable",
];

fn create_product(id: usize) -> Product {
    let tags = (0..3).map(|k| TAGS[(id * 7 + k * 3) % TAGS.len()]);
    Product::new(format!("Product {}", id), tags)
}

fn bench_count_matches(c: &mut Criterion) {
    let catalog = sample_catalog();
    let prefs: PreferenceSet = ["eco-friendly", "durable", "tech"].into_iter().collect();

    c.bench_function("count_matches", |b| {
        b.iter(|| count_matches(black_box(&catalog[0].tags), black_box(&prefs)));
    });
}

fn bench_sample_catalog(c: &mut Criterion) {
    let catalog = sample_catalog();
    let recommender = Recommender::default();

    c.bench_function("recommend_sample_catalog", |b| {
        b.iter(|| recommender.recommend(black_box(&catalog), black_box(&["eco-friendly", "durable"])));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let prefs = ["eco-friendly", "durable", "stylish"];
    let mut group = c.benchmark_group("recommend");

    for product_count in [10, 100, 1000].iter() {
        let catalog: Vec<Product> = (0..*product_count).map(create_product).collect();

        for tie_break in [TieBreak::CatalogOrder, TieBreak::Name] {
            let recommender = Recommender::new(tie_break);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", tie_break), product_count),
                product_count,
                |b, _| {
                    b.iter(|| recommender.recommend(black_box(&catalog), black_box(&prefs)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_count_matches, bench_sample_catalog, bench_recommend);

criterion_main!(benches);
