use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fpgrowth::fp::{fp_growth_algorithm, mine};
use ndarray::Array2;
use rand::Rng;

/// Random baskets over `num_items` products named `item{n}`.
///
/// Basket sizes vary around `avg_basket_size`; lower item ids are drawn more
/// often when `skew` is above zero, which yields deeper shared prefixes.
fn generate_baskets(
    num_transactions: usize,
    num_items: usize,
    avg_basket_size: usize,
    skew: f64,
) -> Vec<Vec<String>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let size = ((avg_basket_size as f64) * (0.5 + random_factor)).round() as usize;

            let mut basket: Vec<String> = (0..size.min(num_items))
                .map(|_| {
                    let u: f64 = rng.r#gen();
                    let item = ((u.powf(1.0 + skew)) * num_items as f64) as usize;
                    format!("item{}", item.min(num_items - 1))
                })
                .collect();
            basket.sort();
            basket.dedup();
            basket
        })
        .collect()
}

fn to_matrix(baskets: &[Vec<String>], num_items: usize) -> Array2<i32> {
    let mut matrix = Array2::<i32>::zeros((baskets.len(), num_items));
    for (row, basket) in baskets.iter().enumerate() {
        for item in basket {
            if let Ok(col) = item.trim_start_matches("item").parse::<usize>() {
                matrix[[row, col]] = 1;
            }
        }
    }
    matrix
}

fn bench_mine_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_2000tx", 2000, 100, 12),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let baskets = generate_baskets(num_tx, num_items, avg_size, 1.0);
        let min_count = 0.05 * num_tx as f64;

        group.bench_with_input(BenchmarkId::from_parameter(name), &baskets, |b, tx| {
            b.iter(|| mine(black_box(tx), black_box(min_count)));
        });
    }

    group.finish();
}

fn bench_mine_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine_threshold");

    let baskets = generate_baskets(1000, 50, 10, 1.0);

    for min_support in [0.02, 0.05, 0.1, 0.2] {
        let min_count = min_support * baskets.len() as f64;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_support)),
            &min_count,
            |b, &count| {
                b.iter(|| mine(black_box(&baskets), black_box(count)));
            },
        );
    }

    group.finish();
}

fn bench_matrix_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_input");

    for (name, skew) in [("uniform", 0.0), ("skewed", 2.0)] {
        let baskets = generate_baskets(1000, 40, 8, skew);
        let matrix = to_matrix(&baskets, 40);

        group.bench_with_input(BenchmarkId::from_parameter(name), &matrix, |b, m| {
            b.iter(|| fp_growth_algorithm(black_box(m.view()), black_box(0.1)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mine_scaling, bench_mine_threshold, bench_matrix_input);
criterion_main!(benches);
