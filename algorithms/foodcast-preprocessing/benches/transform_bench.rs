use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foodcast::traits::{Fit, Transformer};
use foodcast::{Table, UserInput};
use foodcast_preprocessing::Preprocessor;
use ndarray::Array2;
use ndarray_rand::{
    rand::distributions::Uniform, rand::rngs::SmallRng, rand::Rng, rand::SeedableRng, RandomExt,
};

const GENDERS: [&str; 2] = ["Male", "Female"];
const STATUSES: [&str; 3] = ["Single", "Married", "Prefer not to say"];
const OCCUPATIONS: [&str; 4] = ["Student", "Employee", "Self Employeed", "House wife"];
const INCOMES: [&str; 5] = [
    "No Income",
    "Below Rs.10000",
    "10001 to 25000",
    "25001 to 50000",
    "More than 50000",
];
const EDUCATION: [&str; 5] = [
    "Under Graduate",
    "Graduate",
    "Post Graduate",
    "Ph.D",
    "School",
];
const FEEDBACK: [&str; 2] = ["Positive", "Negative "];

fn reference(rng: &mut SmallRng, size: usize) -> Table {
    let numeric: Array2<f64> = Array2::random_using((size, 5), Uniform::from(0. ..100.), &mut *rng);
    let rows = numeric
        .outer_iter()
        .map(|num| {
            vec![
                format!("{:.0}", num[0]),
                GENDERS[rng.gen_range(0..GENDERS.len())].to_string(),
                STATUSES[rng.gen_range(0..STATUSES.len())].to_string(),
                OCCUPATIONS[rng.gen_range(0..OCCUPATIONS.len())].to_string(),
                INCOMES[rng.gen_range(0..INCOMES.len())].to_string(),
                EDUCATION[rng.gen_range(0..EDUCATION.len())].to_string(),
                format!("{:.0}", num[1]),
                num[2].to_string(),
                num[3].to_string(),
                format!("{:.0}", 560000. + num[4]),
                FEEDBACK[rng.gen_range(0..FEEDBACK.len())].to_string(),
            ]
        })
        .collect();

    Table::new(Preprocessor::online_foods().schema().names().collect(), rows).unwrap()
}

fn bench(c: &mut Criterion) {
    let mut benchmark = c.benchmark_group("preprocessor");
    let mut rng = SmallRng::seed_from_u64(42);

    let input = UserInput::new()
        .with("Age", 24i64)
        .with("Gender", "Female")
        .with("Marital Status", "Single")
        .with("Occupation", "Student")
        .with("Monthly Income", "No Income")
        .with("Educational Qualifications", "Post Graduate")
        .with("Family size", 3i64)
        .with("latitude", 12.9766)
        .with("longitude", 77.5993)
        .with("Pin code", 560001i64)
        .with("Feedback", "Positive");

    for size in [100, 1000, 10000] {
        let table = reference(&mut rng, size);
        benchmark.bench_function(BenchmarkId::new("fit", size), |bencher| {
            bencher.iter(|| Preprocessor::online_foods().fit(black_box(&table)).unwrap());
        });

        let fitted = Preprocessor::online_foods().fit(&table).unwrap();
        benchmark.bench_function(BenchmarkId::new("transform", size), |bencher| {
            bencher.iter(|| fitted.transform(black_box(&input)).unwrap());
        });
    }
    benchmark.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
