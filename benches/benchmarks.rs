use bipart::Arbitrary;
use bipart::dto::Node;
use bipart::partition::*;
use bipart::transport::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_uniform_distribution,
        computing_optimal_transport_hungarian,
        computing_transport_cost_split,
        growing_candidate_sequence,
        searching_demo_partition,
        searching_system_partition,
}

fn building_uniform_distribution(c: &mut criterion::Criterion) {
    c.bench_function("build a 64-point uniform Distribution", |b| {
        b.iter(|| Distribution::uniform(64))
    });
}

fn computing_optimal_transport_hungarian(c: &mut criterion::Criterion) {
    let tensor = Distribution::uniform(4).product(&Distribution::uniform(12));
    let full = Distribution::uniform(16);
    let ref matrix = CostMatrix::from((&tensor, &full));
    c.bench_function("solve a 48x16 Hungarian assignment", |b| {
        b.iter(|| Hungarian::from(matrix).minimize().cost())
    });
}

fn computing_transport_cost_split(c: &mut criterion::Criterion) {
    let ref universe = Universe::random();
    let (a, b) = universe.labels().split_at(universe.len() / 2);
    c.bench_function("compute EMD of a random split", |bench| {
        bench.iter(|| EMD::cost(a, b, universe.labels()))
    });
}

fn growing_candidate_sequence(c: &mut criterion::Criterion) {
    let ref universe = Universe::new(Node::system(4)).expect("unique labels");
    c.bench_function("grow a greedy Sequence over 8 labels", |b| {
        b.iter(|| Sequence::try_from(universe))
    });
}

fn searching_demo_partition(c: &mut criterion::Criterion) {
    c.bench_function("search the demo system", |b| {
        b.iter(|| find_optimal_partition(bipart::DEMO_NODES))
    });
}

fn searching_system_partition(c: &mut criterion::Criterion) {
    let ref universe = Universe::new(Node::system(5)).expect("unique labels");
    c.bench_function("search a 10-node system", |b| {
        b.iter(|| Search::new(universe.clone()).run())
    });
}
