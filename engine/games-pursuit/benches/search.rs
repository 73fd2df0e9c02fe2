use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use game_tree::{alphabeta, expectimax, minimax, SearchConfig};
use games_pursuit::{
    manhattan_heuristic, score_state, EvalWeights, Layout, NavigationProblem, Pos, PursuitState,
};
use std::sync::Arc;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const BENCH_MAZE: &str = "%%%%%%%%%%\n\
                          %P...   .%\n\
                          %.%%.%%..%\n\
                          %...o...G%\n\
                          %%%%%%%%%%";

fn bench_deciders(c: &mut Criterion) {
    let state = PursuitState::new(&Layout::parse(BENCH_MAZE).unwrap());
    let weights = EvalWeights::default();
    let eval = |s: &PursuitState| score_state(s, &weights);

    let mut group = c.benchmark_group("pursuit_decide");
    for depth in [1u32, 2] {
        let config = SearchConfig::default().with_depth(depth);

        group.bench_function(format!("minimax_d{depth}"), |b| {
            b.iter_batched(
                || ChaCha20Rng::seed_from_u64(42),
                |mut rng| minimax(&state, &config, &eval, &mut rng),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("alphabeta_d{depth}"), |b| {
            b.iter_batched(
                || ChaCha20Rng::seed_from_u64(42),
                |mut rng| alphabeta(&state, &config, &eval, &mut rng),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("expectimax_d{depth}"), |b| {
            b.iter_batched(
                || ChaCha20Rng::seed_from_u64(42),
                |mut rng| expectimax(&state, &config, &eval, &mut rng),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let layout = Layout::parse(BENCH_MAZE).unwrap();
    let problem = NavigationProblem::new(Arc::clone(&layout.maze), layout.hunter, Pos::new(8, 3));

    let mut group = c.benchmark_group("pursuit_navigate");
    group.bench_function("astar_corner_to_corner", |b| {
        b.iter(|| graph_search::astar(&problem, &manhattan_heuristic));
    });
    group.bench_function("bfs_corner_to_corner", |b| {
        b.iter(|| graph_search::breadth_first(&problem));
    });
    group.finish();
}

criterion_group!(benches, bench_deciders, bench_navigation);
criterion_main!(benches);
