use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use evocube::{
    individual::Individual,
    puzzle::{Move, Puzzle},
    rng::RandomNumberGenerator,
    solver::{RankedPopulation, Solver},
};

const DIAL_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DialTurn {
    dial: usize,
    steps: u8,
}

impl Move for DialTurn {
    fn random_moves(count: usize, rng: &mut RandomNumberGenerator) -> Vec<Self> {
        (0..count)
            .map(|_| DialTurn {
                dial: rng.gen_range(0..DIAL_COUNT),
                steps: rng.gen_range(0..4),
            })
            .collect()
    }

    fn same_face(&self, other: &Self) -> bool {
        self.dial == other.dial
    }

    fn is_opposite(&self, other: &Self) -> bool {
        (self.steps + other.steps) % 4 == 0
    }

    fn combined(&self, other: &Self) -> Self {
        DialTurn {
            dial: self.dial,
            steps: (self.steps + other.steps) % 4,
        }
    }
}

#[derive(Clone, Debug)]
struct DialPuzzle {
    dials: [u8; DIAL_COUNT],
}

impl Puzzle for DialPuzzle {
    type Move = DialTurn;

    fn apply(&mut self, algorithm: &[DialTurn]) {
        for turn in algorithm {
            self.dials[turn.dial] = (self.dials[turn.dial] + turn.steps) % 4;
        }
    }

    fn solved_pieces(&self) -> usize {
        self.dials.iter().filter(|dial| **dial == 0).count()
    }

    fn piece_count(&self) -> usize {
        DIAL_COUNT
    }
}

fn scrambled_puzzle(rng: &mut RandomNumberGenerator) -> DialPuzzle {
    let mut puzzle = DialPuzzle {
        dials: [0; DIAL_COUNT],
    };
    let scramble = DialTurn::random_moves(16, rng);
    puzzle.apply(&scramble);
    puzzle
}

// Sequential baseline: score everything on one thread, then sort once.
fn rank_sequential(
    individuals: &[Individual<DialTurn>],
    puzzle: &DialPuzzle,
) -> Vec<(Individual<DialTurn>, f64)> {
    let mut scored: Vec<(Individual<DialTurn>, f64)> = individuals
        .iter()
        .map(|individual| (individual.clone(), individual.fitness(puzzle)))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    let mut rng = RandomNumberGenerator::from_seed(97);
    let puzzle = scrambled_puzzle(&mut rng);

    for size in [64, 512, 4096].iter() {
        let individuals: Vec<Individual<DialTurn>> = (0..*size)
            .map(|_| Individual::new(DialTurn::random_moves(20, &mut rng)))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &individuals,
            |b, individuals| {
                b.iter(|| rank_sequential(black_box(individuals), black_box(&puzzle)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("concurrent_merge", size),
            &individuals,
            |b, individuals| {
                b.iter(|| {
                    RankedPopulation::rank(black_box(individuals.clone()), black_box(&puzzle))
                })
            },
        );
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [50usize, 200].iter() {
        let mut rng = RandomNumberGenerator::from_seed(*size as u64);
        let puzzle = scrambled_puzzle(&mut rng);
        let mut solver = Solver::new(puzzle, *size).unwrap();

        // Warm past the seeding call so the breeding pipeline is measured.
        for _ in 0..3 {
            solver.run_generation(&mut rng);
        }

        group.bench_with_input(BenchmarkId::new("run_generation", size), &solver, |b, solver| {
            b.iter(|| {
                let mut solver = solver.clone();
                let mut rng = rng.clone();
                solver.run_generation(black_box(&mut rng));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ranking, bench_generation);
criterion_main!(benches);
