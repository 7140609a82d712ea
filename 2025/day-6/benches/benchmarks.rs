use aoc2025_day_6::{part1, part2};

fn main() {
    // Run registered benchmarks.
    divan::main();
}

const EXAMPLE: [&str; 4] = [
    "123 328  51 64 ",
    " 45 64  387 23 ",
    "  6 98  215 314",
    "*   +   *   +  ",
];

/// The example worksheet repeated side by side `copies` times.
fn worksheet(copies: usize) -> String {
    EXAMPLE
        .iter()
        .map(|line| format!("{line} ").repeat(copies))
        .collect::<Vec<_>>()
        .join("\n")
}

#[divan::bench(args = [1, 100, 1000])]
fn bench_part1(bencher: divan::Bencher, copies: usize) {
    let input = worksheet(copies);
    bencher.bench(|| part1::process(divan::black_box(&input)).unwrap());
}

#[divan::bench(args = [1, 100, 1000])]
fn bench_part2(bencher: divan::Bencher, copies: usize) {
    let input = worksheet(copies);
    bencher.bench(|| part2::process(divan::black_box(&input)).unwrap());
}
