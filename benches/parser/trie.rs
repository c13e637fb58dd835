use std::hint::black_box;

use criterion::Criterion;
use libcmd::parser::trie::CommandTrie;
use libcmd::parser::{Arity, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const COMMANDS: &[&str] = &[
    "add", "addn", "subtract", "multiply", "divide", "encourage", "exit", "help", "history",
    "status",
];

fn setup_trie() -> CommandTrie {
    let mut trie = CommandTrie::new();
    for command in COMMANDS {
        trie.insert(command).expect("Failed to insert command");
    }
    trie.finalize().expect("Failed to finalize trie");
    trie
}

/// A larger command set with random names, to exercise wider branching.
fn setup_wide_trie() -> CommandTrie {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut trie = CommandTrie::new();
    for _ in 0..24 {
        let name: String = (0..8).map(|_| rng.gen_range('a'..='z')).collect();
        trie.insert(&name).expect("Failed to insert command");
    }
    trie.finalize().expect("Failed to finalize trie");
    trie
}

fn sum_handler(args: &[&str]) -> i32 {
    args.iter().filter_map(|a| a.parse::<i32>().ok()).sum()
}

pub fn bench_resolve_exact(c: &mut Criterion) {
    let trie = setup_trie();
    c.bench_function("resolve_exact", |b| {
        b.iter(|| trie.resolve(black_box("subtract")))
    });
}

pub fn bench_resolve_undercomplete(c: &mut Criterion) {
    let trie = setup_trie();
    c.bench_function("resolve_undercomplete", |b| {
        b.iter(|| trie.resolve(black_box("s")))
    });
}

pub fn bench_resolve_overcomplete(c: &mut Criterion) {
    let trie = setup_trie();
    c.bench_function("resolve_overcomplete", |b| {
        b.iter(|| trie.resolve(black_box("addqwerty")))
    });
}

pub fn bench_resolve_miss(c: &mut Criterion) {
    let trie = setup_trie();
    c.bench_function("resolve_miss", |b| {
        b.iter(|| trie.resolve(black_box("yabusa")))
    });
}

pub fn bench_resolve_wide_set(c: &mut Criterion) {
    let trie = setup_wide_trie();
    c.bench_function("resolve_wide_set", |b| {
        b.iter(|| trie.resolve(black_box("zzzzzz")))
    });
}

pub fn bench_execute(c: &mut Criterion) {
    let mut parser = Parser::new();
    parser
        .register_command("add", sum_handler, Arity::Variadic)
        .expect("Failed to register command");
    parser.initialize().expect("Failed to initialize parser");

    c.bench_function("execute", |b| {
        b.iter(|| parser.execute(black_box("add 2 4 6 8")))
    });
}
