use criterion::{criterion_group, criterion_main};

mod parser;

criterion_group!(
    benches,
    parser::trie::bench_resolve_exact,
    parser::trie::bench_resolve_undercomplete,
    parser::trie::bench_resolve_overcomplete,
    parser::trie::bench_resolve_miss,
    parser::trie::bench_resolve_wide_set,
    parser::trie::bench_execute
);
criterion_main!(benches);
