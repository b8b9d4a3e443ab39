//! End-to-end benchmarks: the engine as the tick interrupt would drive it.

mod engine;

pub use engine::bench_engine;
