use std::time::Instant;

use mlfold::core::domain::{GateKind, PhaseConfig, DEFAULT_THRESHOLD_FRACTION};
use mlfold::engine::classifier::process_batch;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn main() {
    let n = 200_000;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut configs = Vec::with_capacity(n);
    for _ in 0..n {
        configs.push(PhaseConfig {
            phi_a: rng.gen_range(0.0..360.0),
            phi_b: rng.gen_range(0.0..360.0),
            p00: rng.gen_range(0.0..1.0),
            p10: rng.gen_range(0.0..1.0),
            p01: rng.gen_range(0.0..1.0),
            p11: rng.gen_range(0.0..1.0),
        });
    }

    for gate in [GateKind::Nor, GateKind::Nand] {
        let start = Instant::now();
        let outcome = process_batch(&configs, gate, DEFAULT_THRESHOLD_FRACTION)
            .expect("random batch should contain valid scores");
        let duration = start.elapsed();

        println!(
            "{}: {} records took {:?} ({} optimal / {} non-optimal / {} excluded)",
            gate,
            n,
            duration,
            outcome.summary.counts.optimal,
            outcome.summary.counts.non_optimal,
            outcome.summary.excluded_count,
        );
    }
}
