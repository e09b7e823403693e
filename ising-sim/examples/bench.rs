use std::sync::atomic::AtomicBool;
use std::time::Instant;

use ising_sim::{run, InitialState, Lattice, RunConfig};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

const L: usize = 128;
const N_TEMPS: usize = 8;
const EPOCHS: usize = 5_000_000;

fn main() {
    let temps: Vec<f64> = (0..N_TEMPS)
        .map(|i| 1.0 + 3.0 * i as f64 / (N_TEMPS - 1) as f64)
        .collect();

    println!("Lattice: {L}x{L}  |  Temps: {N_TEMPS}  |  Epochs per temp: {EPOCHS}");
    println!("{}", "-".repeat(70));

    let interrupted = AtomicBool::new(false);
    let config = RunConfig::new(EPOCHS, false);

    let t0 = Instant::now();
    for (i, &t) in temps.iter().enumerate() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(42 + i as u64);
        let mut lattice = Lattice::build(InitialState::Random, L, t, &mut rng).unwrap();
        let summary = run(
            &mut lattice,
            &config,
            &mut rng,
            &interrupted,
            &|| {},
            &mut |_| Ok(()),
        )
        .unwrap();
        println!(
            "T={t:.3}  M={:.4}  C={:.4}  acc={:.4}",
            summary.observables.magnetization,
            summary.observables.heat_capacity,
            summary.acceptance_rate(),
        );
    }
    let elapsed = t0.elapsed().as_secs_f64();

    let per_epoch = elapsed / (EPOCHS * N_TEMPS) as f64 * 1e9;
    println!("Total: {:.3} s  |  {:.1} ns/epoch", elapsed, per_epoch);
}
