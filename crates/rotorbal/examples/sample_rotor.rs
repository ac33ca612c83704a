//! Balance the reference rotor and print what a plotting script needs.
//!
//! Shaft 0.05 @ 45°, discs 0.02/0.03/0.01/0.04 at 0°/90°/180°/270°.
//! Run: `cargo run -p rotorbal --example sample_rotor [seed]`
//! Without a seed one is drawn and printed.

use rotorbal::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>().expect("seed must be an integer"));
    let set = sample_rotor();
    let res = match seed {
        Some(seed) => optimize(&set, &BalanceCfg::seeded(seed)),
        None => optimize_with_defaults(&set),
    }
    .expect("default cfg is valid");

    println!("Initial Mass Balance: {:.9}", res.initial_residual);
    println!("Optimal Angles (radians): {:?}", res.angles);
    println!("Final Mass Balance: {:.9}", res.residual);
    println!(
        "converged={} iterations={} total_iterations={} seed={}",
        res.converged,
        res.iterations,
        res.total_iterations(),
        res.seed
    );
    for row in polar_rows(&res.optimal) {
        println!(
            "{:<8} angle_deg={:>9.3} magnitude={:.4}",
            row.label,
            row.angle_deg(),
            row.magnitude
        );
    }
}
