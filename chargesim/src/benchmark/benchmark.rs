use std::time::Instant;

use crate::error::SimError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::DEFAULT_FRAME_RATE;
use crate::simulation::vector::Vec2;

/// Helper to build a deterministic particle cloud of size `n`
/// Alternating charges, positions spread well inside the escape bound
fn make_cloud(n: usize) -> Result<Simulation, SimError> {
    let mut sim = Simulation::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let position = Vec2::new((i_f * 0.37).sin() * 400.0, (i_f * 0.13).cos() * 400.0);
        let charge = if i % 2 == 0 { 1.0 } else { -1.0 };
        sim.spawn(position, charge, 10.0, 5.0)?;
    }

    Ok(sim)
}

/// Time `Simulation::step` for growing particle counts
/// Prints CSV so the O(n^2) curve can be pasted straight into a sheet
pub fn bench_step() -> Result<(), SimError> {
    let dt = DEFAULT_FRAME_RATE.recip();

    println!("n,step_ms");

    for n in [50, 100, 200, 400, 800, 1600] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 400 { 20 } else { 3 };

        let mut sim = make_cloud(n)?;

        // Warm-up
        sim.step(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step(dt);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
