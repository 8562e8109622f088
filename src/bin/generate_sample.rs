//! Writes `sample_data.csv`: synthetic counts from a point source
//! following the inverse square law, with Poisson-like noise, so the
//! viewer can be tried without real lab data.
//!
//! Usage: `cargo run --bin generate_sample`

use std::error::Error;
use std::f64::consts::PI;

/// Source strength: expected counts per second at 1 m.
const RATE_AT_1M: f64 = 12.0;
/// Counting window in seconds, matching the analysis pipeline.
const WINDOW_SECS: f64 = 60.0;

/// Minimal deterministic PRNG (64-bit LCG) with a Box–Muller gaussian.
struct SampleRng {
    state: u64,
    spare: Option<f64>,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng {
            state: seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407),
            spare: None,
        }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Top 53 bits → uniform in (0, 1).
        ((self.state >> 11) as f64 + 1.0) / (1u64 << 53) as f64
    }

    fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        if let Some(z) = self.spare.take() {
            return mu + sigma * z;
        }
        let u1 = self.next_f64();
        let u2 = self.next_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        self.spare = Some(r * theta.sin());
        mu + sigma * r * theta.cos()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = SampleRng::new(20260830);
    let mut writer = csv::Writer::from_path("sample_data.csv")?;

    writer.write_record(["distance_m", "counts"])?;

    // 0.10 m to 0.50 m in 0.05 m steps.
    for step in 0..9 {
        let distance = 0.10 + 0.05 * step as f64;
        let expected = RATE_AT_1M / (distance * distance) * WINDOW_SECS;
        // Poisson noise approximated as gaussian with σ = √mean.
        let counts = rng.gauss(expected, expected.sqrt()).round().max(0.0);
        writer.write_record([format!("{distance:.2}"), format!("{counts:.0}")])?;
    }

    writer.flush()?;
    println!("Wrote sample_data.csv (9 measurements, 60 s counting window)");
    Ok(())
}
