//! Seeded random number generation
//!
//! A small self-contained generator (linear congruential step with a
//! splitmix-style output mix) so that fixtures stay reproducible across
//! platforms without pulling in an RNG dependency.

/// Deterministic random number generator
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a seed; equal seeds yield equal streams
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(0x9E3779B97F4A7C15),
        }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform value in [0, 1]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (u64::MAX as f64)
    }

    /// Pair of independent standard Gaussian values (Box-Muller transform)
    pub fn next_gaussian_pair(&mut self) -> (f64, f64) {
        let u1 = self.next_f64().max(1e-10); // Avoid log(0)
        let u2 = self.next_f64();

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;

        (r * theta.cos(), r * theta.sin())
    }

    /// Poisson-distributed count with the given mean (Knuth's product
    /// method; intended for modest rates)
    pub fn next_poisson(&mut self, rate: f64) -> u64 {
        let threshold = (-rate).exp();
        let mut k = 0u64;
        let mut p = 1.0;
        loop {
            p *= self.next_f64();
            if p <= threshold {
                return k;
            }
            k += 1;
        }
    }
}
