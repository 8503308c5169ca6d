//! Perturbation sources for recommendation confidence.
//!
//! The decision engine never reaches for a global generator; callers pick a source
//! and own its state, so a seeded source reproduces a report exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait JitterSource {
    /// Returns a perturbation in `0.0..=span` for the given overall readiness.
    fn sample(&mut self, overall: u8, span: f64) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn sample(&mut self, overall: u8, span: f64) -> f64 {
        (**self).sample(overall, span)
    }
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn sample(&mut self, overall: u8, span: f64) -> f64 {
        (**self).sample(overall, span)
    }
}

/// Confidence equals capped overall readiness.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&mut self, _overall: u8, _span: f64) -> f64 {
        0.0
    }
}

/// Always returns the same fraction of the tier span.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter {
    fraction: f64,
}

impl FixedJitter {
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

impl JitterSource for FixedJitter {
    fn sample(&mut self, _overall: u8, span: f64) -> f64 {
        span * self.fraction
    }
}

/// Uniform draw from `[0, span)`.
#[derive(Debug, Clone)]
pub struct RandomJitter<R = ChaCha8Rng> {
    rng: R,
}

impl RandomJitter<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn sample(&mut self, _overall: u8, span: f64) -> f64 {
        if span > 0.0 {
            self.rng.gen_range(0.0..span)
        } else {
            0.0
        }
    }
}

/// Adapts a plain `(overall, span) -> jitter` function.
pub struct JitterFn<F>(pub F);

impl<F> JitterSource for JitterFn<F>
where
    F: FnMut(u8, f64) -> f64,
{
    fn sample(&mut self, overall: u8, span: f64) -> f64 {
        (self.0)(overall, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat_their_sequence() {
        let mut first = RandomJitter::seeded(42);
        let mut second = RandomJitter::seeded(42);

        for _ in 0..16 {
            assert_eq!(first.sample(60, 15.0), second.sample(60, 15.0));
        }
    }

    #[test]
    fn random_jitter_stays_within_span() {
        let mut source = RandomJitter::seeded(7);
        for _ in 0..256 {
            let value = source.sample(40, 20.0);
            assert!((0.0..20.0).contains(&value), "jitter {value} escaped span");
        }
        assert_eq!(source.sample(40, 0.0), 0.0);
    }

    #[test]
    fn fixed_jitter_scales_span() {
        let mut source = FixedJitter::new(0.5);
        assert_eq!(source.sample(80, 10.0), 5.0);
        assert_eq!(FixedJitter::new(3.0).fraction(), 1.0);
    }

    #[test]
    fn closures_adapt_through_jitter_fn() {
        let mut source = JitterFn(|overall: u8, _span: f64| f64::from(overall) / 10.0);
        assert_eq!(source.sample(60, 15.0), 6.0);
    }
}
