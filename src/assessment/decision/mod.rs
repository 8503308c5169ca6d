mod config;
mod jitter;
mod policy;

pub use config::{DecisionConfig, TierBand};
pub use jitter::{FixedJitter, JitterFn, JitterSource, NoJitter, RandomJitter};
pub use policy::Decision;

use policy::{confidence, decide_tier};
use serde::Serialize;

/// Stateless mapping from overall readiness to a tier and confidence.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn decide<J>(&self, overall: u8, jitter: &mut J) -> DecisionOutcome
    where
        J: JitterSource + ?Sized,
    {
        let decision = decide_tier(overall, &self.config);
        let band = decision.band(&self.config);
        let sample = jitter.sample(overall, band.jitter_span);

        DecisionOutcome {
            decision,
            confidence: confidence(overall, band, sample),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DecisionEngine {
        DecisionEngine::new(DecisionConfig::standard())
    }

    #[test]
    fn tiers_split_at_fifty_and_seventy_five() {
        let engine = engine();
        let cases = [
            (0, Decision::No),
            (49, Decision::No),
            (50, Decision::Maybe),
            (74, Decision::Maybe),
            (75, Decision::Yes),
            (100, Decision::Yes),
        ];

        for (overall, expected) in cases {
            let outcome = engine.decide(overall, &mut NoJitter);
            assert_eq!(outcome.decision, expected, "overall {overall}");
        }
    }

    #[test]
    fn confidence_is_capped_per_tier() {
        let engine = engine();
        let mut full = FixedJitter::new(1.0);

        assert_eq!(engine.decide(90, &mut full).confidence, 95);
        assert_eq!(engine.decide(74, &mut full).confidence, 85);
        assert_eq!(engine.decide(49, &mut full).confidence, 69);
        assert_eq!(engine.decide(60, &mut full).confidence, 75);
    }

    #[test]
    fn confidence_never_drops_below_capped_overall() {
        let engine = engine();
        assert_eq!(engine.decide(100, &mut NoJitter).confidence, 95);
        assert_eq!(engine.decide(62, &mut NoJitter).confidence, 62);
        assert_eq!(engine.decide(0, &mut NoJitter).confidence, 0);
    }

    #[test]
    fn injected_jitter_is_pinned_to_the_tier_span() {
        let engine = engine();
        let mut negative = JitterFn(|_: u8, _: f64| -30.0);
        let mut oversized = JitterFn(|_: u8, _: f64| 500.0);

        assert_eq!(engine.decide(40, &mut negative).confidence, 40);
        // No tier: 40 + span 20 = 60
        assert_eq!(engine.decide(40, &mut oversized).confidence, 60);
    }

    #[test]
    fn confidence_rounds_to_nearest_integer() {
        let engine = engine();
        let mut jitter = JitterFn(|_: u8, _: f64| 2.6);
        assert_eq!(engine.decide(55, &mut jitter).confidence, 58);
    }
}
