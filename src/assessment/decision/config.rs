use serde::{Deserialize, Serialize};

/// Confidence ceiling and jitter allowance for one decision tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBand {
    pub confidence_cap: u8,
    pub jitter_span: f64,
}

/// Readiness cut-offs separating the Yes, Maybe and No tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub yes_threshold: u8,
    pub maybe_threshold: u8,
    pub yes: TierBand,
    pub maybe: TierBand,
    pub no: TierBand,
}

impl DecisionConfig {
    pub fn standard() -> Self {
        Self {
            yes_threshold: 75,
            maybe_threshold: 50,
            yes: TierBand {
                confidence_cap: 95,
                jitter_span: 10.0,
            },
            maybe: TierBand {
                confidence_cap: 85,
                jitter_span: 15.0,
            },
            no: TierBand {
                confidence_cap: 75,
                jitter_span: 20.0,
            },
        }
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self::standard()
    }
}
