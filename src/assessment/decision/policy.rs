use super::config::{DecisionConfig, TierBand};
use serde::{Deserialize, Serialize};

/// Categorical recommendation derived from overall readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Yes,
    Maybe,
    No,
}

impl Decision {
    pub const fn ordered() -> [Self; 3] {
        [Self::Yes, Self::Maybe, Self::No]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Maybe => "Maybe",
            Self::No => "No",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Yes => "You're Ready for 3D Experience Design!",
            Self::Maybe => "You Have Potential - With Some Development",
            Self::No => "Consider Alternative Paths First",
        }
    }

    pub(crate) fn band(self, config: &DecisionConfig) -> &TierBand {
        match self {
            Self::Yes => &config.yes,
            Self::Maybe => &config.maybe,
            Self::No => &config.no,
        }
    }
}

pub(crate) fn decide_tier(overall: u8, config: &DecisionConfig) -> Decision {
    if overall >= config.yes_threshold {
        Decision::Yes
    } else if overall >= config.maybe_threshold {
        Decision::Maybe
    } else {
        Decision::No
    }
}

/// `min(cap, overall + jitter)` rounded, with `jitter` pinned to the tier span.
pub(crate) fn confidence(overall: u8, band: &TierBand, jitter: f64) -> u8 {
    let span = band.jitter_span.max(0.0);
    let jitter = if jitter.is_finite() {
        jitter.clamp(0.0, span)
    } else {
        0.0
    };

    let capped = (f64::from(overall) + jitter).min(f64::from(band.confidence_cap));
    capped.clamp(0.0, 100.0).round() as u8
}
