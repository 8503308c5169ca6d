mod aggregate;
mod dimensions;
mod keys;

pub use aggregate::{category_score, CategoryScores, POINTS_PER_OPTION};
pub use dimensions::{
    Dimension, DimensionScores, DimensionWeights, PsychometricScores, TechnicalScores,
    WiscarScores,
};
pub use keys::ScoreKey;

/// Rounds half-up onto the 0-100 scale every score lives on.
pub(crate) fn round_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}
