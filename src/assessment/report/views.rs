use super::ReadinessReport;
use crate::assessment::scoring::{Dimension, WiscarScores};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub label: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionCard {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: u8,
}

impl WiscarScores {
    /// The six facets in radar order: Will, Interest, Skill, Cognitive, Ability,
    /// Real-World.
    pub fn radar_series(&self) -> Vec<RadarPoint> {
        [
            ("Will", self.will),
            ("Interest", self.interest),
            ("Skill", self.skill),
            ("Cognitive", self.cognitive),
            ("Ability", self.ability),
            ("Real-World", self.real_world),
        ]
        .into_iter()
        .map(|(label, score)| RadarPoint { label, score })
        .collect()
    }
}

impl ReadinessReport {
    pub fn dimension_cards(&self) -> Vec<DimensionCard> {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| DimensionCard {
                dimension,
                label: dimension.label(),
                score: match dimension {
                    Dimension::Psychometric => self.psychometric.overall,
                    Dimension::Technical => self.technical.overall,
                    Dimension::Wiscar => self.wiscar.overall,
                },
            })
            .collect()
    }

    pub fn headline(&self) -> &'static str {
        self.recommendation.decision.headline()
    }
}
