use super::super::domain::Category;
use super::aggregate::CategoryScores;
use super::round_score;
use serde::{Deserialize, Serialize};

/// Top-level readiness composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Psychometric,
    Technical,
    Wiscar,
}

impl Dimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric Fit",
            Self::Technical => "Technical Readiness",
            Self::Wiscar => "WISCAR Analysis",
        }
    }

    /// Categories averaged, unweighted, into this dimension.
    ///
    /// `Interest` is a member of both Psychometric and WISCAR: both composites read
    /// the one interest score built from every interest-tagged answer.
    pub const fn members(self) -> &'static [Category] {
        match self {
            Self::Psychometric => &[
                Category::Interest,
                Category::Personality,
                Category::CognitiveStyle,
                Category::Motivation,
            ],
            Self::Technical => &[
                Category::Aptitude,
                Category::Prerequisite,
                Category::DomainKnowledge,
            ],
            Self::Wiscar => &[
                Category::Will,
                Category::Interest,
                Category::Skill,
                Category::Cognitive,
                Category::Ability,
                Category::RealWorld,
            ],
        }
    }

    fn mean(self, categories: &CategoryScores) -> u8 {
        let members = self.members();
        let total: u32 = members
            .iter()
            .map(|category| u32::from(categories.get(*category)))
            .sum();
        round_score(f64::from(total) / members.len() as f64)
    }
}

/// Weights blending the rounded dimension scores into overall readiness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub psychometric: f64,
    pub technical: f64,
    pub wiscar: f64,
}

impl DimensionWeights {
    pub const fn standard() -> Self {
        Self {
            psychometric: 0.3,
            technical: 0.4,
            wiscar: 0.3,
        }
    }

    fn blend(&self, psychometric: u8, technical: u8, wiscar: u8) -> u8 {
        round_score(
            f64::from(psychometric) * self.psychometric
                + f64::from(technical) * self.technical
                + f64::from(wiscar) * self.wiscar,
        )
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PsychometricScores {
    pub interest_score: u8,
    pub personality_fit: u8,
    pub cognitive_style: u8,
    pub motivation: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnicalScores {
    pub aptitude: u8,
    pub prerequisite: u8,
    pub domain_knowledge: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
    pub overall: u8,
}

/// The three dimensions plus the weighted overall readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScores {
    pub psychometric: PsychometricScores,
    pub technical: TechnicalScores,
    pub wiscar: WiscarScores,
    pub overall: u8,
}

impl DimensionScores {
    /// Each dimension is rounded before it is blended, so overall readiness carries
    /// the rounding of every stage below it.
    pub fn compose(categories: &CategoryScores, weights: &DimensionWeights) -> Self {
        let psychometric = PsychometricScores {
            interest_score: categories.get(Category::Interest),
            personality_fit: categories.get(Category::Personality),
            cognitive_style: categories.get(Category::CognitiveStyle),
            motivation: categories.get(Category::Motivation),
            overall: Dimension::Psychometric.mean(categories),
        };

        let technical = TechnicalScores {
            aptitude: categories.get(Category::Aptitude),
            prerequisite: categories.get(Category::Prerequisite),
            domain_knowledge: categories.get(Category::DomainKnowledge),
            overall: Dimension::Technical.mean(categories),
        };

        let wiscar = WiscarScores {
            will: categories.get(Category::Will),
            interest: categories.get(Category::Interest),
            skill: categories.get(Category::Skill),
            cognitive: categories.get(Category::Cognitive),
            ability: categories.get(Category::Ability),
            real_world: categories.get(Category::RealWorld),
            overall: Dimension::Wiscar.mean(categories),
        };

        let overall = weights.blend(psychometric.overall, technical.overall, wiscar.overall);

        Self {
            psychometric,
            technical,
            wiscar,
            overall,
        }
    }

    pub fn dimension(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Psychometric => self.psychometric.overall,
            Dimension::Technical => self.technical.overall,
            Dimension::Wiscar => self.wiscar.overall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::Answer;

    fn scores_for(pairs: &[(Category, i32)]) -> CategoryScores {
        let answers: Vec<Answer> = pairs
            .iter()
            .enumerate()
            .map(|(index, (category, value))| {
                Answer::for_category(format!("q{index}"), *value, *category)
            })
            .collect();
        CategoryScores::from_answers(&answers)
    }

    #[test]
    fn interest_feeds_psychometric_and_wiscar() {
        let categories = scores_for(&[(Category::Interest, 4)]);
        let scores = DimensionScores::compose(&categories, &DimensionWeights::standard());

        assert_eq!(scores.psychometric.interest_score, 80);
        assert_eq!(scores.wiscar.interest, 80);
        assert_eq!(scores.psychometric.overall, 20);
        // 80 / 6 = 13.33
        assert_eq!(scores.wiscar.overall, 13);
        assert_eq!(scores.technical.overall, 0);
    }

    #[test]
    fn overall_blends_rounded_dimensions() {
        // psychometric (60 + 60 + 60 + 70) / 4 = 62.5 -> 63
        let categories = scores_for(&[
            (Category::Interest, 3),
            (Category::Interest, 4),
            (Category::Personality, 3),
            (Category::CognitiveStyle, 3),
            (Category::Motivation, 3),
            (Category::Aptitude, 3),
            (Category::Prerequisite, 2),
            (Category::DomainKnowledge, 2),
        ]);
        let scores = DimensionScores::compose(&categories, &DimensionWeights::standard());

        assert_eq!(scores.psychometric.overall, 63);
        // technical (60 + 40 + 40) / 3 = 46.67 -> 47
        assert_eq!(scores.technical.overall, 47);
        // wiscar (70 + 0 * 5) / 6 = 11.67 -> 12
        assert_eq!(scores.wiscar.overall, 12);
        // 63 * 0.3 + 47 * 0.4 + 12 * 0.3 = 41.3
        assert_eq!(scores.overall, 41);
    }

    #[test]
    fn dimension_members_cover_all_categories() {
        for category in Category::ordered() {
            assert!(Dimension::ordered()
                .iter()
                .any(|dimension| dimension.members().contains(&category)));
        }
    }
}
