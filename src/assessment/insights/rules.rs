use super::super::decision::Decision;
use super::super::domain::Category;
use super::super::scoring::{CategoryScores, Dimension, DimensionScores, ScoreKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    AtLeast,
    Below,
}

/// Emits `message` when the named score passes the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub score: ScoreKey,
    pub comparison: Comparison,
    pub threshold: u8,
    pub message: String,
}

impl ThresholdRule {
    pub fn at_least(score: impl Into<ScoreKey>, threshold: u8, message: &str) -> Self {
        Self {
            score: score.into(),
            comparison: Comparison::AtLeast,
            threshold,
            message: message.to_string(),
        }
    }

    pub fn below(score: impl Into<ScoreKey>, threshold: u8, message: &str) -> Self {
        Self {
            score: score.into(),
            comparison: Comparison::Below,
            threshold,
            message: message.to_string(),
        }
    }

    pub fn matches(&self, categories: &CategoryScores, dimensions: &DimensionScores) -> bool {
        let value = self.score.resolve(categories, dimensions);
        match self.comparison {
            Comparison::AtLeast => value >= self.threshold,
            Comparison::Below => value < self.threshold,
        }
    }
}

/// Guidance for one decision tier: gated steps first, then the steps that always
/// apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NextStepPlan {
    #[serde(default)]
    pub conditional: Vec<ThresholdRule>,
    #[serde(default)]
    pub fixed: Vec<String>,
}

impl NextStepPlan {
    fn fixed(steps: &[&str]) -> Self {
        Self {
            conditional: Vec::new(),
            fixed: steps.iter().map(|step| step.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextStepRules {
    pub yes: NextStepPlan,
    pub maybe: NextStepPlan,
    pub no: NextStepPlan,
}

impl NextStepRules {
    pub fn plan(&self, decision: Decision) -> &NextStepPlan {
        match decision {
            Decision::Yes => &self.yes,
            Decision::Maybe => &self.maybe,
            Decision::No => &self.no,
        }
    }
}

/// Threshold tables behind the strengths, weaknesses and next steps of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRules {
    pub strengths: Vec<ThresholdRule>,
    pub weaknesses: Vec<ThresholdRule>,
    pub next_steps: NextStepRules,
}

impl InsightRules {
    pub fn standard() -> Self {
        let strengths = vec![
            ThresholdRule::at_least(
                Category::Interest,
                70,
                "Strong natural interest in 3D design",
            ),
            ThresholdRule::at_least(
                Category::Motivation,
                70,
                "High intrinsic motivation and drive",
            ),
            ThresholdRule::at_least(
                Category::Aptitude,
                70,
                "Excellent problem-solving and analytical skills",
            ),
            ThresholdRule::at_least(
                Category::Personality,
                70,
                "Personality traits align well with creative work",
            ),
            ThresholdRule::at_least(
                Category::Will,
                70,
                "Strong commitment and willingness to invest time",
            ),
            ThresholdRule::at_least(
                Category::Skill,
                70,
                "Solid technical foundation to build upon",
            ),
        ];

        let weaknesses = vec![
            ThresholdRule::below(
                Dimension::Technical,
                50,
                "Technical skills need significant development",
            ),
            ThresholdRule::below(
                Category::DomainKnowledge,
                40,
                "Limited knowledge of 3D design fundamentals",
            ),
            ThresholdRule::below(
                Category::Motivation,
                50,
                "Motivation levels may need strengthening",
            ),
            ThresholdRule::below(
                Category::RealWorld,
                50,
                "Career awareness and industry knowledge needs improvement",
            ),
            ThresholdRule::below(
                Category::Cognitive,
                50,
                "Problem-solving approach could be enhanced",
            ),
        ];

        let next_steps = NextStepRules {
            yes: NextStepPlan::fixed(&[
                "Begin with foundational 3D modeling courses",
                "Choose a specialization (game design, architectural visualization, etc.)",
                "Build a portfolio with personal projects",
                "Join 3D design communities and seek mentorship",
            ]),
            maybe: NextStepPlan {
                conditional: vec![
                    ThresholdRule::below(
                        Dimension::Technical,
                        60,
                        "Focus on building technical prerequisite skills first",
                    ),
                    ThresholdRule::below(
                        Category::DomainKnowledge,
                        50,
                        "Take introductory courses in 3D design fundamentals",
                    ),
                    ThresholdRule::below(
                        Category::Motivation,
                        60,
                        "Explore different aspects of 3D design to find your passion",
                    ),
                ],
                fixed: vec!["Reassess after 3-6 months of focused learning".to_string()],
            },
            no: NextStepPlan::fixed(&[
                "Consider related fields like UI/UX design or graphic design",
                "Develop stronger foundational math and problem-solving skills",
                "Explore whether 3D design aligns with your true interests",
                "Consider professional career counseling",
            ]),
        };

        Self {
            strengths,
            weaknesses,
            next_steps,
        }
    }
}

impl Default for InsightRules {
    fn default() -> Self {
        Self::standard()
    }
}
