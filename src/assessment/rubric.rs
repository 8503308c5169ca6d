use super::careers::CareerCatalog;
use super::decision::DecisionConfig;
use super::insights::InsightRules;
use super::scoring::DimensionWeights;
use super::skill_gap::SkillGapTargets;
use serde::{Deserialize, Serialize};

/// Every weight, bound, threshold and message the report is computed from.
///
/// Kept as plain data so the tables can be printed, reviewed and swapped as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRubric {
    pub weights: DimensionWeights,
    pub decision: DecisionConfig,
    pub insights: InsightRules,
    pub careers: CareerCatalog,
    pub skill_gaps: SkillGapTargets,
}

impl AssessmentRubric {
    pub fn standard() -> Self {
        Self {
            weights: DimensionWeights::standard(),
            decision: DecisionConfig::standard(),
            insights: InsightRules::standard(),
            careers: CareerCatalog::standard(),
            skill_gaps: SkillGapTargets::standard(),
        }
    }
}

impl Default for AssessmentRubric {
    fn default() -> Self {
        Self::standard()
    }
}
