//! Questionnaire scoring: answers in, readiness report out.
//!
//! Answers are reduced to category scores, composed into the Psychometric,
//! Technical and WISCAR dimensions, and blended into overall readiness. The
//! recommendation tier, insights, career matches and skill gaps are all derived
//! from those scores through the tables in [`AssessmentRubric`].

pub mod careers;
pub mod decision;
pub mod domain;
pub mod insights;
pub mod questionnaire;
pub mod report;
mod rubric;
pub mod scoring;
pub mod skill_gap;

#[cfg(test)]
mod tests;

pub use careers::{CareerCatalog, CareerMatch, CareerProfile, WeightedScore};
pub use decision::{
    Decision, DecisionConfig, DecisionEngine, DecisionOutcome, FixedJitter, JitterFn,
    JitterSource, NoJitter, RandomJitter, TierBand,
};
pub use domain::{Answer, AnswerSheet, AssessmentError, Category, MAX_ANSWER_VALUE};
pub use insights::{InsightRules, Insights, ThresholdRule};
pub use report::views::{DimensionCard, RadarPoint};
pub use report::{ReadinessReport, Recommendation, ReportAssembler};
pub use rubric::AssessmentRubric;
pub use scoring::{
    CategoryScores, Dimension, DimensionScores, DimensionWeights, PsychometricScores, ScoreKey,
    TechnicalScores, WiscarScores,
};
pub use skill_gap::{GapPriority, GapStatus, GapTrend, SkillGap, SkillGapAnalysis, SkillGapTargets};
