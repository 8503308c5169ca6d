mod rules;

pub use rules::{Comparison, InsightRules, NextStepPlan, NextStepRules, ThresholdRule};

use super::decision::Decision;
use super::scoring::{CategoryScores, DimensionScores};
use serde::Serialize;

/// Qualitative read-out of an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub next_steps: Vec<String>,
}

fn matching_messages(
    rules: &[ThresholdRule],
    categories: &CategoryScores,
    dimensions: &DimensionScores,
) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.matches(categories, dimensions))
        .map(|rule| rule.message.clone())
        .collect()
}

/// Every rule is checked on its own, in table order; no rule suppresses another.
pub(crate) fn generate_insights(
    rules: &InsightRules,
    categories: &CategoryScores,
    dimensions: &DimensionScores,
    decision: Decision,
) -> Insights {
    let strengths = matching_messages(&rules.strengths, categories, dimensions);
    let weaknesses = matching_messages(&rules.weaknesses, categories, dimensions);

    let plan = rules.next_steps.plan(decision);
    let mut next_steps = matching_messages(&plan.conditional, categories, dimensions);
    next_steps.extend(plan.fixed.iter().cloned());

    Insights {
        strengths,
        weaknesses,
        next_steps,
    }
}

impl InsightRules {
    pub fn evaluate(
        &self,
        categories: &CategoryScores,
        dimensions: &DimensionScores,
        decision: Decision,
    ) -> Insights {
        generate_insights(self, categories, dimensions, decision)
    }
}
