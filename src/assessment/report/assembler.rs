use super::{ReadinessReport, Recommendation};
use crate::assessment::decision::{DecisionEngine, JitterSource};
use crate::assessment::domain::{Answer, AnswerSheet, AssessmentError};
use crate::assessment::insights::generate_insights;
use crate::assessment::rubric::AssessmentRubric;
use crate::assessment::scoring::{CategoryScores, DimensionScores};
use tracing::{debug, info};

/// Turns a completed answer list into a [`ReadinessReport`].
///
/// Holds only the rubric; nothing from one assessment carries into the next.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    rubric: AssessmentRubric,
    decisions: DecisionEngine,
}

impl ReportAssembler {
    pub fn new(rubric: AssessmentRubric) -> Self {
        let decisions = DecisionEngine::new(rubric.decision.clone());
        Self { rubric, decisions }
    }

    pub fn standard() -> Self {
        Self::new(AssessmentRubric::standard())
    }

    pub fn rubric(&self) -> &AssessmentRubric {
        &self.rubric
    }

    /// Builds the report, or rejects the whole input if any answer value falls
    /// outside the option range. Answers with unknown category tags are ignored.
    pub fn assemble<J>(
        &self,
        answers: &[Answer],
        jitter: &mut J,
    ) -> Result<ReadinessReport, AssessmentError>
    where
        J: JitterSource + ?Sized,
    {
        for answer in answers {
            answer.checked_value()?;
            if answer.category().is_none() {
                debug!(
                    question_id = %answer.question_id,
                    category = %answer.category,
                    "answer has unknown category; excluded from scoring"
                );
            }
        }

        let categories = CategoryScores::from_answers(answers);
        let dimensions = DimensionScores::compose(&categories, &self.rubric.weights);
        let outcome = self.decisions.decide(dimensions.overall, jitter);
        let insights = generate_insights(
            &self.rubric.insights,
            &categories,
            &dimensions,
            outcome.decision,
        );
        let career_paths = self.rubric.careers.rank(&categories, &dimensions);
        let skill_gaps = self.rubric.skill_gaps.analyze(&categories, &dimensions);

        info!(
            answers = answers.len(),
            overall = dimensions.overall,
            decision = outcome.decision.label(),
            confidence = outcome.confidence,
            "readiness report assembled"
        );

        Ok(ReadinessReport {
            psychometric: dimensions.psychometric,
            technical: dimensions.technical,
            wiscar: dimensions.wiscar,
            overall: dimensions.overall,
            recommendation: Recommendation {
                decision: outcome.decision,
                confidence: outcome.confidence,
                strengths: insights.strengths,
                weaknesses: insights.weaknesses,
                next_steps: insights.next_steps,
            },
            career_paths,
            skill_gaps,
        })
    }

    pub fn assemble_sheet<J>(
        &self,
        sheet: &AnswerSheet,
        jitter: &mut J,
    ) -> Result<ReadinessReport, AssessmentError>
    where
        J: JitterSource + ?Sized,
    {
        self.assemble(sheet.answers(), jitter)
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::standard()
    }
}
