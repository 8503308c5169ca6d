mod assembler;
pub mod views;

pub use assembler::ReportAssembler;

use super::careers::CareerMatch;
use super::decision::Decision;
use super::scoring::{PsychometricScores, TechnicalScores, WiscarScores};
use super::skill_gap::SkillGapAnalysis;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub decision: Decision,
    pub confidence: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Complete result of one questionnaire, built once by [`ReportAssembler`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadinessReport {
    pub psychometric: PsychometricScores,
    pub technical: TechnicalScores,
    pub wiscar: WiscarScores,
    pub overall: u8,
    pub recommendation: Recommendation,
    pub career_paths: Vec<CareerMatch>,
    pub skill_gaps: SkillGapAnalysis,
}
