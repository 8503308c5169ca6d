//! Reference question bank: identifiers and scoring tags only. Question wording
//! lives with the presentation layer.

use super::domain::{Answer, Category};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSection {
    Psychometric,
    Technical,
    Wiscar,
}

impl QuestionSection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric Fit",
            Self::Technical => "Technical Readiness",
            Self::Wiscar => "WISCAR Framework",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub section: QuestionSection,
    pub category: Category,
    pub construct: &'static str,
}

impl QuestionSpec {
    pub fn answer(&self, value: i32) -> Answer {
        Answer::for_category(self.id, value, self.category)
    }
}

const fn question(
    id: &'static str,
    section: QuestionSection,
    category: Category,
    construct: &'static str,
) -> QuestionSpec {
    QuestionSpec {
        id,
        section,
        category,
        construct,
    }
}

const REFERENCE_QUESTIONS: [QuestionSpec; 18] = [
    question("psych_1", QuestionSection::Psychometric, Category::Interest, "intrinsic_motivation"),
    question("psych_2", QuestionSection::Psychometric, Category::Personality, "openness_creativity"),
    question("psych_3", QuestionSection::Psychometric, Category::Motivation, "grit_persistence"),
    question("psych_4", QuestionSection::Psychometric, Category::CognitiveStyle, "learning_preference"),
    question("psych_5", QuestionSection::Psychometric, Category::CognitiveStyle, "spatial_reasoning"),
    question("psych_6", QuestionSection::Psychometric, Category::Motivation, "motivation_type"),
    question("tech_1", QuestionSection::Technical, Category::DomainKnowledge, "3d_fundamentals"),
    question("tech_2", QuestionSection::Technical, Category::Prerequisite, "math_spatial"),
    question("tech_3", QuestionSection::Technical, Category::DomainKnowledge, "texturing_concepts"),
    question("tech_4", QuestionSection::Technical, Category::Aptitude, "logical_reasoning"),
    question("tech_5", QuestionSection::Technical, Category::Aptitude, "pattern_recognition"),
    question("tech_6", QuestionSection::Technical, Category::DomainKnowledge, "rendering_concepts"),
    question("wiscar_1", QuestionSection::Wiscar, Category::Will, "time_commitment"),
    question("wiscar_2", QuestionSection::Wiscar, Category::Interest, "natural_engagement"),
    question("wiscar_3", QuestionSection::Wiscar, Category::Skill, "technical_foundation"),
    question("wiscar_4", QuestionSection::Wiscar, Category::Cognitive, "analytical_thinking"),
    question("wiscar_5", QuestionSection::Wiscar, Category::Ability, "growth_mindset"),
    question("wiscar_6", QuestionSection::Wiscar, Category::RealWorld, "career_awareness"),
];

/// The eighteen-item question set the scoring rubric was calibrated against.
pub fn reference_questions() -> &'static [QuestionSpec] {
    &REFERENCE_QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static QuestionSpec> {
    REFERENCE_QUESTIONS.iter().find(|question| question.id == id)
}

/// Answers every reference question with the same option index.
pub fn uniform_answers(value: i32) -> Vec<Answer> {
    REFERENCE_QUESTIONS
        .iter()
        .map(|question| question.answer(value))
        .collect()
}
