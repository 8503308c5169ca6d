use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Highest option index a questionnaire item can report (five ordinal options).
pub const MAX_ANSWER_VALUE: u8 = 4;

/// Scored tag attached to a single questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Interest,
    Personality,
    Motivation,
    CognitiveStyle,
    Aptitude,
    Prerequisite,
    DomainKnowledge,
    Will,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Category {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Interest,
            Self::Personality,
            Self::Motivation,
            Self::CognitiveStyle,
            Self::Aptitude,
            Self::Prerequisite,
            Self::DomainKnowledge,
            Self::Will,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    /// Wire tag carried on an [`Answer`].
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Interest => "interest",
            Self::Personality => "personality",
            Self::Motivation => "motivation",
            Self::CognitiveStyle => "cognitive_style",
            Self::Aptitude => "aptitude",
            Self::Prerequisite => "prerequisite",
            Self::DomainKnowledge => "domain_knowledge",
            Self::Will => "will",
            Self::Skill => "skill",
            Self::Cognitive => "cognitive",
            Self::Ability => "ability",
            Self::RealWorld => "real_world",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest => "Interest",
            Self::Personality => "Personality Fit",
            Self::Motivation => "Motivation",
            Self::CognitiveStyle => "Cognitive Style",
            Self::Aptitude => "Aptitude",
            Self::Prerequisite => "Prerequisites",
            Self::DomainKnowledge => "Domain Knowledge",
            Self::Will => "Will",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive Readiness",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Alignment",
        }
    }

    /// Exact, case-sensitive lookup of a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.tag() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single questionnaire response as supplied by the presentation layer.
///
/// `category` stays a raw tag: unknown tags are tolerated and simply never
/// match any aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(alias = "questionId")]
    pub question_id: String,
    pub value: i32,
    pub category: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: i32, category: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            category: category.into(),
        }
    }

    pub fn for_category(question_id: impl Into<String>, value: i32, category: Category) -> Self {
        Self::new(question_id, value, category.tag())
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_tag(&self.category)
    }

    /// Returns the option index when it lies within `0..=MAX_ANSWER_VALUE`.
    pub fn checked_value(&self) -> Result<u8, AssessmentError> {
        u8::try_from(self.value)
            .ok()
            .filter(|value| *value <= MAX_ANSWER_VALUE)
            .ok_or_else(|| AssessmentError::ValueOutOfRange {
                question_id: self.question_id.clone(),
                value: self.value,
            })
    }
}

/// Ordered answer collection where a repeated question replaces the earlier answer
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the one it replaced for the same question.
    pub fn record(&mut self, answer: Answer) -> Option<Answer> {
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question_id == answer.question_id)
        {
            Some(existing) => Some(std::mem::replace(existing, answer)),
            None => {
                self.answers.push(answer);
                None
            }
        }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn into_answers(self) -> Vec<Answer> {
        self.answers
    }
}

impl FromIterator<Answer> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for answer in iter {
            sheet.record(answer);
        }
        sheet
    }
}

impl Extend<Answer> for AnswerSheet {
    fn extend<I: IntoIterator<Item = Answer>>(&mut self, iter: I) {
        for answer in iter {
            self.record(answer);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("answer to {question_id} has value {value}, expected 0..={max}", max = MAX_ANSWER_VALUE)]
    ValueOutOfRange { question_id: String, value: i32 },
}
