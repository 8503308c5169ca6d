use super::super::domain::{Answer, Category};
use super::round_score;
use serde::Serialize;
use std::collections::BTreeMap;

/// Points awarded per option step. The top option (4) therefore averages to 80.
pub const POINTS_PER_OPTION: f64 = 20.0;

/// Mean option index of the answers tagged with `category`, times [`POINTS_PER_OPTION`].
///
/// An unanswered category scores 0.
pub fn category_score(answers: &[Answer], category: Category) -> u8 {
    let (sum, count) = answers
        .iter()
        .filter(|answer| answer.category == category.tag())
        .fold((0_i64, 0_usize), |(sum, count), answer| {
            (sum + i64::from(answer.value), count + 1)
        });

    if count == 0 {
        return 0;
    }

    round_score((sum as f64 / count as f64) * POINTS_PER_OPTION)
}

/// One score per known category, computed from a single answer list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    scores: BTreeMap<Category, u8>,
}

impl CategoryScores {
    pub fn from_answers(answers: &[Answer]) -> Self {
        let scores = Category::ordered()
            .into_iter()
            .map(|category| (category, category_score(answers, category)))
            .collect();
        Self { scores }
    }

    pub fn get(&self, category: Category) -> u8 {
        self.scores.get(&category).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        self.scores.iter().map(|(category, score)| (*category, *score))
    }
}
