use super::super::domain::Category;
use super::aggregate::CategoryScores;
use super::dimensions::{Dimension, DimensionScores};
use serde::{Deserialize, Serialize};

/// Names one score of an assessment so rule tables can refer to it as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKey {
    Category(Category),
    Dimension(Dimension),
    Overall,
}

impl ScoreKey {
    pub fn resolve(self, categories: &CategoryScores, dimensions: &DimensionScores) -> u8 {
        match self {
            Self::Category(category) => categories.get(category),
            Self::Dimension(dimension) => dimensions.dimension(dimension),
            Self::Overall => dimensions.overall,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Category(category) => category.label(),
            Self::Dimension(dimension) => dimension.label(),
            Self::Overall => "Overall Readiness",
        }
    }
}

impl From<Category> for ScoreKey {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl From<Dimension> for ScoreKey {
    fn from(dimension: Dimension) -> Self {
        Self::Dimension(dimension)
    }
}
