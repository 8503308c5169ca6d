use super::domain::Category;
use super::scoring::{CategoryScores, DimensionScores, ScoreKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

impl GapPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    AtTarget,
    Developing,
    NeedsFocus,
}

impl GapStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AtTarget => "At Target",
            Self::Developing => "Developing",
            Self::NeedsFocus => "Needs Focus",
        }
    }
}

/// Direction indicator shown next to a skill area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapTrend {
    Critical,
    Elevated,
    Steady,
    Ahead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTarget {
    pub name: String,
    pub description: String,
    pub score: ScoreKey,
    pub target: u8,
    pub priority: GapPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillGapTargets {
    areas: Vec<SkillTarget>,
}

impl SkillGapTargets {
    pub fn new(areas: Vec<SkillTarget>) -> Self {
        Self { areas }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            target(
                "3D Fundamentals",
                "Core 3D modeling, texturing, and rendering concepts",
                Category::DomainKnowledge,
                85,
                GapPriority::High,
            ),
            target(
                "Technical Skills",
                "Math, programming logic, and software proficiency",
                Category::Prerequisite,
                80,
                GapPriority::High,
            ),
            target(
                "Problem Solving",
                "Analytical thinking and logical reasoning",
                Category::Aptitude,
                75,
                GapPriority::Medium,
            ),
            target(
                "Learning Ability",
                "Adaptability and growth mindset",
                Category::Ability,
                80,
                GapPriority::Medium,
            ),
            target(
                "Creative Foundation",
                "Artistic skills and creative software experience",
                Category::Skill,
                70,
                GapPriority::Low,
            ),
        ])
    }

    pub fn areas(&self) -> &[SkillTarget] {
        &self.areas
    }

    pub fn analyze(
        &self,
        categories: &CategoryScores,
        dimensions: &DimensionScores,
    ) -> SkillGapAnalysis {
        let areas: Vec<SkillGap> = self
            .areas
            .iter()
            .map(|area| SkillGap::measure(area, area.score.resolve(categories, dimensions)))
            .collect();

        let count = |status: GapStatus| areas.iter().filter(|gap| gap.status == status).count();

        SkillGapAnalysis {
            at_target: count(GapStatus::AtTarget),
            developing: count(GapStatus::Developing),
            needs_focus: count(GapStatus::NeedsFocus),
            areas,
        }
    }
}

impl Default for SkillGapTargets {
    fn default() -> Self {
        Self::standard()
    }
}

fn target(
    name: &str,
    description: &str,
    category: Category,
    target: u8,
    priority: GapPriority,
) -> SkillTarget {
    SkillTarget {
        name: name.to_string(),
        description: description.to_string(),
        score: ScoreKey::Category(category),
        target,
        priority,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    pub name: String,
    pub description: String,
    pub priority: GapPriority,
    pub current: u8,
    pub target: u8,
    /// `target - current`; negative once the target is exceeded.
    pub gap: i16,
    pub status: GapStatus,
    pub trend: GapTrend,
    pub timeframe: &'static str,
}

impl SkillGap {
    fn measure(area: &SkillTarget, current: u8) -> Self {
        let gap = i16::from(area.target) - i16::from(current);

        let status = if gap <= 0 {
            GapStatus::AtTarget
        } else if gap <= 20 {
            GapStatus::Developing
        } else {
            GapStatus::NeedsFocus
        };

        let trend = if gap > 20 {
            GapTrend::Critical
        } else if gap > 10 {
            GapTrend::Elevated
        } else if gap < -5 {
            GapTrend::Ahead
        } else {
            GapTrend::Steady
        };

        let timeframe = if gap > 20 {
            "3-6 months"
        } else if gap > 10 {
            "1-3 months"
        } else if gap > 0 {
            "2-4 weeks"
        } else {
            "Maintain"
        };

        Self {
            name: area.name.clone(),
            description: area.description.clone(),
            priority: area.priority,
            current,
            target: area.target,
            gap,
            status,
            trend,
            timeframe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGapAnalysis {
    pub areas: Vec<SkillGap>,
    pub at_target: usize,
    pub developing: usize,
    pub needs_focus: usize,
}
