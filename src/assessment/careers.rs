use super::domain::Category;
use super::scoring::{CategoryScores, DimensionScores, ScoreKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedScore {
    pub score: ScoreKey,
    pub weight: f64,
}

impl WeightedScore {
    pub fn new(score: impl Into<ScoreKey>, weight: f64) -> Self {
        Self {
            score: score.into(),
            weight,
        }
    }
}

/// A career path the assessment can recommend, with its match formula:
/// overall readiness plus weighted score boosts, clamped to `[min_match, max_match]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub title: String,
    pub description: String,
    pub salary: String,
    pub demand: String,
    pub boosts: Vec<WeightedScore>,
    pub min_match: u8,
    pub max_match: u8,
}

impl CareerProfile {
    pub fn match_score(&self, categories: &CategoryScores, dimensions: &DimensionScores) -> u8 {
        let raw = self
            .boosts
            .iter()
            .fold(f64::from(dimensions.overall), |total, boost| {
                total + f64::from(boost.score.resolve(categories, dimensions)) * boost.weight
            });

        // Lower bound wins if a profile declares an inverted range.
        raw.min(f64::from(self.max_match))
            .max(f64::from(self.min_match))
            .round() as u8
    }

    fn matched(&self, categories: &CategoryScores, dimensions: &DimensionScores) -> CareerMatch {
        CareerMatch {
            title: self.title.clone(),
            match_score: self.match_score(categories, dimensions),
            description: self.description.clone(),
            salary: self.salary.clone(),
            demand: self.demand.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    pub title: String,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub description: String,
    pub salary: String,
    pub demand: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CareerCatalog {
    profiles: Vec<CareerProfile>,
}

impl CareerCatalog {
    pub fn new(profiles: Vec<CareerProfile>) -> Self {
        Self { profiles }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            profile(
                "3D Environment Artist",
                "Design immersive game worlds and VR experiences",
                "$55,000 - $85,000",
                "High",
                [(Category::Interest, 0.3), (Category::Skill, 0.2)],
                (60, 95),
            ),
            profile(
                "UX Designer (AR/VR)",
                "Create user-centered immersive experiences",
                "$70,000 - $120,000",
                "Very High",
                [(Category::Personality, 0.3), (Category::Cognitive, 0.2)],
                (55, 90),
            ),
            profile(
                "3D Animator",
                "Bring characters and objects to life through animation",
                "$50,000 - $80,000",
                "Moderate",
                [(Category::Interest, 0.4), (Category::Motivation, 0.1)],
                (50, 88),
            ),
            profile(
                "Architectural Visualizer",
                "Create photorealistic renderings of architectural designs",
                "$45,000 - $75,000",
                "Moderate",
                [(Category::Cognitive, 0.3), (Category::Skill, 0.3)],
                (45, 85),
            ),
            profile(
                "Technical Artist",
                "Bridge the gap between art and programming in game development",
                "$75,000 - $130,000",
                "High",
                [(Category::Aptitude, 0.4), (Category::Skill, 0.3)],
                (40, 92),
            ),
        ])
    }

    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }

    /// Matches sorted by descending score; equal scores keep catalog order.
    pub fn rank(
        &self,
        categories: &CategoryScores,
        dimensions: &DimensionScores,
    ) -> Vec<CareerMatch> {
        let mut matches: Vec<CareerMatch> = self
            .profiles
            .iter()
            .map(|profile| profile.matched(categories, dimensions))
            .collect();
        matches.sort_by(|left, right| right.match_score.cmp(&left.match_score));
        matches
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn profile(
    title: &str,
    description: &str,
    salary: &str,
    demand: &str,
    boosts: [(Category, f64); 2],
    (min_match, max_match): (u8, u8),
) -> CareerProfile {
    CareerProfile {
        title: title.to_string(),
        description: description.to_string(),
        salary: salary.to_string(),
        demand: demand.to_string(),
        boosts: boosts
            .into_iter()
            .map(|(category, weight)| WeightedScore::new(category, weight))
            .collect(),
        min_match,
        max_match,
    }
}
