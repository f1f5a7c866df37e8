use serde::{Deserialize, Serialize};

/// Relative weights applied to each priority factor. The defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub days_pending: f64,
    pub budget_compatibility: f64,
    pub move_in_urgency: f64,
    pub room_availability: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            days_pending: 0.4,
            budget_compatibility: 0.3,
            move_in_urgency: 0.2,
            room_availability: 0.1,
        }
    }
}

/// Tunables shared by the scoring, recommendation, and enrichment stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub weights: PriorityWeights,
    pub min_compatibility_score: u8,
    pub max_recommendations: usize,
    /// Fraction of the cheapest room's rent a budget must reach.
    pub budget_flexibility: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: PriorityWeights::default(),
            min_compatibility_score: 60,
            max_recommendations: 3,
            budget_flexibility: 0.9,
        }
    }
}
