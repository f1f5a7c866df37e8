use chrono::NaiveDate;
use tracing::debug;

use super::classification::UrgencyLevel;
use super::config::RankingConfig;
use super::conflicts::conflict_overlay;
use super::domain::{Application, Room};
use super::priority::PriorityScorer;
use super::rooms::{budget_within_flexibility, recommend_rooms};

/// Composes scoring, classification and room matching into enriched records.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankingConfig,
    scorer: PriorityScorer,
}

impl RankingEngine {
    pub fn new(config: RankingConfig) -> Self {
        let scorer = PriorityScorer::new(config.weights);
        Self { config, scorer }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Return a copy of `application` carrying every derived ranking field.
    pub fn enhance(
        &self,
        application: &Application,
        rooms: &[Room],
        average_rent: f64,
        today: NaiveDate,
    ) -> Application {
        let available_rooms: Vec<Room> = rooms.iter().filter(|room| room.is_vacant).cloned().collect();
        let priority_score = self
            .scorer
            .score(application, &available_rooms, average_rent, today);
        let budget_compatible =
            budget_within_flexibility(application, rooms, self.config.budget_flexibility);
        let recommendations = recommend_rooms(
            application,
            rooms,
            self.config.min_compatibility_score,
            self.config.max_recommendations,
        );
        let match_score = recommendations
            .first()
            .map(|best| best.compatibility_score)
            .unwrap_or(0);

        Application {
            priority_score: Some(priority_score),
            urgency_level: Some(UrgencyLevel::from_score(priority_score)),
            is_budget_compatible: Some(budget_compatible),
            recommended_rooms: Some(
                recommendations
                    .into_iter()
                    .map(|candidate| candidate.room.id)
                    .collect(),
            ),
            match_score: Some(match_score),
            ..application.clone()
        }
    }

    /// Enrich a whole review queue, overlay conflict markers, and order it by
    /// priority score (highest first, ties in input order).
    pub fn rank(
        &self,
        applications: &[Application],
        rooms: &[Room],
        average_rent: f64,
        today: NaiveDate,
    ) -> Vec<Application> {
        let overlay = conflict_overlay(applications);

        let mut ranked: Vec<Application> = applications
            .iter()
            .map(|application| {
                let mut enhanced = self.enhance(application, rooms, average_rent, today);
                if let Some(rivals) = overlay.get(&application.id) {
                    enhanced.has_conflicts = Some(true);
                    enhanced.conflicting_applications = Some(rivals.clone());
                }
                enhanced
            })
            .collect();

        ranked.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

        debug!(
            applications = ranked.len(),
            conflicts = overlay.len(),
            "ranked application queue"
        );

        ranked
    }
}

/// Enrich one application with the default configuration.
pub fn enhance_application(
    application: &Application,
    rooms: &[Room],
    average_rent: f64,
    today: NaiveDate,
) -> Application {
    RankingEngine::default().enhance(application, rooms, average_rent, today)
}
