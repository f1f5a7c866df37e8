use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::config::PriorityWeights;
use super::domain::{Application, Room};

const MAX_DAYS_PENDING_POINTS: u32 = 40;
const POINTS_PER_PENDING_DAY: u32 = 5;

/// Factors contributing to an application's review priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFactor {
    DaysPending,
    BudgetCompatibility,
    MoveInUrgency,
    RoomAvailability,
}

/// One factor's raw points and its weighted contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityComponent {
    pub factor: PriorityFactor,
    pub points: u32,
    pub weighted: f64,
    pub notes: String,
}

/// Composite priority score with the per-factor trail used to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAssessment {
    pub score: u8,
    pub components: Vec<PriorityComponent>,
}

/// Stateless scorer closing over an immutable weight set.
#[derive(Debug, Clone, Default)]
pub struct PriorityScorer {
    weights: PriorityWeights,
}

impl PriorityScorer {
    pub fn new(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    pub fn score(
        &self,
        application: &Application,
        available_rooms: &[Room],
        average_rent: f64,
        today: NaiveDate,
    ) -> u8 {
        self.assess(application, available_rooms, average_rent, today)
            .score
    }

    pub fn assess(
        &self,
        application: &Application,
        available_rooms: &[Room],
        average_rent: f64,
        today: NaiveDate,
    ) -> PriorityAssessment {
        let days_pending = application.days_pending();
        let days_points = days_pending
            .saturating_mul(POINTS_PER_PENDING_DAY)
            .min(MAX_DAYS_PENDING_POINTS);
        let days = self.component(
            PriorityFactor::DaysPending,
            days_points,
            format!("{days_pending} day(s) pending"),
        );

        let (budget_points, budget_notes) = budget_points(application.budget(), average_rent);
        let budget = self.component(
            PriorityFactor::BudgetCompatibility,
            budget_points,
            budget_notes,
        );

        let (urgency_points, urgency_notes) =
            move_in_points(application.desired_move_in_date, today);
        let urgency = self.component(PriorityFactor::MoveInUrgency, urgency_points, urgency_notes);

        let vacant_on_property = available_rooms
            .iter()
            .filter(|room| room.property_ref == application.property_ref && room.is_vacant)
            .count();
        let availability_points = if vacant_on_property > 0 { 10 } else { 0 };
        let availability = self.component(
            PriorityFactor::RoomAvailability,
            availability_points,
            format!("{vacant_on_property} vacant room(s) on property"),
        );

        let components = vec![days, budget, urgency, availability];
        let total: f64 = components.iter().map(|component| component.weighted).sum();
        let score = total.clamp(0.0, 100.0).round() as u8;

        PriorityAssessment { score, components }
    }

    fn component(&self, factor: PriorityFactor, points: u32, notes: String) -> PriorityComponent {
        let weight = match factor {
            PriorityFactor::DaysPending => self.weights.days_pending,
            PriorityFactor::BudgetCompatibility => self.weights.budget_compatibility,
            PriorityFactor::MoveInUrgency => self.weights.move_in_urgency,
            PriorityFactor::RoomAvailability => self.weights.room_availability,
        };

        PriorityComponent {
            factor,
            points,
            weighted: f64::from(points) * weight,
            notes,
        }
    }
}

fn budget_points(budget: f64, average_rent: f64) -> (u32, String) {
    if budget <= 0.0 {
        return (0, "no rent budget provided".to_string());
    }
    if average_rent <= 0.0 {
        return (0, "no market rent to compare against".to_string());
    }

    let ratio = budget / average_rent;
    let points = if ratio >= 1.2 {
        30
    } else if ratio >= 1.0 {
        25
    } else if ratio >= 0.8 {
        20
    } else {
        10
    };

    (points, format!("budget is {ratio:.2}x average rent"))
}

fn move_in_points(move_in: Option<NaiveDate>, today: NaiveDate) -> (u32, String) {
    let Some(move_in) = move_in else {
        return (0, "no desired move-in date".to_string());
    };

    let days_until = (move_in - today).num_days();
    let points = match days_until {
        i64::MIN..=7 => 20,
        8..=14 => 15,
        15..=30 => 10,
        _ => 5,
    };

    (points, format!("{days_until} day(s) until desired move-in"))
}

/// Score with the default weight set.
pub fn calculate_priority_score(
    application: &Application,
    available_rooms: &[Room],
    average_rent: f64,
    today: NaiveDate,
) -> u8 {
    PriorityScorer::default().score(application, available_rooms, average_rent, today)
}
