use serde::Serialize;

use super::domain::{Application, Room};

pub const DEFAULT_MIN_COMPATIBILITY_SCORE: u8 = 60;
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 3;
pub const DEFAULT_BUDGET_FLEXIBILITY: f64 = 0.9;

/// A candidate room paired with its compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomRecommendation {
    pub room: Room,
    pub compatibility_score: u8,
}

/// Additive 0-100 fit between an applicant and a room.
pub fn calculate_room_compatibility(application: &Application, room: &Room) -> u8 {
    let score = budget_fit(application.budget(), room.rent())
        + if room.is_vacant { 30 } else { 0 }
        + occupancy_headroom(room)
        + if room.can_add_tenant { 10 } else { 0 };

    score.min(100)
}

fn budget_fit(budget: f64, rent: f64) -> u8 {
    if budget <= 0.0 || rent <= 0.0 {
        return 0;
    }

    let ratio = rent / budget;
    if ratio <= 0.8 {
        40
    } else if ratio <= 0.9 {
        35
    } else if ratio <= 1.0 {
        30
    } else if ratio <= 1.1 {
        20
    } else {
        10
    }
}

fn occupancy_headroom(room: &Room) -> u8 {
    // A room without a recorded capacity counts as full.
    if room.max_capacity == 0 {
        return 10;
    }

    let utilization = f64::from(room.current_occupancy) / f64::from(room.max_capacity);
    if utilization < 0.5 {
        20
    } else if utilization < 0.8 {
        15
    } else {
        10
    }
}

/// Best-fitting rooms on the applicant's property, highest score first.
///
/// Rooms scoring below `min_compatibility_score` are dropped and equal scores
/// keep their input order.
pub fn get_recommended_rooms(
    application: &Application,
    rooms: &[Room],
    min_compatibility_score: u8,
) -> Vec<RoomRecommendation> {
    recommend_rooms(
        application,
        rooms,
        min_compatibility_score,
        DEFAULT_MAX_RECOMMENDATIONS,
    )
}

pub(crate) fn recommend_rooms(
    application: &Application,
    rooms: &[Room],
    min_compatibility_score: u8,
    limit: usize,
) -> Vec<RoomRecommendation> {
    let mut candidates: Vec<RoomRecommendation> = rooms
        .iter()
        .filter(|room| room.property_ref == application.property_ref)
        .map(|room| RoomRecommendation {
            compatibility_score: calculate_room_compatibility(application, room),
            room: room.clone(),
        })
        .filter(|candidate| candidate.compatibility_score >= min_compatibility_score)
        .collect();

    candidates.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
    candidates.truncate(limit);
    candidates
}

/// Whether the budget reaches 90% of the cheapest room on the applicant's property.
pub fn is_budget_compatible(application: &Application, rooms: &[Room]) -> bool {
    budget_within_flexibility(application, rooms, DEFAULT_BUDGET_FLEXIBILITY)
}

pub(crate) fn budget_within_flexibility(
    application: &Application,
    rooms: &[Room],
    flexibility: f64,
) -> bool {
    let budget = application.budget();
    if budget <= 0.0 {
        return false;
    }

    let cheapest = rooms
        .iter()
        .filter(|room| room.property_ref == application.property_ref)
        .map(Room::rent)
        .reduce(f64::min);

    match cheapest {
        Some(min_rent) => budget >= min_rent * flexibility,
        None => false,
    }
}
