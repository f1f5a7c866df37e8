use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::ranking::domain::{
    Application, ApplicationId, ApplicationStatus, Property, PropertyId, Rent, Room, RoomId,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
}

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub(super) fn application(id: &str, property: &str, status: ApplicationStatus) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        property_ref: PropertyId(property.to_string()),
        status,
        rent_budget: None,
        desired_move_in_date: None,
        days_pending: None,
        created_at: days_ago(3),
        updated_at: days_ago(1),
        priority_score: None,
        urgency_level: None,
        is_budget_compatible: None,
        recommended_rooms: None,
        match_score: None,
        has_conflicts: None,
        conflicting_applications: None,
    }
}

pub(super) fn pending(id: &str, property: &str) -> Application {
    application(id, property, ApplicationStatus::Pending)
}

pub(super) fn with_budget(mut application: Application, budget: f64) -> Application {
    application.rent_budget = Some(Rent::new(budget));
    application
}

pub(super) fn with_days_pending(mut application: Application, days: u32) -> Application {
    application.days_pending = Some(days);
    application
}

pub(super) fn with_move_in_in(mut application: Application, days: i64) -> Application {
    application.desired_move_in_date = Some(today() + Duration::days(days));
    application
}

pub(super) fn room(id: &str, property: &str, rent: f64) -> Room {
    Room {
        id: RoomId(id.to_string()),
        property_ref: PropertyId(property.to_string()),
        monthly_rent: Rent::new(rent),
        is_vacant: true,
        current_occupancy: 0,
        max_capacity: 2,
        can_add_tenant: true,
    }
}

pub(super) fn occupied_room(id: &str, property: &str, rent: f64) -> Room {
    Room {
        is_vacant: false,
        current_occupancy: 2,
        can_add_tenant: false,
        ..room(id, property, rent)
    }
}

pub(super) fn property(id: &str, name: &str, rooms: Vec<Room>) -> Property {
    Property {
        id: PropertyId(id.to_string()),
        name: name.to_string(),
        rooms,
    }
}

pub(super) fn ids(applications: &[Application]) -> Vec<&str> {
    applications
        .iter()
        .map(|application| application.id.0.as_str())
        .collect()
}
