use super::common::*;
use crate::ranking::domain::{ApplicationStatus, RoomId};
use crate::ranking::{enhance_application, RankingConfig, RankingEngine, UrgencyLevel};

#[test]
fn enhancement_fills_every_derived_field() {
    let application = with_move_in_in(
        with_days_pending(with_budget(pending("app-1", "prop-a"), 1200.0), 10),
        5,
    );
    let rooms = vec![
        room("room-1", "prop-a", 950.0),
        occupied_room("room-2", "prop-a", 800.0),
        room("room-3", "prop-b", 600.0),
    ];

    let enhanced = enhance_application(&application, &rooms, 1000.0, today());

    assert_eq!(enhanced.priority_score, Some(30));
    assert_eq!(enhanced.urgency_level, Some(UrgencyLevel::Low));
    assert_eq!(enhanced.is_budget_compatible, Some(true));
    assert_eq!(
        enhanced.recommended_rooms,
        Some(vec![RoomId("room-1".to_string())])
    );
    assert_eq!(enhanced.match_score, Some(100));
    assert_eq!(enhanced.id, application.id);
    assert!(application.priority_score.is_none());
}

#[test]
fn no_recommendations_means_zero_match_score() {
    let application = with_budget(pending("app-1", "prop-a"), 400.0);
    let rooms = vec![occupied_room("room-2", "prop-a", 1800.0)];

    let enhanced = enhance_application(&application, &rooms, 1000.0, today());

    assert_eq!(enhanced.recommended_rooms, Some(Vec::new()));
    assert_eq!(enhanced.match_score, Some(0));
    assert_eq!(enhanced.is_budget_compatible, Some(false));
}

#[test]
fn enhancement_is_idempotent() {
    let application = with_days_pending(with_budget(pending("app-1", "prop-a"), 1100.0), 4);
    let rooms = vec![room("room-1", "prop-a", 1000.0)];
    let engine = RankingEngine::default();

    let first = engine.enhance(&application, &rooms, 1000.0, today());
    let second = engine.enhance(&application, &rooms, 1000.0, today());

    assert_eq!(first, second);
}

#[test]
fn engine_configuration_controls_recommendations() {
    let application = with_budget(pending("app-1", "prop-a"), 1000.0);
    let rooms = vec![
        room("r1", "prop-a", 700.0),
        room("r2", "prop-a", 720.0),
        occupied_room("r3", "prop-a", 700.0),
    ];
    let engine = RankingEngine::new(RankingConfig {
        min_compatibility_score: 40,
        max_recommendations: 1,
        ..RankingConfig::default()
    });

    let enhanced = engine.enhance(&application, &rooms, 1000.0, today());

    assert_eq!(enhanced.recommended_rooms, Some(vec![RoomId("r1".into())]));
}

#[test]
fn rank_orders_queue_and_overlays_conflicts() {
    let applications = vec![
        with_days_pending(pending("fresh", "prop-a"), 0),
        with_days_pending(with_budget(pending("waiting", "prop-a"), 1300.0), 9),
        with_days_pending(
            application("approved", "prop-b", ApplicationStatus::Approved),
            3,
        ),
    ];
    let rooms = vec![room("room-1", "prop-a", 1000.0)];

    let ranked = RankingEngine::default().rank(&applications, &rooms, 1000.0, today());

    assert_eq!(ids(&ranked), vec!["waiting", "approved", "fresh"]);
    assert_eq!(ranked[0].has_conflicts, Some(true));
    assert_eq!(ranked[2].has_conflicts, Some(true));
    assert!(ranked[1].has_conflicts.is_none());
}
