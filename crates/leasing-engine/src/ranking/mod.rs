//! Application ranking, conflict detection, room recommendation, and leasing
//! analytics.
//!
//! Every stage is a pure function over records the backend already fetched.
//! Nothing here performs I/O or mutates its inputs; conflict markers and
//! derived scores come back on new copies of the application records.

pub mod analytics;
pub mod classification;
mod config;
pub mod conflicts;
pub mod dashboard;
pub mod domain;
mod enrichment;
pub mod priority;
pub mod rooms;
pub mod router;

#[cfg(test)]
mod tests;

pub use analytics::{
    calculate_efficiency_metrics, calculate_pipeline_metrics, calculate_priority_distribution,
    calculate_processing_time_metrics, calculate_property_performance,
};
pub use classification::{
    format_priority_score, get_status_display_text, get_urgency_level, PriorityBand,
    UrgencyLevel,
};
pub use config::{PriorityWeights, RankingConfig};
pub use conflicts::{conflict_overlay, detect_conflicts};
pub use dashboard::DashboardSnapshot;
pub use domain::{
    Application, ApplicationId, ApplicationStatus, Property, PropertyId, Rent, Room, RoomId,
};
pub use enrichment::{enhance_application, RankingEngine};
pub use priority::{
    calculate_priority_score, PriorityAssessment, PriorityComponent, PriorityFactor,
    PriorityScorer,
};
pub use rooms::{
    calculate_room_compatibility, get_recommended_rooms, is_budget_compatible,
    RoomRecommendation,
};
pub use router::ranking_router;
