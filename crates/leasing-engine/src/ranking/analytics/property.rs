use super::super::domain::{Application, ApplicationStatus, Property};
use super::views::PropertyPerformance;
use super::{percentage, round_one_decimal};

/// Per-property application outcomes, in the order the properties were supplied.
pub fn calculate_property_performance(
    applications: &[Application],
    properties: &[Property],
) -> Vec<PropertyPerformance> {
    properties
        .iter()
        .map(|property| {
            let related: Vec<&Application> = applications
                .iter()
                .filter(|application| application.property_ref == property.id)
                .collect();

            let pending_applications = related
                .iter()
                .filter(|application| application.status.is_open())
                .count();
            let approved_applications = related
                .iter()
                .filter(|application| {
                    matches!(
                        application.status,
                        ApplicationStatus::Approved | ApplicationStatus::LeaseCreated
                    )
                })
                .count();
            let rejected_applications = related
                .iter()
                .filter(|application| application.status == ApplicationStatus::Rejected)
                .count();

            let total_applications = related.len();
            let avg_processing_time = if total_applications == 0 {
                0.0
            } else {
                let days: u64 = related
                    .iter()
                    .map(|application| u64::from(application.days_pending()))
                    .sum();
                round_one_decimal(days as f64 / total_applications as f64)
            };

            PropertyPerformance {
                property_id: property.id.clone(),
                property_name: property.name.clone(),
                total_applications,
                pending_applications,
                approved_applications,
                rejected_applications,
                approval_rate: percentage(approved_applications, total_applications),
                avg_processing_time,
                vacant_rooms: property.rooms.iter().filter(|room| room.is_vacant).count(),
            }
        })
        .collect()
}
