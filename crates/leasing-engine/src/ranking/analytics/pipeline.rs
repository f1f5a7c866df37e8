use super::super::domain::Application;
use super::percentage;
use super::views::{PipelineMetrics, StatusCounts};

/// Status histogram plus conversion, rejection and in-review rates.
///
/// `total` counts every application, including unknown statuses that the
/// histogram does not tally.
pub fn calculate_pipeline_metrics(applications: &[Application]) -> PipelineMetrics {
    let status_counts = applications
        .iter()
        .fold(StatusCounts::default(), |mut counts, application| {
            counts.record(&application.status);
            counts
        });
    let total = applications.len();

    PipelineMetrics {
        status_counts,
        total,
        conversion_rate: percentage(status_counts.converted(), total),
        rejection_rate: percentage(status_counts.rejected, total),
        active_rate: percentage(status_counts.in_review(), total),
    }
}
