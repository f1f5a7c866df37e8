use super::super::classification::PriorityBand;
use super::super::domain::Application;
use super::views::PriorityDistribution;

/// Count applications per priority band. Unscored applications land in `minimal`.
pub fn calculate_priority_distribution(applications: &[Application]) -> PriorityDistribution {
    applications
        .iter()
        .fold(PriorityDistribution::default(), |mut distribution, application| {
            distribution.record(PriorityBand::from_score(
                application.priority_score.unwrap_or(0),
            ));
            distribution
        })
}
