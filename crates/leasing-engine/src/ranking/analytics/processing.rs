use super::super::domain::Application;
use super::round_one_decimal;
use super::views::ProcessingTimeMetrics;

/// Turnaround statistics over applications that reached a processed status.
///
/// The median is the element at index `n / 2` of the ascending times, so even
/// counts report the upper of the two middle values.
pub fn calculate_processing_time_metrics(applications: &[Application]) -> ProcessingTimeMetrics {
    let mut times: Vec<u32> = applications
        .iter()
        .filter(|application| application.status.is_processed())
        .map(Application::days_pending)
        .collect();

    if times.is_empty() {
        return ProcessingTimeMetrics::default();
    }

    times.sort_unstable();
    let total: u64 = times.iter().map(|&days| u64::from(days)).sum();
    let average = total as f64 / times.len() as f64;

    ProcessingTimeMetrics {
        average_processing_time: round_one_decimal(average),
        median_processing_time: times[times.len() / 2],
        fastest_processing_time: times[0],
        slowest_processing_time: times[times.len() - 1],
        total_processed: times.len(),
    }
}
