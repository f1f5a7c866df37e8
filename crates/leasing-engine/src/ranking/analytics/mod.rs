//! Dashboard folds over whole application collections.
//!
//! Every function here is a pure reduction: identical inputs give identical
//! outputs, and every rate or average over an empty set is reported as zero.

mod distribution;
mod efficiency;
mod pipeline;
mod processing;
mod property;
pub mod views;

pub use distribution::calculate_priority_distribution;
pub use efficiency::calculate_efficiency_metrics;
pub use pipeline::calculate_pipeline_metrics;
pub use processing::calculate_processing_time_metrics;
pub use property::calculate_property_performance;
pub use views::{
    EfficiencyMetrics, PipelineMetrics, PriorityDistribution, ProcessingTimeMetrics,
    PropertyPerformance, StatusCounts,
};

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_one_decimal(part as f64 / total as f64 * 100.0)
    }
}
