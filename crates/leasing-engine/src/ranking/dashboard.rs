use chrono::{DateTime, Utc};
use serde::Serialize;

use super::analytics::{
    calculate_efficiency_metrics, calculate_pipeline_metrics, calculate_priority_distribution,
    calculate_processing_time_metrics, calculate_property_performance, EfficiencyMetrics,
    PipelineMetrics, PriorityDistribution, ProcessingTimeMetrics, PropertyPerformance,
};
use super::domain::{Application, Property};

/// All dashboard analytics computed over one application snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub processing_time: ProcessingTimeMetrics,
    pub pipeline: PipelineMetrics,
    pub efficiency: EfficiencyMetrics,
    pub priority_distribution: PriorityDistribution,
    pub property_performance: Vec<PropertyPerformance>,
}

impl DashboardSnapshot {
    pub fn build(applications: &[Application], properties: &[Property], now: DateTime<Utc>) -> Self {
        Self {
            generated_at: now,
            processing_time: calculate_processing_time_metrics(applications),
            pipeline: calculate_pipeline_metrics(applications),
            efficiency: calculate_efficiency_metrics(applications, now),
            priority_distribution: calculate_priority_distribution(applications),
            property_performance: calculate_property_performance(applications, properties),
        }
    }
}
