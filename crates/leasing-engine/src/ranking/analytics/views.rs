use serde::Serialize;

use super::super::classification::PriorityBand;
use super::super::domain::{ApplicationId, ApplicationStatus, PropertyId};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingTimeMetrics {
    pub average_processing_time: f64,
    pub median_processing_time: u32,
    pub fastest_processing_time: u32,
    pub slowest_processing_time: u32,
    pub total_processed: usize,
}

/// Histogram over the fixed status taxonomy. Unknown statuses are not tallied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub approved: usize,
    pub rejected: usize,
    pub lease_created: usize,
    pub moved_in: usize,
    pub active: usize,
    pub withdrawn: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: &ApplicationStatus) {
        match status {
            ApplicationStatus::Pending => self.pending += 1,
            ApplicationStatus::Processing => self.processing += 1,
            ApplicationStatus::Approved => self.approved += 1,
            ApplicationStatus::Rejected => self.rejected += 1,
            ApplicationStatus::LeaseCreated => self.lease_created += 1,
            ApplicationStatus::MovedIn => self.moved_in += 1,
            ApplicationStatus::Active => self.active += 1,
            ApplicationStatus::Withdrawn => self.withdrawn += 1,
            ApplicationStatus::Other(_) => {}
        }
    }

    /// Combine two partial tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            pending: self.pending + other.pending,
            processing: self.processing + other.processing,
            approved: self.approved + other.approved,
            rejected: self.rejected + other.rejected,
            lease_created: self.lease_created + other.lease_created,
            moved_in: self.moved_in + other.moved_in,
            active: self.active + other.active,
            withdrawn: self.withdrawn + other.withdrawn,
        }
    }

    pub fn converted(&self) -> usize {
        self.approved + self.lease_created + self.moved_in + self.active
    }

    pub fn in_review(&self) -> usize {
        self.pending + self.processing
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineMetrics {
    pub status_counts: StatusCounts,
    pub total: usize,
    pub conversion_rate: f64,
    pub rejection_rate: f64,
    pub active_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EfficiencyMetrics {
    pub this_week_applications: usize,
    pub last_week_applications: usize,
    pub this_week_processed: usize,
    pub last_week_processed: usize,
    pub application_trend: i64,
    pub processing_trend: i64,
    pub daily_throughput: f64,
    pub backlog_count: usize,
    pub backlog_applications: Vec<ApplicationId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityDistribution {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub minimal: usize,
}

impl PriorityDistribution {
    pub fn record(&mut self, band: PriorityBand) {
        match band {
            PriorityBand::Critical => self.critical += 1,
            PriorityBand::High => self.high += 1,
            PriorityBand::Medium => self.medium += 1,
            PriorityBand::Low => self.low += 1,
            PriorityBand::Minimal => self.minimal += 1,
        }
    }

    pub fn count(&self, band: PriorityBand) -> usize {
        match band {
            PriorityBand::Critical => self.critical,
            PriorityBand::High => self.high,
            PriorityBand::Medium => self.medium,
            PriorityBand::Low => self.low,
            PriorityBand::Minimal => self.minimal,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            critical: self.critical + other.critical,
            high: self.high + other.high,
            medium: self.medium + other.medium,
            low: self.low + other.low,
            minimal: self.minimal + other.minimal,
        }
    }

    pub fn total(&self) -> usize {
        PriorityBand::ordered()
            .into_iter()
            .map(|band| self.count(band))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyPerformance {
    pub property_id: PropertyId,
    pub property_name: String,
    pub total_applications: usize,
    pub pending_applications: usize,
    pub approved_applications: usize,
    pub rejected_applications: usize,
    pub approval_rate: f64,
    pub avg_processing_time: f64,
    pub vacant_rooms: usize,
}
