use chrono::{DateTime, Duration, Utc};

use super::super::domain::Application;
use super::round_one_decimal;
use super::views::EfficiencyMetrics;

const BACKLOG_THRESHOLD_DAYS: u32 = 7;

/// Week-over-week intake and decision volume relative to `now`.
///
/// "This week" is anything stamped at or after `now - 7d`; "last week" is the
/// half-open window `[now - 14d, now - 7d)`. Decisions only count approvals
/// and rejections, bucketed by `updated_at`.
pub fn calculate_efficiency_metrics(
    applications: &[Application],
    now: DateTime<Utc>,
) -> EfficiencyMetrics {
    let one_week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);
    let in_last_week = |stamp: DateTime<Utc>| stamp >= two_weeks_ago && stamp < one_week_ago;

    let this_week_applications = applications
        .iter()
        .filter(|application| application.created_at >= one_week_ago)
        .count();
    let last_week_applications = applications
        .iter()
        .filter(|application| in_last_week(application.created_at))
        .count();

    let decided = || {
        applications
            .iter()
            .filter(|application| application.status.is_decided())
    };
    let this_week_processed = decided()
        .filter(|application| application.updated_at >= one_week_ago)
        .count();
    let last_week_processed = decided()
        .filter(|application| in_last_week(application.updated_at))
        .count();

    let backlog_applications: Vec<_> = applications
        .iter()
        .filter(|application| {
            application.status.is_open() && application.days_pending() > BACKLOG_THRESHOLD_DAYS
        })
        .map(|application| application.id.clone())
        .collect();

    EfficiencyMetrics {
        this_week_applications,
        last_week_applications,
        this_week_processed,
        last_week_processed,
        application_trend: this_week_applications as i64 - last_week_applications as i64,
        processing_trend: this_week_processed as i64 - last_week_processed as i64,
        daily_throughput: round_one_decimal(this_week_processed as f64 / 7.0),
        backlog_count: backlog_applications.len(),
        backlog_applications,
    }
}
