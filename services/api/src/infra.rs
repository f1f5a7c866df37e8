use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("failed to parse '{raw}' as an RFC 3339 timestamp ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_dates() {
        assert_eq!(
            parse_date(" 2026-10-14 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid"))
        );
        assert!(parse_date("14/10/2026").is_err());
    }

    #[test]
    fn parses_cli_timestamps_into_utc() {
        let parsed = parse_timestamp("2026-10-14T14:00:00+02:00").expect("timestamp parses");
        assert_eq!(parsed.to_rfc3339(), "2026-10-14T12:00:00+00:00");
        assert!(parse_timestamp("tomorrow").is_err());
    }
}
