//! Boundary where supplier exports become engine records.
//!
//! JSON snapshots map straight onto the domain types. CSV exports are read
//! row by row with lenient cell handling: blank cells are missing values, rents
//! go through [`Rent::parse`], and only unusable identifiers or timestamps fail
//! the import.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::ranking::{
    Application, ApplicationId, ApplicationStatus, Property, PropertyId, Rent, Room, RoomId,
};

/// Everything the engine needs for one ranking or dashboard pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub applications: Vec<Application>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub average_rent: Option<f64>,
}

impl Dataset {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, IngestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Market rent used for budget scoring.
    ///
    /// An explicit positive value wins; otherwise the mean rent of the supplied
    /// rooms, or `0.0` when there are none.
    pub fn average_rent(&self) -> f64 {
        if let Some(explicit) = self.average_rent.filter(|rent| *rent > 0.0) {
            return explicit;
        }
        if self.rooms.is_empty() {
            return 0.0;
        }
        let total: f64 = self.rooms.iter().map(Room::rent).sum();
        total / self.rooms.len() as f64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("malformed JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("row {row}: {field} '{value}' is not a usable timestamp")]
    InvalidTimestamp {
        row: usize,
        field: &'static str,
        value: String,
    },
}

pub fn applications_from_csv<R: Read>(reader: R) -> Result<Vec<Application>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for (index, record) in csv_reader.deserialize::<ApplicationRow>().enumerate() {
        let row = record?;
        applications.push(row.into_application(index + 1)?);
    }

    Ok(applications)
}

pub fn rooms_from_csv<R: Read>(reader: R) -> Result<Vec<Room>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rooms = Vec::new();

    for record in csv_reader.deserialize::<RoomRow>() {
        rooms.push(record?.into_room());
    }

    Ok(rooms)
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    id: String,
    property_ref: String,
    status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rent_budget: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    desired_move_in_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    days_pending: Option<String>,
    created_at: String,
    updated_at: String,
}

impl ApplicationRow {
    fn into_application(self, row: usize) -> Result<Application, IngestError> {
        let created_at = required_timestamp(row, "created_at", &self.created_at)?;
        let updated_at = required_timestamp(row, "updated_at", &self.updated_at)?;

        Ok(Application {
            id: ApplicationId(self.id),
            property_ref: PropertyId(self.property_ref),
            status: ApplicationStatus::parse(&self.status),
            rent_budget: self.rent_budget.as_deref().map(Rent::parse),
            desired_move_in_date: self
                .desired_move_in_date
                .as_deref()
                .and_then(|raw| parse_datetime(raw).map(|dt| dt.date_naive())),
            days_pending: self
                .days_pending
                .as_deref()
                .and_then(|raw| raw.parse::<u32>().ok()),
            created_at,
            updated_at,
            priority_score: None,
            urgency_level: None,
            is_budget_compatible: None,
            recommended_rooms: None,
            match_score: None,
            has_conflicts: None,
            conflicting_applications: None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RoomRow {
    id: String,
    property_ref: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    monthly_rent: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    is_vacant: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    current_occupancy: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_capacity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    can_add_tenant: Option<String>,
}

impl RoomRow {
    fn into_room(self) -> Room {
        Room {
            id: RoomId(self.id),
            property_ref: PropertyId(self.property_ref),
            monthly_rent: self
                .monthly_rent
                .as_deref()
                .map(Rent::parse)
                .unwrap_or_default(),
            is_vacant: parse_flag(self.is_vacant.as_deref()),
            current_occupancy: parse_count(self.current_occupancy.as_deref()),
            max_capacity: parse_count(self.max_capacity.as_deref()),
            can_add_tenant: parse_flag(self.can_add_tenant.as_deref()),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "yes" | "y" | "1")
    )
}

fn parse_count(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

fn required_timestamp(
    row: usize,
    field: &'static str,
    raw: &str,
) -> Result<DateTime<Utc>, IngestError> {
    parse_datetime(raw).ok_or_else(|| IngestError::InvalidTimestamp {
        row,
        field,
        value: raw.to_string(),
    })
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
