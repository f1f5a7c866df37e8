use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::classification::UrgencyLevel;

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for rentable rooms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

/// Identifier wrapper for properties (buildings).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

macro_rules! impl_id_display {
    ($($id:ty),+) => {
        $(impl fmt::Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })+
    };
}

impl_id_display!(ApplicationId, RoomId, PropertyId);

/// Lifecycle status supplied by the backend. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Pending,
    Processing,
    Approved,
    Rejected,
    Withdrawn,
    LeaseCreated,
    MovedIn,
    Active,
    Other(String),
}

impl ApplicationStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "withdrawn" => Self::Withdrawn,
            "lease_created" => Self::LeaseCreated,
            "moved_in" => Self::MovedIn,
            "active" => Self::Active,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
            Self::LeaseCreated => "lease_created",
            Self::MovedIn => "moved_in",
            Self::Active => "active",
            Self::Other(raw) => raw,
        }
    }

    /// Still awaiting a decision (pending or processing).
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }

    /// Reached a terminal processing outcome.
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::LeaseCreated)
    }

    /// Explicit approve/reject decision.
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(raw.trim()))
    }
}

/// Monthly amount as delivered by the data supplier.
///
/// Suppliers send rents either as numbers or as numeric strings. Anything that
/// does not parse to a finite number coerces to `0.0` here, so scoring code only
/// ever sees plain `f64` values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Rent(f64);

impl Rent {
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() {
            Self(amount)
        } else {
            Self(0.0)
        }
    }

    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl From<f64> for Rent {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Rent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRent {
            Number(f64),
            Text(String),
            Unusable(serde::de::IgnoredAny),
        }

        Ok(match Option::<RawRent>::deserialize(deserializer)? {
            Some(RawRent::Number(amount)) => Rent::new(amount),
            Some(RawRent::Text(raw)) => Rent::parse(&raw),
            Some(RawRent::Unusable(_)) | None => Rent::default(),
        })
    }
}

/// An applicant's request for a property, plus the derived ranking fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub property_ref: PropertyId,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub rent_budget: Option<Rent>,
    #[serde(default)]
    pub desired_move_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub days_pending: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_budget_compatible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_rooms: Option<Vec<RoomId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_conflicts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_applications: Option<Vec<ApplicationId>>,
}

impl Application {
    /// Budget amount with a missing budget treated as zero.
    pub fn budget(&self) -> f64 {
        self.rent_budget.map(Rent::amount).unwrap_or(0.0)
    }

    pub fn days_pending(&self) -> u32 {
        self.days_pending.unwrap_or(0)
    }
}

/// A rentable unit within a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub property_ref: PropertyId,
    #[serde(default)]
    pub monthly_rent: Rent,
    #[serde(default)]
    pub is_vacant: bool,
    #[serde(default)]
    pub current_occupancy: u32,
    #[serde(default)]
    pub max_capacity: u32,
    #[serde(default)]
    pub can_add_tenant: bool,
}

impl Room {
    pub fn rent(&self) -> f64 {
        self.monthly_rent.amount()
    }
}

/// A building; only its identity and optional room roster matter here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
}
