use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider-assigned identifier. Strava uses integers, Intervals.icu strings like `"i4021"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityId::Numeric(id) => write!(f, "{}", id),
            ActivityId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Strava,
    Intervals,
}

impl Provider {
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Strava => "Strava",
            Provider::Intervals => "Intervals.icu",
        }
    }
}

/// A batch of raw activity objects exactly as one provider returned them.
///
/// Items stay as `Value` so one malformed entry can be skipped without failing
/// the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "activities", rename_all = "lowercase")]
pub enum ProviderPayload {
    Strava(Vec<Value>),
    Intervals(Vec<Value>),
}

impl ProviderPayload {
    pub fn provider(&self) -> Provider {
        match self {
            ProviderPayload::Strava(_) => Provider::Strava,
            ProviderPayload::Intervals(_) => Provider::Intervals,
        }
    }

    pub fn items(&self) -> &[Value] {
        match self {
            ProviderPayload::Strava(items) | ProviderPayload::Intervals(items) => items,
        }
    }
}

/// Summary activity as returned by `GET /athlete/activities` on the Strava API.
#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivity {
    pub id: ActivityId,
    #[serde(default, rename = "type")]
    pub activity_type: Option<String>,
    /// Finer-grained than `type` (e.g. `GravelRide` vs `Ride`).
    #[serde(default)]
    pub sport_type: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub moving_time: Option<f64>,
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,
    #[serde(default)]
    pub max_speed: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub start_date_local: Option<String>,
    /// `"(GMT-08:00) America/Los_Angeles"`
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
}

/// Activity as returned by `GET /api/v1/athlete/{id}/activities` on Intervals.icu.
#[derive(Debug, Clone, Deserialize)]
pub struct IntervalsActivity {
    pub id: ActivityId,
    #[serde(default, rename = "type")]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub start_date_local: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub moving_time: Option<f64>,
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,
    #[serde(default)]
    pub max_speed: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Provider-independent representation of one activity session. Units are metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: ActivityId,
    pub activity_type: String,
    /// Local wall-clock start.
    pub start: NaiveDateTime,
    pub distance_m: f64,
    pub moving_time_s: f64,
    pub elevation_gain_m: f64,
    /// `None` when the provider did not report it.
    pub max_speed_mps: Option<f64>,
    pub region: Option<String>,
    pub source: Provider,
}
