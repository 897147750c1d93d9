//! Provider payload → canonical [`ActivityRecord`] mapping.
//!
//! Each provider schema gets its own [`Normalizer`]. Normalization is item-scoped:
//! a bad item is reported in [`NormalizedBatch::skipped`] and the rest of the batch
//! carries on.

mod intervals;
mod strava;

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::types::activity::{ActivityRecord, Provider, ProviderPayload};

pub use intervals::IntervalsNormalizer;
pub use strava::StravaNormalizer;

pub trait Normalizer {
    fn normalize_item(&self, item: &Value) -> Result<ActivityRecord, NormalizeError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedItem {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub provider: Provider,
    pub records: Vec<ActivityRecord>,
    pub skipped: Vec<SkippedItem>,
}

pub fn normalize(payload: &ProviderPayload) -> NormalizedBatch {
    let provider = payload.provider();
    let normalizer: &dyn Normalizer = match payload {
        ProviderPayload::Strava(_) => &StravaNormalizer,
        ProviderPayload::Intervals(_) => &IntervalsNormalizer,
    };

    let items = payload.items();
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let result = normalizer.normalize_item(item).and_then(|record| {
            if seen.insert(record.id.clone()) {
                Ok(record)
            } else {
                Err(NormalizeError::DuplicateId(record.id.to_string()))
            }
        });

        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(
                    provider = provider.display_name(),
                    index,
                    "Skipping activity: {}",
                    err
                );
                skipped.push(SkippedItem {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    NormalizedBatch {
        provider,
        records,
        skipped,
    }
}

/// Explicit region wins verbatim; otherwise the `Area` of an `Area/City` timezone.
pub fn derive_region(explicit: Option<&str>, timezone: Option<&str>) -> Option<String> {
    if let Some(region) = explicit.map(str::trim).filter(|r| !r.is_empty()) {
        return Some(region.to_string());
    }

    let zone = timezone?.trim();
    // Strava prefixes the IANA name with its offset: "(GMT-08:00) America/Los_Angeles".
    let zone = match zone.strip_prefix('(').and_then(|rest| rest.split_once(')')) {
        Some((_, name)) => name.trim(),
        None => zone,
    };
    let (area, _) = zone.split_once('/')?;
    let area = area.trim();
    if area.is_empty() {
        None
    } else {
        Some(area.to_string())
    }
}

/// Local wall-clock start. Offsets are dropped, not applied.
pub(crate) fn parse_start(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(start) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(start);
    }
    if let Ok(start) = DateTime::parse_from_rfc3339(raw) {
        return Some(start.naive_local());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Absent → 0. NaN, infinite and negative values reject the item.
pub(crate) fn metric_or_zero(field: &'static str, value: Option<f64>) -> Result<f64, NormalizeError> {
    Ok(optional_metric(field, value)?.unwrap_or(0.0))
}

pub(crate) fn optional_metric(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<f64>, NormalizeError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(NormalizeError::InvalidNumber { field, value: v }),
        other => Ok(other),
    }
}

pub(crate) fn activity_type(candidates: &[Option<&str>]) -> Result<String, NormalizeError> {
    candidates
        .iter()
        .flatten()
        .map(|t| t.trim())
        .find(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or(NormalizeError::MissingType)
}
