use serde::Deserialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::pipeline::normalize::{
    activity_type, derive_region, metric_or_zero, optional_metric, parse_start, Normalizer,
};
use crate::types::activity::{ActivityRecord, Provider, StravaActivity};

pub struct StravaNormalizer;

impl Normalizer for StravaNormalizer {
    fn normalize_item(&self, item: &Value) -> Result<ActivityRecord, NormalizeError> {
        let activity =
            StravaActivity::deserialize(item).map_err(|e| NormalizeError::Malformed(e.to_string()))?;

        let activity_type = activity_type(&[
            activity.sport_type.as_deref(),
            activity.activity_type.as_deref(),
        ])?;
        let start = activity
            .start_date_local
            .as_deref()
            .or(activity.start_date.as_deref())
            .and_then(parse_start)
            .ok_or(NormalizeError::MissingTimestamp)?;

        Ok(ActivityRecord {
            id: activity.id,
            activity_type,
            start,
            distance_m: metric_or_zero("distance", activity.distance)?,
            moving_time_s: metric_or_zero("moving_time", activity.moving_time)?,
            elevation_gain_m: metric_or_zero("total_elevation_gain", activity.total_elevation_gain)?,
            max_speed_mps: optional_metric("max_speed", activity.max_speed)?,
            region: derive_region(
                activity.location_country.as_deref(),
                activity.timezone.as_deref(),
            ),
            source: Provider::Strava,
        })
    }
}
