use serde::Deserialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::pipeline::normalize::{
    activity_type, derive_region, metric_or_zero, optional_metric, parse_start, Normalizer,
};
use crate::types::activity::{ActivityRecord, IntervalsActivity, Provider};

pub struct IntervalsNormalizer;

impl Normalizer for IntervalsNormalizer {
    fn normalize_item(&self, item: &Value) -> Result<ActivityRecord, NormalizeError> {
        let activity = IntervalsActivity::deserialize(item)
            .map_err(|e| NormalizeError::Malformed(e.to_string()))?;

        let activity_type = activity_type(&[activity.activity_type.as_deref()])?;
        let start = activity
            .start_date_local
            .as_deref()
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
            // Activity summaries carry no country field.
            region: derive_region(None, activity.timezone.as_deref()),
            source: Provider::Intervals,
        })
    }
}
