use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;

use crate::pipeline::classify::classify;
use crate::pipeline::co2::co2_saved_kg;
use crate::types::activity::ActivityRecord;
use crate::types::stats::{
    AggregateStats, Category, MonthlyBucket, StatsReport, YearMonth, YearSummary,
};
use crate::units::{
    meters_to_feet, meters_to_miles, mps_to_mph, round_tenth, round_whole, seconds_to_hours,
    SPEED_GLITCH_MPH,
};

/// Projects a record batch into display statistics for `reference_year`.
///
/// Pure: the same batch always yields the same report. Sums run in full precision;
/// unit conversion and rounding happen once, when each figure is finalized.
pub fn aggregate(records: &[ActivityRecord], reference_year: i32) -> StatsReport {
    let months = monthly_buckets(records);
    let active_categories = Category::ALL
        .into_iter()
        .filter(|category| months.iter().any(|bucket| bucket.hours(*category) > 0.0))
        .collect();

    StatsReport {
        reference_year,
        stats: compute_stats(records, reference_year),
        years: yearly_cycling(records),
        months,
        active_categories,
    }
}

fn compute_stats(records: &[ActivityRecord], reference_year: i32) -> AggregateStats {
    let mut lifetime_cycling_m = 0.0;
    let mut lifetime_all_m = 0.0;
    let mut current_year_cycling_m = 0.0;
    let mut longest_ride_m: f64 = 0.0;
    let mut max_elevation_m: f64 = 0.0;
    let mut max_speed_mph: Option<f64> = None;
    let mut regions = BTreeSet::new();
    let mut total_rides = 0;

    for record in records {
        lifetime_all_m += record.distance_m;
        max_elevation_m = max_elevation_m.max(record.elevation_gain_m);

        if classify(&record.activity_type) == Category::Cycling {
            total_rides += 1;
            lifetime_cycling_m += record.distance_m;
            longest_ride_m = longest_ride_m.max(record.distance_m);
            if record.start.year() == reference_year {
                current_year_cycling_m += record.distance_m;
            }
        }

        // Unreported speeds are skipped, not read as zero. The glitch cutoff is
        // checked on the published (rounded) figure.
        if let Some(mph) = record.max_speed_mps.map(|mps| round_tenth(mps_to_mph(mps))) {
            if mph < SPEED_GLITCH_MPH {
                max_speed_mph = Some(max_speed_mph.map_or(mph, |best| best.max(mph)));
            }
        }

        if let Some(region) = record.region.as_deref().map(str::trim) {
            if !region.is_empty() {
                regions.insert(region.to_string());
            }
        }
    }

    let lifetime_miles = meters_to_miles(lifetime_cycling_m);
    let current_year_miles = meters_to_miles(current_year_cycling_m);

    AggregateStats {
        lifetime_distance_miles: round_whole(lifetime_miles),
        lifetime_all_activities_miles: round_whole(meters_to_miles(lifetime_all_m)),
        lifetime_co2_saved_kg: co2_or_zero(lifetime_miles),
        current_year_distance_miles: round_whole(current_year_miles),
        current_year_co2_saved_kg: co2_or_zero(current_year_miles),
        longest_ride_miles: round_whole(meters_to_miles(longest_ride_m)),
        max_elevation_gain_feet: round_whole(meters_to_feet(max_elevation_m)),
        max_plausible_speed_mph: max_speed_mph.unwrap_or(0.0),
        // Never report zero places.
        distinct_region_count: regions.len().max(1),
        distinct_regions: regions.into_iter().collect(),
        total_rides,
        total_activities: records.len(),
    }
}

fn co2_or_zero(miles: f64) -> u64 {
    co2_saved_kg(miles).unwrap_or_else(|err| {
        tracing::error!("Cannot derive CO2 figure: {}", err);
        0
    })
}

/// Cycling miles and CO₂ per calendar year, ascending.
pub fn yearly_cycling(records: &[ActivityRecord]) -> Vec<YearSummary> {
    let mut years: BTreeMap<i32, f64> = BTreeMap::new();

    for record in records {
        if classify(&record.activity_type) == Category::Cycling {
            *years.entry(record.start.year()).or_default() += record.distance_m;
        }
    }

    years
        .into_iter()
        .map(|(year, meters)| {
            let miles = meters_to_miles(meters);
            YearSummary {
                year,
                distance_miles: round_whole(miles),
                co2_saved_kg: co2_or_zero(miles),
            }
        })
        .collect()
}

/// Hours per category per calendar month, ascending. Zero-time records still
/// open their month.
pub fn monthly_buckets(records: &[ActivityRecord]) -> Vec<MonthlyBucket> {
    let mut months: BTreeMap<YearMonth, [f64; 5]> = BTreeMap::new();

    for record in records {
        let hours = months.entry(YearMonth::of(&record.start)).or_default();
        hours[classify(&record.activity_type).index()] += seconds_to_hours(record.moving_time_s);
    }

    months
        .into_iter()
        .map(|(month, hours)| MonthlyBucket::from_hours(month, hours))
        .collect()
}
