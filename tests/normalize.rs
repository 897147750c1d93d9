use bento_stats::pipeline::normalize::normalize;
use bento_stats::types::activity::{ActivityId, Provider, ProviderPayload};
use serde_json::json;

#[test]
fn strava_items_map_to_canonical_records() {
    let payload = ProviderPayload::Strava(vec![json!({
        "id": 1001,
        "type": "Ride",
        "sport_type": "GravelRide",
        "distance": 48280.3,
        "moving_time": 7200,
        "total_elevation_gain": 612.0,
        "max_speed": 14.2,
        "start_date": "2026-06-01T15:00:00Z",
        "start_date_local": "2026-06-01T08:00:00Z",
        "timezone": "(GMT-08:00) America/Los_Angeles",
        "location_country": null
    })]);

    let batch = normalize(&payload);
    assert_eq!(batch.provider, Provider::Strava);
    assert!(batch.skipped.is_empty());

    let record = &batch.records[0];
    assert_eq!(record.id, ActivityId::Numeric(1001));
    assert_eq!(record.activity_type, "GravelRide");
    assert_eq!(record.start.to_string(), "2026-06-01 08:00:00");
    assert_eq!(record.distance_m, 48280.3);
    assert_eq!(record.moving_time_s, 7200.0);
    assert_eq!(record.max_speed_mps, Some(14.2));
    assert_eq!(record.region.as_deref(), Some("America"));
}

#[test]
fn optional_fields_stay_absent() {
    let payload = ProviderPayload::Strava(vec![json!({
        "id": 7,
        "type": "WeightTraining",
        "start_date_local": "2026-01-05T18:00:00Z",
        "location_country": "Norway"
    })]);

    let record = &normalize(&payload).records[0];
    assert_eq!(record.distance_m, 0.0);
    assert_eq!(record.elevation_gain_m, 0.0);
    assert_eq!(record.max_speed_mps, None);
    assert_eq!(record.region.as_deref(), Some("Norway"));
}

#[test]
fn intervals_items_map_to_canonical_records() {
    let payload = ProviderPayload::Intervals(vec![json!({
        "id": "i55021",
        "type": "VirtualRide",
        "start_date_local": "2025-12-24T17:45:10",
        "distance": 30012.0,
        "moving_time": 3900,
        "total_elevation_gain": 250.0,
        "average_speed": 7.7,
        "source": "ZWIFT"
    })]);

    let batch = normalize(&payload);
    assert_eq!(batch.provider, Provider::Intervals);
    let record = &batch.records[0];
    assert_eq!(record.id, ActivityId::Text("i55021".to_string()));
    assert_eq!(record.activity_type, "VirtualRide");
    assert_eq!(record.max_speed_mps, None);
    assert_eq!(record.region, None);
    assert_eq!(record.source, Provider::Intervals);
}

#[test]
fn bad_items_are_skipped_without_failing_the_batch() {
    let payload = ProviderPayload::Strava(vec![
        json!({ "id": 1, "type": "Ride", "distance": 1000.0, "start_date_local": "2026-02-01T08:00:00Z" }),
        json!({ "type": "Ride", "distance": 1000.0, "start_date_local": "2026-02-01T08:00:00Z" }),
        json!({ "id": 3, "type": "Ride", "distance": "far", "start_date_local": "2026-02-01T08:00:00Z" }),
        json!({ "id": 4, "type": "Ride", "distance": -5.0, "start_date_local": "2026-02-01T08:00:00Z" }),
        json!({ "id": 5, "type": "Ride", "distance": 10.0 }),
        json!({ "id": 6, "distance": 10.0, "start_date_local": "2026-02-01T08:00:00Z" }),
        json!({ "id": 1, "type": "Run", "distance": 500.0, "start_date_local": "2026-02-02T08:00:00Z" }),
        json!("not an object"),
        json!({ "id": 9, "type": "Run", "moving_time": 1800, "start_date_local": "2026-02-03T08:00:00Z" }),
    ]);

    let batch = normalize(&payload);
    let kept: Vec<String> = batch.records.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(kept, vec!["1", "9"]);

    let skipped: Vec<usize> = batch.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(batch.skipped[2].reason.contains("distance"));
    assert!(batch.skipped[3].reason.contains("start date"));
    assert!(batch.skipped[4].reason.contains("activity type"));
    assert!(batch.skipped[5].reason.contains("Duplicate"));
}
