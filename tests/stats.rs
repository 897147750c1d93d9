use axum::{body::to_bytes, http::Request, Router};
use bento_stats::{config::Config, routes, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::from_env();
    let state = AppState::new(config);
    Router::new()
        .merge(routes::health::router())
        .merge(routes::activities::router())
        .merge(routes::stats::router())
        .with_state(state)
}

fn strava_payload() -> Value {
    json!({
        "provider": "strava",
        "activities": [
            {
                "id": 1,
                "type": "Ride",
                "distance": 16093.0,
                "moving_time": 3600,
                "total_elevation_gain": 100.0,
                "max_speed": 12.0,
                "start_date_local": "2026-03-14T09:00:00Z",
                "location_country": "United Kingdom"
            },
            {
                "id": 2,
                "type": "Run",
                "distance": 5000.0,
                "moving_time": 1800,
                "total_elevation_gain": 20.0,
                "start_date_local": "2025-11-02T07:30:00Z",
                "timezone": "(GMT+01:00) Europe/Paris"
            },
            { "id": 3, "type": "Ride", "distance": "n/a", "start_date_local": "2026-03-15T09:00:00Z" }
        ]
    })
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (axum::http::StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            axum::body::Body::from(body.to_string())
        }
        None => axum::body::Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn ingest_reports_accepted_and_skipped() {
    let app = app();
    let (status, body) = send_json(&app, "POST", "/api/activities", Some(strava_payload())).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["provider"], "strava");
    assert_eq!(body["accepted"], 2);
    assert_eq!(body["skipped"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["skipped"][0]["index"], 2);
    assert!(body["batch_id"].as_str().is_some());
}

#[tokio::test]
async fn stats_for_ingested_batch() {
    let app = app();
    let (_, ingest) = send_json(&app, "POST", "/api/activities", Some(strava_payload())).await;
    let batch_id = ingest["batch_id"].as_str().expect("batch id");

    let (status, body) = send_json(&app, "GET", &format!("/api/stats/{batch_id}?year=2026"), None).await;
    assert_eq!(status, axum::http::StatusCode::OK);

    let stats = &body["report"]["stats"];
    assert_eq!(stats["current_year_distance_miles"], 10);
    assert_eq!(stats["current_year_co2_saved_kg"], 3);
    assert_eq!(stats["max_elevation_gain_feet"], 328);
    assert_eq!(stats["max_plausible_speed_mph"], 26.8);
    assert_eq!(stats["distinct_region_count"], 2);

    let months = body["report"]["months"].as_array().expect("months");
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["month"], "2025-11");
    assert_eq!(months[0]["running"], 0.5);
    assert_eq!(months[1]["month"], "2026-03");
    assert_eq!(months[1]["cycling"], 1.0);
    assert_eq!(months[1]["total"], 1.0);

    assert_eq!(
        body["report"]["years"],
        json!([{ "year": 2026, "distance_miles": 10, "co2_saved_kg": 3 }])
    );

    let table = &body["dashboard"]["engineer"]["monthly"];
    assert_eq!(table["columns"], json!(["Cycling", "Running"]));
    assert_eq!(table["rows"][0]["month"], "2026-03");
    assert_eq!(table["rows"][0]["hours"], json!(["1.0", "0.0"]));

    let headline = body["dashboard"]["human"]["headline"].as_array().expect("headline");
    assert!(headline
        .iter()
        .any(|f| f["label"] == "CO₂ offset" && f["value"] == "3 kg CO₂"));
}

#[tokio::test]
async fn stats_for_unknown_batch_is_not_found() {
    let app = app();
    let (status, body) = send_json(&app, "GET", "/api/stats/does-not-exist", None).await;
    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn ingest_rejects_unknown_provider() {
    let app = app();
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/activities",
        Some(json!({ "provider": "garmin", "activities": [] })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn empty_batch_is_valid() {
    let app = app();
    let (status, ingest) = send_json(
        &app,
        "POST",
        "/api/activities",
        Some(json!({ "provider": "intervals", "activities": [] })),
    )
    .await;
    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(ingest["accepted"], 0);

    let batch_id = ingest["batch_id"].as_str().expect("batch id");
    let (status, body) = send_json(&app, "GET", &format!("/api/stats/{batch_id}"), None).await;
    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["report"]["stats"]["lifetime_distance_miles"], 0);
    assert_eq!(body["report"]["stats"]["distinct_region_count"], 1);
    assert_eq!(body["report"]["months"], json!([]));
}
