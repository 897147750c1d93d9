//! Display formatting for the two site views: the narrative "human" cards and the
//! raw "engineer" telemetry panels.

use serde::Serialize;

use crate::types::stats::{Category, StatsReport};

const EARTH_CIRCUMFERENCE_MILES: f64 = 24_901.0;

/// Lifetime-distance comparisons shown on the globe card: (label, reference miles,
/// decimals, suffix).
const EQUIVALENCES: &[(&str, f64, usize, &str)] = &[
    ("Trips to the Moon", 238_855.0 / 100.0, 2, "%"),
    ("NYC ⇄ LA Road Trips", 2_790.0, 1, "x"),
    ("Tour de France Loops", 2_200.0, 1, "x"),
    ("Great Walls of China", 13_171.0, 2, "x"),
    ("Proclaimers' Walks", 500.0, 0, "x"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub human: HumanView,
    pub engineer: EngineerView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanView {
    pub year: i32,
    pub headline: Vec<Figure>,
    pub equivalences: Vec<Figure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineerView {
    pub monthly: MonthlyTable,
    pub telemetry: Telemetry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTable {
    /// Active category labels; each row's `hours` lines up with these.
    pub columns: Vec<String>,
    /// Newest month first.
    pub rows: Vec<MonthRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    pub month: String,
    pub hours: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Telemetry {
    pub total_distance_miles: u64,
    pub earth_circums: f64,
    pub total_rides: usize,
    pub regions: Vec<String>,
}

pub fn present(report: &StatsReport) -> Dashboard {
    Dashboard {
        human: human_view(report),
        engineer: engineer_view(report),
    }
}

fn human_view(report: &StatsReport) -> HumanView {
    let stats = &report.stats;
    let headline = vec![
        figure("Lifetime", format!("{} mi", group_thousands(stats.lifetime_distance_miles))),
        figure(
            format!("{}", report.reference_year),
            format!("{} mi", group_thousands(stats.current_year_distance_miles)),
        ),
        figure(
            "CO₂ offset",
            format!("{} kg CO₂", group_thousands(stats.current_year_co2_saved_kg)),
        ),
        figure("Longest ride", format!("{} mi", group_thousands(stats.longest_ride_miles))),
        figure(
            "Highest climb",
            format!("{} ft", group_thousands(stats.max_elevation_gain_feet)),
        ),
        figure("Top speed", format!("{:.1} mph", stats.max_plausible_speed_mph)),
        figure("Regions", stats.distinct_region_count.to_string()),
    ];

    HumanView {
        year: report.reference_year,
        headline,
        equivalences: equivalences(stats.lifetime_distance_miles as f64),
    }
}

/// Rotating comparisons for a lifetime distance, led by laps of the Earth.
pub fn equivalences(miles: f64) -> Vec<Figure> {
    let orbits = miles / EARTH_CIRCUMFERENCE_MILES;
    let mut figures = vec![
        figure("Earth Circumnavigations", format!("{}x", fixed(orbits, 2))),
        figure(
            "% to next orbit",
            format!("{}%", fixed(orbits.fract() * 100.0, 1)),
        ),
    ];
    figures.extend(EQUIVALENCES.iter().map(|(label, reference, decimals, suffix)| {
        figure(*label, format!("{}{}", fixed(miles / reference, *decimals), suffix))
    }));
    figures
}

fn engineer_view(report: &StatsReport) -> EngineerView {
    let columns = report
        .active_categories
        .iter()
        .map(|category| category.label().to_string())
        .collect();

    let rows = report
        .months
        .iter()
        .rev()
        .map(|bucket| MonthRow {
            month: bucket.month.to_string(),
            hours: report
                .active_categories
                .iter()
                .map(|category: &Category| fixed(bucket.hours(*category), 1))
                .collect(),
        })
        .collect();

    let miles = report.stats.lifetime_distance_miles;
    EngineerView {
        monthly: MonthlyTable { columns, rows },
        telemetry: Telemetry {
            total_distance_miles: miles,
            earth_circums: round_to(miles as f64 / EARTH_CIRCUMFERENCE_MILES, 4),
            total_rides: report.stats.total_rides,
            regions: report.stats.distinct_regions.clone(),
        },
    }
}

fn figure(label: impl Into<String>, value: String) -> Figure {
    Figure {
        label: label.into(),
        value,
    }
}

/// Half-away-from-zero rounding to `decimals` places.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_to(value, decimals))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
