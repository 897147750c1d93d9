use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use serde::{Serialize, Serializer};

/// Broad activity grouping used for display aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Cycling,
    Running,
    Adventure,
    Training,
    Other,
}

impl Category {
    /// Display order; also the index order of per-category hour arrays.
    pub const ALL: [Category; 5] = [
        Category::Cycling,
        Category::Running,
        Category::Adventure,
        Category::Training,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Cycling => "Cycling",
            Category::Running => "Running",
            Category::Adventure => "Adventure",
            Category::Training => "Training",
            Category::Other => "Other",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calendar month key; orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(start: &NaiveDateTime) -> Self {
        Self {
            year: start.year(),
            month: start.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hours per category for one calendar month, in full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: YearMonth,
    pub cycling: f64,
    pub running: f64,
    pub adventure: f64,
    pub training: f64,
    pub other: f64,
    /// Always the sum of the five category fields, in `Category::ALL` order.
    pub total: f64,
}

impl MonthlyBucket {
    pub fn from_hours(month: YearMonth, hours: [f64; 5]) -> Self {
        let [cycling, running, adventure, training, other] = hours;
        Self {
            month,
            cycling,
            running,
            adventure,
            training,
            other,
            total: cycling + running + adventure + training + other,
        }
    }

    pub fn hours(&self, category: Category) -> f64 {
        match category {
            Category::Cycling => self.cycling,
            Category::Running => self.running,
            Category::Adventure => self.adventure,
            Category::Training => self.training,
            Category::Other => self.other,
        }
    }
}

/// Display-ready superlatives and totals. Every figure is recomputed from the record batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub lifetime_distance_miles: u64,
    /// Every activity type, not just cycling.
    pub lifetime_all_activities_miles: u64,
    pub lifetime_co2_saved_kg: u64,
    pub current_year_distance_miles: u64,
    pub current_year_co2_saved_kg: u64,
    pub longest_ride_miles: u64,
    pub max_elevation_gain_feet: u64,
    pub max_plausible_speed_mph: f64,
    pub distinct_region_count: usize,
    pub distinct_regions: Vec<String>,
    pub total_rides: usize,
    pub total_activities: usize,
}

/// Cycling distance for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub distance_miles: u64,
    pub co2_saved_kg: u64,
}

/// Everything the engine hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub reference_year: i32,
    pub stats: AggregateStats,
    /// Ascending by year; only years with at least one ride.
    pub years: Vec<YearSummary>,
    /// Ascending by month.
    pub months: Vec<MonthlyBucket>,
    /// Categories with hours in at least one month, in display order.
    pub active_categories: Vec<Category>,
}
