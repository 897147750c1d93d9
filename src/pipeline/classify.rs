use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::stats::Category;

/// Granular activity types per category. Matching is exact and case-sensitive;
/// anything missing here is `Other`.
const CATEGORY_TYPES: &[(Category, &[&str])] = &[
    (
        Category::Cycling,
        &[
            "Ride",
            "VirtualRide",
            "GravelRide",
            "MountainBikeRide",
            "EBikeRide",
            "EMountainBikeRide",
            "Velomobile",
        ],
    ),
    (Category::Running, &["Run", "VirtualRun", "TrailRun"]),
    (
        Category::Adventure,
        &[
            "Hike",
            "Walk",
            "AlpineSki",
            "BackcountrySki",
            "NordicSki",
            "Snowshoe",
            "IceSkate",
            "Kayaking",
            "Rowing",
            "StandUpPaddling",
            "WaterSport",
            "OpenWaterSwim",
            "Swim",
        ],
    ),
    (
        Category::Training,
        &[
            "WeightTraining",
            "Workout",
            "Yoga",
            "Crossfit",
            "Golf",
            "Tennis",
            "Soccer",
            "RockClimbing",
        ],
    ),
];

static TYPE_TO_CATEGORY: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    CATEGORY_TYPES
        .iter()
        .flat_map(|(category, types)| types.iter().map(move |t| (*t, *category)))
        .collect()
});

pub fn classify(activity_type: &str) -> Category {
    TYPE_TO_CATEGORY
        .get(activity_type)
        .copied()
        .unwrap_or(Category::Other)
}
