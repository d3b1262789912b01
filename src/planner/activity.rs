//! Activity selection strategies.
//!
//! The generator asks an [`ActivityPolicy`] for the morning, afternoon and evening
//! labels of each scheduled day. Two policies ship with the crate:
//!
//! - [`RandomActivityPolicy`] draws from a weather-keyed table.
//! - [`CyclicNamedDestinationPolicy`] walks fixed per-destination tables by day number
//!   and falls back to a generic template for places it does not know.

use crate::types::{DayActivities, WeatherPreference};
use rand::{Rng, RngCore};
use std::fmt;

/// Evening slot used by the random policy on every day.
pub const GROUP_DINNER: &str = "Group dinner and social time";

/// What a policy knows about the day it is filling in
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// 1-based day number across the whole trip
    pub day: u32,
    pub destination: &'a str,
    pub weather: WeatherPreference,
}

/// Strategy selecting activity labels for a day
pub trait ActivityPolicy: Send + Sync + fmt::Debug {
    /// Name used to pick the policy from configuration
    fn name(&self) -> &'static str;

    /// Short human-readable description
    fn description(&self) -> &'static str;

    /// Choose the activities for one day
    fn activities(&self, ctx: &DayContext<'_>, rng: &mut dyn RngCore) -> DayActivities;
}

const SUNNY_ACTIVITIES: [&str; 4] = ["Sightseeing", "Beach visit", "Outdoor sports", "Walking tour"];
const RAINY_ACTIVITIES: [&str; 4] = [
    "Museum visit",
    "Indoor shopping",
    "Cultural shows",
    "Local workshops",
];
const MODERATE_ACTIVITIES: [&str; 4] = [
    "City exploration",
    "Park visits",
    "Historical sites",
    "Local markets",
];

/// Uniformly random morning and afternoon picks from a weather table.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomActivityPolicy;

impl RandomActivityPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn table(weather: WeatherPreference) -> &'static [&'static str] {
        match weather {
            WeatherPreference::Sunny => &SUNNY_ACTIVITIES,
            WeatherPreference::Rainy => &RAINY_ACTIVITIES,
            WeatherPreference::Moderate => &MODERATE_ACTIVITIES,
        }
    }
}

fn pick(table: &[&str], rng: &mut dyn RngCore) -> String {
    table[rng.gen_range(0..table.len())].to_string()
}

impl ActivityPolicy for RandomActivityPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn description(&self) -> &'static str {
        "Random picks from a weather-based activity table, group dinner every evening"
    }

    fn activities(&self, ctx: &DayContext<'_>, rng: &mut dyn RngCore) -> DayActivities {
        let table = Self::table(ctx.weather);
        DayActivities {
            morning: pick(table, rng),
            afternoon: pick(table, rng),
            evening: GROUP_DINNER.to_string(),
        }
    }
}

struct SlotTable {
    morning: [&'static str; 3],
    afternoon: [&'static str; 3],
    evening: [&'static str; 3],
}

const KUALA_LUMPUR_SUNNY: SlotTable = SlotTable {
    morning: ["Visit KLCC Park", "Explore Batu Caves", "Morning Market Tour"],
    afternoon: [
        "Shopping at Pavilion",
        "Visit KL Tower",
        "Cultural Museum Tour",
    ],
    evening: [
        "Dinner at Jalan Alor",
        "Rooftop Bar Visit",
        "Night Market Experience",
    ],
};

const KUALA_LUMPUR_RAINY: SlotTable = SlotTable {
    morning: ["Indoor Shopping", "Museum Visit", "Art Gallery Tour"],
    afternoon: ["Spa Treatment", "Cultural Show", "Craft Workshop"],
    evening: ["Local Food Tour", "Cinema Experience", "Live Music Show"],
};

const PENANG_SUNNY: SlotTable = SlotTable {
    morning: ["Visit Kek Lok Si Temple", "Penang Hill", "Street Art Tour"],
    afternoon: [
        "Visit Fort Cornwallis",
        "Tropical Spice Garden",
        "Heritage Walk",
    ],
    evening: ["Gurney Drive Food Court", "Night Market", "Beach Walk"],
};

const PENANG_RAINY: SlotTable = SlotTable {
    morning: ["Penang Museum", "Art Gallery", "Cooking Class"],
    afternoon: [
        "Shopping Mall Visit",
        "Tea House Experience",
        "Local Crafts",
    ],
    evening: ["Indoor Food Court", "Cultural Show", "Local Cafe"],
};

/// Fixed per-destination tables walked by day number.
///
/// Known destinations are matched case-insensitively and only have sunny and rainy
/// tables; everything else gets a templated fallback naming the destination and day.
#[derive(Debug, Default, Clone, Copy)]
pub struct CyclicNamedDestinationPolicy;

impl CyclicNamedDestinationPolicy {
    pub fn new() -> Self {
        Self
    }

    fn table(destination: &str, weather: WeatherPreference) -> Option<&'static SlotTable> {
        match (destination.trim().to_lowercase().as_str(), weather) {
            ("kuala lumpur", WeatherPreference::Sunny) => Some(&KUALA_LUMPUR_SUNNY),
            ("kuala lumpur", WeatherPreference::Rainy) => Some(&KUALA_LUMPUR_RAINY),
            ("penang", WeatherPreference::Sunny) => Some(&PENANG_SUNNY),
            ("penang", WeatherPreference::Rainy) => Some(&PENANG_RAINY),
            _ => None,
        }
    }

    /// Whether the policy has a dedicated table for this destination and weather
    pub fn knows(destination: &str, weather: WeatherPreference) -> bool {
        Self::table(destination, weather).is_some()
    }
}

fn cycle(slots: &[&'static str], day: u32) -> String {
    slots[day as usize % slots.len()].to_string()
}

impl ActivityPolicy for CyclicNamedDestinationPolicy {
    fn name(&self) -> &'static str {
        "cyclic"
    }

    fn description(&self) -> &'static str {
        "Destination-specific activities cycled by day number, generic fallback elsewhere"
    }

    fn activities(&self, ctx: &DayContext<'_>, _rng: &mut dyn RngCore) -> DayActivities {
        match Self::table(ctx.destination, ctx.weather) {
            Some(table) => DayActivities {
                morning: cycle(&table.morning, ctx.day),
                afternoon: cycle(&table.afternoon, ctx.day),
                evening: cycle(&table.evening, ctx.day),
            },
            None => DayActivities {
                morning: format!("Explore {} - Day {} Morning", ctx.destination, ctx.day),
                afternoon: format!("Local Activities - Day {} Afternoon", ctx.day),
                evening: format!("Dinner and Entertainment - Day {} Evening", ctx.day),
            },
        }
    }
}
