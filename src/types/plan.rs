use crate::payload_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fully generated itinerary, budget split and group structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[payload_schema(name = "TripPlan")]
pub struct TripPlan {
    /// Headline facts about the trip
    pub summary: TripSummary,
    /// One entry per scheduled day, in order
    pub daily_schedule: Vec<DayEntry>,
    /// Per-person figures and the category split of the total budget
    pub budget_breakdown: BudgetBreakdown,
    /// Suggested lodging for the chosen accommodation type
    pub accommodation_plan: AccommodationPlan,
    /// Leader, members and subgroups of at most four people
    pub group_arrangements: GroupArrangements,
    /// General advice shown alongside the plan
    #[serde(default)]
    pub travel_tips: Vec<String>,
}

impl TripPlan {
    /// Look up a scheduled day by its 1-based number
    pub fn day(&self, day: u32) -> Option<&DayEntry> {
        self.daily_schedule.iter().find(|entry| entry.day == day)
    }

    /// Number of days that actually made it into the schedule
    pub fn scheduled_days(&self) -> usize {
        self.daily_schedule.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TripSummary {
    pub total_members: usize,
    pub main_contact: String,
    /// e.g. "4 days"
    pub duration: String,
    pub destinations: Vec<String>,
    /// Start date as M/D/YYYY
    pub start_date: String,
    /// Budget with currency symbol, e.g. "$1000"
    pub total_budget: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// True when any destination is outside the domestic list
    #[serde(default)]
    pub includes_international: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DayEntry {
    pub day: u32,
    pub destination: String,
    pub activities: DayActivities,
    pub meals: MealPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DayActivities {
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl MealPlan {
    pub fn for_preference(food: &str) -> Self {
        Self {
            breakfast: format!("{} breakfast options at accommodation", food),
            lunch: format!("Local {} restaurants", food),
            dinner: format!("Group dinner at recommended {} restaurant", food),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BudgetBreakdown {
    /// round(budget / (head count * duration))
    pub per_person_per_day: i64,
    /// round(budget / duration), for the whole group
    #[serde(default)]
    pub daily_budget: i64,
    pub allocation: Allocation,
}

/// Budget split by category, each part rounded independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Allocation {
    pub accommodation: i64,
    pub food: i64,
    pub activities: i64,
    pub transportation: i64,
    pub emergency: i64,
}

impl Allocation {
    pub fn total(&self) -> i64 {
        self.accommodation + self.food + self.activities + self.transportation + self.emergency
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AccommodationPlan {
    /// Display label, e.g. "Vacation Rental"
    #[serde(rename = "type")]
    pub kind: String,
    pub room_arrangement: String,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupArrangements {
    pub leader: String,
    pub members: Vec<String>,
    pub subgroups: Vec<Subgroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Subgroup {
    pub group_number: usize,
    pub members: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_templates_interpolate_food() {
        let meals = MealPlan::for_preference("Vegetarian");
        assert_eq!(meals.breakfast, "Vegetarian breakfast options at accommodation");
        assert_eq!(meals.lunch, "Local Vegetarian restaurants");
        assert_eq!(meals.dinner, "Group dinner at recommended Vegetarian restaurant");
    }

    #[test]
    fn test_allocation_total() {
        let allocation = Allocation {
            accommodation: 400,
            food: 250,
            activities: 200,
            transportation: 100,
            emergency: 50,
        };
        assert_eq!(allocation.total(), 1000);
    }

    #[test]
    fn test_accommodation_kind_serializes_as_type() {
        let plan = AccommodationPlan {
            kind: "Hostel".to_string(),
            room_arrangement: "Shared dormitory".to_string(),
            amenities: vec!["Lockers".to_string()],
        };
        let value = serde_json::to_value(plan).unwrap();
        assert_eq!(value["type"], "Hostel");
    }
}
