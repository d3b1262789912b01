pub mod plan;
pub mod request;
pub mod saved;

pub use plan::{
    AccommodationPlan, Allocation, BudgetBreakdown, DayActivities, DayEntry, GroupArrangements,
    MealPlan, Subgroup, TripPlan, TripSummary,
};
pub use request::{
    AccommodationType, TripRequest, WeatherPreference, DEFAULT_FOOD_PREFERENCE, MAX_BUDGET,
};
pub use saved::SavedTrip;
