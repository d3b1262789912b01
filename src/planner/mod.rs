//! Itinerary generation: request in, plan out.

pub mod accommodation;
pub mod activity;
pub mod allocation;
pub mod generator;
pub mod groups;
pub mod registry;
pub mod summary;

pub use activity::{
    ActivityPolicy, CyclicNamedDestinationPolicy, DayContext, RandomActivityPolicy, GROUP_DINNER,
};
pub use allocation::{AllocationPolicy, AllocationShare, BudgetCategory, Rounding};
pub use generator::{generate_plan, ItineraryGenerator};
pub use groups::SUBGROUP_SIZE;
pub use registry::PolicyRegistry;
