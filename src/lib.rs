//! trip-planner-rs: group trip itineraries from a handful of form fields
//!
//! The crate turns a [`TripRequest`] (destinations, dates, budget, members) into a
//! [`TripPlan`] with a day-by-day schedule, a budget split, an accommodation suggestion
//! and a group subdivision. Form extraction, slot storage and rendering live in their own
//! modules so each step can be driven and tested on its own.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use trip_planner_rs::{ItineraryGenerator, RenderFormat, TripRequest, WeatherPreference};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = TripRequest::new("Alice", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
//!         .with_members(["Bob", "Cara"])
//!         .with_destinations(["Penang", "Malacca"])
//!         .with_duration(4)
//!         .with_budget(1000.0)
//!         .with_weather(WeatherPreference::Sunny);
//!
//!     let plan = ItineraryGenerator::new().with_seed(7).generate_plan(&request)?;
//!     println!("{}", RenderFormat::Text.render(&plan)?);
//!     Ok(())
//! }
//! ```

extern crate self as trip_planner_rs;

pub mod config;
pub mod error;
pub mod form;
pub mod planner;
pub mod render;
pub mod schemas;
pub mod storage;
pub mod types;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use form::{FormFields, FormSession};
pub use planner::{
    generate_plan, ActivityPolicy, AllocationPolicy, CyclicNamedDestinationPolicy,
    ItineraryGenerator, PolicyRegistry, RandomActivityPolicy,
};
pub use render::{render_day, render_plan, RenderFormat, RenderSink, WriterSink};
pub use schemas::{PayloadSchema, SchemaHandle, Validator};
pub use storage::{FileStore, MemoryStore, SlotStore, TripStore};
pub use trip_planner_macros::payload_schema;
pub use types::{
    AccommodationType, DayEntry, SavedTrip, TripPlan, TripRequest, TripSummary, WeatherPreference,
};

pub use schemas as schema;

#[cfg(feature = "cli")]
pub mod cli;
