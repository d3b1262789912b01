//! Planner configuration read from the environment.
//!
//! | Variable                        | Default         |
//! |---------------------------------|-----------------|
//! | `TRIP_PLANNER_ACTIVITY_POLICY`  | `random`        |
//! | `TRIP_PLANNER_ALLOCATION`       | `standard`      |
//! | `TRIP_PLANNER_CURRENCY`         | `$`             |
//! | `TRIP_PLANNER_SEED`             | unset (entropy) |
//! | `TRIP_PLANNER_STORE`            | unset           |
//! | `TRIP_PLANNER_REQUEST_SLOT`     | `tripData`      |
//! | `TRIP_PLANNER_PLAN_SLOT`        | `finalTripPlan` |
//! | `TRIP_PLANNER_TRIPS_SLOT`       | `trips`         |

use crate::{PlannerError, Result};
use std::{env, path::PathBuf};

pub const DEFAULT_REQUEST_SLOT: &str = "tripData";
pub const DEFAULT_PLAN_SLOT: &str = "finalTripPlan";
pub const DEFAULT_TRIPS_SLOT: &str = "trips";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub activity_policy: String,
    pub allocation: String,
    pub currency_symbol: String,
    pub seed: Option<u64>,
    pub store_path: Option<PathBuf>,
    pub request_slot: String,
    pub plan_slot: String,
    /// Slot holding the array of saved trips
    pub trips_slot: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            activity_policy: "random".to_string(),
            allocation: "standard".to_string(),
            currency_symbol: "$".to_string(),
            seed: None,
            store_path: None,
            request_slot: DEFAULT_REQUEST_SLOT.to_string(),
            plan_slot: DEFAULT_PLAN_SLOT.to_string(),
            trips_slot: DEFAULT_TRIPS_SLOT.to_string(),
        }
    }
}

impl PlannerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(policy) = read("TRIP_PLANNER_ACTIVITY_POLICY") {
            config.activity_policy = policy;
        }
        if let Some(allocation) = read("TRIP_PLANNER_ALLOCATION") {
            config.allocation = allocation;
        }
        if let Some(currency) = read("TRIP_PLANNER_CURRENCY") {
            config.currency_symbol = currency;
        }
        if let Some(seed) = read("TRIP_PLANNER_SEED") {
            let parsed = seed.parse::<u64>().map_err(|err| {
                PlannerError::Config(format!("TRIP_PLANNER_SEED `{}`: {}", seed, err))
            })?;
            config.seed = Some(parsed);
        }
        if let Some(path) = read("TRIP_PLANNER_STORE") {
            config.store_path = Some(PathBuf::from(path));
        }
        if let Some(slot) = read("TRIP_PLANNER_REQUEST_SLOT") {
            config.request_slot = slot;
        }
        if let Some(slot) = read("TRIP_PLANNER_PLAN_SLOT") {
            config.plan_slot = slot;
        }
        if let Some(slot) = read("TRIP_PLANNER_TRIPS_SLOT") {
            config.trips_slot = slot;
        }

        Ok(config)
    }
}
