//! Single-key, single-value slot storage for requests and plans.

pub mod file;
pub mod memory;
mod trips;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::{
    config::{PlannerConfig, DEFAULT_PLAN_SLOT, DEFAULT_REQUEST_SLOT, DEFAULT_TRIPS_SLOT},
    schemas::{PayloadSchema, Validator},
    types::{TripPlan, TripRequest},
    Result,
};
use std::fmt;
use tracing::info;

/// String store addressed by slot name. Last write wins; no expiry.
pub trait SlotStore: fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove a slot, returning what it held
    fn remove(&mut self, key: &str) -> Result<Option<String>>;
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<Option<String>> {
        (**self).remove(key)
    }
}

/// Typed access to the request and plan slots of a [`SlotStore`]
#[derive(Debug)]
pub struct TripStore<S: SlotStore> {
    store: S,
    request_slot: String,
    plan_slot: String,
    trips_slot: String,
    validator: Validator,
}

impl<S: SlotStore> TripStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            request_slot: DEFAULT_REQUEST_SLOT.to_string(),
            plan_slot: DEFAULT_PLAN_SLOT.to_string(),
            trips_slot: DEFAULT_TRIPS_SLOT.to_string(),
            validator: Validator::default(),
        }
    }

    pub fn from_config(store: S, config: &PlannerConfig) -> Self {
        Self::new(store)
            .with_slots(config.request_slot.clone(), config.plan_slot.clone())
            .with_trips_slot(config.trips_slot.clone())
    }

    pub fn with_slots(mut self, request_slot: impl Into<String>, plan_slot: impl Into<String>) -> Self {
        self.request_slot = request_slot.into();
        self.plan_slot = plan_slot.into();
        self
    }

    pub fn with_trips_slot(mut self, trips_slot: impl Into<String>) -> Self {
        self.trips_slot = trips_slot.into();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn request_slot(&self) -> &str {
        &self.request_slot
    }

    pub fn plan_slot(&self) -> &str {
        &self.plan_slot
    }

    pub fn trips_slot(&self) -> &str {
        &self.trips_slot
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Serialize `payload` into `slot`
    pub fn save<T: PayloadSchema>(&mut self, slot: &str, payload: &T) -> Result<()> {
        let raw = serde_json::to_string(payload)?;
        self.store.set(slot, raw)?;
        info!(
            target: "trip_planner::storage",
            slot,
            schema = T::schema().schema_name(),
            "Saved payload"
        );
        Ok(())
    }

    /// Decode the payload held in `slot`, if any
    pub fn load<T: PayloadSchema>(&self, slot: &str) -> Result<Option<T>> {
        match self.store.get(slot)? {
            Some(raw) => self.validator.decode::<T>(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn save_request(&mut self, request: &TripRequest) -> Result<()> {
        let slot = self.request_slot.clone();
        self.save(&slot, request)
    }

    pub fn load_request(&self) -> Result<Option<TripRequest>> {
        self.load(&self.request_slot)
    }

    /// Load the stored request and clear its slot.
    pub fn take_request(&mut self) -> Result<Option<TripRequest>> {
        let request = self.load_request()?;
        if request.is_some() {
            let slot = self.request_slot.clone();
            self.store.remove(&slot)?;
        }
        Ok(request)
    }

    pub fn save_plan(&mut self, plan: &TripPlan) -> Result<()> {
        let slot = self.plan_slot.clone();
        self.save(&slot, plan)
    }

    pub fn load_plan(&self) -> Result<Option<TripPlan>> {
        self.load(&self.plan_slot)
    }

    /// Remove the request and plan slots; saved trips are kept
    pub fn clear(&mut self) -> Result<()> {
        let request_slot = self.request_slot.clone();
        let plan_slot = self.plan_slot.clone();
        self.store.remove(&request_slot)?;
        self.store.remove(&plan_slot)?;
        Ok(())
    }
}
