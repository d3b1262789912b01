use super::{SlotStore, TripStore};
use crate::{
    types::{SavedTrip, TripPlan},
    PlannerError, Result,
};
use chrono::{DateTime, Utc};
use tracing::info;

/// Saved-trips collection kept as a JSON array in its own slot.
impl<S: SlotStore> TripStore<S> {
    /// All saved trips, oldest first; empty when nothing was saved yet
    pub fn trips(&self) -> Result<Vec<SavedTrip>> {
        Ok(self
            .load::<Vec<SavedTrip>>(&self.trips_slot)?
            .unwrap_or_default())
    }

    pub fn trip(&self, id: u64) -> Result<SavedTrip> {
        self.trips()?
            .into_iter()
            .find(|trip| trip.id == id)
            .ok_or_else(|| PlannerError::NotFound(format!("trip {}", id)))
    }

    /// Append a plan to the collection, stamped with the current time.
    pub fn add_trip(&mut self, plan: TripPlan) -> Result<SavedTrip> {
        self.add_trip_at(plan, Utc::now())
    }

    /// Append a plan saved at `created_at`.
    ///
    /// The id is the creation time in milliseconds, moved past the newest existing id
    /// when two trips land in the same millisecond.
    pub fn add_trip_at(&mut self, plan: TripPlan, created_at: DateTime<Utc>) -> Result<SavedTrip> {
        let mut trips = self.trips()?;

        let stamp = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
        let id = match trips.iter().map(|trip| trip.id).max() {
            Some(newest) if newest >= stamp => newest + 1,
            _ => stamp,
        };

        let trip = SavedTrip {
            id,
            created_at,
            plan,
        };
        trips.push(trip.clone());

        let slot = self.trips_slot.clone();
        self.save(&slot, &trips)?;
        info!(
            target: "trip_planner::storage",
            id,
            saved = trips.len(),
            "Saved trip"
        );
        Ok(trip)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        planner::ItineraryGenerator,
        storage::{MemoryStore, SlotStore, TripStore},
        types::TripRequest,
        TripPlan,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    fn plan(contact: &str) -> TripPlan {
        let request = TripRequest::new(contact, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .with_destinations(["Penang"])
            .with_duration(2)
            .with_budget(300.0);
        ItineraryGenerator::new()
            .with_seed(1)
            .generate_plan(&request)
            .unwrap()
    }

    #[test]
    fn test_empty_collection() {
        let store = TripStore::new(MemoryStore::new());
        assert!(store.trips().unwrap().is_empty());
    }

    #[test]
    fn test_add_get_and_list() {
        let mut store = TripStore::new(MemoryStore::new());
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

        let first = store.add_trip_at(plan("Alice"), at).unwrap();
        assert_eq!(first.id, at.timestamp_millis() as u64);

        let second = store.add_trip(plan("Bob")).unwrap();
        assert!(second.id > first.id);

        let all = store.trips().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].plan.summary.main_contact, "Alice");
        assert_eq!(all[1].plan.summary.main_contact, "Bob");

        assert_eq!(store.trip(second.id).unwrap(), second);
        assert!(store.inner().get("trips").unwrap().unwrap().starts_with('['));
    }

    #[test]
    fn test_same_millisecond_gets_distinct_ids() {
        let mut store = TripStore::new(MemoryStore::new());
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

        let first = store.add_trip_at(plan("Alice"), at).unwrap();
        let second = store.add_trip_at(plan("Bob"), at).unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_unknown_trip_is_not_found() {
        let mut store = TripStore::new(MemoryStore::new());
        store.add_trip(plan("Alice")).unwrap();

        let err = store.trip(42).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.is_request_error());
    }

    #[test]
    fn test_clear_keeps_saved_trips() {
        let mut store = TripStore::new(MemoryStore::new()).with_trips_slot("history");
        store.save_plan(&plan("Alice")).unwrap();
        store.add_trip(plan("Alice")).unwrap();
        store.clear().unwrap();

        assert!(store.load_plan().unwrap().is_none());
        assert_eq!(store.trips().unwrap().len(), 1);
        assert!(store.inner().get("history").unwrap().is_some());
    }

    #[test]
    fn test_tampered_collection_is_rejected() {
        let mut inner = MemoryStore::new();
        inner.set("trips", r#"[{"id": "x"}]"#.to_string()).unwrap();

        let err = TripStore::new(inner).trips().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
