use super::TripPlan;
use crate::schema::{PayloadDocs, PayloadSchema, SchemaHandle};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A generated plan kept in the saved-trips collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SavedTrip {
    /// Milliseconds since the Unix epoch when saved, bumped past earlier ids if needed
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub plan: TripPlan,
}

/// The collection is stored as a bare JSON array, oldest trip first.
impl PayloadSchema for Vec<SavedTrip> {
    fn schema() -> &'static SchemaHandle {
        static HANDLE: OnceLock<SchemaHandle> = OnceLock::new();
        HANDLE.get_or_init(|| {
            SchemaHandle::for_type::<Vec<SavedTrip>>(PayloadDocs {
                name: "SavedTrips",
                rust_type: "Vec<SavedTrip>",
                description: Some("Saved trips, oldest first"),
                fields: &[],
            })
        })
    }
}
