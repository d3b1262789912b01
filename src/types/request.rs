use crate::{payload_schema, PlannerError, Result};
use chrono::NaiveDate;
use schemars::{
    gen::SchemaGenerator,
    schema::{Schema, SchemaObject},
    JsonSchema,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Food label used when the form leaves the preference blank.
pub const DEFAULT_FOOD_PREFERENCE: &str = "Local";

/// Largest budget whose whole units an `f64` still represents exactly (2^53 - 1).
pub const MAX_BUDGET: f64 = 9_007_199_254_740_991.0;

fn default_food_preference() -> String {
    DEFAULT_FOOD_PREFERENCE.to_string()
}

/// Free-text label schema: any string is accepted and mapped onto a known value.
fn label_schema(gen: &mut SchemaGenerator, known: &[&str], fallback: &str) -> Schema {
    let mut schema: SchemaObject = String::json_schema(gen).into_object();
    schema.metadata().description = Some(format!(
        "One of {}; anything else is read as `{}`",
        known.join(", "),
        fallback
    ));
    schema.into()
}

/// Preferred weather, which selects the activity table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WeatherPreference {
    Sunny,
    Rainy,
    #[default]
    Moderate,
}

impl WeatherPreference {
    /// Parse a form label; anything unrecognized is `Moderate`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "sunny" => WeatherPreference::Sunny,
            "rainy" => WeatherPreference::Rainy,
            _ => WeatherPreference::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherPreference::Sunny => "sunny",
            WeatherPreference::Rainy => "rainy",
            WeatherPreference::Moderate => "moderate",
        }
    }
}

impl From<String> for WeatherPreference {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl JsonSchema for WeatherPreference {
    fn schema_name() -> String {
        "WeatherPreference".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        label_schema(gen, &["sunny", "rainy", "moderate"], "moderate")
    }
}

impl fmt::Display for WeatherPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of lodging the group wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AccommodationType {
    #[default]
    Hotel,
    Hostel,
    Apartment,
}

impl AccommodationType {
    /// Parse a form label; anything unrecognized is `Hotel`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "hostel" => AccommodationType::Hostel,
            "apartment" => AccommodationType::Apartment,
            _ => AccommodationType::Hotel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccommodationType::Hotel => "hotel",
            AccommodationType::Hostel => "hostel",
            AccommodationType::Apartment => "apartment",
        }
    }
}

impl From<String> for AccommodationType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl JsonSchema for AccommodationType {
    fn schema_name() -> String {
        "AccommodationType".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        label_schema(gen, &["hotel", "hostel", "apartment"], "hotel")
    }
}

impl fmt::Display for AccommodationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the generator needs to know about a prospective trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[payload_schema(name = "TripRequest")]
pub struct TripRequest {
    /// Person organising the trip; leads the first subgroup
    pub main_contact: String,
    /// Other travellers, in the order they were entered
    #[serde(default)]
    pub members: Vec<String>,
    /// Destinations in visiting order
    pub destinations: Vec<String>,
    /// Trip length in days
    pub duration: u32,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Total budget for the whole group
    pub budget: f64,
    /// Weather the group prefers; selects activity tables
    #[serde(default)]
    pub weather_preference: WeatherPreference,
    /// Free-text cuisine label interpolated into meal suggestions
    #[serde(default = "default_food_preference")]
    pub food_preference: String,
    /// Preferred lodging
    #[serde(default)]
    pub accommodation_type: AccommodationType,
    /// Where the group departs from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    /// Anything else the group asked for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl TripRequest {
    pub fn new(main_contact: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            main_contact: main_contact.into(),
            members: Vec::new(),
            destinations: Vec::new(),
            duration: 1,
            start_date,
            budget: 0.0,
            weather_preference: WeatherPreference::default(),
            food_preference: default_food_preference(),
            accommodation_type: AccommodationType::default(),
            current_location: None,
            special_requests: None,
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_destinations<I, S>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations = destinations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_weather(mut self, weather: WeatherPreference) -> Self {
        self.weather_preference = weather;
        self
    }

    pub fn with_food_preference(mut self, food: impl Into<String>) -> Self {
        self.food_preference = food.into();
        self
    }

    pub fn with_accommodation(mut self, accommodation: AccommodationType) -> Self {
        self.accommodation_type = accommodation;
        self
    }

    pub fn with_current_location(mut self, location: impl Into<String>) -> Self {
        self.current_location = Some(location.into());
        self
    }

    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        self.special_requests = Some(requests.into());
        self
    }

    /// Members plus the main contact
    pub fn head_count(&self) -> usize {
        self.members.len() + 1
    }

    /// Days spent at each destination; remainder days are not assigned anywhere.
    pub fn days_per_destination(&self) -> u32 {
        match self.destinations.len() {
            0 => 0,
            n => self.duration / n as u32,
        }
    }

    /// Check the invariants generation relies on.
    pub fn validate(&self) -> Result<()> {
        if self.main_contact.trim().is_empty() {
            return Err(PlannerError::invalid("main contact is required"));
        }
        if self.duration < 1 {
            return Err(PlannerError::invalid("duration must be at least 1 day"));
        }
        if self.destinations.is_empty() {
            return Err(PlannerError::invalid(
                "at least one destination is required",
            ));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(PlannerError::invalid(format!(
                "budget must be a non-negative amount, got {}",
                self.budget
            )));
        }
        if self.budget > MAX_BUDGET {
            return Err(PlannerError::invalid(format!(
                "budget {} exceeds the largest supported amount {}",
                self.budget, MAX_BUDGET
            )));
        }
        Ok(())
    }
}
