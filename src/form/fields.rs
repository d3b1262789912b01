use super::rules::{sanitize, split_list, FieldRules};
use crate::{
    types::{AccommodationType, TripRequest, WeatherPreference, DEFAULT_FOOD_PREFERENCE},
    PlannerError, Result,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw values of the trip form, exactly as the user typed them.
///
/// Every field is text; conversion into a [`TripRequest`] happens in
/// [`FormFields::into_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub main_contact: String,
    /// Comma-delimited member names
    pub members: String,
    /// Comma-delimited destinations
    pub destinations: String,
    pub duration: String,
    /// YYYY-MM-DD
    pub start_date: String,
    pub budget: String,
    pub weather: String,
    pub food: String,
    pub accommodation: String,
    pub current_location: String,
    pub special_requests: String,
}

impl FormFields {
    /// Validate and convert into a request.
    ///
    /// Empty numeric fields become 0 and empty selects take their default, so a
    /// blank duration surfaces as an invalid request from [`TripRequest::validate`].
    pub fn into_request(self) -> Result<TripRequest> {
        self.into_request_with_members(None)
    }

    /// Like [`FormFields::into_request`], but with members gathered elsewhere.
    pub fn into_request_with_members(self, members: Option<Vec<String>>) -> Result<TripRequest> {
        let main_contact = FieldRules::REQUIRED_TEXT.check("mainContact", &self.main_contact)?;

        let destinations = split_list(&self.destinations);
        let members = match members {
            Some(list) => list
                .iter()
                .map(|name| sanitize(name))
                .filter(|name| !name.is_empty())
                .collect(),
            None => split_list(&self.members),
        };

        let duration = parse_leading_integer("duration", &self.duration)?;
        let budget = parse_number::<f64>("budget", &self.budget)?;
        let start_date = parse_date(&self.start_date)?;

        let food = sanitize(&self.food);
        let food = if food.is_empty() {
            DEFAULT_FOOD_PREFERENCE.to_string()
        } else {
            food
        };

        let mut request = TripRequest::new(main_contact, start_date)
            .with_members(members)
            .with_destinations(destinations)
            .with_duration(duration)
            .with_budget(budget)
            .with_weather(WeatherPreference::from_label(&self.weather))
            .with_food_preference(food)
            .with_accommodation(AccommodationType::from_label(&self.accommodation));

        let location = sanitize(&self.current_location);
        if !location.is_empty() {
            request = request.with_current_location(location);
        }
        let requests = sanitize(&self.special_requests);
        if !requests.is_empty() {
            request = request.with_special_requests(requests);
        }

        request.validate()?;

        debug!(
            target: "trip_planner::form",
            main_contact = %request.main_contact,
            members = request.members.len(),
            destinations = request.destinations.len(),
            "Built trip request from form"
        );

        Ok(request)
    }
}

fn parse_number<T>(field: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed
        .parse::<T>()
        .map_err(|err| PlannerError::invalid(format!("{} `{}`: {}", field, trimmed, err)))
}

/// Leading digits only, so "4.5" and "4 days" both read as 4.
fn parse_leading_integer(field: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let digits: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(PlannerError::invalid(format!(
            "{} `{}` is not a whole number",
            field, trimmed
        )));
    }
    digits
        .parse::<u32>()
        .map_err(|err| PlannerError::invalid(format!("{} `{}`: {}", field, trimmed, err)))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::invalid("startDate is required"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|err| {
        PlannerError::invalid(format!(
            "startDate `{}` is not a YYYY-MM-DD date: {}",
            trimmed, err
        ))
    })
}
