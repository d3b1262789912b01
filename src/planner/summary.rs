use crate::types::{TripRequest, TripSummary};
use chrono::NaiveDate;

/// Destinations treated as domestic; anything else marks the trip as international.
pub const DOMESTIC_DESTINATIONS: [&str; 9] = [
    "kuala lumpur",
    "penang",
    "malacca",
    "johor bahru",
    "ipoh",
    "kuching",
    "kota kinabalu",
    "langkawi",
    "cameron highlands",
];

pub fn is_domestic_destination(destination: &str) -> bool {
    let normalized = destination.trim().to_lowercase();
    DOMESTIC_DESTINATIONS.contains(&normalized.as_str())
}

/// Format an amount with a currency symbol, dropping cents when the amount is whole.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount.fract() == 0.0 {
        format!("{}{}", symbol, amount as i64)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// M/D/YYYY, without zero padding.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn trip_summary(request: &TripRequest, currency_symbol: &str) -> TripSummary {
    TripSummary {
        total_members: request.head_count(),
        main_contact: request.main_contact.clone(),
        duration: format!("{} days", request.duration),
        destinations: request.destinations.clone(),
        start_date: format_date(request.start_date),
        total_budget: format_currency(request.budget, currency_symbol),
        current_location: request.current_location.clone(),
        special_requests: request.special_requests.clone(),
        includes_international: request
            .destinations
            .iter()
            .any(|destination| !is_domestic_destination(destination)),
    }
}
