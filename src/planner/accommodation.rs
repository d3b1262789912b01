use crate::types::{AccommodationPlan, AccommodationType};

/// Lodging suggestion for an accommodation type.
pub fn accommodation_plan(kind: AccommodationType) -> AccommodationPlan {
    let (label, room_arrangement, amenities): (&str, &str, [&str; 4]) = match kind {
        AccommodationType::Hotel => (
            "Hotel",
            "Double rooms",
            [
                "Daily housekeeping",
                "Room service",
                "Wi-Fi",
                "Breakfast included",
            ],
        ),
        AccommodationType::Hostel => (
            "Hostel",
            "Shared dormitory",
            ["Common kitchen", "Lounge area", "Wi-Fi", "Lockers"],
        ),
        AccommodationType::Apartment => (
            "Vacation Rental",
            "Multi-bedroom apartment",
            ["Full kitchen", "Living space", "Wi-Fi", "Laundry facilities"],
        ),
    };

    AccommodationPlan {
        kind: label.to_string(),
        room_arrangement: room_arrangement.to_string(),
        amenities: amenities.iter().map(|item| item.to_string()).collect(),
    }
}

/// Fixed advice shown with every plan.
pub fn travel_tips(accommodation: &AccommodationPlan) -> Vec<String> {
    vec![
        format!(
            "Remember to book your {} in advance",
            accommodation.kind.to_lowercase()
        ),
        "Check the weather forecast before your trip".to_string(),
        "Keep emergency contacts handy".to_string(),
        "Make copies of important documents".to_string(),
    ]
}
