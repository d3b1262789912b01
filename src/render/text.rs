use crate::types::{DayEntry, TripPlan};

/// Render a full plan as a sectioned plain-text report
pub fn render_plan(plan: &TripPlan) -> String {
    let mut lines = Vec::new();
    let summary = &plan.summary;

    lines.push("=== Your Trip Plan ===".to_string());
    lines.push(format!("Main Contact: {}", summary.main_contact));
    lines.push(format!("Group Size: {} people", summary.total_members));
    if let Some(from) = &summary.current_location {
        lines.push(format!("From: {}", from));
    }
    lines.push(format!("Destinations: {}", summary.destinations.join(", ")));
    lines.push(format!("Duration: {}", summary.duration));
    lines.push(format!("Start Date: {}", summary.start_date));
    lines.push(format!("Total Budget: {}", summary.total_budget));
    if summary.includes_international {
        lines.push("Includes international destinations".to_string());
    }
    if let Some(requests) = &summary.special_requests {
        lines.push(format!("Special Requests: {}", requests));
    }

    lines.push(String::new());
    lines.push("--- Daily Schedule ---".to_string());
    if plan.daily_schedule.is_empty() {
        lines.push("No days scheduled".to_string());
    }
    for entry in &plan.daily_schedule {
        lines.push(String::new());
        lines.extend(day_lines(entry));
    }

    let budget = &plan.budget_breakdown;
    let allocation = &budget.allocation;
    lines.push(String::new());
    lines.push("--- Budget Breakdown ---".to_string());
    lines.push(format!("Per Person Per Day: {}", budget.per_person_per_day));
    lines.push(format!("Daily Budget: {}", budget.daily_budget));
    lines.push(format!("Accommodation: {}", allocation.accommodation));
    lines.push(format!("Food: {}", allocation.food));
    lines.push(format!("Activities: {}", allocation.activities));
    lines.push(format!("Transportation: {}", allocation.transportation));
    lines.push(format!("Emergency Fund: {}", allocation.emergency));

    let accommodation = &plan.accommodation_plan;
    lines.push(String::new());
    lines.push("--- Accommodation ---".to_string());
    lines.push(format!("Type: {}", accommodation.kind));
    lines.push(format!("Rooms: {}", accommodation.room_arrangement));
    lines.push(format!("Amenities: {}", accommodation.amenities.join(", ")));

    let groups = &plan.group_arrangements;
    lines.push(String::new());
    lines.push("--- Group Arrangements ---".to_string());
    lines.push(format!("Leader: {}", groups.leader));
    for subgroup in &groups.subgroups {
        lines.push(format!(
            "Group {}: {}",
            subgroup.group_number,
            subgroup.members.join(", ")
        ));
    }

    if !plan.travel_tips.is_empty() {
        lines.push(String::new());
        lines.push("--- Travel Tips ---".to_string());
        for tip in &plan.travel_tips {
            lines.push(format!("- {}", tip));
        }
    }

    lines.join("\n")
}

/// Render a single scheduled day
pub fn render_day(entry: &DayEntry) -> String {
    day_lines(entry).join("\n")
}

fn day_lines(entry: &DayEntry) -> Vec<String> {
    vec![
        format!("Day {} - {}", entry.day, entry.destination),
        format!("  Morning: {}", entry.activities.morning),
        format!("  Afternoon: {}", entry.activities.afternoon),
        format!("  Evening: {}", entry.activities.evening),
        format!("  Breakfast: {}", entry.meals.breakfast),
        format!("  Lunch: {}", entry.meals.lunch),
        format!("  Dinner: {}", entry.meals.dinner),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{CyclicNamedDestinationPolicy, ItineraryGenerator};
    use crate::types::TripRequest;
    use chrono::NaiveDate;

    fn plan() -> TripPlan {
        let request = TripRequest::new("Alice", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .with_members(["Bob", "Cara", "Dee", "Eve"])
            .with_destinations(["Ipoh"])
            .with_duration(2)
            .with_budget(500.0)
            .with_special_requests("Late checkout");
        ItineraryGenerator::new()
            .with_activity_policy(CyclicNamedDestinationPolicy::new())
            .generate_plan(&request)
            .unwrap()
    }

    #[test]
    fn test_report_sections() {
        let report = render_plan(&plan());

        assert!(report.starts_with("=== Your Trip Plan ==="));
        assert!(report.contains("Group Size: 5 people"));
        assert!(report.contains("Start Date: 6/1/2024"));
        assert!(report.contains("Total Budget: $500"));
        assert!(report.contains("Special Requests: Late checkout"));
        assert!(report.contains("Day 2 - Ipoh"));
        assert!(report.contains("Group 2: Eve"));
        assert!(report.contains("Remember to book your hotel in advance"));
        assert!(!report.contains("international"));
    }

    #[test]
    fn test_single_day() {
        let plan = plan();
        let day = render_day(&plan.daily_schedule[0]);

        assert!(day.starts_with("Day 1 - Ipoh"));
        assert!(day.contains("Morning: Explore Ipoh - Day 1 Morning"));
        assert!(day.contains("Breakfast: Local breakfast options at accommodation"));
    }
}
