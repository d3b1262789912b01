use super::{
    accommodation::{accommodation_plan, travel_tips},
    activity::{ActivityPolicy, DayContext, RandomActivityPolicy},
    allocation::AllocationPolicy,
    groups::group_arrangements,
    registry::PolicyRegistry,
    summary::trip_summary,
};
use crate::{
    config::PlannerConfig,
    types::{BudgetBreakdown, DayEntry, MealPlan, TripPlan, TripRequest},
    Result,
};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns a [`TripRequest`] into a [`TripPlan`].
///
/// Generation is a pure transformation apart from the random source, which is drawn
/// from entropy unless a seed is configured or an RNG is passed in explicitly.
#[derive(Debug, Clone)]
pub struct ItineraryGenerator {
    activity_policy: Arc<dyn ActivityPolicy>,
    allocation_policy: AllocationPolicy,
    currency_symbol: String,
    seed: Option<u64>,
}

impl ItineraryGenerator {
    /// Random activities, standard allocation, dollar amounts
    pub fn new() -> Self {
        Self {
            activity_policy: Arc::new(RandomActivityPolicy::new()),
            allocation_policy: AllocationPolicy::standard(),
            currency_symbol: "$".to_string(),
            seed: None,
        }
    }

    /// Build a generator from configuration, resolving policies by name
    pub fn from_config(config: &PlannerConfig, registry: &PolicyRegistry) -> Result<Self> {
        Ok(Self {
            activity_policy: registry.resolve(&config.activity_policy)?,
            allocation_policy: AllocationPolicy::named(&config.allocation)?,
            currency_symbol: config.currency_symbol.clone(),
            seed: config.seed,
        })
    }

    pub fn with_activity_policy<P: ActivityPolicy + 'static>(mut self, policy: P) -> Self {
        self.activity_policy = Arc::new(policy);
        self
    }

    pub fn with_shared_policy(mut self, policy: Arc<dyn ActivityPolicy>) -> Self {
        self.activity_policy = policy;
        self
    }

    pub fn with_allocation_policy(mut self, policy: AllocationPolicy) -> Self {
        self.allocation_policy = policy;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn activity_policy(&self) -> &dyn ActivityPolicy {
        self.activity_policy.as_ref()
    }

    pub fn allocation_policy(&self) -> &AllocationPolicy {
        &self.allocation_policy
    }

    /// Generate a plan using the configured seed, or fresh entropy.
    pub fn generate_plan(&self, request: &TripRequest) -> Result<TripPlan> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_plan_with_rng(request, &mut rng)
    }

    /// Generate a plan drawing randomness from `rng`.
    pub fn generate_plan_with_rng(
        &self,
        request: &TripRequest,
        rng: &mut dyn RngCore,
    ) -> Result<TripPlan> {
        request.validate()?;

        info!(
            target: "trip_planner::generator",
            main_contact = %request.main_contact,
            destinations = request.destinations.len(),
            duration = request.duration,
            policy = self.activity_policy.name(),
            allocation = self.allocation_policy.name(),
            "Generating trip plan"
        );

        let accommodation = accommodation_plan(request.accommodation_type);
        let tips = travel_tips(&accommodation);

        let plan = TripPlan {
            summary: trip_summary(request, &self.currency_symbol),
            daily_schedule: self.daily_schedule(request, rng),
            budget_breakdown: self.budget_breakdown(request),
            accommodation_plan: accommodation,
            group_arrangements: group_arrangements(&request.main_contact, &request.members),
            travel_tips: tips,
        };

        let dropped = request.duration as usize - plan.scheduled_days();
        if dropped > 0 {
            warn!(
                target: "trip_planner::generator",
                dropped,
                "Duration does not divide evenly across destinations; remainder days left unscheduled"
            );
        }

        Ok(plan)
    }

    fn daily_schedule(&self, request: &TripRequest, rng: &mut dyn RngCore) -> Vec<DayEntry> {
        let days_per_destination = request.days_per_destination();
        let meals = MealPlan::for_preference(&request.food_preference);
        let mut schedule =
            Vec::with_capacity(days_per_destination as usize * request.destinations.len());

        let mut day = 1;
        for destination in &request.destinations {
            for _ in 0..days_per_destination {
                let ctx = DayContext {
                    day,
                    destination,
                    weather: request.weather_preference,
                };
                let activities = self.activity_policy.activities(&ctx, rng);
                debug!(
                    target: "trip_planner::generator",
                    day,
                    destination = %destination,
                    morning = %activities.morning,
                    afternoon = %activities.afternoon,
                    "Scheduled day"
                );

                schedule.push(DayEntry {
                    day,
                    destination: destination.clone(),
                    activities,
                    meals: meals.clone(),
                });
                day += 1;
            }
        }

        schedule
    }

    fn budget_breakdown(&self, request: &TripRequest) -> BudgetBreakdown {
        let duration = f64::from(request.duration);
        let people = request.head_count() as f64;

        BudgetBreakdown {
            per_person_per_day: (request.budget / (people * duration)).round() as i64,
            daily_budget: (request.budget / duration).round() as i64,
            allocation: self.allocation_policy.allocate(request.budget),
        }
    }
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a plan with the default generator.
pub fn generate_plan(request: &TripRequest) -> Result<TripPlan> {
    ItineraryGenerator::new().generate_plan(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::activity::{CyclicNamedDestinationPolicy, GROUP_DINNER};
    use crate::types::{AccommodationType, WeatherPreference, MAX_BUDGET};
    use chrono::NaiveDate;

    fn sample_request() -> TripRequest {
        TripRequest::new("Alice", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .with_members(["Bob", "Cara", "Dee", "Eve"])
            .with_destinations(["Penang", "Malacca"])
            .with_duration(4)
            .with_budget(1000.0)
            .with_weather(WeatherPreference::Sunny)
            .with_accommodation(AccommodationType::Hostel)
    }

    #[test]
    fn test_schedule_walks_destinations_in_order() {
        let plan = ItineraryGenerator::new()
            .with_seed(1)
            .generate_plan(&sample_request())
            .unwrap();

        let days: Vec<(u32, &str)> = plan
            .daily_schedule
            .iter()
            .map(|entry| (entry.day, entry.destination.as_str()))
            .collect();
        assert_eq!(
            days,
            vec![(1, "Penang"), (2, "Penang"), (3, "Malacca"), (4, "Malacca")]
        );
        assert!(plan
            .daily_schedule
            .iter()
            .all(|entry| entry.activities.evening == GROUP_DINNER));
    }

    #[test]
    fn test_remainder_days_are_dropped() {
        let request = sample_request()
            .with_destinations(["Penang", "Malacca", "Ipoh"])
            .with_duration(5);
        let plan = generate_plan(&request).unwrap();

        assert_eq!(plan.scheduled_days(), 3);
        assert_eq!(plan.summary.duration, "5 days");
    }

    #[test]
    fn test_short_trip_to_many_places_has_empty_schedule() {
        let request = sample_request()
            .with_destinations(["Penang", "Malacca", "Ipoh"])
            .with_duration(2);
        let plan = generate_plan(&request).unwrap();

        assert!(plan.daily_schedule.is_empty());
        assert_eq!(plan.budget_breakdown.per_person_per_day, 100);
    }

    #[test]
    fn test_budget_breakdown() {
        let plan = generate_plan(&sample_request()).unwrap();

        assert_eq!(plan.budget_breakdown.per_person_per_day, 50);
        assert_eq!(plan.budget_breakdown.daily_budget, 250);
        assert_eq!(plan.budget_breakdown.allocation.accommodation, 400);
        assert_eq!(plan.budget_breakdown.allocation.emergency, 50);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let generator = ItineraryGenerator::new().with_seed(99);
        let first = generator.generate_plan(&sample_request()).unwrap();
        let second = generator.generate_plan(&sample_request()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cyclic_policy_plugs_in() {
        let plan = ItineraryGenerator::new()
            .with_activity_policy(CyclicNamedDestinationPolicy::new())
            .generate_plan(&sample_request())
            .unwrap();

        assert_eq!(plan.daily_schedule[0].activities.morning, "Penang Hill");
        assert_eq!(
            plan.daily_schedule[2].activities.morning,
            "Explore Malacca - Day 3 Morning"
        );
    }

    #[test]
    fn test_invalid_request_produces_no_plan() {
        let err = generate_plan(&sample_request().with_duration(0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REQUEST");

        let err = generate_plan(&sample_request().with_budget(-5.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REQUEST");
    }

    #[test]
    fn test_oversized_budget_is_rejected_not_saturated() {
        let err = generate_plan(&sample_request().with_budget(1e20)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_REQUEST");

        let plan = generate_plan(&sample_request().with_budget(MAX_BUDGET)).unwrap();
        assert_eq!(plan.summary.total_budget, "$9007199254740991");
        assert!(plan.budget_breakdown.allocation.accommodation < i64::MAX);
    }

    #[test]
    fn test_from_config_resolves_names() {
        let config = PlannerConfig {
            activity_policy: "cyclic".to_string(),
            allocation: "compact".to_string(),
            currency_symbol: "RM".to_string(),
            ..PlannerConfig::default()
        };
        let generator =
            ItineraryGenerator::from_config(&config, &PolicyRegistry::with_builtin()).unwrap();

        assert_eq!(generator.activity_policy().name(), "cyclic");
        assert_eq!(generator.allocation_policy().name(), "compact");

        let plan = generator.generate_plan(&sample_request()).unwrap();
        assert_eq!(plan.summary.total_budget, "RM1000");
        assert_eq!(plan.budget_breakdown.allocation.transportation, 0);
    }

    #[test]
    fn test_from_config_rejects_unknown_policy() {
        let config = PlannerConfig {
            activity_policy: "weighted".to_string(),
            ..PlannerConfig::default()
        };
        assert!(ItineraryGenerator::from_config(&config, &PolicyRegistry::with_builtin()).is_err());
    }
}
