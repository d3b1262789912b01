use trip_planner_rs::{
    form::FormFields, FileStore, FormSession, ItineraryGenerator, PlannerConfig, PlannerError,
    PolicyRegistry, RenderFormat, RenderSink, TripStore, WriterSink,
};

fn penang_form() -> FormFields {
    FormFields {
        main_contact: "  Alice <b>".to_string(),
        destinations: "Penang, Kuala Lumpur".to_string(),
        duration: "5".to_string(),
        start_date: "2024-12-24".to_string(),
        budget: "1500.50".to_string(),
        weather: "RAINY".to_string(),
        food: "Nyonya".to_string(),
        accommodation: "apartment".to_string(),
        current_location: "Singapore".to_string(),
        ..FormFields::default()
    }
}

#[test]
fn test_form_to_rendered_plan() {
    let mut session = FormSession::with_fields(penang_form());
    session.add_member("Bob");
    let blank = session.add_member_field();
    session.add_member("Cara");
    assert_eq!(blank, "member_name_2");

    let request = session.build_request().unwrap();
    assert_eq!(request.main_contact, "Alice b");
    assert_eq!(request.members, vec!["Bob", "Cara"]);

    let config = PlannerConfig {
        activity_policy: "cyclic".to_string(),
        currency_symbol: "RM".to_string(),
        ..PlannerConfig::default()
    };
    let generator = ItineraryGenerator::from_config(&config, &PolicyRegistry::with_builtin()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut store = TripStore::from_config(FileStore::new(dir.path().join("slots.json")), &config);
    store.save_request(&request).unwrap();

    let request = store.take_request().unwrap().unwrap();
    let plan = generator.generate_plan(&request).unwrap();
    store.save_plan(&plan).unwrap();

    // Five days over two destinations leaves one day unscheduled.
    assert_eq!(plan.scheduled_days(), 4);
    assert_eq!(plan.summary.total_budget, "RM1500.50");
    assert_eq!(plan.summary.start_date, "12/24/2024");
    assert_eq!(plan.summary.current_location.as_deref(), Some("Singapore"));
    assert_eq!(plan.daily_schedule[0].activities.morning, "Art Gallery");
    assert_eq!(
        plan.daily_schedule[0].meals.dinner,
        "Group dinner at recommended Nyonya restaurant"
    );

    let reloaded = TripStore::new(FileStore::new(dir.path().join("slots.json")))
        .load_plan()
        .unwrap()
        .unwrap();
    assert_eq!(reloaded, plan);

    let mut sink = WriterSink::new(Vec::new(), RenderFormat::Text);
    sink.display(&reloaded).unwrap();
    let report = String::from_utf8(sink.into_inner()).unwrap();
    assert!(report.contains("From: Singapore"));
    assert!(report.contains("Day 4 - Kuala Lumpur"));
    assert!(report.contains("Type: Vacation Rental"));
}

#[test]
fn test_blank_form_is_rejected() {
    let err = FormSession::new().build_request().unwrap_err();
    assert!(matches!(err, PlannerError::InvalidRequest(_)));
    assert!(err.is_request_error());
}

#[test]
fn test_empty_duration_coerces_to_zero_and_fails_generation() {
    let form = FormFields {
        duration: String::new(),
        ..penang_form()
    };
    let err = form.into_request().unwrap_err();
    assert_eq!(err.error_code(), "INVALID_REQUEST");
}

#[test]
fn test_international_destination_flag() {
    let form = FormFields {
        destinations: "Penang, Tokyo".to_string(),
        ..penang_form()
    };
    let plan = ItineraryGenerator::new()
        .with_seed(8)
        .generate_plan(&form.into_request().unwrap())
        .unwrap();

    assert!(plan.summary.includes_international);
}

#[test]
fn test_unknown_policy_in_config() {
    let config = PlannerConfig {
        activity_policy: "weather-api".to_string(),
        ..PlannerConfig::default()
    };
    let err = ItineraryGenerator::from_config(&config, &PolicyRegistry::with_builtin()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
