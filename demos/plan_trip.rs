use trip_planner_rs::{
    form::FormFields, FormSession, ItineraryGenerator, MemoryStore, PlannerConfig, PolicyRegistry,
    RenderFormat, TripStore,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut session = FormSession::with_fields(FormFields {
        main_contact: "Alice".to_string(),
        destinations: "Kuala Lumpur, Penang".to_string(),
        duration: "6".to_string(),
        start_date: "2024-06-01".to_string(),
        budget: "2400".to_string(),
        weather: "sunny".to_string(),
        food: "Malay".to_string(),
        accommodation: "hostel".to_string(),
        ..FormFields::default()
    });
    for name in ["Bob", "Cara", "Dee", "Eve"] {
        session.add_member(name);
    }

    let config = PlannerConfig {
        activity_policy: "cyclic".to_string(),
        seed: Some(7),
        ..PlannerConfig::from_env()?
    };
    let generator = ItineraryGenerator::from_config(&config, &PolicyRegistry::with_builtin())?;

    let mut store = TripStore::from_config(MemoryStore::new(), &config);
    store.save_request(&session.build_request()?)?;

    if let Some(request) = store.take_request()? {
        let plan = generator.generate_plan(&request)?;
        store.save_plan(&plan)?;
        println!("{}", RenderFormat::Text.render(&plan)?);
    }

    Ok(())
}
