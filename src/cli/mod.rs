use crate::{
    form::{FormFields, FormSession},
    render::{render_day, RenderFormat, RenderSink, WriterSink},
    schema::PayloadSchema,
    storage::{FileStore, MemoryStore, SlotStore, TripStore},
    ItineraryGenerator, PlannerConfig, PlannerError, PolicyRegistry, SavedTrip, TripPlan,
    TripRequest, Validator,
};
use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{fs, io, path::PathBuf};
use tracing::{error, info};

fn form_args(command: Command) -> Command {
    let fields = [
        ("contact", 'c', "NAME", "Main contact for the trip"),
        ("members", 'm', "LIST", "Comma-separated member names"),
        ("destinations", 'd', "LIST", "Comma-separated destinations, visited in order"),
        ("duration", 'n', "DAYS", "Trip length in days"),
        ("start-date", 's', "YYYY-MM-DD", "First day of the trip"),
        ("budget", 'b', "AMOUNT", "Total budget for the whole group"),
        ("weather", 'w', "PREFERENCE", "sunny, rainy or moderate"),
        ("food", 'f', "LABEL", "Food preference used in meal suggestions"),
        ("accommodation", 'a', "TYPE", "hotel, hostel or apartment"),
    ];

    let command = fields
        .into_iter()
        .fold(command, |command, (name, short, value, help)| {
            command.arg(
                Arg::new(name)
                    .short(short)
                    .long(name)
                    .value_name(value)
                    .help(help),
            )
        });

    command
        .arg(
            Arg::new("member")
                .long("member")
                .value_name("NAME")
                .action(ArgAction::Append)
                .conflicts_with("members")
                .help("Add one member; repeat for more"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("PLACE")
                .help("Where the group departs from"),
        )
        .arg(
            Arg::new("requests")
                .long("requests")
                .value_name("TEXT")
                .help("Special requests carried into the summary"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .conflicts_with_all(["contact", "destinations"])
                .help("Read a JSON trip request instead of form flags"),
        )
}

fn build_cli() -> Command {
    let store = Arg::new("store")
        .long("store")
        .value_name("FILE")
        .global(true)
        .help("JSON slot file (or set TRIP_PLANNER_STORE)");
    let format = Arg::new("format")
        .short('o')
        .long("format")
        .value_name("FORMAT")
        .global(true)
        .default_value("text")
        .help("Output format: text or json");

    let plan = form_args(
        Command::new("plan")
            .about("Generate a plan from form values and store it")
            .arg(
                Arg::new("policy")
                    .short('p')
                    .long("policy")
                    .value_name("NAME")
                    .help("Activity policy (see `policies`)"),
            )
            .arg(
                Arg::new("allocation")
                    .long("allocation")
                    .value_name("NAME")
                    .help("Budget allocation: standard or compact"),
            )
            .arg(
                Arg::new("seed")
                    .long("seed")
                    .value_name("SEED")
                    .value_parser(clap::value_parser!(u64))
                    .help("Seed for reproducible activity picks"),
            )
            .arg(
                Arg::new("currency")
                    .long("currency")
                    .value_name("SYMBOL")
                    .help("Currency symbol for the summary"),
            ),
    );

    Command::new("trip-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plan group trips: daily schedule, budget split and group arrangements")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(store)
        .arg(format)
        .subcommand(plan)
        .subcommand(
            Command::new("show")
                .about("Print the stored plan, or a saved trip")
                .arg(
                    Arg::new("trip")
                        .long("trip")
                        .value_name("ID")
                        .value_parser(clap::value_parser!(u64))
                        .help("Id of a saved trip (see `trips`)"),
                ),
        )
        .subcommand(Command::new("trips").about("List saved trips"))
        .subcommand(
            Command::new("day").about("Print one day of the stored plan").arg(
                Arg::new("number")
                    .required(true)
                    .index(1)
                    .value_parser(clap::value_parser!(u32))
                    .help("Day number, starting at 1"),
            ),
        )
        .subcommand(
            Command::new("schema")
                .about("Print the JSON schema of a stored payload")
                .arg(
                    Arg::new("payload")
                        .index(1)
                        .value_parser(["request", "plan", "trips"])
                        .default_value("plan"),
                ),
        )
        .subcommand(Command::new("policies").about("List the available activity policies"))
}

fn open_store(
    matches: &ArgMatches,
    config: &PlannerConfig,
) -> Option<TripStore<Box<dyn SlotStore>>> {
    let path = matches
        .get_one::<String>("store")
        .map(PathBuf::from)
        .or_else(|| config.store_path.clone())?;
    info!(store = %path.display(), "Using slot file");
    let store: Box<dyn SlotStore> = Box::new(FileStore::new(path));
    Some(TripStore::from_config(store, config))
}

fn request_from_matches(matches: &ArgMatches) -> anyhow::Result<TripRequest> {
    if let Some(path) = matches.get_one::<String>("input") {
        let raw =
            fs::read_to_string(path).with_context(|| format!("reading trip request {}", path))?;
        return Ok(Validator::Strict.decode::<TripRequest>(&raw)?);
    }

    let text = |name: &str| matches.get_one::<String>(name).cloned().unwrap_or_default();
    let mut session = FormSession::with_fields(FormFields {
        main_contact: text("contact"),
        members: text("members"),
        destinations: text("destinations"),
        duration: text("duration"),
        start_date: text("start-date"),
        budget: text("budget"),
        weather: text("weather"),
        food: text("food"),
        accommodation: text("accommodation"),
        current_location: text("from"),
        special_requests: text("requests"),
    });

    if let Some(members) = matches.get_many::<String>("member") {
        for member in members {
            session.add_member(member.clone());
        }
    }

    Ok(session.build_request()?)
}

fn plan_command(
    matches: &ArgMatches,
    mut config: PlannerConfig,
    format: RenderFormat,
    store: Option<TripStore<Box<dyn SlotStore>>>,
) -> anyhow::Result<()> {
    if let Some(policy) = matches.get_one::<String>("policy") {
        config.activity_policy = policy.clone();
    }
    if let Some(allocation) = matches.get_one::<String>("allocation") {
        config.allocation = allocation.clone();
    }
    if let Some(currency) = matches.get_one::<String>("currency") {
        config.currency_symbol = currency.clone();
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }

    let registry = PolicyRegistry::with_builtin();
    let generator = ItineraryGenerator::from_config(&config, &registry)?;

    let mut store = store.unwrap_or_else(|| {
        let memory: Box<dyn SlotStore> = Box::new(MemoryStore::new());
        TripStore::from_config(memory, &config)
    });

    let request = request_from_matches(matches)?;
    let trip = match record_plan(&mut store, &generator, &request) {
        Ok(trip) => trip,
        Err(err) => {
            error!(code = err.error_code(), "Plan generation failed: {}", err);
            return Err(err.into());
        }
    };
    info!(id = trip.id, "Trip saved");

    WriterSink::new(io::stdout().lock(), format).display(&trip.plan)?;
    Ok(())
}

/// Keep the request in its slot, then store the plan both as the current plan and in
/// the saved-trips collection.
fn record_plan<S: SlotStore>(
    store: &mut TripStore<S>,
    generator: &ItineraryGenerator,
    request: &TripRequest,
) -> crate::Result<SavedTrip> {
    store.save_request(request)?;
    let plan = generator.generate_plan(request)?;
    store.save_plan(&plan)?;
    store.add_trip(plan)
}

const NO_STORE: &str = "no plan store configured; pass --store or set TRIP_PLANNER_STORE";

fn trip_line(trip: &SavedTrip) -> String {
    let summary = &trip.plan.summary;
    format!(
        "{}  {}  {} to {} ({})",
        trip.id,
        trip.created_at.format("%Y-%m-%d %H:%M"),
        summary.main_contact,
        summary.destinations.join(", "),
        summary.duration
    )
}

fn stored_plan(store: Option<TripStore<Box<dyn SlotStore>>>) -> anyhow::Result<TripPlan> {
    let store = store.ok_or_else(|| anyhow!(NO_STORE))?;
    let plan = store
        .load_plan()?
        .ok_or_else(|| PlannerError::NotFound(format!("slot `{}`", store.plan_slot())))?;
    Ok(plan)
}

/// CLI entry point for the trip planner
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let matches = build_cli().get_matches();
    let config = PlannerConfig::from_env()?;
    let format = matches
        .get_one::<String>("format")
        .map(|value| value.parse::<RenderFormat>())
        .transpose()?
        .unwrap_or_default();
    let store = open_store(&matches, &config);

    match matches.subcommand() {
        Some(("plan", sub)) => plan_command(sub, config, format, store),
        Some(("show", sub)) => {
            let plan = match sub.get_one::<u64>("trip") {
                Some(id) => {
                    let store = store.ok_or_else(|| anyhow!(NO_STORE))?;
                    store.trip(*id)?.plan
                }
                None => stored_plan(store)?,
            };
            WriterSink::new(io::stdout().lock(), format).display(&plan)?;
            Ok(())
        }
        Some(("trips", _)) => {
            let store = store.ok_or_else(|| anyhow!(NO_STORE))?;
            let trips = store.trips()?;
            if trips.is_empty() {
                println!("No saved trips");
            }
            for trip in &trips {
                println!("{}", trip_line(trip));
            }
            Ok(())
        }
        Some(("day", sub)) => {
            let number = sub.get_one::<u32>("number").copied().unwrap_or(1);
            let plan = stored_plan(store)?;
            let entry = plan
                .day(number)
                .ok_or_else(|| PlannerError::NotFound(format!("day {}", number)))?;
            match format {
                RenderFormat::Text => println!("{}", render_day(entry)),
                RenderFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
            }
            Ok(())
        }
        Some(("schema", sub)) => {
            let handle = match sub.get_one::<String>("payload").map(String::as_str) {
                Some("request") => TripRequest::schema(),
                Some("trips") => Vec::<SavedTrip>::schema(),
                _ => TripPlan::schema(),
            };
            println!("{}", serde_json::to_string_pretty(handle.schema_json())?);
            Ok(())
        }
        Some(("policies", _)) => {
            let registry = PolicyRegistry::with_builtin();
            for policy in registry.list() {
                println!("{:<10} {}", policy.name(), policy.description());
            }
            Ok(())
        }
        _ => Err(anyhow!("unknown command")),
    }
}
