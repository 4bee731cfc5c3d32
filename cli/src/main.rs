mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{
    handle_city_list, handle_road_add, handle_road_import, handle_road_list, handle_route,
    load_config, AppContext, CityCommand, Cli, Commands, RoadCommand,
};
use fastpath_core::error::RouteError;
use fastpath_store::UpsertError;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.db.as_deref())?;
    init_tracing(&config.logging.level);
    debug!(
        store = %config.store.path.display(),
        max_relaxations = config.routing.max_relaxations,
        case = ?config.names.case,
        "Loaded configuration"
    );

    let ctx = AppContext::open(config)?;
    match cli.command {
        Commands::Road { command } => match command {
            RoadCommand::Add { from, to, minutes } => handle_road_add(&ctx, &from, &to, minutes),
            RoadCommand::Import { file } => handle_road_import(&ctx, &file),
            RoadCommand::List { json } => handle_road_list(&ctx, json),
        },
        Commands::City { command } => match command {
            CityCommand::List => handle_city_list(&ctx),
        },
        Commands::Route {
            source,
            destination,
            json,
        } => handle_route(ctx, &source, &destination, json),
    }
}

/// `RUST_LOG` wins over `logging.level`. Logs go to stderr so JSON output
/// stays clean.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// 2: the query cannot be answered (unknown city, no route, budget spent).
/// 3: a road was rejected. 1: anything else.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(route_err) = err.downcast_ref::<RouteError>() {
        if route_err.is_user_facing()
            || matches!(route_err, RouteError::SearchBudgetExceeded { .. })
        {
            return 2;
        }
    }
    if let Some(UpsertError::Invalid { .. }) = err.downcast_ref::<UpsertError>() {
        return 3;
    }
    1
}
