pub mod city;
pub mod context;
pub mod road;
pub mod route;

pub use city::handle_city_list;
pub use context::{load_config, AppContext};
pub use road::{handle_road_add, handle_road_import, handle_road_list};
pub use route::handle_route;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fastpath")]
#[command(about = "Store a directed road network and find the fastest route between cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Road database directory (overrides store.path)
    #[arg(long, value_name = "DIR", global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage roads
    Road {
        #[command(subcommand)]
        command: RoadCommand,
    },
    /// Inspect cities
    City {
        #[command(subcommand)]
        command: CityCommand,
    },
    /// Find the fastest route between two cities
    Route {
        source: String,
        destination: String,

        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoadCommand {
    /// Create or update a single road
    Add {
        from: String,
        to: String,

        /// Travel time in minutes
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
    /// Create or update roads from a JSON array of
    /// {"fromCity", "toCity", "travelTimeMinutes"} objects
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List stored roads
    List {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CityCommand {
    /// List stored cities
    List,
}
