//! countrydb CLI
//!
//! One-shot subcommands over the data file, for scripting.

use clap::{Parser, Subcommand};
use countrydb::protocol::Command;
use countrydb::query::SortDirection;
use countrydb::session::Renderer;
use countrydb::validate::parse_positive_integer;
use countrydb::{Config, Country, Engine, Field, NumericField};
use tracing_subscriber::{fmt, EnvFilter};

/// countrydb CLI
#[derive(Parser, Debug)]
#[command(name = "countrydb-cli")]
#[command(about = "One-shot commands over a countrydb CSV file")]
#[command(version)]
struct Args {
    /// CSV data file (created with a header when missing)
    #[arg(short, long, default_value = "countries.csv")]
    file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every country in file order
    List,

    /// Add a country
    Add {
        name: String,

        #[arg(value_parser = positive_integer)]
        population: u64,

        #[arg(value_parser = positive_integer)]
        area: u64,

        continent: String,
    },

    /// Update population and/or area of a country
    Update {
        name: String,

        #[arg(long)]
        population: Option<String>,

        #[arg(long)]
        area: Option<String>,
    },

    /// Search countries by (part of) their name
    Search { query: String },

    /// Filter countries
    Filter {
        #[command(subcommand)]
        filter: FilterCommands,
    },

    /// List distinct continents
    Continents,

    /// Sort the file by a field (name, population, area, continent)
    Sort {
        field: Field,

        /// Sort descending instead of ascending
        #[arg(short, long)]
        desc: bool,
    },

    /// Summary statistics
    Stats {
        #[command(subcommand)]
        stat: StatsCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FilterCommands {
    /// Countries of one continent
    Continent { name: String },

    /// Countries with population in [min, max]
    Population {
        #[arg(value_parser = positive_integer)]
        min: u64,
        #[arg(value_parser = positive_integer)]
        max: u64,
    },

    /// Countries with area in [min, max]
    Area {
        #[arg(value_parser = positive_integer)]
        min: u64,
        #[arg(value_parser = positive_integer)]
        max: u64,
    },
}

#[derive(Subcommand, Debug)]
enum StatsCommands {
    /// Most and least populated countries
    Extremes,

    /// Mean of population or area
    Average { field: NumericField },

    /// Number of countries per continent
    Continents,
}

fn positive_integer(text: &str) -> Result<u64, String> {
    parse_positive_integer(text).ok_or_else(|| format!("'{}' is not a positive integer", text))
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,countrydb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder().data_file(&args.file).build();
    let renderer = Renderer::from_config(&config);

    if let Err(e) = run(config, args.command, &renderer) {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config, command: Commands, renderer: &Renderer) -> countrydb::Result<()> {
    let mut engine = Engine::open(config)?;

    let command = match command {
        Commands::List => Command::List,
        Commands::Add {
            name,
            population,
            area,
            continent,
        } => Command::Add {
            country: Country::new(name, population, area, continent)?,
        },
        Commands::Update {
            name,
            population,
            area,
        } => Command::Update {
            name,
            population,
            area,
        },
        Commands::Search { query } => Command::Search { query },
        Commands::Filter { filter } => match filter {
            FilterCommands::Continent { name } => Command::FilterContinent { continent: name },
            FilterCommands::Population { min, max } => Command::FilterRange {
                field: NumericField::Population,
                min,
                max,
            },
            FilterCommands::Area { min, max } => Command::FilterRange {
                field: NumericField::Area,
                min,
                max,
            },
        },
        Commands::Continents => Command::Continents,
        Commands::Sort { field, desc } => Command::Sort {
            field,
            direction: if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        },
        Commands::Stats { stat } => match stat {
            StatsCommands::Extremes => Command::Extremes,
            StatsCommands::Average { field } => Command::Average { field },
            StatsCommands::Continents => Command::CountByContinent,
        },
    };

    let sorts = matches!(command, Command::Sort { .. });
    let response = engine.execute(command)?;
    print!("{}", renderer.render(&response));

    // Sorting from the CLI persists the new order
    if sorts {
        engine.execute(Command::Save)?;
    }

    Ok(())
}
