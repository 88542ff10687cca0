//! countrydb Interactive Binary
//!
//! Starts the menu-driven session over the data file.

use std::io;

use clap::Parser;
use countrydb::session::Session;
use countrydb::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// countrydb interactive session
#[derive(Parser, Debug)]
#[command(name = "countrydb")]
#[command(about = "Manage country records stored in a CSV file")]
#[command(version)]
struct Args {
    /// CSV data file (created with a header when missing)
    #[arg(short, long, default_value = "countries.csv")]
    file: String,

    /// Thousands separator for displayed numbers
    #[arg(long, default_value_t = '.')]
    thousands_separator: char,

    /// Decimal separator for displayed averages
    #[arg(long, default_value_t = ',')]
    decimal_separator: char,
}

fn main() {
    // Logs go to stderr; keep them quiet so they do not interleave with menus
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("countrydb v{}", countrydb::VERSION);
    tracing::info!("Data file: {}", args.file);

    // Build config from args
    let config = Config::builder()
        .data_file(&args.file)
        .thousands_separator(args.thousands_separator)
        .decimal_separator(args.decimal_separator)
        .build();

    // Open engine
    let mut engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open data file: {}", e);
            eprintln!("Failed to open data file: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Session::new(&mut engine, stdin.lock(), stdout.lock()).run();

    if let Err(e) = result {
        tracing::error!("Session error: {}", e);
        eprintln!("Session error: {}", e);
        std::process::exit(1);
    }

    println!(" Thanks for using countrydb.");
}
