//! route-check: load a routes file, build every route, print them in
//! priority order.

use std::path::PathBuf;

use clap::Parser;
use serde_json::json;

use gateway_route::config::{build_routes, check_config, read_config};
use gateway_route::observability::init_logging;

#[derive(Parser)]
#[command(name = "route-check")]
#[command(about = "Validate gateway route definitions", long_about = None)]
struct Cli {
    /// Path to the routes file (TOML).
    #[arg(short, long)]
    config: PathBuf,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print routes as a JSON array.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logging comes up before validation so rejected definitions are reported.
    let config = read_config(&cli.config)?;
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    init_logging(level)?;
    let config = check_config(&cli.config, config)?;

    let routes = build_routes(&config)?;
    tracing::info!(routes = routes.len(), "Routes built");

    if cli.json {
        let out: Vec<_> = routes
            .iter()
            .map(|r| {
                json!({
                    "id": r.id(),
                    "uri": r.uri().as_str(),
                    "order": r.priority(),
                    "predicate": format!("{:?}", r.condition()),
                    "filters": r.filters().iter().map(|f| f.name()).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for route in &routes {
            println!("{}", route);
        }
    }

    Ok(())
}
