//! CLI command implementations
//!
//! Each command loads its configuration explicitly; nothing is read from
//! process-wide state besides the arguments.

use std::fs;
use std::path::Path;

use crate::catalog::seed::{create_catalog, sample_plants};
use crate::catalog::{QueryProjector, ResultSet, SortCriterion};
use crate::config::CatalogConfig;
use crate::display::{render_text, TextOptions};
use crate::observability::{init_logging, log_event, Event};
use crate::web::{HttpServer, PlantsResponse};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{write_json, write_text};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_logging();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::List {
            config,
            order,
            json,
        } => {
            let criterion = order.criterion()?;
            list(&config, criterion, json)
        }
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Create the catalog database named by the config and seed it
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = CatalogConfig::load(config_path)?;
    let inserted = init_catalog(&config)?;

    write_text(&format!(
        "Created {} with {} plants\n",
        config.database_path().display(),
        inserted
    ))
}

/// Create and seed the catalog; refuses to touch an existing database
pub fn init_catalog(config: &CatalogConfig) -> CliResult<usize> {
    let db_path = config.database_path();
    if db_path.exists() {
        return Err(CliError::already_initialized(db_path.display()));
    }

    fs::create_dir_all(&config.database_root).map_err(|e| {
        CliError::config_error(format!(
            "Failed to create directory {}: {}",
            config.database_root, e
        ))
    })?;

    let inserted = create_catalog(&db_path, &config.table, &sample_plants())?;
    tracing::info!(
        event = %Event::CatalogInitialized,
        path = %db_path.display(),
        rows = inserted,
    );

    Ok(inserted)
}

/// Query the catalog once and print the result
pub fn list(config_path: &Path, criterion: SortCriterion, json: bool) -> CliResult<()> {
    let config = CatalogConfig::load(config_path)?;
    let results = QueryProjector::new(config.data_source()).fetch(&criterion)?;

    if json {
        write_json(&listing_response(criterion, results))
    } else {
        write_text(&render_text(&results, text_options(&config)))
    }
}

/// Fetch and format one listing as `list` prints it without `--json`
pub fn render_list(config: &CatalogConfig, criterion: SortCriterion) -> CliResult<String> {
    let results = QueryProjector::new(config.data_source()).fetch(&criterion)?;
    Ok(render_text(&results, text_options(config)))
}

/// JSON body printed by `list --json`
pub fn listing_response(criterion: SortCriterion, results: ResultSet) -> PlantsResponse {
    PlantsResponse {
        criterion: criterion.to_string(),
        no_results: results.is_empty(),
        total: results.len(),
        columns: results.columns,
        records: results.records,
    }
}

fn text_options(config: &CatalogConfig) -> TextOptions {
    TextOptions {
        show_image: config.debug,
    }
}

/// Serve the catalog over HTTP until interrupted
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = CatalogConfig::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    if !config.database_path().exists() {
        log_event(Event::DataSourceUnavailable);
        tracing::warn!(
            path = %config.database_path().display(),
            "catalog database not found; requests will fail until `plants init` is run"
        );
    }

    let server = HttpServer::from_config(&config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}
