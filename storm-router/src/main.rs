use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use storm_router::hazards::SeverityProfile;
use storm_router::input::{InputData, InputError};
use storm_router::planner::{ConfigError, Planner, SearchConfig, SearchError};
use storm_router::report;
use storm_router::web::{AppState, create_router};

/// Listen address variable.
const ENV_ADDR: &str = "STORM_ROUTER_ADDR";

/// Listen address when `STORM_ROUTER_ADDR` is unset.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Frontier cap for the server when `STORM_ROUTER_MAX_FRONTIER` is unset.
const SERVER_MAX_FRONTIER: usize = 1_000_000;

const USAGE: &str = "usage: storm-router [serve] | storm-router plan <input.json> [max_results]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let config = SearchConfig::from_env()?;

    match args {
        [] => serve(config),
        [cmd] if cmd == "serve" => serve(config),
        [cmd, path] if cmd == "plan" => plan(config, path, None),
        [cmd, path, max] if cmd == "plan" => {
            let max = max
                .parse()
                .map_err(|_| CliError::Usage(format!("invalid max_results {max:?}\n{USAGE}")))?;
            plan(config, path, Some(max))
        }
        _ => Err(CliError::Usage(USAGE.to_string())),
    }
}

/// Load an input file, search it and print the report.
fn plan(config: SearchConfig, path: &str, max_results: Option<usize>) -> Result<(), CliError> {
    let input = InputData::load(path)?;
    let mut request = input.request()?;
    request.max_results = max_results;

    let (network, hazards) = input.network.into_indices(SeverityProfile::standard())?;
    let outcome = Planner::new(&network, &hazards, &config).search(&request)?;

    print!("{}", report::render(&request, &outcome.routes));
    Ok(())
}

/// Start the HTTP server.
fn serve(config: SearchConfig) -> Result<(), CliError> {
    let addr = std::env::var(ENV_ADDR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = addr
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid {ENV_ADDR} {addr:?}")))?;

    let config = config.with_default_frontier(SERVER_MAX_FRONTIER);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let state = AppState::new(config, SeverityProfile::standard());
        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "storm router listening");
        info!("GET  /health          - health check");
        info!("PUT  /network         - load routes and storms");
        info!("POST /routes/search   - search the loaded network");
        info!("POST /routes/plan     - search an inline network");

        axum::serve(listener, app).await.inspect_err(|e| {
            error!(error = %e, "server stopped");
        })?;
        Ok::<_, CliError>(())
    })
}
