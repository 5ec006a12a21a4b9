use roster_business::{UserStore, UsersClient};
use roster_services::{config::Config, routes, telemetry};
use std::net::{IpAddr, SocketAddr};
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const BUILD_DATE: &str = env!("BUILD_DATE");
const BUILD_COMMIT: &str = env!("BUILD_COMMIT");
const BUILD_BRANCH: &str = env!("BUILD_BRANCH");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config: Config = Config::init()?;

    // Initialize tracing
    telemetry::init_tracing(&config);

    // Print build information
    print_build_info();

    info!(
        environment = %config.environment(),
        server_addr = %config.server_addr(),
        port = %config.port(),
        api_base_url = %config.api_base_url(),
        "Configuration loaded"
    );

    // Kick off the one-time users load; pages render an empty table until it lands
    let store = UserStore::new();
    store.spawn_initial_load(UsersClient::new(config.business_config()));

    // Build the application router
    let route = routes(store, config.clone());

    // Create socket address
    let addr = SocketAddr::from((config.server_addr().parse::<IpAddr>()?, config.port()));

    info!("Starting server on {addr}");

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, route).await?;

    Ok(())
}

/// Print build information
fn print_build_info() {
    info!("===========================================");
    info!("  Roster Services");
    info!("===========================================");
    info!("Build Date:   {BUILD_DATE}");
    info!("Build Commit: {BUILD_COMMIT}");
    info!("Build Branch: {BUILD_BRANCH}");
    info!("===========================================");
}
