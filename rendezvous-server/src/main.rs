use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use rendezvous_server::cache::{CachedOsrmClient, RouteCacheConfig};
use rendezvous_server::domain::calgary_zones;
use rendezvous_server::osrm::{MockOsrmClient, OsrmClient, OsrmConfig};
use rendezvous_server::session::LocationConfig;
use rendezvous_server::web::{AppState, RouteBackend, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Routing backend: live OSRM unless mocking is requested.
    let router = if std::env::var("OSRM_MOCK").is_ok() {
        eprintln!("Warning: OSRM_MOCK set. Serving canned routes.");
        RouteBackend::Mock(MockOsrmClient::canned())
    } else {
        let mut osrm_config = OsrmConfig::new();
        if let Ok(url) = std::env::var("OSRM_BASE_URL") {
            osrm_config = osrm_config.with_base_url(url);
        }
        let client = OsrmClient::new(osrm_config).expect("Failed to create OSRM client");
        RouteBackend::Live(CachedOsrmClient::new(client, &RouteCacheConfig::default()))
    };

    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "rendezvous-server/static".to_string());

    // Build app state
    let state = AppState::new(router, calgary_zones(), LocationConfig::default());

    // Create router
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Parking Rendezvous listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the map.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health      - Health check");
    println!("  GET  /about       - About page");
    println!("  GET  /api/zones   - Zone catalog");
    println!("  POST /api/locate  - Report device position");
    println!("  POST /api/mode    - Switch travel mode");
    println!("  POST /api/route   - Select a destination zone");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
