use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use calendar_server::config::Config;
use calendar_server::routes::create_routes;
use calendar_server::store::EventStore;
use calendar_server::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("calendar_server=info,tower_http=info")),
        )
        .init();

    // Optional HOST:PORT as the first argument
    let config = Config::from_env().with_bind_override(std::env::args().nth(1));
    let addr = config.socket_addr().expect("Invalid bind address");

    let store = EventStore::open(&config.database_path)
        .await
        .expect("Failed to open event database");

    tracing::info!("Event store ready at {}", config.database_path);

    let app: Router = create_routes(AppState::new(store), &config);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
