use gadget_shop_api::{app, config, database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MONGODB_URI, ACCESS_KEY_TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Gadget Shop API in {:?} mode", config.environment);

    let db = database::manager::connect(&config.database).await?;
    let state = AppState::new(db);
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Gadget Shop server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
