use axum::serve;
use std::sync::Arc;
use tokio::net::TcpListener;
use velo_catalog::api::handlers::AppState;
use velo_catalog::api::routes::create_router;
use velo_catalog::config::AppConfig;
use velo_catalog::render::HtmlRenderer;
use velo_catalog::seed;
use velo_catalog::store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new().filter_level(LevelFilter::Info).init();

    println!("Velo Catalog: Bicycle Catalog Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    let store = Arc::new(MemoryStore::new());

    // Load seed data for demonstration (optional)
    if std::env::var("LOAD_SEED_DATA").unwrap_or_default() == "true" {
        println!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
        println!("Seed data loaded successfully");
    }

    let state = AppState::new(store, Arc::new(HtmlRenderer));
    run_server(create_router().with_state(state), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Velo Catalog server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
