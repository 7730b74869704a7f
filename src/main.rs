use fyyur::{
    config::{database, seed, server::ServerConfig},
    core::seed::seed_initial_data,
    errors::Result,
    web::{self, AppState},
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    let server_config = ServerConfig::from_env()
        .inspect_err(|e| error!("Invalid server configuration: {}", e))?;

    // 3. Connect and make sure the schema exists
    let db = database::create_connection(&database::get_database_url())
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Seed an empty database
    if let Some(seed_config) = seed::load_seed(&server_config.seed_file)? {
        if let Some(summary) = seed_initial_data(&db, &seed_config)
            .await
            .inspect_err(|e| error!("Failed to seed initial data: {}", e))?
        {
            info!(
                venues = summary.venues,
                artists = summary.artists,
                shows = summary.shows,
                "Seed data inserted"
            );
        }
    }

    // 5. Serve
    let app = web::build_router(AppState::new(db));
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr).await?;
    info!("Listening on http://{}", server_config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
