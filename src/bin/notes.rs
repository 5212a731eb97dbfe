use memstore_api::app;
use memstore_api::config::{Config, NOTES_DEFAULT_PORT};
use memstore_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    tracing::info!("notes-api starting");

    let config = Config::from_env(NOTES_DEFAULT_PORT)?;
    config.log_startup("notes-api");

    let router = app::notes_router(AppState::new());
    app::serve(router, &config).await
}
