use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::{ItemsApiDoc, NotesApiDoc};
use crate::config::Config;
use crate::handlers::{health_handler, items, notes};
use crate::models::{Item, Note};
use crate::routes;
use crate::state::AppState;

/// Build the items service router
pub fn items_router(state: AppState<Item>) -> Router {
    Router::new()
        .route(routes::ROOT, get(items::root_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(
            routes::ITEMS,
            get(items::list_items).post(items::create_item),
        )
        .route(
            routes::ITEM,
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ItemsApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Build the notes service router
pub fn notes_router(state: AppState<Note>) -> Router {
    Router::new()
        .route(routes::ROOT, get(notes::root_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(
            routes::NOTES,
            get(notes::list_notes).post(notes::create_note),
        )
        .route(
            routes::NOTE,
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, NotesApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Any origin, any method, any header
fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise `info` with request-level
/// `tower_http` spans.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Bind to the configured address and serve `app` until Ctrl+C or SIGTERM
pub async fn serve(app: Router, config: &Config) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
