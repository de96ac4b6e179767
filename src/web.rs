use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, extract::State, response::Json, routing::get};
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState, Message};
use crate::config::GatewayConfig;
use crate::diagnostics::DiagnosticReport;
use crate::error::GatewayError;
use crate::weather::OpenMeteoClient;

pub const ROOT_MESSAGE: &str = "Costa Rica Climate API is running";

/// Any origin, method and header, with credentials. Wildcards are not valid
/// alongside credentials, so the request's own values are echoed back.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

async fn root() -> Json<Message> {
    Json(Message {
        message: ROOT_MESSAGE,
    })
}

async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(DiagnosticReport::new(state.database.as_ref()))
}

pub async fn run(config: &GatewayConfig) -> Result<()> {
    let forecast = OpenMeteoClient::from_config(config)?;
    let database = config.database();
    if let Some(db) = &database {
        tracing::info!("Database '{}' configured (informational only)", db.name);
    }

    let app = app(AppState::new(Arc::new(forecast), database));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(GatewayError::from)
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(GatewayError::from)
        .with_context(|| "Server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM. The SIGTERM handler is
/// registered when this is called, before the future is first polled.
fn shutdown_signal() -> impl Future<Output = ()> {
    #[cfg(unix)]
    let terminate = signal::unix::signal(signal::unix::SignalKind::terminate());

    async move {
        let ctrl_c = async {
            if let Err(err) = signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", err);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match terminate {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(err) => {
                    tracing::error!("Failed to listen for SIGTERM: {}", err);
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
        tracing::info!("Shutdown signal received");
    }
}
