use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{auth, recipes, users};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/info", get(api_info))
        .merge(auth::router())
        .merge(users::router())
        .merge(recipes::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

async fn root() -> Json<Value> {
    Json(json!({
        "mensaje": "Bienvenido a la API de Recetas con SQLite",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "recetas": "/api/recetas/",
            "usuarios": "/usuarios/",
            "autenticación": "/auth/",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "Recetas API" }))
}

async fn api_info() -> Json<Value> {
    Json(json!({
        "nombre": "API Recetas",
        "descripcion": "Sistema de gestión de recetas de cocina",
        "tecnologias": ["Rust", "Axum", "SQLx", "SQLite"],
    }))
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8000".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
