use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use async_graphql::http::{parse_query_string, GraphiQLSource};
use axum::{
    extract::{RawQuery, State},
    http::{HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{self, Store};
use crate::graphql::{build_schema, AppSchema, GraphQLContext};

#[derive(Clone)]
pub struct AppState {
    schema: AppSchema,
    graphiql: bool,
}

/// Build the HTTP router around an open store
pub fn create_app(store: Arc<dyn Store>, config: &Config) -> Router {
    let context = GraphQLContext::new(store, config.default_project_status.clone());
    let state = AppState {
        schema: build_schema(context),
        graphiql: config.is_development(),
    };

    Router::new()
        .route("/graphql", get(graphql_get).post(graphql_post))
        .route("/health", get(health))
        .layer(cors_layer(config.cors_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
        Some(Err(e)) => {
            warn!("Ignoring invalid CORS origin: {}", e);
            CorsLayer::permissive()
        }
        None => CorsLayer::permissive(),
    }
}

async fn graphql_post(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

async fn graphql_get(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => match parse_query_string(&query) {
            Ok(request) => Json(state.schema.execute(request).await).into_response(),
            Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        },
        None if state.graphiql => {
            Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response()
        }
        None => (StatusCode::BAD_REQUEST, "missing GraphQL query").into_response(),
    }
}

async fn health() -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok",
        service: "project-tracker",
    })
}

#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
}

/// Open the store, serve until a shutdown signal, then close the store
pub async fn start_server(config: &Config) -> Result<()> {
    let store = db::init(config).await?;
    let app = create_app(store.clone(), config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on port {}", config.port);
    if config.is_development() {
        info!("GraphiQL available at http://localhost:{}/graphql", config.port);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing store");
    store.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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
}
