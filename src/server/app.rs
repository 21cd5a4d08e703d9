//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{header::CONTENT_TYPE, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, on, MethodFilter},
    Router,
};
use juniper_axum::graphiql;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::messages::MessageStore;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{extract_client_ip, ClientIp};
use crate::server::routes::graphql_handler;

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub store: Arc<MessageStore>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Client IP extracted by extract_client_ip earlier in the chain
    let client_ip = request.extensions().get::<ClientIp>().map(|ip| ip.0);

    let context = GraphQLContext::new(state.store.clone(), client_ip);

    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router
pub fn build_app() -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AxumAppState {
        store: Arc::new(MessageStore::new()),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // GraphQL endpoint
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql_handler),
        )
        // In-browser explorer pointed at the GraphQL endpoint
        .route("/", get(graphiql("/graphql", None)))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(extract_client_ip))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State (schema for the GraphQL handler)
        .with_state(schema)
}
