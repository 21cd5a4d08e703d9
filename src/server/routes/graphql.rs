use std::sync::Arc;

use axum::extract::{Extension, State};
use juniper_axum::{extract::JuniperRequest, response::JuniperResponse};

use crate::server::graphql::{GraphQLContext, Schema};

/// GraphQL endpoint (GET and POST per the GraphQL-over-HTTP convention)
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    JuniperResponse(request.execute(&*schema, &context).await)
}
