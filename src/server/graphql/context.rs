use std::net::IpAddr;
use std::sync::Arc;

use crate::domains::messages::MessageStore;

/// GraphQL request context
///
/// Carries the shared message store and the caller's network address as
/// captured by the IP-extraction middleware.
#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<MessageStore>,
    pub client_ip: Option<IpAddr>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(store: Arc<MessageStore>, client_ip: Option<IpAddr>) -> Self {
        Self { store, client_ip }
    }
}
