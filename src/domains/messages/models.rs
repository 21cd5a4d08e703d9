use juniper::{GraphQLObject, ID};

/// A stored message as exposed through the schema
#[derive(Debug, Clone, GraphQLObject)]
pub struct Message {
    /// Server-generated opaque identifier
    pub id: ID,
    pub content: String,
    pub author: String,
}

/// Message fields as held by the store, before an id is attached.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub content: String,
    pub author: String,
}
