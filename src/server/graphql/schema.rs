//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode, ID};

use super::context::GraphQLContext;
use crate::domains::dice::RandomDie;
use crate::domains::messages::{Message, MessageDraft};

/// Fields accepted when creating or replacing a message
#[derive(juniper::GraphQLInputObject)]
pub struct MessageInput {
    pub content: String,
    pub author: String,
}

impl From<MessageInput> for MessageDraft {
    fn from(input: MessageInput) -> Self {
        Self {
            content: input.content,
            author: input.author,
        }
    }
}

/// Convert a domain error to a juniper FieldError for thin resolvers
fn to_field_error<E: std::fmt::Display>(e: E) -> FieldError {
    FieldError::new(e.to_string(), juniper::Value::null())
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Construct a die with the given number of sides (six when unspecified)
    fn get_die(num_sides: Option<i32>) -> RandomDie {
        RandomDie::new(num_sides.unwrap_or(6))
    }

    /// Look up a message by id
    ///
    /// Resolves to null with a field error when the id is unknown; sibling
    /// fields are unaffected.
    async fn get_message(ctx: &GraphQLContext, id: ID) -> FieldResult<Option<Message>> {
        let message = ctx.store.get(&id).await.map_err(to_field_error)?;
        Ok(Some(message))
    }

    /// The network address the transport layer reported for this caller
    fn ip(ctx: &GraphQLContext) -> Option<String> {
        ctx.client_ip.map(|ip| ip.to_string())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Store a new message under a freshly generated id
    async fn create_message(ctx: &GraphQLContext, input: MessageInput) -> FieldResult<Message> {
        Ok(ctx.store.create(input.into()).await)
    }

    /// Replace the message stored under `id` wholesale
    ///
    /// Fails with the same not-found shape as `getMessage` for unknown ids.
    async fn update_message(
        ctx: &GraphQLContext,
        id: ID,
        input: MessageInput,
    ) -> FieldResult<Option<Message>> {
        let message = ctx
            .store
            .update(&id, input.into())
            .await
            .map_err(to_field_error)?;
        Ok(Some(message))
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
