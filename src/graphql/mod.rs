pub mod context;
pub mod mutations;
pub mod queries;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

pub use context::GraphQLContext;
pub use mutations::Mutation;
pub use queries::Query;

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// Register the query and mutation roots and attach the resolver context
pub fn build_schema(context: GraphQLContext) -> AppSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(context)
        .finish()
}
