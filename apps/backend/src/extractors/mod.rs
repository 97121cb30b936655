pub mod auth_payload;
pub mod validated_json;
pub mod validated_query;

pub use auth_payload::AuthPayload;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
