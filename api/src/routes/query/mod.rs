pub mod query_request;
pub mod query_response;
pub mod query_route;
