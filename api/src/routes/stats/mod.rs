pub mod stats_response;
pub mod stats_route;
