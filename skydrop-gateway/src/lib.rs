//! HTTP boundary for the SKYDROP claim property: bearer-guarded admin
//! routes and the public claim flow, all thin glue over `skydrop-core`.

pub mod error;
pub mod mock;
pub mod msg;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
