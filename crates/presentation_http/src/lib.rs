//! Weather service HTTP presentation layer
//!
//! axum router, handlers and middleware for the `/weather` API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, RequestId, ValidatedJson, ValidationError};
pub use routes::create_router;
pub use shutdown::shutdown_signal;
pub use state::AppState;
