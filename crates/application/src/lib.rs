//! Application layer - Use cases and orchestration
//!
//! Contains the weather record use cases and the port definitions they
//! depend on. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
