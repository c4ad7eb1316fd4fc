//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to application use cases.

mod controller;
mod error;
mod identity;
mod response;

pub use controller::{AppState, create_router};
pub use error::ApiError;
pub use identity::USER_ID_HEADER;
pub use response::*;
