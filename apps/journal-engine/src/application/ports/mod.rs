//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems
//!
//! Trade persistence is a domain port (`domain::trade::TradeRepository`).

mod user_directory_port;

pub use user_directory_port::{InMemoryUserDirectory, UserDirectoryError, UserDirectoryPort};

#[cfg(test)]
pub use user_directory_port::MockUserDirectoryPort;
