//! Access Bounded Context
//!
//! Who is calling and what they may see. Identity is resolved outside the
//! domain; use cases receive an explicit [`AuthContext`].

mod context;
mod profile;

pub use context::AuthContext;
pub use profile::{UserProfile, UserRole};
