//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: The trade journal entry and its invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless calculators and analytics
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`trade`]: Journal entries and their persistence port
//! - [`risk_reward`]: Reward-to-risk calculation and price validation
//! - [`analytics`]: Statistics, per-symbol, daily and streak views
//! - [`access`]: Caller identity and roles

pub mod access;
pub mod analytics;
pub mod risk_reward;
pub mod shared;
pub mod trade;
