//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Domain Services**: Stateless business logic
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`suitability`]: Portfolio risk, order suitability and passive drift
//! - [`client`]: Owner-scoped client records and their main portfolio

pub mod client;
pub mod shared;
pub mod suitability;
