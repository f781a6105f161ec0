//! Client Bounded Context
//!
//! Client records owned by an authenticated advisor, each carrying the
//! investor profile and the main portfolio the suitability engine reads.
//!
//! # Key Concepts
//!
//! - **Client Aggregate**: Profile data plus the main portfolio
//! - **Owner Scoping**: Every record belongs to exactly one owner; other owners cannot see it
//! - **Derived Portfolio Figures**: Risk and total are recomputed on every write

pub mod aggregate;
pub mod errors;
pub mod repository;

pub use aggregate::{Client, CreateClientCommand, Portfolio, UpdateClientCommand};
pub use errors::ClientError;
pub use repository::ClientRepository;
