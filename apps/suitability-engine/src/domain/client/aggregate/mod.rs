//! Client Aggregate
//!
//! The Client aggregate owns a client's profile and main portfolio.

mod client;
mod portfolio;

pub use client::{Client, CreateClientCommand, UpdateClientCommand};
pub use portfolio::Portfolio;
