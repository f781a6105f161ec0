//! Suitability domain services.

pub mod engine;
