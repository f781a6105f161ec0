//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer.
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: Client record storage
//!   - `audit/`: Compliance audit trail
//!   - `session/`: Bearer token resolution
//!   - `report/`: Downloadable report rendering
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers

pub mod audit;
pub mod http;
pub mod persistence;
pub mod report;
pub mod session;
