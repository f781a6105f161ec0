//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs. Request
//! DTOs accept partial input so that missing fields are reported with a
//! field path instead of a generic deserialization error.

mod acknowledgement_dto;
mod client_dto;
mod suitability_dto;

pub use acknowledgement_dto::{
    AcknowledgementRequestDto, AcknowledgementResponseDto, AcknowledgementSubmission,
    RequestOrigin,
};
pub use client_dto::{ClientDto, CreateClientDto, PortfolioDto, UpdateClientDto};
pub use suitability_dto::{
    DriftRequestDto, HoldingDto, ProposedOrderDto, RenderReportRequestDto, RiskProfileDto,
    ValidateSuitabilityRequestDto, ValidationInput,
};
