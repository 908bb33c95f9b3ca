//! Ports module for the Miner Registry
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::MinerRegistryApi;
pub use outbound::{CommitteeAuthority, EventPublisher, PaymentGateway};
