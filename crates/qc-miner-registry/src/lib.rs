//! # qc-miner-registry
//!
//! Stake-gated miner registry for Quantum-Chain.
//!
//! ## Role in System
//!
//! - Miners join by posting a fixed bond; overpayment is returned at once
//! - Miners leave on their own and get the bond back
//! - The committee may evict a miner; the bond still goes to the miner
//!
//! ## Architecture
//!
//! - **Domain**: MembershipSet, receipts, errors, invariants
//! - **Ports**: Inbound (MinerRegistryApi) and Outbound (PaymentGateway,
//!   CommitteeAuthority, EventPublisher)
//! - **Application**: MinerRegistryService, one critical section per call
//! - **Adapters**: InMemoryTreasury, CommitteeRoster, InMemoryEventLog
//! - **IPC**: Envelope handler
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qc_miner_registry::{
//!     CallContext, CommitteeRoster, InMemoryEventLog, InMemoryTreasury,
//!     MinerRegistryApi, MinerRegistryService, RegistryConfig,
//! };
//!
//! let config = RegistryConfig::new(bond, vec![committee]);
//! let roster = Arc::new(CommitteeRoster::from_config(&config)?);
//! let registry = MinerRegistryService::new(config, treasury, roster, events)?;
//!
//! registry.join(&CallContext::new(miner, bond))?;
//! ```
//!
//! ## Ordering
//!
//! Removal swaps the last miner into the vacated slot. Callers must not rely
//! on positions staying stable across departures.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod events;
pub mod ipc;
pub mod metrics;
pub mod ports;

pub use adapters::{CommitteeRoster, InMemoryEventLog, InMemoryTreasury, Transfer};
pub use application::service::MinerRegistryService;
pub use config::RegistryConfig;
pub use domain::entities::*;
pub use domain::errors::{CommitteeError, ConfigError, PaymentError, RegistryError};
pub use domain::value_objects::*;
pub use events::RegistryEvent;
pub use ipc::{RegistryCall, RegistryErrorCode, RegistryHandler, RegistryRequest, RegistryResponse};
pub use ports::inbound::MinerRegistryApi;
pub use ports::outbound::{CommitteeAuthority, EventPublisher, PaymentGateway};
