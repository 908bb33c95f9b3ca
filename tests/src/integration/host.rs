//! # In-Process Host
//!
//! Plays the hosting environment around the registry: it accepts the value
//! attached to each call into the treasury, dispatches the call through the
//! IPC handler, and reverts the attached value when the call is rejected.

use qc_miner_registry::{
    Address, Amount, CommitteeRoster, ConfigError, InMemoryEventLog, InMemoryTreasury,
    MinerRegistryService, RegistryCall, RegistryConfig, RegistryHandler, RegistryRequest,
    RegistryResponse,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Registry wired to the bundled in-memory adapters.
pub type Registry = MinerRegistryService<InMemoryTreasury, CommitteeRoster, InMemoryEventLog>;

pub struct Host {
    pub treasury: Arc<InMemoryTreasury>,
    pub committee: Arc<CommitteeRoster>,
    pub events: Arc<InMemoryEventLog>,
    pub registry: Arc<Registry>,
    handler: RegistryHandler<Registry>,
    next_correlation: AtomicU64,
}

impl Host {
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        let treasury = Arc::new(InMemoryTreasury::new());
        let committee = Arc::new(CommitteeRoster::from_config(&config)?);
        let events = Arc::new(InMemoryEventLog::new());
        let registry = Arc::new(MinerRegistryService::new(
            config,
            treasury.clone(),
            committee.clone(),
            events.clone(),
        )?);
        let handler = RegistryHandler::new(registry.clone());

        Ok(Self {
            treasury,
            committee,
            events,
            registry,
            handler,
            next_correlation: AtomicU64::new(1),
        })
    }

    /// Dispatch one call on behalf of `caller` with `value` attached.
    pub fn submit(
        &self,
        caller: Address,
        value: Amount,
        request: RegistryRequest,
    ) -> RegistryResponse {
        let mut correlation_id = [0u8; 16];
        let seq = self.next_correlation.fetch_add(1, Ordering::Relaxed);
        correlation_id[..8].copy_from_slice(&seq.to_be_bytes());

        self.treasury.deposit(value);

        let response = self.handler.handle(RegistryCall {
            correlation_id,
            caller: caller.0,
            value,
            request,
        });

        if !response.success {
            if let Err(e) = self.treasury.withdraw(value) {
                warn!("[qc-tests] Could not revert attached value: {}", e);
            }
        }

        response
    }

    pub fn join(&self, caller: Address, value: Amount) -> RegistryResponse {
        self.submit(caller, value, RegistryRequest::Join)
    }

    pub fn leave_self(&self, caller: Address) -> RegistryResponse {
        self.submit(caller, Amount::zero(), RegistryRequest::LeaveSelf)
    }

    pub fn leave_by_committee(&self, caller: Address, target: Address) -> RegistryResponse {
        self.submit(
            caller,
            Amount::zero(),
            RegistryRequest::LeaveByCommittee { target: target.0 },
        )
    }
}
