//! IPC Handler for the Miner Registry
//!
//! Translates envelope calls into registry operations. Identity comes from
//! the envelope; the registry trusts it as asserted by the host.

use crate::domain::value_objects::{Address, Amount, CallContext};
use crate::ipc::payloads::{
    RegistryCall, RegistryErrorCode, RegistryRequest, RegistryResponse,
};
use crate::ports::inbound::MinerRegistryApi;
use std::sync::Arc;
use tracing::{error, info};

/// IPC Handler for the Miner Registry.
pub struct RegistryHandler<A: MinerRegistryApi> {
    registry: Arc<A>,
}

impl<A: MinerRegistryApi> RegistryHandler<A> {
    pub fn new(registry: Arc<A>) -> Self {
        Self { registry }
    }

    /// Handle one registry call end to end.
    pub fn handle(&self, call: RegistryCall) -> RegistryResponse {
        let ctx = CallContext::new(Address::from(call.caller), call.value);

        info!(
            caller = ?ctx.caller,
            request = ?call.request,
            "[qc-miner-registry] Processing registry call"
        );

        let result = match call.request {
            RegistryRequest::Join => self
                .registry
                .join(&ctx)
                .map(|r| (r.refund, r.member_count)),
            RegistryRequest::LeaveSelf => self
                .registry
                .leave_self(&ctx)
                .map(|r| (r.refund, r.member_count)),
            RegistryRequest::LeaveByCommittee { target } => self
                .registry
                .leave_by_committee(&ctx, Address::from(target))
                .map(|r| (r.refund, r.member_count)),
        };

        match result {
            // Receipt count is taken under the operation's write lock
            Ok((refund, member_count)) => RegistryResponse {
                correlation_id: call.correlation_id,
                success: true,
                refund,
                member_count: wire_count(member_count),
                error: None,
                message: None,
            },
            Err(e) => {
                error!("[qc-miner-registry] ❌ Registry call failed: {}", e);
                RegistryResponse {
                    correlation_id: call.correlation_id,
                    success: false,
                    refund: Amount::zero(),
                    member_count: wire_count(self.registry.member_count()),
                    error: Some(RegistryErrorCode::from(&e)),
                    message: Some(e.to_string()),
                }
            }
        }
    }
}

/// Membership count as carried on the wire.
fn wire_count(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
