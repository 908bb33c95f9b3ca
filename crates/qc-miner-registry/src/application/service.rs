//! Miner Registry Service
//!
//! Main service implementing MinerRegistryApi.

use crate::config::RegistryConfig;
use crate::domain::entities::{JoinReceipt, LeaveReceipt, MembershipSet};
use crate::domain::errors::{ConfigError, RegistryError};
use crate::domain::invariants::invariant_no_duplicates;
use crate::domain::value_objects::{Address, Amount, CallContext, DeparturePath};
use crate::events::RegistryEvent;
use crate::metrics;
use crate::ports::inbound::MinerRegistryApi;
use crate::ports::outbound::{CommitteeAuthority, EventPublisher, PaymentGateway};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Internal state guarded by the registry lock
struct RegistryState {
    members: MembershipSet,
}

/// Miner Registry Service
///
/// Holds the membership set behind a single lock. Every mutating call takes
/// the write lock once and keeps it across:
/// 1. Capability gate (membership / committee)
/// 2. Bond check
/// 3. Payout through the payment gateway
/// 4. Set mutation
/// 5. Event publish
///
/// The payout runs before the mutation, so a failed transfer leaves the set
/// exactly as it was.
pub struct MinerRegistryService<P, C, E>
where
    P: PaymentGateway,
    C: CommitteeAuthority,
    E: EventPublisher,
{
    bond: Amount,
    state: RwLock<RegistryState>,
    payments: Arc<P>,
    committee: Arc<C>,
    events: Arc<E>,
}

impl<P, C, E> MinerRegistryService<P, C, E>
where
    P: PaymentGateway,
    C: CommitteeAuthority,
    E: EventPublisher,
{
    /// Create an empty registry with the configured bond.
    pub fn new(
        config: RegistryConfig,
        payments: Arc<P>,
        committee: Arc<C>,
        events: Arc<E>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(bond = %config.bond, "[qc-miner-registry] Registry initialized");

        Ok(Self {
            bond: config.bond,
            state: RwLock::new(RegistryState {
                members: MembershipSet::new(),
            }),
            payments,
            committee,
            events,
        })
    }

    /// Miner at `index` in the current order.
    pub fn member_at(&self, index: usize) -> Option<Address> {
        self.state.read().members.get(index)
    }

    /// Sum of bonds currently held on behalf of members.
    pub fn total_bonded(&self) -> Amount {
        let count = self.state.read().members.len();
        self.bond.saturating_mul(Amount::from(count))
    }

    fn reject(&self, err: RegistryError) -> RegistryError {
        warn!(reason = err.reason(), "[qc-miner-registry] Rejected: {}", err);
        metrics::record_rejection(err.reason());
        err
    }

    /// Leaves pay out and never take funds in.
    fn ensure_no_value(&self, ctx: &CallContext) -> Result<(), RegistryError> {
        if ctx.value.is_zero() {
            Ok(())
        } else {
            Err(self.reject(RegistryError::UnexpectedValue {
                provided: ctx.value,
            }))
        }
    }

    /// Pay the bond to `miner` and swap-remove the entry at `index`.
    ///
    /// Must be called with the write lock held and `index` pointing at `miner`.
    fn refund_and_remove(
        &self,
        state: &mut RegistryState,
        index: usize,
        miner: Address,
    ) -> Result<usize, RegistryError> {
        self.payments
            .pay(&miner, self.bond)
            .map_err(|e| self.reject(e.into()))?;

        state.members.swap_remove(index);
        Ok(state.members.len())
    }
}

impl<P, C, E> MinerRegistryApi for MinerRegistryService<P, C, E>
where
    P: PaymentGateway,
    C: CommitteeAuthority,
    E: EventPublisher,
{
    fn join(&self, ctx: &CallContext) -> Result<JoinReceipt, RegistryError> {
        let mut state = self.state.write();

        debug!(
            caller = ?ctx.caller,
            value = %ctx.value,
            "[qc-miner-registry] Join requested"
        );

        if state.members.contains(&ctx.caller) {
            return Err(self.reject(RegistryError::AlreadyMember(ctx.caller)));
        }

        if ctx.value < self.bond {
            return Err(self.reject(RegistryError::InsufficientBond {
                required: self.bond,
                provided: ctx.value,
            }));
        }

        let refund = ctx.value - self.bond;
        if !refund.is_zero() {
            self.payments
                .pay(&ctx.caller, refund)
                .map_err(|e| self.reject(e.into()))?;
        }

        state.members.push(ctx.caller);
        debug_assert!(invariant_no_duplicates(state.members.as_slice()));

        let member_count = state.members.len();
        self.events.publish(RegistryEvent::MinerJoined {
            miner: ctx.caller,
            bond: self.bond,
            refund,
        });
        metrics::record_join(member_count);

        info!(
            miner = ?ctx.caller,
            refund = %refund,
            member_count,
            "[qc-miner-registry] Miner joined"
        );

        Ok(JoinReceipt {
            miner: ctx.caller,
            bond: self.bond,
            refund,
            member_count,
        })
    }

    fn leave_self(&self, ctx: &CallContext) -> Result<LeaveReceipt, RegistryError> {
        let mut state = self.state.write();

        self.ensure_no_value(ctx)?;

        let index = match state.members.position(&ctx.caller) {
            Some(index) => index,
            None => return Err(self.reject(RegistryError::NotAMember(ctx.caller))),
        };

        let member_count = self.refund_and_remove(&mut state, index, ctx.caller)?;

        self.events.publish(RegistryEvent::MinerLeft {
            miner: ctx.caller,
            refund: self.bond,
        });
        metrics::record_departure(DeparturePath::SelfExit.as_str(), member_count);

        info!(
            miner = ?ctx.caller,
            member_count,
            "[qc-miner-registry] Miner left"
        );

        Ok(LeaveReceipt {
            miner: ctx.caller,
            refund: self.bond,
            path: DeparturePath::SelfExit,
            member_count,
        })
    }

    fn leave_by_committee(
        &self,
        ctx: &CallContext,
        target: Address,
    ) -> Result<LeaveReceipt, RegistryError> {
        let mut state = self.state.write();

        if !self.committee.is_committee(&ctx.caller) {
            return Err(self.reject(RegistryError::Unauthorized(ctx.caller)));
        }

        self.ensure_no_value(ctx)?;

        let index = match state.members.position(&target) {
            Some(index) => index,
            None => return Err(self.reject(RegistryError::NotAMember(target))),
        };

        let member_count = self.refund_and_remove(&mut state, index, target)?;

        self.events.publish(RegistryEvent::MinerEvicted {
            miner: target,
            committee: ctx.caller,
            refund: self.bond,
        });
        metrics::record_departure(DeparturePath::CommitteeEviction.as_str(), member_count);

        info!(
            miner = ?target,
            committee = ?ctx.caller,
            member_count,
            "[qc-miner-registry] Miner evicted by committee"
        );

        Ok(LeaveReceipt {
            miner: target,
            refund: self.bond,
            path: DeparturePath::CommitteeEviction,
            member_count,
        })
    }

    fn bond(&self) -> Amount {
        self.bond
    }

    fn is_member(&self, miner: &Address) -> bool {
        self.state.read().members.contains(miner)
    }

    fn members(&self) -> Vec<Address> {
        self.state.read().members.as_slice().to_vec()
    }

    fn member_count(&self) -> usize {
        self.state.read().members.len()
    }
}
