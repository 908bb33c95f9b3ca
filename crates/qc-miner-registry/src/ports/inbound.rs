//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{JoinReceipt, LeaveReceipt};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{Address, Amount, CallContext};

/// Primary Miner Registry API
///
/// Each mutating call is one critical section: gate checks, payout, set
/// mutation and event publish commit together or not at all.
pub trait MinerRegistryApi: Send + Sync {
    /// Join by posting the bond.
    ///
    /// Fails with `AlreadyMember` if the caller is registered, then with
    /// `InsufficientBond` if `ctx.value` is below the bond. Any excess over
    /// the bond is paid back to the caller.
    fn join(&self, ctx: &CallContext) -> Result<JoinReceipt, RegistryError>;

    /// Leave voluntarily; the bond is paid back to the caller.
    ///
    /// Fails with `UnexpectedValue` if `ctx.value` is non-zero, then with
    /// `NotAMember` if the caller is not registered.
    fn leave_self(&self, ctx: &CallContext) -> Result<LeaveReceipt, RegistryError>;

    /// Evict `target` on committee authority; the bond is paid to `target`.
    ///
    /// Checks `Unauthorized`, then `UnexpectedValue`, then `NotAMember`.
    fn leave_by_committee(
        &self,
        ctx: &CallContext,
        target: Address,
    ) -> Result<LeaveReceipt, RegistryError>;

    /// The fixed bond.
    fn bond(&self) -> Amount;

    /// Whether `miner` is currently registered.
    fn is_member(&self, miner: &Address) -> bool;

    /// Snapshot of the membership set in its current order.
    fn members(&self) -> Vec<Address>;

    fn member_count(&self) -> usize;
}
