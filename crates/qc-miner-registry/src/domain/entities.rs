//! Core entities for the Miner Registry

use super::value_objects::{Address, Amount, DeparturePath};
use serde::{Deserialize, Serialize};

/// Ordered set of bonded miners.
///
/// Positions are observable but carry no meaning. Removal swaps the last
/// entry into the vacated slot and truncates, so order changes on delete.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSet {
    miners: Vec<Address>,
}

impl MembershipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.miners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.miners.is_empty()
    }

    /// Full linear scan for an exact identity match.
    pub fn contains(&self, miner: &Address) -> bool {
        self.position(miner).is_some()
    }

    /// Index of the first entry equal to `miner`.
    pub fn position(&self, miner: &Address) -> Option<usize> {
        self.miners.iter().position(|m| m == miner)
    }

    pub fn get(&self, index: usize) -> Option<Address> {
        self.miners.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.miners
    }

    /// Append a miner. The caller is responsible for the uniqueness gate.
    pub fn push(&mut self, miner: Address) {
        self.miners.push(miner);
    }

    /// Swap-and-truncate removal of the entry at `index`.
    pub fn swap_remove(&mut self, index: usize) -> Address {
        self.miners.swap_remove(index)
    }
}

/// Outcome of a successful join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReceipt {
    pub miner: Address,
    /// Amount retained as the bond
    pub bond: Amount,
    /// Overpayment returned to the miner (zero when exact)
    pub refund: Amount,
    pub member_count: usize,
}

/// Outcome of a successful departure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveReceipt {
    pub miner: Address,
    /// Bond paid back to the departing miner
    pub refund: Amount,
    pub path: DeparturePath,
    pub member_count: usize,
}
