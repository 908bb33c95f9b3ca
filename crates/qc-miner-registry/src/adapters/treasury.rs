//! In-memory treasury adapter
//!
//! Implements `PaymentGateway` over a reserve funded by the host. Bonds
//! attached to calls are deposited into the reserve; payouts draw from it.

use crate::domain::errors::PaymentError;
use crate::domain::value_objects::{Address, Amount};
use crate::ports::outbound::PaymentGateway;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A completed payout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub to: Address,
    pub amount: Amount,
}

#[derive(Default)]
struct TreasuryState {
    reserve: Amount,
    balances: HashMap<Address, Amount>,
    transfers: Vec<Transfer>,
}

/// Reserve-backed payment gateway
pub struct InMemoryTreasury {
    state: RwLock<TreasuryState>,
}

impl InMemoryTreasury {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TreasuryState::default()),
        }
    }

    /// Treasury starting with `reserve` already available.
    pub fn with_reserve(reserve: Amount) -> Self {
        let treasury = Self::new();
        treasury.deposit(reserve);
        treasury
    }

    /// Credit value attached to a call to the reserve.
    pub fn deposit(&self, amount: Amount) {
        let mut state = self.state.write();
        state.reserve = state.reserve.saturating_add(amount);
    }

    /// Take `amount` back out of the reserve without recording a payout,
    /// as when the host reverts a rejected call together with its value.
    pub fn withdraw(&self, amount: Amount) -> Result<(), PaymentError> {
        let mut state = self.state.write();
        if state.reserve < amount {
            return Err(PaymentError::InsufficientReserve {
                requested: amount,
                available: state.reserve,
            });
        }
        state.reserve -= amount;
        Ok(())
    }

    pub fn reserve(&self) -> Amount {
        self.state.read().reserve
    }

    /// Total paid out to `who`.
    pub fn balance_of(&self, who: &Address) -> Amount {
        self.state
            .read()
            .balances
            .get(who)
            .copied()
            .unwrap_or_default()
    }

    /// Payout log in order.
    pub fn transfers(&self) -> Vec<Transfer> {
        self.state.read().transfers.clone()
    }

    pub fn transfer_count(&self) -> usize {
        self.state.read().transfers.len()
    }
}

impl Default for InMemoryTreasury {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for InMemoryTreasury {
    fn pay(&self, to: &Address, amount: Amount) -> Result<(), PaymentError> {
        let mut state = self.state.write();

        if state.reserve < amount {
            return Err(PaymentError::InsufficientReserve {
                requested: amount,
                available: state.reserve,
            });
        }

        state.reserve -= amount;
        let balance = state.balances.entry(*to).or_default();
        *balance = balance.saturating_add(amount);
        state.transfers.push(Transfer { to: *to, amount });

        debug!(to = ?to, amount = %amount, "[qc-miner-registry] Payout");
        Ok(())
    }
}
