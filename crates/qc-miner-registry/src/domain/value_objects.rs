//! Value objects for the Miner Registry

use primitive_types::{H160, U256};
use serde::{Deserialize, Serialize};

/// 20-byte account identity of a miner or committee member.
pub type Address = H160;

/// Monetary amount in base units.
pub type Amount = U256;

/// Per-call context asserted by the hosting environment.
///
/// The registry trusts `caller` as given; it never authenticates identity.
/// `value` is the amount the caller attached to this call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub caller: Address,
    pub value: Amount,
}

impl CallContext {
    /// Context for a call that carries a deposit.
    pub fn new(caller: Address, value: Amount) -> Self {
        Self { caller, value }
    }

    /// Context for a call with nothing attached.
    pub fn without_value(caller: Address) -> Self {
        Self {
            caller,
            value: Amount::zero(),
        }
    }
}

/// Which path removed a miner from the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeparturePath {
    /// The miner left on its own.
    SelfExit,
    /// A committee member evicted the miner.
    CommitteeEviction,
}

impl DeparturePath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfExit => "self_exit",
            Self::CommitteeEviction => "committee_eviction",
        }
    }
}
