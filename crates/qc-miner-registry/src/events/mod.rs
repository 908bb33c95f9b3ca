//! Events published by the Miner Registry
//!
//! One event is published per committed mutation, inside the same critical
//! section as the mutation itself. Rejected operations publish nothing.

use crate::domain::value_objects::{Address, Amount};
use serde::{Deserialize, Serialize};

/// Registry state change notification
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A miner posted its bond and joined
    MinerJoined {
        miner: Address,
        bond: Amount,
        refund: Amount,
    },

    /// A miner left on its own and was refunded
    MinerLeft { miner: Address, refund: Amount },

    /// A committee member evicted a miner; the bond went to the miner
    MinerEvicted {
        miner: Address,
        committee: Address,
        refund: Amount,
    },
}

impl RegistryEvent {
    /// The miner this event concerns.
    pub fn miner(&self) -> Address {
        match self {
            Self::MinerJoined { miner, .. }
            | Self::MinerLeft { miner, .. }
            | Self::MinerEvicted { miner, .. } => *miner,
        }
    }
}
