//! Committee roster adapter
//!
//! Implements `CommitteeAuthority` over a maintained set of committee
//! identities. The roster governs itself: only sitting members may admit
//! or dismiss, and the last member cannot be dismissed.

use crate::config::RegistryConfig;
use crate::domain::errors::{CommitteeError, ConfigError};
use crate::domain::value_objects::Address;
use crate::ports::outbound::CommitteeAuthority;
use parking_lot::RwLock;
use std::collections::BTreeSet;
use tracing::{info, warn};

pub struct CommitteeRoster {
    members: RwLock<BTreeSet<Address>>,
}

impl CommitteeRoster {
    /// Roster seeded with `members`. Duplicates collapse.
    pub fn new(members: impl IntoIterator<Item = Address>) -> Result<Self, ConfigError> {
        let members: BTreeSet<Address> = members.into_iter().collect();
        if members.is_empty() {
            return Err(ConfigError::EmptyCommittee);
        }
        Ok(Self {
            members: RwLock::new(members),
        })
    }

    /// Roster seeded with the configured genesis committee.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        Self::new(config.committee.iter().copied())
    }

    /// Add `candidate` to the committee on the authority of `caller`.
    pub fn admit(&self, caller: &Address, candidate: Address) -> Result<(), CommitteeError> {
        let mut members = self.members.write();

        if !members.contains(caller) {
            warn!(caller = ?caller, "[qc-miner-registry] Non-committee admit attempt");
            return Err(CommitteeError::NotCommittee(*caller));
        }
        if !members.insert(candidate) {
            return Err(CommitteeError::AlreadyOnCommittee(candidate));
        }

        info!(
            member = ?candidate,
            by = ?caller,
            size = members.len(),
            "[qc-miner-registry] Committee member admitted"
        );
        Ok(())
    }

    /// Remove `target` from the committee on the authority of `caller`.
    pub fn dismiss(&self, caller: &Address, target: &Address) -> Result<(), CommitteeError> {
        let mut members = self.members.write();

        if !members.contains(caller) {
            warn!(caller = ?caller, "[qc-miner-registry] Non-committee dismiss attempt");
            return Err(CommitteeError::NotCommittee(*caller));
        }
        if !members.contains(target) {
            return Err(CommitteeError::NotOnCommittee(*target));
        }
        if members.len() == 1 {
            return Err(CommitteeError::LastCommitteeMember(*target));
        }

        members.remove(target);

        info!(
            member = ?target,
            by = ?caller,
            size = members.len(),
            "[qc-miner-registry] Committee member dismissed"
        );
        Ok(())
    }

    /// Sorted snapshot of the committee.
    pub fn members(&self) -> Vec<Address> {
        self.members.read().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }
}

impl CommitteeAuthority for CommitteeRoster {
    fn is_committee(&self, who: &Address) -> bool {
        self.members.read().contains(who)
    }
}
