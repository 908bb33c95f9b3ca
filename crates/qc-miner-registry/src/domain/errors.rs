//! Error types for the Miner Registry

use super::value_objects::{Address, Amount};
use thiserror::Error;

/// Rejections of a registry operation.
///
/// Every variant aborts the whole operation: no transfer, no set mutation,
/// no event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Attached value below the bond on join
    #[error("Insufficient bond: required {required}, provided {provided}")]
    InsufficientBond { required: Amount, provided: Amount },

    /// Join by an identity that is already registered
    #[error("Already a member: {0:?}")]
    AlreadyMember(Address),

    /// Leave targeting an identity that is not registered
    #[error("Not a member: {0:?}")]
    NotAMember(Address),

    /// Committee eviction by a caller without committee authority
    #[error("Unauthorized: {0:?} is not on the committee")]
    Unauthorized(Address),

    /// Value attached to a leave; leaves only pay out
    #[error("Unexpected value: leave carries no value, provided {provided}")]
    UnexpectedValue { provided: Amount },

    /// The hosting environment could not complete the payout
    #[error("Transfer failed: {0}")]
    TransferFailed(#[from] PaymentError),
}

impl RegistryError {
    /// Stable label for metrics and IPC error codes.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InsufficientBond { .. } => "insufficient_bond",
            Self::AlreadyMember(_) => "already_member",
            Self::NotAMember(_) => "not_a_member",
            Self::Unauthorized(_) => "unauthorized",
            Self::UnexpectedValue { .. } => "unexpected_value",
            Self::TransferFailed(_) => "transfer_failed",
        }
    }
}

/// Failures of the payment boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Insufficient reserve: requested {requested}, available {available}")]
    InsufficientReserve { requested: Amount, available: Amount },

    #[error("Payment rejected: {0}")]
    Rejected(String),
}

/// Committee roster maintenance errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitteeError {
    #[error("Caller {0:?} is not on the committee")]
    NotCommittee(Address),

    #[error("{0:?} is already on the committee")]
    AlreadyOnCommittee(Address),

    #[error("{0:?} is not on the committee")]
    NotOnCommittee(Address),

    #[error("Cannot dismiss {0:?}: committee would be empty")]
    LastCommitteeMember(Address),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Bond must be greater than zero")]
    ZeroBond,

    #[error("Committee must name at least one member")]
    EmptyCommittee,

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
