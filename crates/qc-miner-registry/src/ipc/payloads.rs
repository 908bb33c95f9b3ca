//! IPC Payloads for the Miner Registry
//!
//! ## Security (Envelope-Only Identity)
//!
//! The caller identity and attached value travel in the `RegistryCall`
//! envelope only. Request bodies carry no caller identity; the eviction
//! target is the one address a body may name.

use crate::domain::errors::RegistryError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// Operation requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryRequest {
    /// Join, posting the attached value as bond
    Join,
    /// Leave and reclaim the bond
    LeaveSelf,
    /// Evict `target` on committee authority
    LeaveByCommittee { target: [u8; 20] },
}

/// Envelope asserted by the hosting environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryCall {
    /// Correlation ID for response tracking
    pub correlation_id: [u8; 16],
    /// Calling identity
    pub caller: [u8; 20],
    /// Value attached to the call, in base units
    pub value: U256,
    pub request: RegistryRequest,
}

// ============================================================
// OUTGOING RESPONSES
// ============================================================

/// Stable error codes carried over IPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryErrorCode {
    InsufficientBond,
    AlreadyMember,
    NotAMember,
    Unauthorized,
    UnexpectedValue,
    TransferFailed,
}

impl From<&RegistryError> for RegistryErrorCode {
    fn from(err: &RegistryError) -> Self {
        match err {
            RegistryError::InsufficientBond { .. } => Self::InsufficientBond,
            RegistryError::AlreadyMember(_) => Self::AlreadyMember,
            RegistryError::NotAMember(_) => Self::NotAMember,
            RegistryError::Unauthorized(_) => Self::Unauthorized,
            RegistryError::UnexpectedValue { .. } => Self::UnexpectedValue,
            RegistryError::TransferFailed(_) => Self::TransferFailed,
        }
    }
}

/// Outcome of a registry call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryResponse {
    /// Correlation ID from request
    pub correlation_id: [u8; 16],
    /// Whether the operation committed
    pub success: bool,
    /// Amount paid out by this call (zero on failure)
    pub refund: U256,
    /// Membership count after the call
    pub member_count: u64,
    /// Error code (if failed)
    pub error: Option<RegistryErrorCode>,
    /// Human-readable error (if failed)
    pub message: Option<String>,
}
