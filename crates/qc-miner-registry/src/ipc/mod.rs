//! IPC Module for the Miner Registry
//!
//! ## Security Boundaries
//!
//! - Caller identity and attached value come from the envelope only
//! - Committee evictions are authorized by the committee authority port

pub mod handler;
pub mod payloads;

pub use handler::RegistryHandler;
pub use payloads::*;
