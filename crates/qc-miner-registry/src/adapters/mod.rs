//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports, used by hosts that run
//! the registry in-process and by the test suite.

mod committee;
mod event_log;
mod treasury;

pub use committee::CommitteeRoster;
pub use event_log::InMemoryEventLog;
pub use treasury::{InMemoryTreasury, Transfer};
