//! Outbound Ports (Driven Ports / SPI)
//!
//! Implementations run while the registry holds its write lock and must
//! not call back into the registry.

use crate::domain::errors::PaymentError;
use crate::domain::value_objects::{Address, Amount};
use crate::events::RegistryEvent;

/// Monetary transfer boundary supplied by the hosting environment.
///
/// Called exactly once per successful overpaid join, self-leave and
/// committee eviction. An error aborts the calling operation.
pub trait PaymentGateway: Send + Sync {
    fn pay(&self, to: &Address, amount: Amount) -> Result<(), PaymentError>;
}

/// Governance authority over privileged removals.
pub trait CommitteeAuthority: Send + Sync {
    fn is_committee(&self, who: &Address) -> bool;
}

/// Sink for registry state change notifications.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: RegistryEvent);
}
