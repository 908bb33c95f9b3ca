//! Domain invariants for the Miner Registry

use super::value_objects::{Address, Amount};
use std::collections::HashSet;

/// INVARIANT-1: No Duplicates
/// Each identity appears at most once in the membership set.
pub fn invariant_no_duplicates(miners: &[Address]) -> bool {
    let mut seen = HashSet::with_capacity(miners.len());
    miners.iter().all(|m| seen.insert(*m))
}

/// INVARIANT-2: Exact Refund
/// A join retains exactly the bond and returns the rest.
pub fn invariant_exact_refund(attached: Amount, bond: Amount, refund: Amount) -> bool {
    bond.checked_add(refund) == Some(attached)
}

/// INVARIANT-3: Single Removal
/// A departure shrinks the set by exactly one and drops the departed miner.
pub fn invariant_single_removal(before: &[Address], after: &[Address], miner: &Address) -> bool {
    after.len() + 1 == before.len() && before.contains(miner) && !after.contains(miner)
}
