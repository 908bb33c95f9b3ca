//! # Metrics Flows
//!
//! Host calls move the Prometheus counters. The counters are process-wide and
//! shared with concurrently running tests, so assertions compare deltas.

#[cfg(test)]
mod tests {
    use crate::init_test_tracing;
    use crate::integration::host::Host;
    use primitive_types::H160;
    use qc_miner_registry::metrics::{DEPARTURES, JOINS, REJECTIONS};
    use qc_miner_registry::{Address, Amount, RegistryConfig, RegistryRequest};

    const BOND: u64 = 10;

    fn addr(val: u64) -> Address {
        H160::from_low_u64_be(val)
    }

    #[test]
    fn test_counters_follow_host_calls() {
        init_test_tracing();
        let committee = addr(0xC);
        let host = Host::new(RegistryConfig::new(Amount::from(BOND), vec![committee])).unwrap();

        let joins = JOINS.get();
        let exits = DEPARTURES.with_label_values(&["self_exit"]).get();
        let evictions = DEPARTURES.with_label_values(&["committee_eviction"]).get();
        let short = REJECTIONS.with_label_values(&["insufficient_bond"]).get();
        let paying_leave = REJECTIONS.with_label_values(&["unexpected_value"]).get();

        assert!(host.join(addr(1), Amount::from(BOND)).success);
        assert!(host.join(addr(2), Amount::from(BOND)).success);
        assert!(!host.join(addr(3), Amount::from(BOND - 1)).success);
        assert!(!host
            .submit(addr(1), Amount::from(1u64), RegistryRequest::LeaveSelf)
            .success);
        assert!(host.leave_self(addr(1)).success);
        assert!(host.leave_by_committee(committee, addr(2)).success);

        assert!(JOINS.get() >= joins + 2);
        assert!(DEPARTURES.with_label_values(&["self_exit"]).get() > exits);
        assert!(DEPARTURES.with_label_values(&["committee_eviction"]).get() > evictions);
        assert!(REJECTIONS.with_label_values(&["insufficient_bond"]).get() > short);
        assert!(REJECTIONS.with_label_values(&["unexpected_value"]).get() > paying_leave);
    }
}
