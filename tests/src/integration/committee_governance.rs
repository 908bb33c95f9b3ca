//! # Committee Governance Flows
//!
//! Roster changes take effect on the very next eviction.

#[cfg(test)]
mod tests {
    use crate::init_test_tracing;
    use crate::integration::host::Host;
    use primitive_types::H160;
    use qc_miner_registry::{
        Address, Amount, CommitteeAuthority, CommitteeError, ConfigError, MinerRegistryApi,
        RegistryConfig, RegistryErrorCode,
    };

    const BOND: u64 = 50;

    fn addr(val: u64) -> Address {
        H160::from_low_u64_be(val)
    }

    fn host_with_committee(committee: Vec<Address>) -> Host {
        init_test_tracing();
        Host::new(RegistryConfig::new(Amount::from(BOND), committee)).unwrap()
    }

    #[test]
    fn test_host_requires_committee() {
        let result = Host::new(RegistryConfig::new(Amount::from(BOND), vec![]));
        assert!(matches!(result, Err(ConfigError::EmptyCommittee)));
    }

    #[test]
    fn test_host_from_json_config() {
        let raw = r#"{
            "bond": "0x32",
            "committee": ["0x00000000000000000000000000000000000000c1"]
        }"#;
        let host = Host::new(RegistryConfig::from_json(raw).unwrap()).unwrap();

        assert_eq!(host.registry.bond(), Amount::from(BOND));
        assert!(host.committee.is_committee(&addr(0xC1)));
    }

    #[test]
    fn test_admitted_member_can_evict() {
        let host = host_with_committee(vec![addr(0xC1)]);
        host.join(addr(1), Amount::from(BOND));

        let denied = host.leave_by_committee(addr(0xC2), addr(1));
        assert_eq!(denied.error, Some(RegistryErrorCode::Unauthorized));

        host.committee.admit(&addr(0xC1), addr(0xC2)).unwrap();

        let evicted = host.leave_by_committee(addr(0xC2), addr(1));
        assert!(evicted.success);
        assert_eq!(host.treasury.balance_of(&addr(1)), Amount::from(BOND));
    }

    #[test]
    fn test_dismissed_member_loses_authority() {
        let host = host_with_committee(vec![addr(0xC1), addr(0xC2)]);
        host.join(addr(1), Amount::from(BOND));

        host.committee.dismiss(&addr(0xC1), &addr(0xC2)).unwrap();

        let r = host.leave_by_committee(addr(0xC2), addr(1));
        assert_eq!(r.error, Some(RegistryErrorCode::Unauthorized));
        assert!(host.registry.is_member(&addr(1)));
    }

    #[test]
    fn test_committee_never_empties() {
        let host = host_with_committee(vec![addr(0xC1)]);

        assert_eq!(
            host.committee.dismiss(&addr(0xC1), &addr(0xC1)),
            Err(CommitteeError::LastCommitteeMember(addr(0xC1)))
        );
        assert_eq!(host.committee.members(), vec![addr(0xC1)]);
    }

    #[test]
    fn test_committee_member_may_also_mine() {
        let host = host_with_committee(vec![addr(0xC1)]);

        assert!(host.join(addr(0xC1), Amount::from(BOND)).success);
        assert!(host.leave_by_committee(addr(0xC1), addr(0xC1)).success);
        assert_eq!(host.treasury.balance_of(&addr(0xC1)), Amount::from(BOND));
    }
}
