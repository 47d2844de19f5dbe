//! # Entity ID Properties
//!
//! Text and EVM forms of `shard.realm.num` ids must survive a round trip, and
//! a checksum is only ever accepted by the ledger it was computed for.

#[cfg(test)]
mod tests {
    use hashgraph_sdk::entity_id::checksum;
    use hashgraph_sdk::{AccountId, ContractId, LedgerId, TopicId, ValidateChecksums};
    use proptest::prelude::*;

    fn ledger() -> impl Strategy<Value = LedgerId> {
        prop_oneof![Just(LedgerId::mainnet()), Just(LedgerId::testnet()), Just(LedgerId::previewnet())]
    }

    proptest! {
        #[test]
        fn prop_account_id_text_round_trip(shard in any::<u64>(), realm in any::<u64>(), num in any::<u64>()) {
            let id = AccountId::new(shard, realm, num);
            let parsed: AccountId = id.to_string().parse().unwrap();

            prop_assert_eq!(parsed.num(), Some(num));
            prop_assert_eq!(parsed, id);
        }

        #[test]
        fn prop_checksum_string_validates_on_its_ledger(
            shard in 0u64..1_000,
            realm in 0u64..1_000,
            num in any::<u64>(),
            ledger_id in ledger(),
        ) {
            let sum = checksum::compute(&ledger_id, shard, realm, num);
            prop_assert!(sum.as_str().bytes().all(|b| b.is_ascii_lowercase()));

            let text = format!("{shard}.{realm}.{num}-{sum}");
            let parsed: TopicId = text.parse().unwrap();

            prop_assert_eq!(parsed.checksum, Some(sum));
            prop_assert!(parsed.validate_checksums(&ledger_id).is_ok());
        }

        #[test]
        fn prop_solidity_address_round_trip(
            shard in 0u64..=u64::from(u32::MAX),
            realm in any::<u64>(),
            num in any::<u64>(),
        ) {
            let id = ContractId::new(shard, realm, num);
            let address = id.to_solidity_address().unwrap();
            prop_assert_eq!(address.len(), 40);

            let back = ContractId::from_solidity_address(&address).unwrap();
            prop_assert_eq!(back, id);
        }

        #[test]
        fn prop_wide_shard_has_no_solidity_address(shard in (u64::from(u32::MAX) + 1).., num in any::<u64>()) {
            prop_assert!(AccountId::new(shard, 0, num).to_solidity_address().is_err());
        }
    }
}
