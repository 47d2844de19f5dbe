use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;
use services::contract_get_info_response::ContractInfo as ContractInfoProto;

use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, ContractId, Hbar, Key, LedgerId, Result, StakingInfo, TokenRelationship};

/// Current state of a smart contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractInfo {
    pub contract_id: ContractId,
    /// The account that holds the contract's hbar and tokens.
    pub account_id: AccountId,
    pub contract_account_id: String,
    pub admin_key: Option<Key>,
    pub expiration_time: Option<DateTime<Utc>>,
    pub auto_renew_period: Option<Duration>,
    pub auto_renew_account_id: Option<AccountId>,
    /// Bytes of storage in use.
    pub storage: u64,
    pub contract_memo: String,
    pub balance: Hbar,
    pub is_deleted: bool,
    pub token_relationships: Vec<TokenRelationship>,
    pub max_automatic_token_associations: i32,
    pub ledger_id: LedgerId,
    pub staking_info: Option<StakingInfo>,
}

impl ContractInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<ContractInfoProto>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<ContractInfoProto> for ContractInfo {
    fn from_protobuf(pb: ContractInfoProto) -> Result<Self> {
        Ok(Self {
            contract_id: ContractId::from_protobuf(required(pb.contract_id, "contract_id")?)?,
            account_id: AccountId::from_protobuf(required(pb.account_id, "account_id")?)?,
            contract_account_id: pb.contract_account_id,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account_id)?,
            storage: pb.storage as u64,
            contract_memo: pb.memo,
            balance: Hbar::from_tinybars(pb.balance as i64),
            is_deleted: pb.deleted,
            token_relationships: Vec::from_protobuf(pb.token_relationships)?,
            max_automatic_token_associations: pb.max_automatic_token_associations,
            ledger_id: LedgerId::from_bytes(pb.ledger_id),
            staking_info: Option::from_protobuf(pb.staking_info)?,
        })
    }
}

impl ToProtobuf for ContractInfo {
    type Protobuf = ContractInfoProto;

    fn to_protobuf(&self) -> Self::Protobuf {
        ContractInfoProto {
            contract_id: Some(self.contract_id.to_protobuf()),
            account_id: Some(self.account_id.to_protobuf()),
            contract_account_id: self.contract_account_id.clone(),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            storage: self.storage as i64,
            memo: self.contract_memo.clone(),
            balance: self.balance.to_tinybars() as u64,
            deleted: self.is_deleted,
            token_relationships: self.token_relationships.to_protobuf(),
            ledger_id: self.ledger_id.to_bytes(),
            auto_renew_account_id: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
            max_automatic_token_associations: self.max_automatic_token_associations,
            staking_info: self.staking_info.as_ref().map(StakingInfo::to_protobuf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_bytes() {
        let info = ContractInfo {
            contract_id: ContractId::new(0, 0, 5005),
            account_id: AccountId::new(0, 0, 5005),
            contract_account_id: "000000000000000000000000000000000000138d".to_owned(),
            admin_key: None,
            expiration_time: DateTime::from_timestamp(1_700_000_000, 0),
            auto_renew_period: Some(Duration::from_secs(7_776_000)),
            auto_renew_account_id: Some(AccountId::new(0, 0, 1001)),
            storage: 1024,
            contract_memo: "counter".to_owned(),
            balance: Hbar::new(3),
            is_deleted: false,
            token_relationships: Vec::new(),
            max_automatic_token_associations: 0,
            ledger_id: LedgerId::testnet(),
            staking_info: None,
        };

        assert_eq!(ContractInfo::from_bytes(&info.to_bytes()).unwrap(), info);
    }

    #[test]
    fn test_missing_account_fails() {
        let pb = ContractInfoProto {
            contract_id: Some(ContractId::new(0, 0, 1).to_protobuf()),
            ..Default::default()
        };

        assert!(ContractInfo::from_protobuf(pb).is_err());
    }
}
