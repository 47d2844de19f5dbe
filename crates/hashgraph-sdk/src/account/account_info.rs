use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_crypto::PublicKey;
use hashgraph_proto::services;
use services::crypto_get_info_response::AccountInfo as AccountInfoProto;

use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, Hbar, Key, LedgerId, Result, StakingInfo, TokenId, TokenRelationship};

/// Hbar and token balances of an account or contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    pub account_id: AccountId,
    pub hbars: Hbar,
    /// Balance per token, in the token's smallest unit.
    pub tokens: BTreeMap<TokenId, u64>,
    pub token_decimals: BTreeMap<TokenId, u32>,
}

/// Current state of an account, as answered by an account info query.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub account_id: AccountId,
    /// Solidity address of the account, as hex.
    pub contract_account_id: String,
    pub is_deleted: bool,
    pub proxy_received: Hbar,
    pub key: Option<Key>,
    pub balance: Hbar,
    pub is_receiver_signature_required: bool,
    pub expiration_time: Option<DateTime<Utc>>,
    pub auto_renew_period: Option<Duration>,
    pub token_relationships: Vec<TokenRelationship>,
    pub account_memo: String,
    pub owned_nfts: u64,
    pub max_automatic_token_associations: i32,
    /// Set when the account was created from a public-key alias.
    pub alias_key: Option<PublicKey>,
    pub ledger_id: LedgerId,
    pub ethereum_nonce: i64,
    pub staking: Option<StakingInfo>,
}

impl AccountBalance {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::CryptoGetAccountBalanceResponse>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::CryptoGetAccountBalanceResponse> for AccountBalance {
    fn from_protobuf(pb: services::CryptoGetAccountBalanceResponse) -> Result<Self> {
        let mut tokens = BTreeMap::new();
        let mut token_decimals = BTreeMap::new();

        for balance in pb.token_balances {
            let token_id = TokenId::from_protobuf(required(balance.token_id, "token_id")?)?;
            tokens.insert(token_id, balance.balance);
            token_decimals.insert(token_id, balance.decimals);
        }

        Ok(Self {
            account_id: AccountId::from_protobuf(required(pb.account_id, "account_id")?)?,
            hbars: Hbar::from_tinybars(pb.balance as i64),
            tokens,
            token_decimals,
        })
    }
}

impl ToProtobuf for AccountBalance {
    type Protobuf = services::CryptoGetAccountBalanceResponse;

    fn to_protobuf(&self) -> Self::Protobuf {
        let token_balances = self
            .tokens
            .iter()
            .map(|(token_id, balance)| services::TokenBalance {
                token_id: Some(token_id.to_protobuf()),
                balance: *balance,
                decimals: self.token_decimals.get(token_id).copied().unwrap_or_default(),
            })
            .collect();

        services::CryptoGetAccountBalanceResponse {
            header: None,
            account_id: Some(self.account_id.to_protobuf()),
            balance: self.hbars.to_tinybars() as u64,
            token_balances,
        }
    }
}

impl AccountInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<AccountInfoProto>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<AccountInfoProto> for AccountInfo {
    fn from_protobuf(pb: AccountInfoProto) -> Result<Self> {
        // the alias field also carries EVM addresses, which are not keys
        let alias_key = match pb.alias.is_empty() {
            true => None,
            false => Key::from_bytes(&pb.alias).ok().and_then(|key| key.as_public_key().cloned()),
        };

        Ok(Self {
            account_id: AccountId::from_protobuf(required(pb.account_id, "account_id")?)?,
            contract_account_id: pb.contract_account_id,
            is_deleted: pb.deleted,
            proxy_received: Hbar::from_tinybars(pb.proxy_received),
            key: Option::from_protobuf(pb.key)?,
            balance: Hbar::from_tinybars(pb.balance as i64),
            is_receiver_signature_required: pb.receiver_sig_required,
            expiration_time: Option::from_protobuf(pb.expiration_time)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            token_relationships: Vec::from_protobuf(pb.token_relationships)?,
            account_memo: pb.memo,
            owned_nfts: pb.owned_nfts as u64,
            max_automatic_token_associations: pb.max_automatic_token_associations,
            alias_key,
            ledger_id: LedgerId::from_bytes(pb.ledger_id),
            ethereum_nonce: pb.ethereum_nonce,
            staking: Option::from_protobuf(pb.staking_info)?,
        })
    }
}

impl ToProtobuf for AccountInfo {
    type Protobuf = AccountInfoProto;

    fn to_protobuf(&self) -> Self::Protobuf {
        AccountInfoProto {
            account_id: Some(self.account_id.to_protobuf()),
            contract_account_id: self.contract_account_id.clone(),
            deleted: self.is_deleted,
            proxy_received: self.proxy_received.to_tinybars(),
            key: self.key.as_ref().map(Key::to_protobuf),
            balance: self.balance.to_tinybars() as u64,
            receiver_sig_required: self.is_receiver_signature_required,
            expiration_time: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            token_relationships: self.token_relationships.to_protobuf(),
            memo: self.account_memo.clone(),
            owned_nfts: self.owned_nfts as i64,
            max_automatic_token_associations: self.max_automatic_token_associations,
            alias: self
                .alias_key
                .as_ref()
                .map(|key| Key::Single(key.clone()).to_bytes())
                .unwrap_or_default(),
            ledger_id: self.ledger_id.to_bytes(),
            ethereum_nonce: self.ethereum_nonce,
            staking_info: self.staking.as_ref().map(StakingInfo::to_protobuf),
        }
    }
}

#[cfg(test)]
mod tests {
    use hashgraph_crypto::PrivateKey;

    use super::*;
    use crate::StakedId;

    #[test]
    fn test_balance_keeps_decimals() {
        let token = TokenId::new(0, 0, 77);
        let balance = AccountBalance {
            account_id: AccountId::new(0, 0, 1001),
            hbars: Hbar::new(12),
            tokens: BTreeMap::from([(token, 500)]),
            token_decimals: BTreeMap::from([(token, 2)]),
        };

        let pb = balance.to_protobuf();
        assert_eq!(pb.token_balances[0].decimals, 2);
        assert_eq!(AccountBalance::from_bytes(&balance.to_bytes()).unwrap(), balance);
    }

    #[test]
    fn test_info_round_trip_with_alias() {
        let key = PrivateKey::generate_ed25519().public_key();
        let info = AccountInfo {
            account_id: AccountId::new(0, 0, 1001),
            contract_account_id: "00000000000000000000000000000000000003e9".to_owned(),
            is_deleted: false,
            proxy_received: Hbar::ZERO,
            key: Some(key.clone().into()),
            balance: Hbar::new(100),
            is_receiver_signature_required: true,
            expiration_time: DateTime::from_timestamp(1_800_000_000, 0),
            auto_renew_period: Some(Duration::from_secs(7_776_000)),
            token_relationships: Vec::new(),
            account_memo: "ops".to_owned(),
            owned_nfts: 3,
            max_automatic_token_associations: -1,
            alias_key: Some(key),
            ledger_id: LedgerId::previewnet(),
            ethereum_nonce: 4,
            staking: Some(StakingInfo {
                decline_staking_reward: false,
                stake_period_start: None,
                pending_reward: Hbar::ZERO,
                staked_to_me: Hbar::ZERO,
                staked_id: Some(StakedId::NodeId(0)),
            }),
        };

        assert_eq!(AccountInfo::from_bytes(&info.to_bytes()).unwrap(), info);
    }

    #[test]
    fn test_evm_alias_is_not_a_key() {
        let pb = AccountInfoProto {
            account_id: Some(AccountId::new(0, 0, 5).to_protobuf()),
            alias: vec![0xab; 20],
            ..Default::default()
        };
        assert_eq!(AccountInfo::from_protobuf(pb).unwrap().alias_key, None);
    }
}
