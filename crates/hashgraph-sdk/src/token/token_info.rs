use std::time::Duration;

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use super::{TokenSupplyType, TokenType};
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, CustomFee, Key, LedgerId, NftId, Result, TokenId};

/// Current state of a token, as answered by a token info query.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    pub token_id: TokenId,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub total_supply: u64,
    pub treasury_account_id: AccountId,
    pub admin_key: Option<Key>,
    pub kyc_key: Option<Key>,
    pub freeze_key: Option<Key>,
    pub wipe_key: Option<Key>,
    pub supply_key: Option<Key>,
    pub fee_schedule_key: Option<Key>,
    pub pause_key: Option<Key>,
    pub metadata_key: Option<Key>,
    /// `None` when the token has no freeze key.
    pub default_freeze_status: Option<bool>,
    /// `None` when the token has no KYC key.
    pub default_kyc_status: Option<bool>,
    /// `None` when the token has no pause key.
    pub pause_status: Option<bool>,
    pub is_deleted: bool,
    pub auto_renew_account_id: Option<AccountId>,
    pub auto_renew_period: Option<Duration>,
    pub expiration_time: Option<DateTime<Utc>>,
    pub token_memo: String,
    pub token_type: TokenType,
    pub supply_type: TokenSupplyType,
    pub max_supply: u64,
    pub custom_fees: Vec<CustomFee>,
    pub metadata: Vec<u8>,
    pub ledger_id: LedgerId,
}

/// One NFT and its current owner.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenNftInfo {
    pub nft_id: NftId,
    pub account_id: AccountId,
    pub creation_time: DateTime<Utc>,
    pub metadata: Vec<u8>,
    pub spender_id: Option<AccountId>,
    pub ledger_id: LedgerId,
}

/// An account's holding of one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRelationship {
    pub token_id: TokenId,
    pub symbol: String,
    pub balance: u64,
    pub is_kyc_granted: Option<bool>,
    pub is_frozen: Option<bool>,
    pub decimals: u32,
    pub automatic_association: bool,
}

fn freeze_status(value: i32) -> Result<Option<bool>> {
    match services::TokenFreezeStatus::try_from(value) {
        Ok(services::TokenFreezeStatus::FreezeNotApplicable) => Ok(None),
        Ok(services::TokenFreezeStatus::Frozen) => Ok(Some(true)),
        Ok(services::TokenFreezeStatus::Unfrozen) => Ok(Some(false)),
        Err(_) => Err(crate::Error::from_protobuf(format!("unknown freeze status {value}"))),
    }
}

fn to_freeze_status(status: Option<bool>) -> i32 {
    let status = match status {
        None => services::TokenFreezeStatus::FreezeNotApplicable,
        Some(true) => services::TokenFreezeStatus::Frozen,
        Some(false) => services::TokenFreezeStatus::Unfrozen,
    };
    status as i32
}

fn kyc_status(value: i32) -> Result<Option<bool>> {
    match services::TokenKycStatus::try_from(value) {
        Ok(services::TokenKycStatus::KycNotApplicable) => Ok(None),
        Ok(services::TokenKycStatus::Granted) => Ok(Some(true)),
        Ok(services::TokenKycStatus::Revoked) => Ok(Some(false)),
        Err(_) => Err(crate::Error::from_protobuf(format!("unknown kyc status {value}"))),
    }
}

fn to_kyc_status(status: Option<bool>) -> i32 {
    let status = match status {
        None => services::TokenKycStatus::KycNotApplicable,
        Some(true) => services::TokenKycStatus::Granted,
        Some(false) => services::TokenKycStatus::Revoked,
    };
    status as i32
}

fn pause_status(value: i32) -> Result<Option<bool>> {
    match services::TokenPauseStatus::try_from(value) {
        Ok(services::TokenPauseStatus::PauseNotApplicable) => Ok(None),
        Ok(services::TokenPauseStatus::Paused) => Ok(Some(true)),
        Ok(services::TokenPauseStatus::Unpaused) => Ok(Some(false)),
        Err(_) => Err(crate::Error::from_protobuf(format!("unknown pause status {value}"))),
    }
}

fn to_pause_status(status: Option<bool>) -> i32 {
    let status = match status {
        None => services::TokenPauseStatus::PauseNotApplicable,
        Some(true) => services::TokenPauseStatus::Paused,
        Some(false) => services::TokenPauseStatus::Unpaused,
    };
    status as i32
}

impl TokenInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::TokenInfo>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::TokenInfo> for TokenInfo {
    fn from_protobuf(pb: services::TokenInfo) -> Result<Self> {
        Ok(Self {
            token_id: TokenId::from_protobuf(required(pb.token_id, "token_id")?)?,
            name: pb.name,
            symbol: pb.symbol,
            decimals: pb.decimals,
            total_supply: pb.total_supply,
            treasury_account_id: AccountId::from_protobuf(required(pb.treasury, "treasury")?)?,
            admin_key: Option::from_protobuf(pb.admin_key)?,
            kyc_key: Option::from_protobuf(pb.kyc_key)?,
            freeze_key: Option::from_protobuf(pb.freeze_key)?,
            wipe_key: Option::from_protobuf(pb.wipe_key)?,
            supply_key: Option::from_protobuf(pb.supply_key)?,
            fee_schedule_key: Option::from_protobuf(pb.fee_schedule_key)?,
            pause_key: Option::from_protobuf(pb.pause_key)?,
            metadata_key: Option::from_protobuf(pb.metadata_key)?,
            default_freeze_status: freeze_status(pb.default_freeze_status)?,
            default_kyc_status: kyc_status(pb.default_kyc_status)?,
            pause_status: pause_status(pb.pause_status)?,
            is_deleted: pb.deleted,
            auto_renew_account_id: Option::from_protobuf(pb.auto_renew_account)?,
            auto_renew_period: Option::from_protobuf(pb.auto_renew_period)?,
            expiration_time: Option::from_protobuf(pb.expiry)?,
            token_memo: pb.memo,
            token_type: TokenType::from_i32(pb.token_type)?,
            supply_type: TokenSupplyType::from_i32(pb.supply_type)?,
            max_supply: pb.max_supply as u64,
            custom_fees: Vec::from_protobuf(pb.custom_fees)?,
            metadata: pb.metadata,
            ledger_id: LedgerId::from_bytes(pb.ledger_id),
        })
    }
}

impl ToProtobuf for TokenInfo {
    type Protobuf = services::TokenInfo;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenInfo {
            token_id: Some(self.token_id.to_protobuf()),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            total_supply: self.total_supply,
            treasury: Some(self.treasury_account_id.to_protobuf()),
            admin_key: self.admin_key.as_ref().map(Key::to_protobuf),
            kyc_key: self.kyc_key.as_ref().map(Key::to_protobuf),
            freeze_key: self.freeze_key.as_ref().map(Key::to_protobuf),
            wipe_key: self.wipe_key.as_ref().map(Key::to_protobuf),
            supply_key: self.supply_key.as_ref().map(Key::to_protobuf),
            default_freeze_status: to_freeze_status(self.default_freeze_status),
            default_kyc_status: to_kyc_status(self.default_kyc_status),
            deleted: self.is_deleted,
            auto_renew_account: self.auto_renew_account_id.as_ref().map(AccountId::to_protobuf),
            auto_renew_period: self.auto_renew_period.as_ref().map(Duration::to_protobuf),
            expiry: self.expiration_time.as_ref().map(DateTime::to_protobuf),
            memo: self.token_memo.clone(),
            token_type: self.token_type.to_protobuf() as i32,
            supply_type: self.supply_type.to_protobuf() as i32,
            max_supply: self.max_supply as i64,
            fee_schedule_key: self.fee_schedule_key.as_ref().map(Key::to_protobuf),
            custom_fees: self.custom_fees.to_protobuf(),
            pause_key: self.pause_key.as_ref().map(Key::to_protobuf),
            pause_status: to_pause_status(self.pause_status),
            ledger_id: self.ledger_id.to_bytes(),
            metadata: self.metadata.clone(),
            metadata_key: self.metadata_key.as_ref().map(Key::to_protobuf),
        }
    }
}

impl TokenNftInfo {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::TokenNftInfo>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::TokenNftInfo> for TokenNftInfo {
    fn from_protobuf(pb: services::TokenNftInfo) -> Result<Self> {
        Ok(Self {
            nft_id: NftId::from_protobuf(required(pb.nft_id, "nft_id")?)?,
            account_id: AccountId::from_protobuf(required(pb.account_id, "account_id")?)?,
            creation_time: DateTime::from_protobuf(required(pb.creation_time, "creation_time")?)?,
            metadata: pb.metadata,
            spender_id: Option::from_protobuf(pb.spender_id)?,
            ledger_id: LedgerId::from_bytes(pb.ledger_id),
        })
    }
}

impl ToProtobuf for TokenNftInfo {
    type Protobuf = services::TokenNftInfo;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenNftInfo {
            nft_id: Some(self.nft_id.to_protobuf()),
            account_id: Some(self.account_id.to_protobuf()),
            creation_time: Some(self.creation_time.to_protobuf()),
            metadata: self.metadata.clone(),
            ledger_id: self.ledger_id.to_bytes(),
            spender_id: self.spender_id.as_ref().map(AccountId::to_protobuf),
        }
    }
}

impl FromProtobuf<services::TokenRelationship> for TokenRelationship {
    fn from_protobuf(pb: services::TokenRelationship) -> Result<Self> {
        Ok(Self {
            token_id: TokenId::from_protobuf(required(pb.token_id, "token_id")?)?,
            symbol: pb.symbol,
            balance: pb.balance,
            is_kyc_granted: kyc_status(pb.kyc_status)?,
            is_frozen: freeze_status(pb.freeze_status)?,
            decimals: pb.decimals,
            automatic_association: pb.automatic_association,
        })
    }
}

impl ToProtobuf for TokenRelationship {
    type Protobuf = services::TokenRelationship;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenRelationship {
            token_id: Some(self.token_id.to_protobuf()),
            symbol: self.symbol.clone(),
            balance: self.balance,
            kyc_status: to_kyc_status(self.is_kyc_granted),
            freeze_status: to_freeze_status(self.is_frozen),
            decimals: self.decimals,
            automatic_association: self.automatic_association,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_info() -> TokenInfo {
        TokenInfo {
            token_id: TokenId::new(0, 0, 1234),
            name: "Example".to_owned(),
            symbol: "EX".to_owned(),
            decimals: 2,
            total_supply: 100_000,
            treasury_account_id: AccountId::new(0, 0, 2),
            admin_key: None,
            kyc_key: None,
            freeze_key: None,
            wipe_key: None,
            supply_key: None,
            fee_schedule_key: None,
            pause_key: None,
            metadata_key: None,
            default_freeze_status: Some(false),
            default_kyc_status: None,
            pause_status: Some(true),
            is_deleted: false,
            auto_renew_account_id: None,
            auto_renew_period: Some(Duration::from_secs(7_776_000)),
            expiration_time: DateTime::from_timestamp(1_900_000_000, 0),
            token_memo: "memo".to_owned(),
            token_type: TokenType::FungibleCommon,
            supply_type: TokenSupplyType::Finite,
            max_supply: 1_000_000,
            custom_fees: Vec::new(),
            metadata: vec![9],
            ledger_id: LedgerId::testnet(),
        }
    }

    #[test]
    fn test_token_info_bytes() {
        let info = token_info();
        assert_eq!(TokenInfo::from_bytes(&info.to_bytes()).unwrap(), info);
    }

    #[test]
    fn test_status_mapping() {
        let pb = token_info().to_protobuf();
        assert_eq!(pb.default_freeze_status, services::TokenFreezeStatus::Unfrozen as i32);
        assert_eq!(pb.default_kyc_status, services::TokenKycStatus::KycNotApplicable as i32);
        assert_eq!(pb.pause_status, services::TokenPauseStatus::Paused as i32);
        assert!(freeze_status(9).is_err());
    }

    #[test]
    fn test_nft_info_requires_owner() {
        let info = TokenNftInfo {
            nft_id: TokenId::new(0, 0, 5).nft(1),
            account_id: AccountId::new(0, 0, 6),
            creation_time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            metadata: Vec::new(),
            spender_id: None,
            ledger_id: LedgerId::mainnet(),
        };
        assert_eq!(TokenNftInfo::from_bytes(&info.to_bytes()).unwrap(), info);

        let mut pb = info.to_protobuf();
        pb.account_id = None;
        assert!(TokenNftInfo::from_protobuf(pb).is_err());
    }
}
