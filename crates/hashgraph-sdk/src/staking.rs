//! Staking targets and the staking state reported for accounts and contracts.

use chrono::{DateTime, Utc};
use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::{AccountId, Hbar, LedgerId, Result};

/// Where an account or contract stakes: another account, or a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StakedId {
    AccountId(AccountId),
    NodeId(u64),
}

impl From<AccountId> for StakedId {
    fn from(id: AccountId) -> Self {
        Self::AccountId(id)
    }
}

impl ValidateChecksums for StakedId {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        match self {
            Self::AccountId(id) => id.validate_checksums(ledger_id),
            Self::NodeId(_) => Ok(()),
        }
    }
}

// Every body with a staking target carries its own copy of the same oneof.
macro_rules! staked_id_protobuf {
    ($($module:ident),* $(,)?) => {
        $(
            impl FromProtobuf<services::$module::StakedId> for StakedId {
                fn from_protobuf(pb: services::$module::StakedId) -> Result<Self> {
                    use services::$module::StakedId as Pb;

                    match pb {
                        Pb::StakedAccountId(id) => Ok(Self::AccountId(AccountId::from_protobuf(id)?)),
                        Pb::StakedNodeId(id) => Ok(Self::NodeId(id as u64)),
                    }
                }
            }

            impl From<&StakedId> for services::$module::StakedId {
                fn from(id: &StakedId) -> Self {
                    match id {
                        StakedId::AccountId(id) => Self::StakedAccountId(id.to_protobuf()),
                        StakedId::NodeId(id) => Self::StakedNodeId(*id as i64),
                    }
                }
            }
        )*
    };
}

staked_id_protobuf!(
    crypto_create_transaction_body,
    crypto_update_transaction_body,
    contract_create_transaction_body,
    contract_update_transaction_body,
    staking_info,
);

/// Staking state of an account or contract.
#[derive(Clone, Debug, PartialEq)]
pub struct StakingInfo {
    pub decline_staking_reward: bool,
    /// Start of the period the pending reward accrues over.
    pub stake_period_start: Option<DateTime<Utc>>,
    pub pending_reward: Hbar,
    /// Total staked to this account or contract by others.
    pub staked_to_me: Hbar,
    pub staked_id: Option<StakedId>,
}

impl FromProtobuf<services::StakingInfo> for StakingInfo {
    fn from_protobuf(pb: services::StakingInfo) -> Result<Self> {
        Ok(Self {
            decline_staking_reward: pb.decline_reward,
            stake_period_start: Option::from_protobuf(pb.stake_period_start)?,
            pending_reward: Hbar::from_tinybars(pb.pending_reward),
            staked_to_me: Hbar::from_tinybars(pb.staked_to_me),
            staked_id: Option::from_protobuf(pb.staked_id)?,
        })
    }
}

impl ToProtobuf for StakingInfo {
    type Protobuf = services::StakingInfo;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::StakingInfo {
            decline_reward: self.decline_staking_reward,
            stake_period_start: self.stake_period_start.as_ref().map(ToProtobuf::to_protobuf),
            pending_reward: self.pending_reward.to_tinybars(),
            staked_to_me: self.staked_to_me.to_tinybars(),
            staked_id: self.staked_id.as_ref().map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staking_info_round_trip() {
        let info = StakingInfo {
            decline_staking_reward: true,
            stake_period_start: DateTime::from_timestamp(1_700_000_000, 0),
            pending_reward: Hbar::new(3),
            staked_to_me: Hbar::from_tinybars(10),
            staked_id: Some(StakedId::NodeId(4)),
        };

        assert_eq!(StakingInfo::from_protobuf(info.to_protobuf()).unwrap(), info);
    }

    #[test]
    fn test_staked_account_converts_per_body() {
        let id = StakedId::AccountId(AccountId::new(0, 0, 7));
        let pb = services::crypto_update_transaction_body::StakedId::from(&id);
        assert_eq!(StakedId::from_protobuf(pb).unwrap(), id);
    }
}
