use chrono::{DateTime, Utc};
use hashgraph_crypto::PublicKey;
use hashgraph_proto::services;
use services::transaction_record::{Body, Entropy};

use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::transfer::{token_transfers_from_protobuf, token_transfers_to_protobuf};
use crate::{
    AssessedCustomFee, ContractFunctionResult, EvmAddress, Hbar, Key, PendingAirdropRecord, Result,
    ScheduleId, TokenAssociation, TokenNftTransfer, TokenTransfer, TransactionId, TransactionReceipt,
    Transfer,
};

/// Contract output attached to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractResult {
    Call(ContractFunctionResult),
    Create(ContractFunctionResult),
}

impl ContractResult {
    pub fn result(&self) -> &ContractFunctionResult {
        match self {
            Self::Call(result) | Self::Create(result) => result,
        }
    }
}

/// Pseudo-random output of a PRNG transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrngOutput {
    Bytes(Vec<u8>),
    Number(i32),
}

/// Full result of a transaction: the receipt plus everything it moved and produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub receipt: TransactionReceipt,
    /// SHA-384 of the signed transaction.
    pub transaction_hash: Vec<u8>,
    pub consensus_timestamp: DateTime<Utc>,
    pub transaction_id: TransactionId,
    pub transaction_memo: String,
    pub transaction_fee: Hbar,
    pub contract_result: Option<ContractResult>,
    pub transfers: Vec<Transfer>,
    pub token_transfers: Vec<TokenTransfer>,
    pub nft_transfers: Vec<TokenNftTransfer>,
    /// The schedule that triggered this transaction, if any.
    pub schedule_ref: Option<ScheduleId>,
    pub assessed_custom_fees: Vec<AssessedCustomFee>,
    pub automatic_token_associations: Vec<TokenAssociation>,
    /// Set on child records.
    pub parent_consensus_timestamp: Option<DateTime<Utc>>,
    pub alias_key: Option<PublicKey>,
    pub ethereum_hash: Vec<u8>,
    pub paid_staking_rewards: Vec<Transfer>,
    pub prng_output: Option<PrngOutput>,
    pub evm_address: Option<EvmAddress>,
    pub pending_airdrop_records: Vec<PendingAirdropRecord>,
}

impl TransactionRecord {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_protobuf(crate::protobuf::decode::<services::TransactionRecord>(bytes)?)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }
}

impl FromProtobuf<services::TransactionRecord> for TransactionRecord {
    fn from_protobuf(pb: services::TransactionRecord) -> Result<Self> {
        let (token_transfers, nft_transfers) = token_transfers_from_protobuf(pb.token_transfer_lists)?;

        let contract_result = match pb.body {
            Some(Body::ContractCallResult(result)) => {
                Some(ContractResult::Call(ContractFunctionResult::from_protobuf(result)?))
            }
            Some(Body::ContractCreateResult(result)) => {
                Some(ContractResult::Create(ContractFunctionResult::from_protobuf(result)?))
            }
            None => None,
        };

        let prng_output = pb.entropy.map(|entropy| match entropy {
            Entropy::PrngBytes(bytes) => PrngOutput::Bytes(bytes),
            Entropy::PrngNumber(number) => PrngOutput::Number(number),
        });

        // aliases that are not keys (EVM addresses) are dropped
        let alias_key = match pb.alias.is_empty() {
            true => None,
            false => Key::from_bytes(&pb.alias).ok().and_then(|key| key.as_public_key().cloned()),
        };

        let evm_address = match pb.evm_address.is_empty() {
            true => None,
            false => Some(EvmAddress::from_bytes(&pb.evm_address)?),
        };

        Ok(Self {
            receipt: TransactionReceipt::from_protobuf(required(pb.receipt, "receipt")?)?,
            transaction_hash: pb.transaction_hash,
            consensus_timestamp: DateTime::from_protobuf(required(pb.consensus_timestamp, "consensus_timestamp")?)?,
            transaction_id: TransactionId::from_protobuf(required(pb.transaction_id, "transaction_id")?)?,
            transaction_memo: pb.memo,
            transaction_fee: Hbar::from_tinybars(pb.transaction_fee as i64),
            contract_result,
            transfers: match pb.transfer_list {
                Some(list) => Vec::from_protobuf(list.account_amounts)?,
                None => Vec::new(),
            },
            token_transfers,
            nft_transfers,
            schedule_ref: Option::from_protobuf(pb.schedule_ref)?,
            assessed_custom_fees: Vec::from_protobuf(pb.assessed_custom_fees)?,
            automatic_token_associations: Vec::from_protobuf(pb.automatic_token_associations)?,
            parent_consensus_timestamp: Option::from_protobuf(pb.parent_consensus_timestamp)?,
            alias_key,
            ethereum_hash: pb.ethereum_hash,
            paid_staking_rewards: Vec::from_protobuf(pb.paid_staking_rewards)?,
            prng_output,
            evm_address,
            pending_airdrop_records: Vec::from_protobuf(pb.new_pending_airdrops)?,
        })
    }
}

impl ToProtobuf for TransactionRecord {
    type Protobuf = services::TransactionRecord;

    fn to_protobuf(&self) -> Self::Protobuf {
        let body = self.contract_result.as_ref().map(|result| match result {
            ContractResult::Call(result) => Body::ContractCallResult(result.to_protobuf()),
            ContractResult::Create(result) => Body::ContractCreateResult(result.to_protobuf()),
        });

        let entropy = self.prng_output.as_ref().map(|output| match output {
            PrngOutput::Bytes(bytes) => Entropy::PrngBytes(bytes.clone()),
            PrngOutput::Number(number) => Entropy::PrngNumber(*number),
        });

        let transfer_list = (!self.transfers.is_empty())
            .then(|| services::TransferList { account_amounts: self.transfers.to_protobuf() });

        services::TransactionRecord {
            receipt: Some(self.receipt.to_protobuf()),
            transaction_hash: self.transaction_hash.clone(),
            consensus_timestamp: Some(self.consensus_timestamp.to_protobuf()),
            transaction_id: Some(self.transaction_id.to_protobuf()),
            memo: self.transaction_memo.clone(),
            transaction_fee: self.transaction_fee.to_tinybars() as u64,
            transfer_list,
            token_transfer_lists: token_transfers_to_protobuf(&self.token_transfers, &self.nft_transfers),
            schedule_ref: self.schedule_ref.map(|id| id.to_protobuf()),
            assessed_custom_fees: self.assessed_custom_fees.to_protobuf(),
            automatic_token_associations: self.automatic_token_associations.to_protobuf(),
            parent_consensus_timestamp: self.parent_consensus_timestamp.as_ref().map(DateTime::to_protobuf),
            alias: self.alias_key.as_ref().map(|key| Key::Single(key.clone()).to_bytes()).unwrap_or_default(),
            ethereum_hash: self.ethereum_hash.clone(),
            paid_staking_rewards: self.paid_staking_rewards.to_protobuf(),
            evm_address: self.evm_address.map(|address| address.to_bytes().to_vec()).unwrap_or_default(),
            new_pending_airdrops: self.pending_airdrop_records.to_protobuf(),
            body,
            entropy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountId, ContractId, Status, TokenId};

    fn receipt() -> TransactionReceipt {
        TransactionReceipt::from_protobuf(services::TransactionReceipt {
            status: Status::Success.code(),
            ..Default::default()
        })
        .unwrap()
    }

    fn record() -> TransactionRecord {
        let payer = AccountId::new(0, 0, 1001);
        let token = TokenId::new(0, 0, 5000);

        TransactionRecord {
            receipt: receipt(),
            transaction_hash: vec![0x11; 48],
            consensus_timestamp: DateTime::from_timestamp(1_700_000_000, 123).unwrap(),
            transaction_id: TransactionId::new(payer.clone(), DateTime::from_timestamp(1_699_999_990, 0).unwrap()),
            transaction_memo: "airdrop".to_owned(),
            transaction_fee: Hbar::from_tinybars(84_000),
            contract_result: None,
            transfers: vec![
                Transfer {
                    account_id: payer.clone(),
                    amount: Hbar::from_tinybars(-84_000),
                    is_approval: false,
                    hook_call: None,
                },
                Transfer {
                    account_id: AccountId::new(0, 0, 3),
                    amount: Hbar::from_tinybars(84_000),
                    is_approval: false,
                    hook_call: None,
                },
            ],
            token_transfers: vec![TokenTransfer {
                token_id: token,
                account_id: payer.clone(),
                amount: -10,
                expected_decimals: None,
                is_approval: false,
            }],
            nft_transfers: vec![TokenNftTransfer {
                token_id: token,
                sender: payer.clone(),
                receiver: AccountId::new(0, 0, 1002),
                serial: 1,
                is_approval: false,
            }],
            schedule_ref: None,
            assessed_custom_fees: Vec::new(),
            automatic_token_associations: vec![TokenAssociation {
                token_id: token,
                account_id: AccountId::new(0, 0, 1002),
            }],
            parent_consensus_timestamp: None,
            alias_key: None,
            ethereum_hash: Vec::new(),
            paid_staking_rewards: Vec::new(),
            prng_output: Some(PrngOutput::Number(42)),
            evm_address: None,
            pending_airdrop_records: Vec::new(),
        }
    }

    #[test]
    fn test_round_trip_through_bytes() {
        let record = record();
        assert_eq!(TransactionRecord::from_bytes(&record.to_bytes()).unwrap(), record);
    }

    #[test]
    fn test_contract_create_result_keeps_variant() {
        let mut record = record();
        record.prng_output = None;
        record.contract_result = Some(ContractResult::Create(ContractFunctionResult {
            contract_id: ContractId::new(0, 0, 6000),
            evm_address: None,
            bytes: Vec::new(),
            error_message: Some("reverted".to_owned()),
            bloom: Vec::new(),
            gas_used: 50_000,
            logs: Vec::new(),
            gas: 100_000,
            hbar_amount: Hbar::ZERO,
            contract_function_parameters_bytes: Vec::new(),
            sender_account_id: None,
            signer_nonce: Some(1),
        }));

        let pb = record.to_protobuf();
        assert!(matches!(pb.body, Some(Body::ContractCreateResult(_))));
        assert!(pb.entropy.is_none());

        let decoded = TransactionRecord::from_protobuf(pb).unwrap();
        assert_eq!(decoded.contract_result.as_ref().map(|result| result.result().gas_used), Some(50_000));
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_missing_receipt_fails() {
        let mut pb = record().to_protobuf();
        pb.receipt = None;
        assert!(TransactionRecord::from_protobuf(pb).is_err());
    }
}
