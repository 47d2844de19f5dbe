use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{FromProtobuf, ToProtobuf};
use crate::transaction::{Transaction, TransactionData};
use crate::{CustomFee, LedgerId, Result, TokenId};

/// Replace a token's custom fees. An empty list removes them all.
pub type TokenFeeScheduleUpdateTransaction = Transaction<TokenFeeScheduleUpdateTransactionData>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFeeScheduleUpdateTransactionData {
    token_id: Option<TokenId>,
    custom_fees: Vec<CustomFee>,
}

impl TokenFeeScheduleUpdateTransaction {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    pub fn token_id(&mut self, id: TokenId) -> Result<&mut Self> {
        self.data_mut()?.token_id = Some(id);
        Ok(self)
    }

    pub fn get_custom_fees(&self) -> &[CustomFee] {
        &self.data().custom_fees
    }

    pub fn custom_fees(&mut self, fees: impl IntoIterator<Item = CustomFee>) -> Result<&mut Self> {
        self.data_mut()?.custom_fees = fees.into_iter().collect();
        Ok(self)
    }
}

impl TransactionData for TokenFeeScheduleUpdateTransactionData {}

impl ValidateChecksums for TokenFeeScheduleUpdateTransactionData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)?;
        self.custom_fees.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenFeeScheduleUpdateTransactionBody> for TokenFeeScheduleUpdateTransactionData {
    fn from_protobuf(pb: services::TokenFeeScheduleUpdateTransactionBody) -> Result<Self> {
        Ok(Self {
            token_id: Option::from_protobuf(pb.token_id)?,
            custom_fees: Vec::from_protobuf(pb.custom_fees)?,
        })
    }
}

impl ToProtobuf for TokenFeeScheduleUpdateTransactionData {
    type Protobuf = services::TokenFeeScheduleUpdateTransactionBody;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenFeeScheduleUpdateTransactionBody {
            token_id: self.token_id.map(|id| id.to_protobuf()),
            custom_fees: self.custom_fees.to_protobuf(),
        }
    }
}
