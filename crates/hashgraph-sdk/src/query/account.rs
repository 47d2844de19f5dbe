use hashgraph_proto::services;
use services::crypto_get_account_balance_query::BalanceSource as BalanceSourceProto;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, AccountInfo, ContractId, LedgerId, Result, TransactionRecord};

/// Get the hbar and token balances of an account or contract.
pub type AccountBalanceQuery = Query<AccountBalanceQueryData>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum BalanceSource {
    Account(AccountId),
    Contract(ContractId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBalanceQueryData {
    source: Option<BalanceSource>,
}

impl AccountBalanceQuery {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        match &self.data().source {
            Some(BalanceSource::Account(id)) => Some(id),
            _ => None,
        }
    }

    /// Ask for an account's balance; clears any contract id.
    pub fn account_id(&mut self, id: AccountId) -> &mut Self {
        self.data_mut().source = Some(BalanceSource::Account(id));
        self
    }

    pub fn get_contract_id(&self) -> Option<ContractId> {
        match &self.data().source {
            Some(BalanceSource::Contract(id)) => Some(*id),
            _ => None,
        }
    }

    /// Ask for a contract's balance; clears any account id.
    pub fn contract_id(&mut self, id: ContractId) -> &mut Self {
        self.data_mut().source = Some(BalanceSource::Contract(id));
        self
    }
}

impl ValidateChecksums for AccountBalanceQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        match &self.source {
            Some(BalanceSource::Account(id)) => id.validate_checksums(ledger_id),
            Some(BalanceSource::Contract(id)) => id.validate_checksums(ledger_id),
            None => Ok(()),
        }
    }
}

impl FromProtobuf<services::CryptoGetAccountBalanceQuery> for AccountBalanceQueryData {
    fn from_protobuf(pb: services::CryptoGetAccountBalanceQuery) -> Result<Self> {
        let source = match pb.balance_source {
            Some(BalanceSourceProto::AccountId(id)) => Some(BalanceSource::Account(AccountId::from_protobuf(id)?)),
            Some(BalanceSourceProto::ContractId(id)) => {
                Some(BalanceSource::Contract(ContractId::from_protobuf(id)?))
            }
            None => None,
        };

        Ok(Self { source })
    }
}

impl ToProtobuf for AccountBalanceQueryData {
    type Protobuf = services::CryptoGetAccountBalanceQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        let balance_source = self.source.as_ref().map(|source| match source {
            BalanceSource::Account(id) => BalanceSourceProto::AccountId(id.to_protobuf()),
            BalanceSource::Contract(id) => BalanceSourceProto::ContractId(id.to_protobuf()),
        });

        services::CryptoGetAccountBalanceQuery { header: None, balance_source }
    }
}

/// Get the current state of an account.
pub type AccountInfoQuery = Query<AccountInfoQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInfoQueryData {
    account_id: Option<AccountId>,
}

impl AccountInfoQuery {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    pub fn account_id(&mut self, id: AccountId) -> &mut Self {
        self.data_mut().account_id = Some(id);
        self
    }
}

impl ValidateChecksums for AccountInfoQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::CryptoGetInfoQuery> for AccountInfoQueryData {
    fn from_protobuf(pb: services::CryptoGetInfoQuery) -> Result<Self> {
        Ok(Self { account_id: Option::from_protobuf(pb.account_id)? })
    }
}

impl ToProtobuf for AccountInfoQueryData {
    type Protobuf = services::CryptoGetInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoGetInfoQuery {
            header: None,
            account_id: self.account_id.as_ref().map(AccountId::to_protobuf),
        }
    }
}

impl FromProtobuf<services::CryptoGetInfoResponse> for AccountInfo {
    fn from_protobuf(pb: services::CryptoGetInfoResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.account_info, "account_info")?)
    }
}

/// Get the records of recent transactions paid for by an account.
pub type AccountRecordsQuery = Query<AccountRecordsQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRecordsQueryData {
    account_id: Option<AccountId>,
}

impl AccountRecordsQuery {
    pub fn get_account_id(&self) -> Option<&AccountId> {
        self.data().account_id.as_ref()
    }

    pub fn account_id(&mut self, id: AccountId) -> &mut Self {
        self.data_mut().account_id = Some(id);
        self
    }
}

impl ValidateChecksums for AccountRecordsQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::CryptoGetAccountRecordsQuery> for AccountRecordsQueryData {
    fn from_protobuf(pb: services::CryptoGetAccountRecordsQuery) -> Result<Self> {
        Ok(Self { account_id: Option::from_protobuf(pb.account_id)? })
    }
}

impl ToProtobuf for AccountRecordsQueryData {
    type Protobuf = services::CryptoGetAccountRecordsQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CryptoGetAccountRecordsQuery {
            header: None,
            account_id: self.account_id.as_ref().map(AccountId::to_protobuf),
        }
    }
}

impl FromProtobuf<services::CryptoGetAccountRecordsResponse> for Vec<TransactionRecord> {
    fn from_protobuf(pb: services::CryptoGetAccountRecordsResponse) -> Result<Self> {
        Vec::from_protobuf(pb.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ok_response_header, QueryData};
    use crate::Hbar;

    #[test]
    fn test_balance_source_is_exclusive() {
        let mut query = AccountBalanceQuery::new();
        query.account_id(AccountId::new(0, 0, 1001)).contract_id(ContractId::new(0, 0, 5005));

        assert_eq!(query.get_account_id(), None);
        assert_eq!(query.get_contract_id(), Some(ContractId::new(0, 0, 5005)));

        let pb = query.data().to_protobuf();
        assert!(matches!(pb.balance_source, Some(BalanceSourceProto::ContractId(_))));
        assert_eq!(AccountBalanceQueryData::from_protobuf(pb).unwrap(), *query.data());
    }

    #[test]
    fn test_balance_checksums_follow_source() {
        let mut query = AccountBalanceQuery::new();
        query.account_id("0.0.123-esxsf".parse().unwrap());

        assert!(query.validate_checksums(&LedgerId::testnet()).is_ok());
        assert!(query.validate_checksums(&LedgerId::mainnet()).is_err());
    }

    #[test]
    fn test_records_response_keeps_order() {
        let record = |memo: &str| services::TransactionRecord {
            receipt: Some(services::TransactionReceipt::default()),
            consensus_timestamp: Some(services::Timestamp { seconds: 1_700_000_000, nanos: 0 }),
            transaction_id: Some(
                crate::TransactionId::generate(AccountId::new(0, 0, 1001)).to_protobuf(),
            ),
            memo: memo.to_owned(),
            transaction_fee: Hbar::new(1).to_tinybars() as u64,
            ..Default::default()
        };

        let response = services::response::Response::CryptoGetAccountRecords(
            services::CryptoGetAccountRecordsResponse {
                header: ok_response_header(),
                account_id: Some(AccountId::new(0, 0, 1001).to_protobuf()),
                records: vec![record("first"), record("second")],
            },
        );

        let records = AccountRecordsQueryData::default().response_from_protobuf(response).unwrap();
        let memos: Vec<_> = records.iter().map(|record| record.transaction_memo.as_str()).collect();
        assert_eq!(memos, ["first", "second"]);
    }
}
