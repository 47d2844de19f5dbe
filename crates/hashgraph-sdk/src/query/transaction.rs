use hashgraph_proto::services;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{LedgerId, Result, TransactionId, TransactionReceipt, TransactionRecord};

/// Get the receipt of a transaction.
pub type TransactionReceiptQuery = Query<TransactionReceiptQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionReceiptQueryData {
    transaction_id: Option<TransactionId>,
    include_children: bool,
    include_duplicates: bool,
}

/// Answer to a receipt query.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionReceiptResponse {
    pub receipt: TransactionReceipt,
    /// Receipts of duplicate submissions, when asked for.
    pub duplicates: Vec<TransactionReceipt>,
    /// Receipts of child transactions, when asked for.
    pub children: Vec<TransactionReceipt>,
}

impl TransactionReceiptQuery {
    pub fn get_transaction_id(&self) -> Option<&TransactionId> {
        self.data().transaction_id.as_ref()
    }

    pub fn transaction_id(&mut self, id: TransactionId) -> &mut Self {
        self.data_mut().transaction_id = Some(id);
        self
    }

    pub fn get_include_children(&self) -> bool {
        self.data().include_children
    }

    pub fn include_children(&mut self, include: bool) -> &mut Self {
        self.data_mut().include_children = include;
        self
    }

    pub fn get_include_duplicates(&self) -> bool {
        self.data().include_duplicates
    }

    pub fn include_duplicates(&mut self, include: bool) -> &mut Self {
        self.data_mut().include_duplicates = include;
        self
    }
}

impl ValidateChecksums for TransactionReceiptQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.transaction_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TransactionGetReceiptQuery> for TransactionReceiptQueryData {
    fn from_protobuf(pb: services::TransactionGetReceiptQuery) -> Result<Self> {
        Ok(Self {
            transaction_id: Option::from_protobuf(pb.transaction_id)?,
            include_children: pb.include_child_receipts,
            include_duplicates: pb.include_duplicates,
        })
    }
}

impl ToProtobuf for TransactionReceiptQueryData {
    type Protobuf = services::TransactionGetReceiptQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TransactionGetReceiptQuery {
            header: None,
            transaction_id: self.transaction_id.as_ref().map(TransactionId::to_protobuf),
            include_duplicates: self.include_duplicates,
            include_child_receipts: self.include_children,
        }
    }
}

impl FromProtobuf<services::TransactionGetReceiptResponse> for TransactionReceiptResponse {
    fn from_protobuf(pb: services::TransactionGetReceiptResponse) -> Result<Self> {
        Ok(Self {
            receipt: TransactionReceipt::from_protobuf(required(pb.receipt, "receipt")?)?,
            duplicates: Vec::from_protobuf(pb.duplicate_transaction_receipts)?,
            children: Vec::from_protobuf(pb.child_transaction_receipts)?,
        })
    }
}

/// Get the record of a transaction.
pub type TransactionRecordQuery = Query<TransactionRecordQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRecordQueryData {
    transaction_id: Option<TransactionId>,
    include_children: bool,
    include_duplicates: bool,
}

/// Answer to a record query.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecordResponse {
    pub record: TransactionRecord,
    pub duplicates: Vec<TransactionRecord>,
    pub children: Vec<TransactionRecord>,
}

impl TransactionRecordQuery {
    pub fn get_transaction_id(&self) -> Option<&TransactionId> {
        self.data().transaction_id.as_ref()
    }

    pub fn transaction_id(&mut self, id: TransactionId) -> &mut Self {
        self.data_mut().transaction_id = Some(id);
        self
    }

    pub fn get_include_children(&self) -> bool {
        self.data().include_children
    }

    pub fn include_children(&mut self, include: bool) -> &mut Self {
        self.data_mut().include_children = include;
        self
    }

    pub fn get_include_duplicates(&self) -> bool {
        self.data().include_duplicates
    }

    pub fn include_duplicates(&mut self, include: bool) -> &mut Self {
        self.data_mut().include_duplicates = include;
        self
    }
}

impl ValidateChecksums for TransactionRecordQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.transaction_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TransactionGetRecordQuery> for TransactionRecordQueryData {
    fn from_protobuf(pb: services::TransactionGetRecordQuery) -> Result<Self> {
        Ok(Self {
            transaction_id: Option::from_protobuf(pb.transaction_id)?,
            include_children: pb.include_child_records,
            include_duplicates: pb.include_duplicates,
        })
    }
}

impl ToProtobuf for TransactionRecordQueryData {
    type Protobuf = services::TransactionGetRecordQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TransactionGetRecordQuery {
            header: None,
            transaction_id: self.transaction_id.as_ref().map(TransactionId::to_protobuf),
            include_duplicates: self.include_duplicates,
            include_child_records: self.include_children,
        }
    }
}

impl FromProtobuf<services::TransactionGetRecordResponse> for TransactionRecordResponse {
    fn from_protobuf(pb: services::TransactionGetRecordResponse) -> Result<Self> {
        Ok(Self {
            record: TransactionRecord::from_protobuf(required(pb.transaction_record, "transaction_record")?)?,
            duplicates: Vec::from_protobuf(pb.duplicate_transaction_records)?,
            children: Vec::from_protobuf(pb.child_transaction_records)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ok_response_header, QueryData};
    use crate::{AccountId, Status};

    #[test]
    fn test_receipt_query_flags_round_trip() {
        let mut query = TransactionReceiptQuery::new();
        query
            .transaction_id(TransactionId::generate(AccountId::new(0, 0, 1001)))
            .include_duplicates(true);

        let pb = query.data().to_protobuf();
        assert!(pb.include_duplicates);
        assert!(!pb.include_child_receipts);
        assert_eq!(TransactionReceiptQueryData::from_protobuf(pb).unwrap(), *query.data());
    }

    #[test]
    fn test_receipt_response_keeps_children() {
        let receipt = |status: Status| services::TransactionReceipt { status: status.code(), ..Default::default() };

        let response = services::response::Response::TransactionGetReceipt(services::TransactionGetReceiptResponse {
            header: ok_response_header(),
            receipt: Some(receipt(Status::Success)),
            duplicate_transaction_receipts: Vec::new(),
            child_transaction_receipts: vec![receipt(Status::Success), receipt(Status::InvalidSignature)],
        });

        let answer = TransactionReceiptQueryData::default().response_from_protobuf(response).unwrap();
        assert_eq!(answer.receipt.status, Status::Success);
        assert!(answer.duplicates.is_empty());
        assert_eq!(answer.children[1].status, Status::InvalidSignature);
    }

    #[test]
    fn test_record_response_requires_record() {
        let response = services::response::Response::TransactionGetRecord(services::TransactionGetRecordResponse {
            header: ok_response_header(),
            ..Default::default()
        });

        assert!(TransactionRecordQueryData::default().response_from_protobuf(response).is_err());
    }
}
