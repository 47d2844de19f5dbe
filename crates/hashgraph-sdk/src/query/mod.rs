//! # Queries
//!
//! A [`Query`] wraps the kind-specific data of one request. It encodes to a
//! `Query` message with an `ANSWER_ONLY` header and decodes the matching
//! `Response` into the typed value the kind answers with. Sending the request
//! is left to the transport layer.

mod account;
mod any;
mod contract;
mod file;
mod network;
mod schedule;
mod token;
mod topic;
mod transaction;

use std::fmt;

use hashgraph_proto::services;
use services::response::Response;
use tracing::debug;

pub use account::{
    AccountBalanceQuery, AccountBalanceQueryData, AccountInfoQuery, AccountInfoQueryData,
    AccountRecordsQuery, AccountRecordsQueryData,
};
pub use any::{AnyQuery, AnyQueryData, AnyQueryResponse, FromAnyQueryData};
pub use contract::{
    ContractBytecodeQuery, ContractBytecodeQueryData, ContractCallQuery, ContractCallQueryData,
    ContractInfoQuery, ContractInfoQueryData,
};
pub use file::{FileContentsQuery, FileContentsQueryData, FileInfoQuery, FileInfoQueryData};
pub use network::{NetworkVersionInfoQuery, NetworkVersionInfoQueryData};
pub use schedule::{ScheduleInfoQuery, ScheduleInfoQueryData};
pub use token::{TokenInfoQuery, TokenInfoQueryData, TokenNftInfoQuery, TokenNftInfoQueryData};
pub use topic::{TopicInfoQuery, TopicInfoQueryData};
pub use transaction::{
    TransactionReceiptQuery, TransactionReceiptQueryData, TransactionReceiptResponse,
    TransactionRecordQuery, TransactionRecordQueryData, TransactionRecordResponse,
};

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, ToProtobuf};
use crate::{Error, LedgerId, Result, Status};

/// Kind-specific half of a query.
pub trait QueryData: Clone + fmt::Debug + Into<AnyQueryData> + ValidateChecksums {
    /// Value the kind answers with.
    type Response;

    /// Encode the request body under `header`.
    fn to_query_protobuf(&self, header: services::QueryHeader) -> services::query::Query;

    /// Decode the answer; fails when `response` is of another kind.
    fn response_from_protobuf(&self, response: Response) -> Result<Self::Response>;
}

/// A query of kind `D`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query<D> {
    data: D,
}

impl<D: Default> Query<D> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> Query<D> {
    pub(crate) fn from_data(data: D) -> Self {
        Self { data }
    }

    /// Kind-specific data.
    pub fn data(&self) -> &D {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }
}

impl<D: QueryData> Query<D> {
    pub fn to_bytes(&self) -> Vec<u8> {
        prost::Message::encode_to_vec(&self.to_protobuf())
    }

    /// Validate every embedded entity id against `ledger_id`.
    pub fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.data.validate_checksums(ledger_id)
    }

    /// Decode `response` into the value this query answers with.
    ///
    /// A precheck code other than `OK` fails with [`Error::QueryPreCheckStatus`].
    pub fn parse_response(&self, response: services::Response) -> Result<D::Response> {
        let response = required(response.response, "response")?;

        let status = precheck_status(&response)?;
        if status != Status::Ok {
            debug!(status = ?status, "query failed precheck");
            return Err(Error::QueryPreCheckStatus { status });
        }

        self.data.response_from_protobuf(response)
    }

    /// Decode an encoded `Response` message.
    pub fn parse_response_bytes(&self, bytes: &[u8]) -> Result<D::Response> {
        self.parse_response(crate::protobuf::decode::<services::Response>(bytes)?)
    }
}

impl<D: QueryData> ToProtobuf for Query<D> {
    type Protobuf = services::Query;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::Query { query: Some(self.data.to_query_protobuf(answer_only_header())) }
    }
}

/// Header for a query that asks for the answer only, without payment.
pub(crate) fn answer_only_header() -> services::QueryHeader {
    services::QueryHeader { payment: None, response_type: services::ResponseType::AnswerOnly as i32 }
}

fn precheck_status(response: &Response) -> Result<Status> {
    let header = match response {
        Response::ContractCallLocal(pb) => pb.header.as_ref(),
        Response::ContractGetInfo(pb) => pb.header.as_ref(),
        Response::ContractGetBytecodeResponse(pb) => pb.header.as_ref(),
        Response::CryptogetAccountBalance(pb) => pb.header.as_ref(),
        Response::CryptoGetAccountRecords(pb) => pb.header.as_ref(),
        Response::CryptoGetInfo(pb) => pb.header.as_ref(),
        Response::FileGetContents(pb) => pb.header.as_ref(),
        Response::FileGetInfo(pb) => pb.header.as_ref(),
        Response::TransactionGetReceipt(pb) => pb.header.as_ref(),
        Response::TransactionGetRecord(pb) => pb.header.as_ref(),
        Response::ConsensusGetTopicInfo(pb) => pb.header.as_ref(),
        Response::NetworkGetVersionInfo(pb) => pb.header.as_ref(),
        Response::TokenGetInfo(pb) => pb.header.as_ref(),
        Response::ScheduleGetInfo(pb) => pb.header.as_ref(),
        Response::TokenGetNftInfo(pb) => pb.header.as_ref(),
    };

    let header = header.ok_or_else(|| Error::from_protobuf("unexpected missing `header`"))?;
    Ok(Status::from_code(header.node_transaction_precheck_code))
}

/// Error for a response whose kind does not match the query.
pub(crate) fn mismatched_response(expected: &'static str) -> Error {
    Error::from_protobuf(format!("expected a `{expected}` response"))
}

/// Header of a successful answer, for building responses in tests.
#[cfg(test)]
pub(crate) fn ok_response_header() -> Option<services::ResponseHeader> {
    Some(services::ResponseHeader {
        node_transaction_precheck_code: Status::Ok.code(),
        response_type: services::ResponseType::AnswerOnly as i32,
        cost: 0,
        state_proof: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountId, Hbar};

    fn balance_response(code: i32) -> services::Response {
        services::Response {
            response: Some(Response::CryptogetAccountBalance(services::CryptoGetAccountBalanceResponse {
                header: Some(services::ResponseHeader {
                    node_transaction_precheck_code: code,
                    ..Default::default()
                }),
                account_id: Some(AccountId::new(0, 0, 1001).to_protobuf()),
                balance: 250,
                token_balances: Vec::new(),
            })),
        }
    }

    #[test]
    fn test_header_is_answer_only() {
        let mut query = AccountBalanceQuery::new();
        query.account_id(AccountId::new(0, 0, 1001));

        let Some(services::query::Query::CryptogetAccountBalance(pb)) = query.to_protobuf().query else {
            panic!("wrong query kind");
        };
        let header = pb.header.unwrap();
        assert_eq!(header.response_type, services::ResponseType::AnswerOnly as i32);
        assert!(header.payment.is_none());
    }

    #[test]
    fn test_parse_ok_response() {
        let query = AccountBalanceQuery::new();
        let balance = query.parse_response(balance_response(Status::Ok.code())).unwrap();
        assert_eq!(balance.hbars, Hbar::from_tinybars(250));
    }

    #[test]
    fn test_non_ok_precheck_surfaces_status() {
        let query = AccountBalanceQuery::new();
        let err = query.parse_response(balance_response(Status::InvalidSignature.code())).unwrap_err();
        assert!(matches!(err, Error::QueryPreCheckStatus { status: Status::InvalidSignature }));
    }

    #[test]
    fn test_mismatched_response_kind_fails() {
        let query = AccountInfoQuery::new();
        let err = query.parse_response(balance_response(Status::Ok.code())).unwrap_err();
        assert!(matches!(err, Error::FromProtobuf(_)));
    }

    #[test]
    fn test_missing_response_fails() {
        let query = AccountBalanceQuery::new();
        assert!(query.parse_response(services::Response { response: None }).is_err());
    }
}
