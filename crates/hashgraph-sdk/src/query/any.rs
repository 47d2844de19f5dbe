//! Sum types over every query kind and every answer.

use hashgraph_proto::services;
use services::response::Response;

use super::{mismatched_response, Query, QueryData};
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{Error, LedgerId, Result};

/// A query whose kind is only known at run time.
pub type AnyQuery = Query<AnyQueryData>;

macro_rules! any_query_data {
    ($($name:ident($ty:ty => $answer:ty) = $q_pb:ident / $r_pb:ident,)*) => {
        /// Data of any query kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AnyQueryData {
            $($name($ty),)*
        }

        /// Answer to any query kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AnyQueryResponse {
            $($name($answer),)*
        }

        impl AnyQueryData {
            /// Name of the kind, e.g. `"AccountBalance"`.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$name(_) => stringify!($name),)*
                }
            }
        }

        impl ValidateChecksums for AnyQueryData {
            fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
                match self {
                    $(Self::$name(data) => data.validate_checksums(ledger_id),)*
                }
            }
        }

        impl QueryData for AnyQueryData {
            type Response = AnyQueryResponse;

            fn to_query_protobuf(&self, header: services::QueryHeader) -> services::query::Query {
                match self {
                    $(Self::$name(data) => data.to_query_protobuf(header),)*
                }
            }

            fn response_from_protobuf(&self, response: Response) -> Result<AnyQueryResponse> {
                match self {
                    $(Self::$name(data) => data.response_from_protobuf(response).map(AnyQueryResponse::$name),)*
                }
            }
        }

        impl FromProtobuf<services::query::Query> for AnyQueryData {
            fn from_protobuf(pb: services::query::Query) -> Result<Self> {
                use services::query::Query;

                match pb {
                    $(Query::$q_pb(pb) => Ok(Self::$name(<$ty>::from_protobuf(pb)?)),)*
                }
            }
        }

        $(
            impl QueryData for $ty {
                type Response = $answer;

                fn to_query_protobuf(&self, header: services::QueryHeader) -> services::query::Query {
                    let mut pb = self.to_protobuf();
                    pb.header = Some(header);
                    services::query::Query::$q_pb(pb)
                }

                fn response_from_protobuf(&self, response: Response) -> Result<$answer> {
                    match response {
                        Response::$r_pb(pb) => <$answer>::from_protobuf(pb),
                        _ => Err(mismatched_response(stringify!($r_pb))),
                    }
                }
            }

            impl From<$ty> for AnyQueryData {
                fn from(data: $ty) -> Self {
                    Self::$name(data)
                }
            }

            impl TryFrom<AnyQueryData> for $ty {
                type Error = AnyQueryData;

                fn try_from(data: AnyQueryData) -> std::result::Result<Self, Self::Error> {
                    match data {
                        AnyQueryData::$name(data) => Ok(data),
                        other => Err(other),
                    }
                }
            }

            impl FromAnyQueryData for $ty {
                fn from_any_query_data(data: AnyQueryData) -> std::result::Result<Self, AnyQueryData> {
                    Self::try_from(data)
                }
            }
        )*
    };
}

any_query_data! {
    AccountBalance(crate::AccountBalanceQueryData => crate::AccountBalance)
        = CryptogetAccountBalance / CryptogetAccountBalance,
    AccountInfo(crate::AccountInfoQueryData => crate::AccountInfo) = CryptoGetInfo / CryptoGetInfo,
    AccountRecords(crate::AccountRecordsQueryData => Vec<crate::TransactionRecord>)
        = CryptoGetAccountRecords / CryptoGetAccountRecords,
    TransactionReceipt(crate::TransactionReceiptQueryData => crate::TransactionReceiptResponse)
        = TransactionGetReceipt / TransactionGetReceipt,
    TransactionRecord(crate::TransactionRecordQueryData => crate::TransactionRecordResponse)
        = TransactionGetRecord / TransactionGetRecord,
    TokenInfo(crate::TokenInfoQueryData => crate::TokenInfo) = TokenGetInfo / TokenGetInfo,
    TokenNftInfo(crate::TokenNftInfoQueryData => crate::TokenNftInfo) = TokenGetNftInfo / TokenGetNftInfo,
    TopicInfo(crate::TopicInfoQueryData => crate::TopicInfo) = ConsensusGetTopicInfo / ConsensusGetTopicInfo,
    FileContents(crate::FileContentsQueryData => crate::FileContentsResponse) = FileGetContents / FileGetContents,
    FileInfo(crate::FileInfoQueryData => crate::FileInfo) = FileGetInfo / FileGetInfo,
    ContractInfo(crate::ContractInfoQueryData => crate::ContractInfo) = ContractGetInfo / ContractGetInfo,
    ContractCall(crate::ContractCallQueryData => crate::ContractFunctionResult)
        = ContractCallLocal / ContractCallLocal,
    ContractBytecode(crate::ContractBytecodeQueryData => Vec<u8>)
        = ContractGetBytecode / ContractGetBytecodeResponse,
    ScheduleInfo(crate::ScheduleInfoQueryData => crate::ScheduleInfo) = ScheduleGetInfo / ScheduleGetInfo,
    NetworkVersionInfo(crate::NetworkVersionInfoQueryData => crate::NetworkVersionInfo)
        = NetworkGetVersionInfo / NetworkGetVersionInfo,
}

impl<D: QueryData> Query<D> {
    /// Erase the kind.
    pub fn into_any(self) -> AnyQuery {
        Query::from_data(self.into_data().into())
    }
}

/// Kinds recoverable from [`AnyQueryData`]; every kind and the sum type itself.
pub trait FromAnyQueryData: Sized {
    /// Returns the data unchanged when it is of another kind.
    fn from_any_query_data(data: AnyQueryData) -> std::result::Result<Self, AnyQueryData>;
}

impl FromAnyQueryData for AnyQueryData {
    fn from_any_query_data(data: AnyQueryData) -> std::result::Result<Self, AnyQueryData> {
        Ok(data)
    }
}

impl AnyQuery {
    /// Recover the concrete kind; returns `self` unchanged on a mismatch.
    pub fn downcast<D>(self) -> std::result::Result<Query<D>, Self>
    where
        D: TryFrom<AnyQueryData, Error = AnyQueryData>,
    {
        D::try_from(self.into_data()).map(Query::from_data).map_err(Query::from_data)
    }
}

impl FromProtobuf<services::Query> for AnyQuery {
    fn from_protobuf(pb: services::Query) -> Result<Self> {
        Ok(Query::from_data(AnyQueryData::from_protobuf(required(pb.query, "query")?)?))
    }
}

impl<D> Query<D>
where
    D: QueryData + FromAnyQueryData,
{
    /// Decode bytes produced by [`Query::to_bytes`] as kind `D`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pb = crate::protobuf::decode::<services::Query>(bytes)?;
        let data = AnyQueryData::from_protobuf(required(pb.query, "query")?)?;
        let kind = data.kind();

        D::from_any_query_data(data).map(Query::from_data).map_err(|_| {
            Error::from_protobuf(format!("expected {} query bytes, got {kind}", std::any::type_name::<D>()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AccountId, ContractCallQuery, ContractCallQueryData, ContractId, FileContentsQuery, NftId, TokenId,
        TokenNftInfoQuery, TransactionId, TransactionReceiptQuery,
    };

    #[test]
    fn test_any_query_round_trips_every_field() {
        let mut call = ContractCallQuery::new();
        call.contract_id(ContractId::new(0, 0, 5005))
            .gas(100_000)
            .function_parameters(vec![0xde, 0xad, 0xbe, 0xef])
            .sender_account_id(AccountId::new(0, 0, 1001));

        let any = call.clone().into_any();
        let decoded = AnyQuery::from_protobuf(any.to_protobuf()).unwrap();
        assert_eq!(decoded, any);
        assert_eq!(decoded.data().kind(), "ContractCall");

        let back = decoded.downcast::<ContractCallQueryData>().unwrap();
        assert_eq!(back, call);
    }

    #[test]
    fn test_typed_from_bytes_rejects_other_kind() {
        let mut query = FileContentsQuery::new();
        query.file_id(crate::FileId::new(0, 0, 150));

        let err = TransactionReceiptQuery::from_bytes(&query.to_bytes()).unwrap_err();
        assert!(err.to_string().contains("FileContents"));
    }

    #[test]
    fn test_bytes_round_trip_keeps_kind() {
        let mut receipt = TransactionReceiptQuery::new();
        receipt
            .transaction_id(TransactionId::generate(AccountId::new(0, 0, 1001)))
            .include_children(true);
        assert_eq!(TransactionReceiptQuery::from_bytes(&receipt.to_bytes()).unwrap(), receipt);

        let mut nft = TokenNftInfoQuery::new();
        nft.nft_id(NftId::new(TokenId::new(0, 0, 5000), 7));
        assert_eq!(TokenNftInfoQuery::from_bytes(&nft.to_bytes()).unwrap(), nft);
    }

    #[test]
    fn test_missing_oneof_fails() {
        assert!(AnyQuery::from_protobuf(services::Query { query: None }).is_err());
    }
}
