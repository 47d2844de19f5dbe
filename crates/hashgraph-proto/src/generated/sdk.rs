/// A list of transactions, used to serialize a transaction that spans
/// several nodes and/or chunks as one byte string.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionList {
    #[prost(message, repeated, tag = "1")]
    pub transaction_list: ::prost::alloc::vec::Vec<super::services::Transaction>,
}
