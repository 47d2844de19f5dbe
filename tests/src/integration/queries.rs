//! # Query Round Trips
//!
//! A caller encodes a query, a node answers with a `Response`, and the caller
//! decodes the answer. The node side here is a hand-built protobuf message.

#[cfg(test)]
mod tests {
    use hashgraph_proto::services;
    use hashgraph_sdk::{
        AccountBalanceQuery, AnyQuery, AnyQueryData, AnyQueryResponse, ContractCallQuery, ContractId, Error,
        Hbar, Status, ToProtobuf, TokenId, TransactionReceiptQuery,
    };
    use prost::Message;

    use crate::{account, fixed_transaction_id};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn header(status: Status) -> Option<services::ResponseHeader> {
        Some(services::ResponseHeader { node_transaction_precheck_code: status.code(), ..Default::default() })
    }

    fn balance_response(status: Status) -> Vec<u8> {
        services::Response {
            response: Some(services::response::Response::CryptogetAccountBalance(
                services::CryptoGetAccountBalanceResponse {
                    header: header(status),
                    account_id: Some(account(1001).to_protobuf()),
                    balance: Hbar::new(12).to_tinybars() as u64,
                    token_balances: vec![services::TokenBalance {
                        token_id: Some(TokenId::new(0, 0, 5000).to_protobuf()),
                        balance: 250,
                        decimals: 2,
                    }],
                },
            )),
        }
        .encode_to_vec()
    }

    // =============================================================================
    // ENCODE → ANSWER → DECODE
    // =============================================================================

    #[test]
    fn test_balance_query_round_trip() {
        let mut query = AccountBalanceQuery::new();
        query.account_id(account(1001));

        // node side: decode the request without knowing its kind
        let request = AnyQuery::from_bytes(&query.to_bytes()).unwrap();
        assert_eq!(request.data().kind(), "AccountBalance");
        assert!(matches!(request.data(), AnyQueryData::AccountBalance(_)));

        let balance = query.parse_response_bytes(&balance_response(Status::Ok)).unwrap();
        assert_eq!(balance.account_id, account(1001));
        assert_eq!(balance.hbars, Hbar::new(12));
        assert_eq!(balance.tokens.get(&TokenId::new(0, 0, 5000)), Some(&250));
        assert_eq!(balance.token_decimals.get(&TokenId::new(0, 0, 5000)), Some(&2));
    }

    #[test]
    fn test_erased_query_answers_erased_response() {
        let mut query = AccountBalanceQuery::new();
        query.account_id(account(1001));

        let any = query.into_any();
        let answer = any.parse_response_bytes(&balance_response(Status::Ok)).unwrap();
        assert!(matches!(answer, AnyQueryResponse::AccountBalance(balance) if balance.hbars == Hbar::new(12)));
    }

    #[test]
    fn test_failed_precheck_surfaces_status() {
        let query = AccountBalanceQuery::new();
        let err = query.parse_response_bytes(&balance_response(Status::InvalidSignature)).unwrap_err();
        assert!(matches!(err, Error::QueryPreCheckStatus { status: Status::InvalidSignature }));
    }

    #[test]
    fn test_answer_of_another_kind_is_rejected() {
        let query = TransactionReceiptQuery::new();
        let err = query.parse_response_bytes(&balance_response(Status::Ok)).unwrap_err();
        assert!(matches!(err, Error::FromProtobuf(_)));
    }

    #[test]
    fn test_contract_call_answer() {
        let mut query = ContractCallQuery::new();
        query
            .contract_id(ContractId::new(0, 0, 5005))
            .gas(30_000)
            .function_parameters(hex::decode("6d4ce63c").unwrap())
            .sender_account_id(account(1001));

        let mut word = [0u8; 32];
        word[31] = 42;

        let response = services::Response {
            response: Some(services::response::Response::ContractCallLocal(services::ContractCallLocalResponse {
                header: header(Status::Ok),
                function_result: Some(services::ContractFunctionResult {
                    contract_id: Some(ContractId::new(0, 0, 5005).to_protobuf()),
                    contract_call_result: word.to_vec(),
                    gas_used: 21_000,
                    ..Default::default()
                }),
            })),
        };

        let result = query.parse_response(response).unwrap();
        assert_eq!(result.contract_id, ContractId::new(0, 0, 5005));
        assert_eq!(result.gas_used, 21_000);
        assert_eq!(result.get_u64(0), Some(42));
    }

    #[test]
    fn test_receipt_query_bytes_carry_flags() {
        let mut query = TransactionReceiptQuery::new();
        query.transaction_id(fixed_transaction_id(1001)).include_children(true).include_duplicates(true);

        let decoded = TransactionReceiptQuery::from_bytes(&query.to_bytes()).unwrap();
        assert_eq!(decoded, query);
        assert!(decoded.get_include_children());
        assert_eq!(decoded.get_transaction_id(), Some(&fixed_transaction_id(1001)));
    }
}
