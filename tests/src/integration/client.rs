//! # Client Configuration
//!
//! Clients built from files and from the address book, and the checksum
//! strings they produce for entity ids.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use hashgraph_sdk::{
        AccountId, Client, ClientConfig, Error, FileId, Hbar, LedgerId, NetworkConfig, OperatorConfig,
        PrivateKey, TokenId, TransferTransaction,
    };
    use tempfile::NamedTempFile;

    use crate::account;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // =============================================================================
    // CONFIG FILES
    // =============================================================================

    #[test]
    fn test_client_from_config_file() {
        let key = PrivateKey::generate_ecdsa();
        let config = ClientConfig {
            network: NetworkConfig::Named("previewnet".to_owned()),
            operator: Some(OperatorConfig {
                account_id: "0.0.1001".to_owned(),
                private_key: key.to_string_der().as_str().to_owned(),
            }),
            request_timeout: Some(30),
            grpc_deadline: Some(3),
            ..Default::default()
        };

        let file = write_config(&serde_json::to_string_pretty(&config).unwrap());
        let client = Client::from_config_file(file.path()).unwrap();

        assert_eq!(client.ledger_id(), Some(LedgerId::previewnet()));
        assert_eq!(client.operator_account_id(), Some(account(1001)));
        assert_eq!(client.operator_public_key(), Some(key.public_key()));
        assert_eq!(client.request_timeout(), Duration::from_secs(30));
        assert_eq!(client.grpc_deadline(), Duration::from_secs(3));
    }

    #[test]
    fn test_missing_config_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Client::from_config_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_config_file_is_a_config_error() {
        let file = write_config("{ network: ");
        assert!(matches!(Client::from_config_file(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_address_book_with_bad_account_is_rejected() {
        let file = write_config(r#"{ "network": { "127.0.0.1:50211": "three" } }"#);
        assert!(Client::from_config_file(file.path()).is_err());
    }

    // =============================================================================
    // CHECKSUMS THROUGH THE CLIENT
    // =============================================================================

    #[test]
    fn test_checksum_string_validates_on_its_own_network() {
        let testnet = Client::for_testnet();
        let mainnet = Client::for_mainnet();

        let text = account(123).to_string_with_checksum(&testnet).unwrap();
        assert_eq!(text, "0.0.123-esxsf");

        let parsed: AccountId = text.parse().unwrap();
        assert_eq!(parsed, account(123));
        parsed.validate_checksum(&testnet).unwrap();
        assert!(matches!(parsed.validate_checksum(&mainnet), Err(Error::BadEntityId { .. })));
    }

    #[test]
    fn test_checksums_differ_across_networks() {
        let token = TokenId::new(0, 0, 5000);
        let on_mainnet = token.to_string_with_checksum(&Client::for_mainnet()).unwrap();
        let on_testnet = token.to_string_with_checksum(&Client::for_testnet()).unwrap();

        assert_ne!(on_mainnet, on_testnet);
        assert!(on_mainnet.starts_with("0.0.5000-"));
    }

    #[test]
    fn test_custom_network_needs_a_ledger_for_checksums() {
        let (client, _) = crate::local_client();
        let file = FileId::new(0, 0, 150);

        assert!(matches!(file.to_string_with_checksum(&client), Err(Error::CannotPerformChecksumValidation)));

        client.set_ledger_id(Some(LedgerId::testnet()));
        let text = file.to_string_with_checksum(&client).unwrap();
        text.parse::<FileId>().unwrap().validate_checksum(&client).unwrap();
    }

    #[test]
    fn test_auto_validation_rejects_foreign_checksum_at_freeze() {
        let (client, _) = crate::local_client();
        client.set_ledger_id(Some(LedgerId::mainnet()));
        client.set_auto_validate_checksums(true);

        let foreign = account(123).to_string_with_checksum(&Client::for_testnet()).unwrap();

        let mut transaction = TransferTransaction::new();
        transaction
            .hbar_transfer(foreign.parse().unwrap(), Hbar::new(-1))
            .unwrap()
            .hbar_transfer(account(1002), Hbar::new(1))
            .unwrap();

        assert!(matches!(transaction.freeze_with(&client), Err(Error::BadEntityId { .. })));
    }
}
