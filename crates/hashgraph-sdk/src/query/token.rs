use hashgraph_proto::services;

use super::Query;
use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{LedgerId, NftId, Result, TokenId, TokenInfo, TokenNftInfo};

/// Get the current state of a token.
pub type TokenInfoQuery = Query<TokenInfoQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenInfoQueryData {
    token_id: Option<TokenId>,
}

impl TokenInfoQuery {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    pub fn token_id(&mut self, id: TokenId) -> &mut Self {
        self.data_mut().token_id = Some(id);
        self
    }
}

impl ValidateChecksums for TokenInfoQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.token_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenGetInfoQuery> for TokenInfoQueryData {
    fn from_protobuf(pb: services::TokenGetInfoQuery) -> Result<Self> {
        Ok(Self { token_id: Option::from_protobuf(pb.token)? })
    }
}

impl ToProtobuf for TokenInfoQueryData {
    type Protobuf = services::TokenGetInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenGetInfoQuery { header: None, token: self.token_id.map(|id| id.to_protobuf()) }
    }
}

impl FromProtobuf<services::TokenGetInfoResponse> for TokenInfo {
    fn from_protobuf(pb: services::TokenGetInfoResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.token_info, "token_info")?)
    }
}

/// Get the owner, metadata and spender of one NFT.
pub type TokenNftInfoQuery = Query<TokenNftInfoQueryData>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenNftInfoQueryData {
    nft_id: Option<NftId>,
}

impl TokenNftInfoQuery {
    pub fn get_nft_id(&self) -> Option<NftId> {
        self.data().nft_id
    }

    pub fn nft_id(&mut self, id: NftId) -> &mut Self {
        self.data_mut().nft_id = Some(id);
        self
    }
}

impl ValidateChecksums for TokenNftInfoQueryData {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.nft_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::TokenGetNftInfoQuery> for TokenNftInfoQueryData {
    fn from_protobuf(pb: services::TokenGetNftInfoQuery) -> Result<Self> {
        Ok(Self { nft_id: Option::from_protobuf(pb.nft_id)? })
    }
}

impl ToProtobuf for TokenNftInfoQueryData {
    type Protobuf = services::TokenGetNftInfoQuery;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::TokenGetNftInfoQuery { header: None, nft_id: self.nft_id.map(|id| id.to_protobuf()) }
    }
}

impl FromProtobuf<services::TokenGetNftInfoResponse> for TokenNftInfo {
    fn from_protobuf(pb: services::TokenGetNftInfoResponse) -> Result<Self> {
        Self::from_protobuf(required(pb.nft, "nft")?)
    }
}
