//! # Tokens
//!
//! Token ids, NFT ids, custom fees, every token transaction kind and the
//! token info values answered by queries.

mod account_status;
mod custom_fee;
mod nft_id;
mod pending_airdrop;
mod token_airdrop;
mod token_association;
mod token_burn;
mod token_create;
mod token_fee_schedule_update;
mod token_id;
mod token_info;
mod token_lifecycle;
mod token_mint;
mod token_reject;
mod token_type;
mod token_update;
mod token_update_nfts;

pub use account_status::{
    TokenFreezeTransaction, TokenFreezeTransactionData, TokenGrantKycTransaction,
    TokenGrantKycTransactionData, TokenRevokeKycTransaction, TokenRevokeKycTransactionData,
    TokenUnfreezeTransaction, TokenUnfreezeTransactionData,
};
pub use custom_fee::{
    AssessedCustomFee, CustomFee, CustomFeeLimit, Fee, FeeAssessmentMethod, FixedCustomFee, FixedFee,
    FractionalFee, RoyaltyFee,
};
pub use nft_id::NftId;
pub use pending_airdrop::{
    PendingAirdropId, PendingAirdropRecord, PendingAirdropToken, TokenCancelAirdropTransaction,
    TokenCancelAirdropTransactionData, TokenClaimAirdropTransaction, TokenClaimAirdropTransactionData,
};
pub use token_airdrop::{TokenAirdropTransaction, TokenAirdropTransactionData};
pub use token_association::{
    TokenAssociateTransaction, TokenAssociateTransactionData, TokenAssociation, TokenDissociateTransaction,
    TokenDissociateTransactionData,
};
pub use token_burn::{TokenBurnTransaction, TokenBurnTransactionData, TokenWipeTransaction, TokenWipeTransactionData};
pub use token_create::{TokenCreateTransaction, TokenCreateTransactionData};
pub use token_fee_schedule_update::{TokenFeeScheduleUpdateTransaction, TokenFeeScheduleUpdateTransactionData};
pub use token_id::TokenId;
pub use token_info::{TokenInfo, TokenNftInfo, TokenRelationship};
pub use token_lifecycle::{
    TokenDeleteTransaction, TokenDeleteTransactionData, TokenPauseTransaction, TokenPauseTransactionData,
    TokenUnpauseTransaction, TokenUnpauseTransactionData,
};
pub use token_mint::{TokenMintTransaction, TokenMintTransactionData};
pub use token_reject::{TokenReference, TokenRejectTransaction, TokenRejectTransactionData};
pub use token_type::{TokenKeyValidation, TokenSupplyType, TokenType};
pub use token_update::{TokenUpdateTransaction, TokenUpdateTransactionData};
pub use token_update_nfts::{TokenUpdateNftsTransaction, TokenUpdateNftsTransactionData};
