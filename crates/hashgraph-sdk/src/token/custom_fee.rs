//! Custom fees charged on token transfers and topic submissions.

use hashgraph_proto::services;

use crate::entity_id::ValidateChecksums;
use crate::protobuf::{required, FromProtobuf, ToProtobuf};
use crate::{AccountId, Hbar, LedgerId, Result, TokenId};

/// A fixed fee, in hbar when `denominating_token_id` is unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedFee {
    pub amount: u64,
    pub denominating_token_id: Option<TokenId>,
}

impl FixedFee {
    pub fn hbar(amount: Hbar) -> Self {
        Self { amount: amount.to_tinybars() as u64, denominating_token_id: None }
    }

    pub fn token(amount: u64, token_id: TokenId) -> Self {
        Self { amount, denominating_token_id: Some(token_id) }
    }
}

impl ValidateChecksums for FixedFee {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.denominating_token_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::FixedFee> for FixedFee {
    fn from_protobuf(pb: services::FixedFee) -> Result<Self> {
        Ok(Self {
            amount: pb.amount as u64,
            denominating_token_id: Option::from_protobuf(pb.denominating_token_id)?,
        })
    }
}

impl ToProtobuf for FixedFee {
    type Protobuf = services::FixedFee;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FixedFee {
            amount: self.amount as i64,
            denominating_token_id: self.denominating_token_id.map(|id| id.to_protobuf()),
        }
    }
}

/// Who bears a fractional fee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FeeAssessmentMethod {
    /// Taken out of the transferred amount.
    #[default]
    Inclusive,
    /// Charged to the sender on top of the transferred amount.
    Exclusive,
}

/// A fraction of each transferred unit, bounded by a minimum and maximum.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FractionalFee {
    pub numerator: u64,
    pub denominator: u64,
    pub minimum_amount: u64,
    /// Zero means no upper bound.
    pub maximum_amount: u64,
    pub assessment_method: FeeAssessmentMethod,
}

/// A fraction of the value exchanged for an NFT, with a fallback when no value changes hands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoyaltyFee {
    pub numerator: u64,
    pub denominator: u64,
    pub fallback_fee: Option<FixedFee>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fee {
    Fixed(FixedFee),
    Fractional(FractionalFee),
    Royalty(RoyaltyFee),
}

/// A fee attached to a token and paid to `fee_collector_account_id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomFee {
    pub fee: Fee,
    pub fee_collector_account_id: Option<AccountId>,
    pub all_collectors_are_exempt: bool,
}

impl CustomFee {
    pub fn new(fee: Fee, fee_collector_account_id: AccountId) -> Self {
        Self { fee, fee_collector_account_id: Some(fee_collector_account_id), all_collectors_are_exempt: false }
    }
}

impl ValidateChecksums for CustomFee {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.fee_collector_account_id.validate_checksums(ledger_id)?;
        match &self.fee {
            Fee::Fixed(fee) => fee.validate_checksums(ledger_id),
            Fee::Royalty(fee) => fee.fallback_fee.validate_checksums(ledger_id),
            Fee::Fractional(_) => Ok(()),
        }
    }
}

fn fraction(pb: Option<services::Fraction>) -> (u64, u64) {
    let fraction = pb.unwrap_or_default();
    (fraction.numerator as u64, fraction.denominator as u64)
}

fn to_fraction(numerator: u64, denominator: u64) -> services::Fraction {
    services::Fraction { numerator: numerator as i64, denominator: denominator as i64 }
}

impl FromProtobuf<services::CustomFee> for CustomFee {
    fn from_protobuf(pb: services::CustomFee) -> Result<Self> {
        use services::custom_fee::Fee as Pb;

        let fee = match required(pb.fee, "fee")? {
            Pb::FixedFee(fee) => Fee::Fixed(FixedFee::from_protobuf(fee)?),
            Pb::FractionalFee(fee) => {
                let (numerator, denominator) = fraction(fee.fractional_amount);
                Fee::Fractional(FractionalFee {
                    numerator,
                    denominator,
                    minimum_amount: fee.minimum_amount as u64,
                    maximum_amount: fee.maximum_amount as u64,
                    assessment_method: match fee.net_of_transfers {
                        true => FeeAssessmentMethod::Exclusive,
                        false => FeeAssessmentMethod::Inclusive,
                    },
                })
            }
            Pb::RoyaltyFee(fee) => {
                let (numerator, denominator) = fraction(fee.exchange_value_fraction);
                Fee::Royalty(RoyaltyFee {
                    numerator,
                    denominator,
                    fallback_fee: Option::from_protobuf(fee.fallback_fee)?,
                })
            }
        };

        Ok(Self {
            fee,
            fee_collector_account_id: Option::from_protobuf(pb.fee_collector_account_id)?,
            all_collectors_are_exempt: pb.all_collectors_are_exempt,
        })
    }
}

impl ToProtobuf for CustomFee {
    type Protobuf = services::CustomFee;

    fn to_protobuf(&self) -> Self::Protobuf {
        use services::custom_fee::Fee as Pb;

        let fee = match &self.fee {
            Fee::Fixed(fee) => Pb::FixedFee(fee.to_protobuf()),
            Fee::Fractional(fee) => Pb::FractionalFee(services::FractionalFee {
                fractional_amount: Some(to_fraction(fee.numerator, fee.denominator)),
                minimum_amount: fee.minimum_amount as i64,
                maximum_amount: fee.maximum_amount as i64,
                net_of_transfers: fee.assessment_method == FeeAssessmentMethod::Exclusive,
            }),
            Fee::Royalty(fee) => Pb::RoyaltyFee(services::RoyaltyFee {
                exchange_value_fraction: Some(to_fraction(fee.numerator, fee.denominator)),
                fallback_fee: fee.fallback_fee.as_ref().map(FixedFee::to_protobuf),
            }),
        };

        services::CustomFee {
            fee_collector_account_id: self.fee_collector_account_id.as_ref().map(AccountId::to_protobuf),
            all_collectors_are_exempt: self.all_collectors_are_exempt,
            fee: Some(fee),
        }
    }
}

/// A fixed fee on a topic, paid per submitted message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedCustomFee {
    pub fixed_fee: FixedFee,
    pub fee_collector_account_id: Option<AccountId>,
}

impl ValidateChecksums for FixedCustomFee {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.fixed_fee.validate_checksums(ledger_id)?;
        self.fee_collector_account_id.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::FixedCustomFee> for FixedCustomFee {
    fn from_protobuf(pb: services::FixedCustomFee) -> Result<Self> {
        Ok(Self {
            fixed_fee: FixedFee::from_protobuf(pb.fixed_fee.unwrap_or_default())?,
            fee_collector_account_id: Option::from_protobuf(pb.fee_collector_account_id)?,
        })
    }
}

impl ToProtobuf for FixedCustomFee {
    type Protobuf = services::FixedCustomFee;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::FixedCustomFee {
            fixed_fee: Some(self.fixed_fee.to_protobuf()),
            fee_collector_account_id: self.fee_collector_account_id.as_ref().map(AccountId::to_protobuf),
        }
    }
}

/// The most a payer accepts to pay in custom fees, per denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CustomFeeLimit {
    pub account_id: Option<AccountId>,
    pub fees: Vec<FixedFee>,
}

impl CustomFeeLimit {
    pub fn new(account_id: AccountId, fees: Vec<FixedFee>) -> Self {
        Self { account_id: Some(account_id), fees }
    }
}

impl ValidateChecksums for CustomFeeLimit {
    fn validate_checksums(&self, ledger_id: &LedgerId) -> Result<()> {
        self.account_id.validate_checksums(ledger_id)?;
        self.fees.validate_checksums(ledger_id)
    }
}

impl FromProtobuf<services::CustomFeeLimit> for CustomFeeLimit {
    fn from_protobuf(pb: services::CustomFeeLimit) -> Result<Self> {
        Ok(Self { account_id: Option::from_protobuf(pb.account_id)?, fees: Vec::from_protobuf(pb.fees)? })
    }
}

impl ToProtobuf for CustomFeeLimit {
    type Protobuf = services::CustomFeeLimit;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::CustomFeeLimit {
            account_id: self.account_id.as_ref().map(AccountId::to_protobuf),
            fees: self.fees.to_protobuf(),
        }
    }
}

/// A custom fee actually charged by a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssessedCustomFee {
    pub amount: i64,
    /// `None` when charged in hbar.
    pub token_id: Option<TokenId>,
    pub fee_collector_account_id: Option<AccountId>,
    pub payer_account_id_list: Vec<AccountId>,
}

impl FromProtobuf<services::AssessedCustomFee> for AssessedCustomFee {
    fn from_protobuf(pb: services::AssessedCustomFee) -> Result<Self> {
        Ok(Self {
            amount: pb.amount,
            token_id: Option::from_protobuf(pb.token_id)?,
            fee_collector_account_id: Option::from_protobuf(pb.fee_collector_account_id)?,
            payer_account_id_list: Vec::from_protobuf(pb.effective_payer_account_id)?,
        })
    }
}

impl ToProtobuf for AssessedCustomFee {
    type Protobuf = services::AssessedCustomFee;

    fn to_protobuf(&self) -> Self::Protobuf {
        services::AssessedCustomFee {
            amount: self.amount,
            token_id: self.token_id.map(|id| id.to_protobuf()),
            fee_collector_account_id: self.fee_collector_account_id.as_ref().map(AccountId::to_protobuf),
            effective_payer_account_id: self.payer_account_id_list.to_protobuf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fee_shape_round_trips() {
        let collector = AccountId::new(0, 0, 98);
        let fees = vec![
            CustomFee::new(Fee::Fixed(FixedFee::hbar(Hbar::new(1))), collector.clone()),
            CustomFee::new(
                Fee::Fractional(FractionalFee {
                    numerator: 1,
                    denominator: 20,
                    minimum_amount: 1,
                    maximum_amount: 0,
                    assessment_method: FeeAssessmentMethod::Exclusive,
                }),
                collector.clone(),
            ),
            CustomFee {
                all_collectors_are_exempt: true,
                ..CustomFee::new(
                    Fee::Royalty(RoyaltyFee {
                        numerator: 1,
                        denominator: 10,
                        fallback_fee: Some(FixedFee::token(5, TokenId::new(0, 0, 7))),
                    }),
                    collector,
                )
            },
        ];

        assert_eq!(Vec::<CustomFee>::from_protobuf(fees.to_protobuf()).unwrap(), fees);
    }

    #[test]
    fn test_fee_is_required() {
        assert!(CustomFee::from_protobuf(services::CustomFee::default()).is_err());
    }

    #[test]
    fn test_fee_limit_round_trip() {
        let limit = CustomFeeLimit::new(AccountId::new(0, 0, 2), vec![FixedFee::hbar(Hbar::new(3))]);
        assert_eq!(CustomFeeLimit::from_protobuf(limit.to_protobuf()).unwrap(), limit);
    }
}
