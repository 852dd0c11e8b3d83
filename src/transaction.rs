//! Transaction classification and per-kind leg layout.

use crate::error::MappingError;
use crate::number::Number;
use crate::record::{Currency, Leg};

/// Destination transaction kinds the converter knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// `Bitcoin Sale`: BTC sent, USD received, USD fee.
    Sell,

    /// `Bitcoin Boost`: BTC received as a reward, valued in USD.
    Rebate,
}

/// Validated amounts a leg rule may draw from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amounts {
    pub fee: Number,
    pub net_amount: Number,
    pub asset_amount: Number,
}

/// Received, sent and fee legs of one destination row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Legs {
    pub received: Option<Leg>,
    pub sent: Option<Leg>,
    pub fee: Option<Leg>,
}

impl TransactionKind {
    /// Maps a Cash App `Transaction Type` onto a destination kind.
    ///
    /// Matching is exact; anything outside the table is an error rather than
    /// a row with empty legs.
    pub fn classify(transaction_type: &str) -> Result<Self, MappingError> {
        match transaction_type {
            "Bitcoin Sale" => Ok(TransactionKind::Sell),
            "Bitcoin Boost" => Ok(TransactionKind::Rebate),
            other => Err(MappingError::UnknownTransactionType(other.to_string())),
        }
    }

    /// Label written to the `Type` column.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Sell => "sell",
            TransactionKind::Rebate => "rebate",
        }
    }

    /// Builds the legs meaningful for this kind. Unused legs stay `None`.
    pub fn legs(self, amounts: &Amounts) -> Legs {
        match self {
            TransactionKind::Sell => sell_legs(amounts),
            TransactionKind::Rebate => rebate_legs(amounts),
        }
    }
}

fn sell_legs(amounts: &Amounts) -> Legs {
    Legs {
        received: Some(Leg::new(Currency::Usd, amounts.net_amount)),
        sent: Some(Leg::new(Currency::Btc, amounts.asset_amount)),
        // fees are an outflow
        fee: Some(Leg::new(Currency::Usd, -amounts.fee)),
    }
}

fn rebate_legs(amounts: &Amounts) -> Legs {
    Legs {
        received: Some(
            Leg::new(Currency::Btc, amounts.asset_amount).with_net_worth(amounts.net_amount),
        ),
        ..Legs::default()
    }
}
