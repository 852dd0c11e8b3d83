//! Row models for the source export and the destination import file.

use crate::number::Number;
use crate::transaction::TransactionKind;
use serde::Deserialize;
use std::fmt;

/// Raw row of the Cash App Bitcoin transaction export.
///
/// Columns are matched by header name, so their order in the file does not
/// matter. Money columns stay as text until the mapper validates them.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "Transaction ID")]
    pub transaction_id: String,

    /// `YYYY-MM-DD HH:MM:SS TZ`
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Transaction Type")]
    pub transaction_type: String,

    #[serde(rename = "Currency")]
    pub currency: String,

    /// Decorated money, e.g. `$1,234.56`
    #[serde(rename = "Amount")]
    pub amount: String,

    #[serde(rename = "Fee")]
    pub fee: String,

    #[serde(rename = "Net Amount")]
    pub net_amount: String,

    #[serde(rename = "Asset Type")]
    pub asset_type: String,

    #[serde(rename = "Asset Price")]
    pub asset_price: String,

    /// Plain decimal, already numeric in the export.
    #[serde(rename = "Asset Amount")]
    pub asset_amount: Number,

    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "Notes")]
    pub notes: String,

    #[serde(rename = "Name of sender/receiver")]
    pub entity_name: String,

    #[serde(rename = "Account")]
    pub account: String,
}

impl SourceRecord {
    /// Header names of the export, in the order Cash App writes them.
    pub const HEADERS: [&'static str; 14] = [
        "Transaction ID",
        "Date",
        "Transaction Type",
        "Currency",
        "Amount",
        "Fee",
        "Net Amount",
        "Asset Type",
        "Asset Price",
        "Asset Amount",
        "Status",
        "Notes",
        "Name of sender/receiver",
        "Account",
    ];
}

/// Currency code carried by a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Btc,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Btc => "BTC",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One side of a transaction: received, sent or fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub currency: Currency,
    pub amount: Number,

    /// USD value of `amount` at transaction time, when the export supplies it.
    pub net_worth: Option<Number>,
}

impl Leg {
    /// Creates a leg with no net worth.
    pub fn new(currency: Currency, amount: Number) -> Self {
        Leg {
            currency,
            amount,
            net_worth: None,
        }
    }

    /// Sets the net worth of the leg.
    pub fn with_net_worth(mut self, net_worth: Number) -> Self {
        self.net_worth = Some(net_worth);
        self
    }

    /// Currency, amount and net worth cells. Missing values are empty.
    fn cells(leg: Option<&Leg>) -> [String; 3] {
        match leg {
            Some(leg) => [
                leg.currency.to_string(),
                leg.amount.to_string(),
                leg.net_worth.map(|n| n.to_string()).unwrap_or_default(),
            ],
            None => Default::default(),
        }
    }
}

/// Row of the Crypto.com Tax import file.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationRecord {
    /// `MM/DD/YYYY HH:MM:SS`, no zone.
    pub date: String,
    pub kind: TransactionKind,
    pub received: Option<Leg>,
    pub sent: Option<Leg>,
    pub fee: Option<Leg>,
}

impl DestinationRecord {
    /// Output columns. Every row has all of them, in this order.
    pub const HEADERS: [&'static str; 11] = [
        "Date",
        "Type",
        "Received Currency",
        "Received Amount",
        "Received Net Worth",
        "Sent Currency",
        "Sent Amount",
        "Sent Net Worth",
        "Fee Currency",
        "Fee Amount",
        "Fee Net Worth",
    ];

    /// Renders the row as cells matching [`DestinationRecord::HEADERS`].
    pub fn to_record(&self) -> [String; 11] {
        let [received_currency, received_amount, received_net_worth] =
            Leg::cells(self.received.as_ref());
        let [sent_currency, sent_amount, sent_net_worth] = Leg::cells(self.sent.as_ref());
        let [fee_currency, fee_amount, fee_net_worth] = Leg::cells(self.fee.as_ref());

        [
            self.date.clone(),
            self.kind.label().to_string(),
            received_currency,
            received_amount,
            received_net_worth,
            sent_currency,
            sent_amount,
            sent_net_worth,
            fee_currency,
            fee_amount,
            fee_net_worth,
        ]
    }
}
