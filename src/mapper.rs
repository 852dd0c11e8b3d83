//! Maps Cash App export rows onto Crypto.com Tax import rows.
//!
//! Mapping is a pure function of one [`SourceRecord`]. Fields are validated
//! in a fixed order (date, then money columns, then transaction type) and
//! the first failure is returned.
//!
//! `Amount`, `Asset Price` and the date's zone are checked but never written:
//! the import format has no columns for them.

use crate::error::MappingError;
use crate::number::Number;
use crate::record::{DestinationRecord, SourceRecord};
use crate::transaction::{Amounts, TransactionKind};
use chrono::{NaiveDateTime, Timelike};

const SOURCE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DESTINATION_DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Byte layout of the date part of a source date; `9` marks a digit.
const SOURCE_DATE_SHAPE: &[u8; 19] = b"9999-99-99 99:99:99";

/// Maps one source row to a destination row.
pub fn map(record: &SourceRecord) -> Result<DestinationRecord, MappingError> {
    let date = reformat_date(&record.date)?;

    let _amount = parse_money_field("Amount", &record.amount)?;
    let fee = parse_money_field("Fee", &record.fee)?;
    let net_amount = parse_money_field("Net Amount", &record.net_amount)?;
    let _asset_price = parse_money_field("Asset Price", &record.asset_price)?;

    let kind = TransactionKind::classify(&record.transaction_type)?;
    let legs = kind.legs(&Amounts {
        fee,
        net_amount,
        asset_amount: record.asset_amount,
    });

    Ok(DestinationRecord {
        date,
        kind,
        received: legs.received,
        sent: legs.sent,
        fee: legs.fee,
    })
}

/// Converts `YYYY-MM-DD HH:MM:SS TZ` to `MM/DD/YYYY HH:MM:SS`.
///
/// The wall-clock time is kept as written and the zone is dropped. Only the
/// zone token's shape is checked, not whether it names a real zone.
pub fn reformat_date(raw: &str) -> Result<String, MappingError> {
    let malformed = || MappingError::MalformedDate {
        raw: raw.to_string(),
    };

    let split = SOURCE_DATE_SHAPE.len();
    let stamp = raw.get(..split).ok_or_else(malformed)?;
    let zone = raw
        .get(split..)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(malformed)?;

    if !has_source_shape(stamp) || !is_zone_abbreviation(zone) {
        return Err(malformed());
    }

    let parsed =
        NaiveDateTime::parse_from_str(stamp, SOURCE_DATE_FORMAT).map_err(|_| malformed())?;
    // chrono represents `:60` as a leap second; seconds must stay below 60
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(malformed());
    }
    Ok(parsed.format(DESTINATION_DATE_FORMAT).to_string())
}

fn parse_money_field(field: &'static str, raw: &str) -> Result<Number, MappingError> {
    Number::parse_money(raw).map_err(|_| MappingError::MalformedMoney {
        field,
        raw: raw.to_string(),
    })
}

fn has_source_shape(stamp: &str) -> bool {
    stamp.len() == SOURCE_DATE_SHAPE.len()
        && stamp
            .bytes()
            .zip(SOURCE_DATE_SHAPE.iter())
            .all(|(b, &shape)| match shape {
                b'9' => b.is_ascii_digit(),
                _ => b == shape,
            })
}

/// `UTC`, `PDT`, or a longer abbreviation ending in `T` such as `AEST`.
fn is_zone_abbreviation(zone: &str) -> bool {
    let upper = zone.bytes().all(|b| b.is_ascii_uppercase());
    match zone.len() {
        3 => upper,
        4 | 5 => upper && zone.ends_with('T'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(transaction_type: &str) -> SourceRecord {
        SourceRecord {
            transaction_id: "abc123".to_string(),
            date: "2023-05-01 14:30:00 UTC".to_string(),
            transaction_type: transaction_type.to_string(),
            currency: "USD".to_string(),
            amount: "$100.00".to_string(),
            fee: "$1.00".to_string(),
            net_amount: "$99.00".to_string(),
            asset_type: "BTC".to_string(),
            asset_price: "$20,000.00".to_string(),
            asset_amount: Number::new(0.005),
            status: "COMPLETE".to_string(),
            notes: String::new(),
            entity_name: String::new(),
            account: "Bitcoin".to_string(),
        }
    }

    #[test]
    fn test_reformat_date_drops_zone() {
        assert_eq!(
            reformat_date("2023-05-01 14:30:00 UTC").unwrap(),
            "05/01/2023 14:30:00"
        );
        assert_eq!(
            reformat_date("2022-12-31 23:59:59 PST").unwrap(),
            "12/31/2022 23:59:59"
        );
        assert_eq!(
            reformat_date("2021-02-03 04:05:06 AEST").unwrap(),
            "02/03/2021 04:05:06"
        );
    }

    #[test]
    fn test_reformat_date_rejects_malformed() {
        for raw in [
            "",
            "2023-05-01 14:30:00",
            "2023/05/01 14:30:00 UTC",
            "2023-5-01 14:30:00 UTC",
            "2023-05-01T14:30:00 UTC",
            "2023-05-01 14:30 UTC",
            "2023-05-01 14:30:00 utc",
            "2023-05-01 14:30:00 U1C",
            "2023-05-01 14:30:00 UTC extra",
            "2023-13-01 14:30:00 UTC",
            "2023-02-30 14:30:00 UTC",
            "2023-05-01 25:30:00 UTC",
            "2023-05-01 14:30:60 UTC",
            "2023-12-31 23:59:60 UTC",
            " 2023-05-01 14:30:00 UTC",
            "2023-05-01 14:30:00 UTC ",
        ] {
            assert_eq!(
                reformat_date(raw),
                Err(MappingError::MalformedDate {
                    raw: raw.to_string()
                }),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_map_bitcoin_sale() {
        let row = map(&source("Bitcoin Sale")).unwrap().to_record();

        assert_eq!(
            row,
            [
                "05/01/2023 14:30:00",
                "sell",
                "USD",
                "99",
                "",
                "BTC",
                "0.005",
                "",
                "USD",
                "-1",
                "",
            ]
        );
    }

    #[test]
    fn test_map_bitcoin_boost() {
        let mut record = source("Bitcoin Boost");
        record.amount = "$5.00".to_string();
        record.fee = "$0.00".to_string();
        record.net_amount = "$5.00".to_string();
        record.asset_amount = Number::new(0.0002);

        let row = map(&record).unwrap().to_record();

        assert_eq!(
            row,
            [
                "05/01/2023 14:30:00",
                "rebate",
                "BTC",
                "0.0002",
                "5",
                "",
                "",
                "",
                "",
                "",
                "",
            ]
        );
    }

    #[test]
    fn test_map_unknown_type() {
        assert_eq!(
            map(&source("Unknown Thing")),
            Err(MappingError::UnknownTransactionType(
                "Unknown Thing".to_string()
            ))
        );
    }

    #[test]
    fn test_malformed_fee_fails_before_classification() {
        let mut record = source("Unknown Thing");
        record.fee = "garbage".to_string();

        assert_eq!(
            map(&record),
            Err(MappingError::MalformedMoney {
                field: "Fee",
                raw: "garbage".to_string()
            })
        );
    }

    #[test]
    fn test_discarded_fields_are_still_validated() {
        let mut record = source("Bitcoin Sale");
        record.amount = "$1.2.3".to_string();
        assert!(matches!(
            map(&record),
            Err(MappingError::MalformedMoney { field: "Amount", .. })
        ));

        let mut record = source("Bitcoin Sale");
        record.asset_price = "$".to_string();
        assert!(matches!(
            map(&record),
            Err(MappingError::MalformedMoney {
                field: "Asset Price",
                ..
            })
        ));
    }

    #[test]
    fn test_date_is_validated_first() {
        let mut record = source("Unknown Thing");
        record.date = "yesterday".to_string();
        record.fee = "garbage".to_string();

        assert!(matches!(
            map(&record),
            Err(MappingError::MalformedDate { .. })
        ));
    }

    #[test]
    fn test_sale_with_large_and_negative_money() {
        let mut record = source("Bitcoin Sale");
        record.net_amount = "$12,345.67".to_string();
        record.fee = "-$2.50".to_string();

        let row = map(&record).unwrap();
        assert_eq!(row.received.unwrap().amount.to_string(), "12345.67");
        assert_eq!(row.fee.unwrap().amount.to_string(), "2.5");
    }
}
