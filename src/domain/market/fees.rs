use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exchange venue a trade settles on. Decides which fee components apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Market {
    /// Mainland China A-shares (Shanghai/Shenzhen).
    AShare,
    /// Hong Kong Stock Exchange.
    HongKong,
    /// US equities.
    Us,
}

impl Market {
    pub const ALL: [Market; 3] = [Market::AShare, Market::HongKong, Market::Us];

    /// Currency unit prices are quoted in on this market.
    pub fn currency(&self) -> &'static str {
        match self {
            Market::AShare => "¥",
            Market::HongKong => "HK$",
            Market::Us => "$",
        }
    }

    /// Default fee schedule for a typical retail broker account.
    ///
    /// Components a market does not charge are zero, so the same
    /// [`FeeParameters`] shape serves all three markets.
    pub fn default_fees(&self) -> FeeParameters {
        match self {
            Market::AShare => FeeParameters {
                commission_rate: 0.00012,
                min_commission: 5.0,
                stamp_duty_rate: 0.0005,
                transfer_fee_rate: 0.00001,
                ..FeeParameters::zero()
            },
            Market::HongKong => FeeParameters {
                commission_rate: 0.0007,
                min_commission: 50.0,
                stamp_duty_rate: 0.001,
                trading_fee_rate: 0.00005,
                settlement_fee_rate: 0.00002,
                ..FeeParameters::zero()
            },
            Market::Us => FeeParameters {
                commission_rate: 0.0003,
                min_commission: 1.0,
                sec_fee_rate: 0.0000229,
                ..FeeParameters::zero()
            },
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::AShare => write!(f, "A-Share"),
            Market::HongKong => write!(f, "Hong Kong"),
            Market::Us => write!(f, "US"),
        }
    }
}

impl FromStr for Market {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ashare" | "a-share" | "cn" => Ok(Market::AShare),
            "hongkong" | "hk" => Ok(Market::HongKong),
            "us" => Ok(Market::Us),
            _ => anyhow::bail!(
                "Invalid market: {}. Must be 'ashare', 'hongkong' or 'us'",
                s
            ),
        }
    }
}

/// Instrument class of the traded security.
///
/// Only stock orders are subject to the broker's minimum commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityType {
    Stock,
    Etf,
    Bond,
}

impl SecurityType {
    pub const ALL: [SecurityType; 3] = [
        SecurityType::Stock,
        SecurityType::Etf,
        SecurityType::Bond,
    ];
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityType::Stock => write!(f, "Stock"),
            SecurityType::Etf => write!(f, "ETF"),
            SecurityType::Bond => write!(f, "Bond"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Per-order fee schedule.
///
/// Rates are fractions of the order amount; `min_commission` is an absolute
/// amount in the market's currency. Each market reads the fields it
/// recognizes and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeParameters {
    /// Broker commission as a fraction of the order amount.
    pub commission_rate: f64,
    /// Commission floor per order. Stock orders only.
    pub min_commission: f64,
    /// A-share: charged on sells only. Hong Kong: charged both ways.
    pub stamp_duty_rate: f64,
    /// A-share share-registry fee, both ways.
    pub transfer_fee_rate: f64,
    /// Hong Kong exchange trading fee, both ways.
    pub trading_fee_rate: f64,
    /// Hong Kong clearing-house fee, both ways.
    pub settlement_fee_rate: f64,
    /// US regulatory fee, charged on sells only.
    pub sec_fee_rate: f64,
}

impl FeeParameters {
    /// All-zero schedule: trading is free.
    pub fn zero() -> Self {
        Self {
            commission_rate: 0.0,
            min_commission: 0.0,
            stamp_duty_rate: 0.0,
            transfer_fee_rate: 0.0,
            trading_fee_rate: 0.0,
            settlement_fee_rate: 0.0,
            sec_fee_rate: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_share_defaults() {
        let fees = Market::AShare.default_fees();
        assert!((fees.commission_rate - 0.00012).abs() < 1e-12);
        assert!((fees.min_commission - 5.0).abs() < 1e-12);
        assert!((fees.stamp_duty_rate - 0.0005).abs() < 1e-12);
        assert!((fees.transfer_fee_rate - 0.00001).abs() < 1e-12);
        // Not charged on A-shares
        assert_eq!(fees.trading_fee_rate, 0.0);
        assert_eq!(fees.settlement_fee_rate, 0.0);
        assert_eq!(fees.sec_fee_rate, 0.0);
    }

    #[test]
    fn test_hong_kong_defaults() {
        let fees = Market::HongKong.default_fees();
        assert!((fees.commission_rate - 0.0007).abs() < 1e-12);
        assert!((fees.min_commission - 50.0).abs() < 1e-12);
        assert!((fees.stamp_duty_rate - 0.001).abs() < 1e-12);
        assert!((fees.trading_fee_rate - 0.00005).abs() < 1e-12);
        assert!((fees.settlement_fee_rate - 0.00002).abs() < 1e-12);
        assert_eq!(fees.transfer_fee_rate, 0.0);
        assert_eq!(fees.sec_fee_rate, 0.0);
    }

    #[test]
    fn test_us_defaults() {
        let fees = Market::Us.default_fees();
        assert!((fees.commission_rate - 0.0003).abs() < 1e-12);
        assert!((fees.min_commission - 1.0).abs() < 1e-12);
        assert!((fees.sec_fee_rate - 0.0000229).abs() < 1e-12);
        // No stamp duty or transfer fee in the US schedule
        assert_eq!(fees.stamp_duty_rate, 0.0);
        assert_eq!(fees.transfer_fee_rate, 0.0);
    }

    #[test]
    fn test_zero_schedule_is_all_zero() {
        let fees = FeeParameters::zero();
        assert_eq!(fees.commission_rate, 0.0);
        assert_eq!(fees.min_commission, 0.0);
        assert_eq!(fees.stamp_duty_rate, 0.0);
        assert_eq!(fees.transfer_fee_rate, 0.0);
        assert_eq!(fees.trading_fee_rate, 0.0);
        assert_eq!(fees.settlement_fee_rate, 0.0);
        assert_eq!(fees.sec_fee_rate, 0.0);
    }

    #[test]
    fn test_market_from_str() {
        assert_eq!("ashare".parse::<Market>().unwrap(), Market::AShare);
        assert_eq!("A-Share".parse::<Market>().unwrap(), Market::AShare);
        assert_eq!("cn".parse::<Market>().unwrap(), Market::AShare);
        assert_eq!("hongkong".parse::<Market>().unwrap(), Market::HongKong);
        assert_eq!("HK".parse::<Market>().unwrap(), Market::HongKong);
        assert_eq!("us".parse::<Market>().unwrap(), Market::Us);

        assert!("tokyo".parse::<Market>().is_err());
        assert!("".parse::<Market>().is_err());
    }

    #[test]
    fn test_currency_units() {
        assert_eq!(Market::AShare.currency(), "¥");
        assert_eq!(Market::HongKong.currency(), "HK$");
        assert_eq!(Market::Us.currency(), "$");
    }
}
