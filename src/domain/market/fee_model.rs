use crate::domain::market::fees::{FeeParameters, Market, OrderSide, SecurityType};

/// Per-market fee composition with the uniform shape
/// `(amount, commission, schedule, side) -> cash flow`.
type ComposeFn = fn(f64, f64, &FeeParameters, OrderSide) -> f64;

/// Computes the signed cash flow of executing a single order.
///
/// Buy side returns the total outlay (order amount plus fees); sell side
/// returns the net proceeds (order amount minus fees). The market-specific
/// composition is picked once at construction, so repeated evaluations
/// inside the break-even search never re-branch on the market.
///
/// No rounding happens here; display formatting is the caller's concern.
#[derive(Debug, Clone)]
pub struct FeeModel {
    security: SecurityType,
    quantity: u32,
    fees: FeeParameters,
    compose: ComposeFn,
}

impl FeeModel {
    pub fn new(
        market: Market,
        security: SecurityType,
        quantity: u32,
        fees: FeeParameters,
    ) -> Self {
        let compose: ComposeFn = match market {
            Market::AShare => a_share_cash_flow,
            Market::HongKong => hong_kong_cash_flow,
            Market::Us => us_cash_flow,
        };
        Self {
            security,
            quantity,
            fees,
            compose,
        }
    }

    /// Total cash flow of trading the full quantity at `price`.
    pub fn total_cost(&self, price: f64, side: OrderSide) -> f64 {
        let amount = price * self.quantity as f64;
        let commission = self.commission(amount);
        (self.compose)(amount, commission, &self.fees, side)
    }

    // Stock orders pay at least the broker's minimum; ETF and bond orders
    // pay the pure rate.
    fn commission(&self, amount: f64) -> f64 {
        let by_rate = amount * self.fees.commission_rate;
        match self.security {
            SecurityType::Stock => by_rate.max(self.fees.min_commission),
            SecurityType::Etf | SecurityType::Bond => by_rate,
        }
    }
}

fn a_share_cash_flow(amount: f64, commission: f64, fees: &FeeParameters, side: OrderSide) -> f64 {
    let transfer = amount * fees.transfer_fee_rate;
    match side {
        OrderSide::Buy => amount + commission + transfer,
        // Stamp duty hits the sell side only
        OrderSide::Sell => amount - commission - amount * fees.stamp_duty_rate - transfer,
    }
}

fn hong_kong_cash_flow(amount: f64, commission: f64, fees: &FeeParameters, side: OrderSide) -> f64 {
    let stamp = amount * fees.stamp_duty_rate;
    let trading = amount * fees.trading_fee_rate;
    let settlement = amount * fees.settlement_fee_rate;
    match side {
        OrderSide::Buy => amount + commission + stamp + trading + settlement,
        OrderSide::Sell => amount - commission - stamp - trading - settlement,
    }
}

fn us_cash_flow(amount: f64, commission: f64, fees: &FeeParameters, side: OrderSide) -> f64 {
    match side {
        OrderSide::Buy => amount + commission,
        OrderSide::Sell => amount - commission - amount * fees.sec_fee_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_share_stock_hits_commission_floor() {
        let model = FeeModel::new(
            Market::AShare,
            SecurityType::Stock,
            1000,
            Market::AShare.default_fees(),
        );

        // amount 10000, commission floor 5 (rate gives 1.2), transfer 0.1
        let buy = model.total_cost(10.0, OrderSide::Buy);
        assert!((buy - 10005.1).abs() < 1e-9, "buy cost was {}", buy);

        // sell adds stamp duty 5.0 on top
        let sell = model.total_cost(10.0, OrderSide::Sell);
        assert!((sell - 9989.9).abs() < 1e-9, "sell proceeds were {}", sell);
    }

    #[test]
    fn test_a_share_etf_pays_pure_rate() {
        let model = FeeModel::new(
            Market::AShare,
            SecurityType::Etf,
            1000,
            Market::AShare.default_fees(),
        );

        // commission 10000 * 0.00012 = 1.2, no floor
        let buy = model.total_cost(10.0, OrderSide::Buy);
        assert!((buy - 10001.3).abs() < 1e-9, "buy cost was {}", buy);
    }

    #[test]
    fn test_bond_pays_pure_rate() {
        let fees = FeeParameters {
            commission_rate: 0.0001,
            min_commission: 100.0,
            ..FeeParameters::zero()
        };
        let model = FeeModel::new(Market::Us, SecurityType::Bond, 10, fees);

        // 1000 * 0.0001 = 0.1, floor ignored for bonds
        let buy = model.total_cost(100.0, OrderSide::Buy);
        assert!((buy - 1000.1).abs() < 1e-9, "buy cost was {}", buy);
    }

    #[test]
    fn test_hong_kong_levies_both_ways() {
        let model = FeeModel::new(
            Market::HongKong,
            SecurityType::Stock,
            500,
            Market::HongKong.default_fees(),
        );

        // amount 25000, commission floor 50, stamp 25, trading 1.25, settlement 0.5
        let buy = model.total_cost(50.0, OrderSide::Buy);
        assert!((buy - 25076.75).abs() < 1e-9, "buy cost was {}", buy);

        let sell = model.total_cost(50.0, OrderSide::Sell);
        assert!((sell - 24923.25).abs() < 1e-9, "sell proceeds were {}", sell);
    }

    #[test]
    fn test_us_sec_fee_on_sell_only() {
        let model = FeeModel::new(
            Market::Us,
            SecurityType::Stock,
            10,
            Market::Us.default_fees(),
        );

        // amount 1000, commission floor 1
        let buy = model.total_cost(100.0, OrderSide::Buy);
        assert!((buy - 1001.0).abs() < 1e-9, "buy cost was {}", buy);

        // sell pays the SEC fee 1000 * 0.0000229 = 0.0229 on top
        let sell = model.total_cost(100.0, OrderSide::Sell);
        assert!((sell - 998.9771).abs() < 1e-9, "sell proceeds were {}", sell);
    }

    #[test]
    fn test_zero_fees_cost_equals_amount() {
        for market in Market::ALL {
            let model = FeeModel::new(market, SecurityType::Stock, 300, FeeParameters::zero());
            let buy = model.total_cost(12.5, OrderSide::Buy);
            let sell = model.total_cost(12.5, OrderSide::Sell);
            assert!((buy - 3750.0).abs() < 1e-9, "{} buy was {}", market, buy);
            assert!((sell - 3750.0).abs() < 1e-9, "{} sell was {}", market, sell);
        }
    }

    #[test]
    fn test_cash_flows_increase_with_price() {
        for market in Market::ALL {
            let model = FeeModel::new(market, SecurityType::Stock, 100, market.default_fees());
            let mut last_buy = model.total_cost(1.0, OrderSide::Buy);
            let mut last_sell = model.total_cost(1.0, OrderSide::Sell);
            for step in 1..50 {
                let price = 1.0 + step as f64 * 0.7;
                let buy = model.total_cost(price, OrderSide::Buy);
                let sell = model.total_cost(price, OrderSide::Sell);
                assert!(buy > last_buy, "{} buy cost not increasing at {}", market, price);
                assert!(sell > last_sell, "{} proceeds not increasing at {}", market, price);
                last_buy = buy;
                last_sell = sell;
            }
        }
    }
}
