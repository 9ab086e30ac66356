use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::errors::InvalidInput;
use crate::domain::market::{FeeModel, FeeParameters, Market, OrderSide, SecurityType};

/// Absolute price tolerance at which the bisection stops.
const PRICE_TOLERANCE: f64 = 1e-6;

/// Multiplier for the initial upper search bound.
const INITIAL_BRACKET_FACTOR: f64 = 5.0;

/// How many times the upper bound is doubled before reporting that the
/// fee schedule admits no break-even price.
const MAX_BRACKET_DOUBLINGS: u32 = 6;

/// Outcome of a break-even calculation. Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub buy_price: f64,
    /// Sell price at which net proceeds equal the buy-side outlay.
    pub sell_price: f64,
    /// Price move from buy to break-even, in percent.
    pub percent_change: f64,
}

/// Finds the sell price at which a position exits with zero profit or loss.
///
/// The buy-side outlay is evaluated once; sell proceeds increase
/// monotonically with price, so the root is found by bisection down to
/// [`PRICE_TOLERANCE`]. Only the trade itself and the commission fields are
/// validated here. Market-specific rates are taken as-is: a NaN rate
/// poisons the comparisons and produces a meaningless (not an error)
/// result, matching the fee model's pass-through contract.
pub fn solve_break_even(
    market: Market,
    security: SecurityType,
    buy_price: f64,
    quantity: u32,
    fees: &FeeParameters,
) -> Result<CalculationResult, InvalidInput> {
    if !buy_price.is_finite() || buy_price <= 0.0 {
        warn!("Break-even rejected: buy price {} is not positive", buy_price);
        return Err(InvalidInput::Trade {
            reason: format!("buy price must be a positive number, got {buy_price}"),
        });
    }
    if quantity == 0 {
        warn!("Break-even rejected: zero quantity");
        return Err(InvalidInput::Trade {
            reason: "quantity must be a positive whole number".to_string(),
        });
    }
    if !fees.commission_rate.is_finite() || fees.commission_rate < 0.0 {
        warn!(
            "Break-even rejected: commission rate {} is not usable",
            fees.commission_rate
        );
        return Err(InvalidInput::Fees {
            reason: format!(
                "commission rate must be a non-negative number, got {}",
                fees.commission_rate
            ),
        });
    }
    if !fees.min_commission.is_finite() || fees.min_commission < 0.0 {
        warn!(
            "Break-even rejected: minimum commission {} is not usable",
            fees.min_commission
        );
        return Err(InvalidInput::Fees {
            reason: format!(
                "minimum commission must be a non-negative number, got {}",
                fees.min_commission
            ),
        });
    }

    let model = FeeModel::new(market, security, quantity, *fees);
    let buy_cost = model.total_cost(buy_price, OrderSide::Buy);

    let mut low = buy_price;
    let mut high = buy_price * INITIAL_BRACKET_FACTOR;

    // Make sure the bracket actually contains the root before bisecting.
    // Rates near or above 100% can push the break-even point beyond any
    // reachable price; report those instead of converging on a bound that
    // never breaks even.
    let mut doublings = 0;
    while model.total_cost(high, OrderSide::Sell) < buy_cost {
        if doublings == MAX_BRACKET_DOUBLINGS {
            warn!(
                "Break-even rejected: proceeds at {:.4} still below buy cost {:.4}",
                high, buy_cost
            );
            return Err(InvalidInput::Fees {
                reason: format!(
                    "sell proceeds never reach the buy cost (searched up to {:.0}x the buy price)",
                    high / buy_price
                ),
            });
        }
        high *= 2.0;
        doublings += 1;
    }
    if doublings > 0 {
        debug!("Widened search bracket to {:.4} after {} doublings", high, doublings);
    }

    while high - low > PRICE_TOLERANCE {
        let mid = (low + high) / 2.0;
        // At extreme magnitudes the tolerance drops below one ULP and the
        // midpoint stops moving; the bracket cannot shrink further.
        if !(low < mid && mid < high) {
            break;
        }
        if model.total_cost(mid, OrderSide::Sell) >= buy_cost {
            high = mid;
        } else {
            low = mid;
        }
    }

    let sell_price = (low + high) / 2.0;
    let percent_change = (sell_price / buy_price - 1.0) * 100.0;

    debug!(
        "Break-even: {} {} buy {} x{} -> sell {:.6} ({:+.4}%)",
        market, security, buy_price, quantity, sell_price, percent_change
    );

    Ok(CalculationResult {
        buy_price,
        sell_price,
        percent_change,
    })
}
