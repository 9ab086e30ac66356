use crate::domain::calculator::{CalculationResult, solve_break_even};
use crate::domain::market::{FeeParameters, Market, SecurityType};

/// Display-ready summary of a finished break-even calculation.
pub struct BreakEvenSummary {
    pub sell_price: String,
    pub percent: String,
    /// True when the price has to rise before the position breaks even.
    pub requires_gain: bool,
}

/// Form state behind the break-even calculator panel.
///
/// All inputs are kept as raw strings so the text fields stay editable;
/// nothing is validated here. Parsing falls back to values the domain
/// solver rejects, so every error message comes from one place.
pub struct CalculatorForm {
    pub market: Market,
    pub security: SecurityType,
    pub buy_price: String,
    pub quantity: String,
    pub commission_rate: String,
    pub min_commission: String,
    pub stamp_duty_rate: String,
    pub transfer_fee_rate: String,
    pub trading_fee_rate: String,
    pub settlement_fee_rate: String,
    pub sec_fee_rate: String,
    pub result: Option<CalculationResult>,
    pub error: Option<String>,
}

impl CalculatorForm {
    pub fn new(market: Market) -> Self {
        let mut form = Self {
            market,
            security: SecurityType::Stock,
            buy_price: String::new(),
            quantity: String::new(),
            commission_rate: String::new(),
            min_commission: String::new(),
            stamp_duty_rate: String::new(),
            transfer_fee_rate: String::new(),
            trading_fee_rate: String::new(),
            settlement_fee_rate: String::new(),
            sec_fee_rate: String::new(),
            result: None,
            error: None,
        };
        form.load_default_fees();
        form
    }

    /// Switches market. The whole fee schedule is reloaded from the new
    /// market's defaults, discarding any edits, and a stale result from
    /// the previous market is cleared.
    pub fn set_market(&mut self, market: Market) {
        if self.market == market {
            return;
        }
        self.market = market;
        self.load_default_fees();
        self.result = None;
        self.error = None;
    }

    /// Switches security type, keeping the fee schedule but dropping the
    /// now-stale result.
    pub fn set_security(&mut self, security: SecurityType) {
        if self.security == security {
            return;
        }
        self.security = security;
        self.result = None;
        self.error = None;
    }

    /// Restores the current market's default fee schedule, leaving the
    /// trade inputs untouched.
    pub fn reset_fees(&mut self) {
        self.load_default_fees();
    }

    pub fn calculate(&mut self) {
        let buy_price = parse_number(&self.buy_price);
        let quantity = self.quantity.trim().parse::<u32>().unwrap_or(0);
        let fees = self.fee_parameters();

        match solve_break_even(self.market, self.security, buy_price, quantity, &fees) {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn summary(&self) -> Option<BreakEvenSummary> {
        let result = self.result.as_ref()?;
        Some(BreakEvenSummary {
            sell_price: format!(
                "{}{:.2} / share",
                self.market.currency(),
                result.sell_price
            ),
            percent: format!("{:+.2}%", result.percent_change),
            requires_gain: result.percent_change >= 0.0,
        })
    }

    pub fn fee_parameters(&self) -> FeeParameters {
        FeeParameters {
            commission_rate: parse_number(&self.commission_rate),
            min_commission: parse_number(&self.min_commission),
            stamp_duty_rate: parse_number(&self.stamp_duty_rate),
            transfer_fee_rate: parse_number(&self.transfer_fee_rate),
            trading_fee_rate: parse_number(&self.trading_fee_rate),
            settlement_fee_rate: parse_number(&self.settlement_fee_rate),
            sec_fee_rate: parse_number(&self.sec_fee_rate),
        }
    }

    fn load_default_fees(&mut self) {
        let defaults = self.market.default_fees();
        self.commission_rate = format_rate(defaults.commission_rate);
        self.min_commission = format_rate(defaults.min_commission);
        self.stamp_duty_rate = format_rate(defaults.stamp_duty_rate);
        self.transfer_fee_rate = format_rate(defaults.transfer_fee_rate);
        self.trading_fee_rate = format_rate(defaults.trading_fee_rate);
        self.settlement_fee_rate = format_rate(defaults.settlement_fee_rate);
        self.sec_fee_rate = format_rate(defaults.sec_fee_rate);
    }
}

/// NaN is deliberately the fallback: the solver treats it as an invalid
/// trade or fee parameter, so blank and garbage input share one error path.
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn format_rate(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_loads_market_defaults() {
        let form = CalculatorForm::new(Market::AShare);
        assert_eq!(form.commission_rate, "0.00012");
        assert_eq!(form.min_commission, "5");
        assert_eq!(form.stamp_duty_rate, "0.0005");
        assert_eq!(form.transfer_fee_rate, "0.00001");
        // Fees other markets charge start out as plain zeros.
        assert_eq!(form.trading_fee_rate, "0");
        assert_eq!(form.settlement_fee_rate, "0");
        assert_eq!(form.sec_fee_rate, "0");
        assert_eq!(form.security, SecurityType::Stock);
        assert!(form.buy_price.is_empty());
        assert!(form.result.is_none());
    }

    #[test]
    fn test_market_switch_replaces_fee_schedule() {
        let mut form = CalculatorForm::new(Market::AShare);
        form.commission_rate = "0.9".to_string();
        form.buy_price = "10".to_string();
        form.quantity = "1000".to_string();
        form.calculate();

        form.set_market(Market::HongKong);

        assert_eq!(form.commission_rate, "0.0007");
        assert_eq!(form.min_commission, "50");
        assert_eq!(form.stamp_duty_rate, "0.001");
        assert_eq!(form.trading_fee_rate, "0.00005");
        assert_eq!(form.settlement_fee_rate, "0.00002");
        assert_eq!(form.transfer_fee_rate, "0");
        assert!(form.result.is_none());
        assert!(form.error.is_none());
        // Trade inputs survive the switch.
        assert_eq!(form.buy_price, "10");
        assert_eq!(form.quantity, "1000");
    }

    #[test]
    fn test_reselecting_same_market_keeps_edits() {
        let mut form = CalculatorForm::new(Market::Us);
        form.commission_rate = "0.001".to_string();

        form.set_market(Market::Us);

        assert_eq!(form.commission_rate, "0.001");
    }

    #[test]
    fn test_security_switch_clears_result_but_keeps_fees() {
        let mut form = CalculatorForm::new(Market::AShare);
        form.commission_rate = "0.0002".to_string();
        form.buy_price = "10".to_string();
        form.quantity = "1000".to_string();
        form.calculate();
        assert!(form.result.is_some());

        form.set_security(SecurityType::Etf);

        assert!(form.result.is_none());
        assert_eq!(form.commission_rate, "0.0002");
    }

    #[test]
    fn test_reset_fees_restores_defaults() {
        let mut form = CalculatorForm::new(Market::HongKong);
        form.commission_rate = "0.5".to_string();
        form.min_commission = "0".to_string();

        form.reset_fees();

        assert_eq!(form.commission_rate, "0.0007");
        assert_eq!(form.min_commission, "50");
    }

    #[test]
    fn test_calculate_produces_result_and_summary() {
        let mut form = CalculatorForm::new(Market::AShare);
        form.buy_price = "10".to_string();
        form.quantity = "1000".to_string();
        form.calculate();

        let result = form.result.expect("calculation should succeed");
        assert!(
            (result.sell_price - 10.0152).abs() < 1e-3,
            "sell price was {}",
            result.sell_price
        );

        let summary = form.summary().expect("summary should exist");
        assert_eq!(summary.sell_price, "¥10.02 / share");
        assert_eq!(summary.percent, "+0.15%");
        assert!(summary.requires_gain);
    }

    #[test]
    fn test_blank_buy_price_reports_trade_error() {
        let mut form = CalculatorForm::new(Market::AShare);
        form.quantity = "100".to_string();
        form.calculate();

        let error = form.error.as_ref().expect("blank price should fail");
        assert!(error.contains("invalid trade parameters"), "got: {}", error);
        assert!(form.result.is_none());
        assert!(form.summary().is_none());
    }

    #[test]
    fn test_garbage_commission_reports_fee_error() {
        let mut form = CalculatorForm::new(Market::Us);
        form.buy_price = "100".to_string();
        form.quantity = "10".to_string();
        form.commission_rate = "abc".to_string();
        form.calculate();

        let error = form.error.expect("garbage commission should fail");
        assert!(error.contains("invalid fee parameters"), "got: {}", error);
    }

    #[test]
    fn test_fractional_quantity_is_rejected() {
        let mut form = CalculatorForm::new(Market::AShare);
        form.buy_price = "10".to_string();
        form.quantity = "10.5".to_string();
        form.calculate();

        let error = form.error.expect("fractional quantity should fail");
        assert!(error.contains("invalid trade parameters"), "got: {}", error);
    }

    #[test]
    fn test_successful_calculation_clears_previous_error() {
        let mut form = CalculatorForm::new(Market::AShare);
        form.quantity = "1000".to_string();
        form.calculate();
        assert!(form.error.is_some());

        form.buy_price = "10".to_string();
        form.calculate();

        assert!(form.error.is_none());
        assert!(form.result.is_some());
    }
}
