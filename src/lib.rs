pub mod config;
pub mod domain;
#[cfg(feature = "ui")]
pub mod interfaces;

pub use domain::calculator::{CalculationResult, solve_break_even};
pub use domain::errors::InvalidInput;
pub use domain::market::{FeeModel, FeeParameters, Market, OrderSide, SecurityType};

#[cfg(test)]
mod config_tests;
