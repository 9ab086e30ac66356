// Fee schedules and venue enums
pub mod fees;

// Per-order cash flow computation
pub mod fee_model;

pub use fee_model::FeeModel;
pub use fees::{FeeParameters, Market, OrderSide, SecurityType};
