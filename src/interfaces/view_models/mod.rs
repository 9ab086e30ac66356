pub mod calculator_form;

pub use calculator_form::{BreakEvenSummary, CalculatorForm};
