// Break-even sell price search
pub mod break_even;

pub use break_even::{CalculationResult, solve_break_even};
