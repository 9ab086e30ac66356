// Market fee schedules and cash-flow model
pub mod market;

// Break-even solver
pub mod calculator;

// Domain-specific error types
pub mod errors;
