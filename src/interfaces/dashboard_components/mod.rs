pub mod calculator;
pub mod market_data;
pub mod overview;
pub mod portfolio;
pub mod settings;

pub use calculator::render_calculator;
pub use market_data::render_market_data;
pub use overview::render_overview;
pub use portfolio::render_portfolio;
pub use settings::render_settings;
