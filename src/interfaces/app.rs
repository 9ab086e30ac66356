use crate::config::Config;
use crate::interfaces::ui_components::DashboardView;
use crate::interfaces::view_models::CalculatorForm;

/// Top-level state for the desk window.
pub struct DeskApp {
    pub config: Config,
    pub current_view: DashboardView,
    pub calculator: CalculatorForm,
}

impl DeskApp {
    pub fn new(config: Config) -> Self {
        let calculator = CalculatorForm::new(config.default_market);
        Self {
            config,
            current_view: DashboardView::Overview,
            calculator,
        }
    }
}
