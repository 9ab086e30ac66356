use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_portfolio(ui: &mut egui::Ui) {
    ui.heading("Portfolio");
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new().title("HOLDINGS").min_height(120.0).show(ui, |ui| {
        ui.label(
            egui::RichText::new("Holdings will appear here once trades are recorded.")
                .color(DesignSystem::TEXT_MUTED),
        );
    });
}
