use crate::domain::market::Market;
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Market data view. No feed is wired up, so this lists the markets the
/// desk knows about and what each one settles in.
pub fn render_market_data(ui: &mut egui::Ui) {
    ui.heading("Markets");
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new()
        .title("SUPPORTED MARKETS")
        .subtitle("Live quotes are not connected yet.")
        .show(ui, |ui| {
            egui::Grid::new("supported_markets")
                .num_columns(2)
                .spacing([40.0, 8.0])
                .show(ui, |ui| {
                    for market in Market::ALL {
                        ui.label(
                            egui::RichText::new(market.to_string())
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(market.currency())
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                        ui.end_row();
                    }
                });
        });
}
