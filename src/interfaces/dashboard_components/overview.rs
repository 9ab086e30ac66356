use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Landing view: a quick glance at what the desk will grow into.
pub fn render_overview(ui: &mut egui::Ui) {
    ui.heading("Overview");
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.columns(3, |columns| {
        columns[0].push_id("overview_market", |ui| {
            Card::new()
                .title("MARKET OVERVIEW")
                .min_height(120.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Market summaries will appear here.")
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
        });

        columns[1].push_id("overview_trades", |ui| {
            Card::new()
                .title("RECENT TRADES")
                .min_height(120.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Your latest trades will appear here.")
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
        });

        columns[2].push_id("overview_performance", |ui| {
            Card::new()
                .title("PERFORMANCE")
                .min_height(120.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Performance metrics will appear here.")
                            .color(DesignSystem::TEXT_MUTED),
                    );
                });
        });
    });
}
