use crate::config::Config;
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_settings(ui: &mut egui::Ui, config: &Config) {
    ui.heading("Settings");
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new().title("APPLICATION").show(ui, |ui| {
        egui::Grid::new("settings_application")
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Version").color(DesignSystem::TEXT_SECONDARY));
                ui.label(env!("CARGO_PKG_VERSION"));
                ui.end_row();

                ui.label(
                    egui::RichText::new("Default market").color(DesignSystem::TEXT_SECONDARY),
                );
                ui.label(config.default_market.to_string());
                ui.end_row();

                ui.label(egui::RichText::new("Window size").color(DesignSystem::TEXT_SECONDARY));
                ui.label(format!(
                    "{:.0} x {:.0}",
                    config.window_width, config.window_height
                ));
                ui.end_row();
            });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new()
        .title("ENVIRONMENT")
        .subtitle("Read once at startup, from the environment or a .env file.")
        .show(ui, |ui| {
            for var in ["DEFAULT_MARKET", "WINDOW_WIDTH", "WINDOW_HEIGHT"] {
                ui.label(
                    egui::RichText::new(var)
                        .monospace()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            }
        });
}
