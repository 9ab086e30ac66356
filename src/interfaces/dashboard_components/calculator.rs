use crate::domain::market::{Market, SecurityType};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::CalculatorForm;
use eframe::egui;

/// Break-even calculator view: trade inputs on top, the editable fee
/// schedule below them, result card underneath.
pub fn render_calculator(ui: &mut egui::Ui, form: &mut CalculatorForm) {
    ui.heading("Break-Even Calculator");
    ui.label(
        egui::RichText::new("The sell price at which a position stops losing money after fees.")
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Market")
                    .size(12.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);
            for market in Market::ALL {
                if ui
                    .selectable_label(form.market == market, market.to_string())
                    .clicked()
                {
                    form.set_market(market);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Security")
                    .size(12.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);
            for security in SecurityType::ALL {
                if ui
                    .selectable_label(form.security == security, security.to_string())
                    .clicked()
                {
                    form.set_security(security);
                }
            }
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        egui::Grid::new("trade_inputs")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label("Buy price");
                ui.add(
                    egui::TextEdit::singleline(&mut form.buy_price)
                        .desired_width(140.0)
                        .hint_text(format!("e.g. 10.00 ({})", form.market.currency()))
                        .font(egui::TextStyle::Monospace),
                );
                ui.end_row();

                ui.label("Quantity");
                ui.add(
                    egui::TextEdit::singleline(&mut form.quantity)
                        .desired_width(140.0)
                        .hint_text("number of shares")
                        .font(egui::TextStyle::Monospace),
                );
                ui.end_row();
            });

        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.collapsing("Fee schedule", |ui| {
            egui::Grid::new("fee_inputs")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    fee_row(ui, "Commission rate", &mut form.commission_rate);
                    fee_row(ui, "Minimum commission", &mut form.min_commission);
                    match form.market {
                        Market::AShare => {
                            fee_row(ui, "Stamp duty rate (sell)", &mut form.stamp_duty_rate);
                            fee_row(ui, "Transfer fee rate", &mut form.transfer_fee_rate);
                        }
                        Market::HongKong => {
                            fee_row(ui, "Stamp duty rate", &mut form.stamp_duty_rate);
                            fee_row(ui, "Trading fee rate", &mut form.trading_fee_rate);
                            fee_row(ui, "Settlement fee rate", &mut form.settlement_fee_rate);
                        }
                        Market::Us => {
                            fee_row(ui, "SEC fee rate (sell)", &mut form.sec_fee_rate);
                        }
                    }
                });

            ui.add_space(DesignSystem::SPACING_SMALL);
            if ui
                .button(
                    egui::RichText::new("Reset default fees")
                        .size(11.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                )
                .clicked()
            {
                form.reset_fees();
            }
        });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let calculate = egui::Button::new(
            egui::RichText::new("Calculate")
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(DesignSystem::ACCENT_PRIMARY)
        .min_size(egui::vec2(120.0, 28.0));

        if ui.add(calculate).clicked() {
            form.calculate();
        }
    });

    if let Some(error) = &form.error {
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.colored_label(DesignSystem::DANGER, error);
    }

    if let Some(summary) = form.summary() {
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        Card::new().title("BREAK-EVEN PRICE").active(true).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&summary.sell_price)
                        .size(28.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);

                let pill_color = if summary.requires_gain {
                    DesignSystem::WARNING
                } else {
                    DesignSystem::SUCCESS
                };
                egui::Frame::NONE
                    .fill(pill_color.linear_multiply(0.15))
                    .corner_radius(DesignSystem::ROUNDING_LARGE)
                    .inner_margin(egui::Margin::symmetric(8, 4))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&summary.percent)
                                .size(12.0)
                                .strong()
                                .color(pill_color),
                        );
                    });
            });
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Sell at or above this price to cover all fees.")
                    .size(11.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
        });
    }
}

fn fee_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(egui::RichText::new(label).color(DesignSystem::TEXT_SECONDARY));
    ui.add(
        egui::TextEdit::singleline(value)
            .desired_width(140.0)
            .font(egui::TextStyle::Monospace),
    );
    ui.end_row();
}
