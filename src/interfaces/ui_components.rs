use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Dashboard View enumeration for Sidebar Navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Overview,
    MarketData,
    Calculator,
    Portfolio,
    Settings,
}

impl DashboardView {
    pub const ALL: [DashboardView; 5] = [
        DashboardView::Overview,
        DashboardView::MarketData,
        DashboardView::Calculator,
        DashboardView::Portfolio,
        DashboardView::Settings,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardView::Overview => "📊",
            DashboardView::MarketData => "📈",
            DashboardView::Calculator => "🧮",
            DashboardView::Portfolio => "💼",
            DashboardView::Settings => "⚙️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::MarketData => "Markets",
            DashboardView::Calculator => "Calculator",
            DashboardView::Portfolio => "Portfolio",
            DashboardView::Settings => "Settings",
        }
    }
}

pub fn render_sidebar(ui: &mut egui::Ui, current_view: &mut DashboardView) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);

        for view in DashboardView::ALL {
            let is_selected = *current_view == view;

            let bg_color = if is_selected {
                DesignSystem::BG_CARD_HOVER
            } else {
                egui::Color32::TRANSPARENT
            };

            let stroke = if is_selected {
                egui::Stroke::new(1.5, DesignSystem::ACCENT_PRIMARY)
            } else {
                egui::Stroke::NONE
            };

            egui::Frame::NONE
                .fill(bg_color)
                .corner_radius(DesignSystem::ROUNDING_MEDIUM)
                .stroke(stroke)
                .inner_margin(egui::Margin::symmetric(0, 12))
                .show(ui, |ui| {
                    ui.set_width(80.0);
                    if ui
                        .vertical_centered(|ui| {
                            ui.label(egui::RichText::new(view.icon()).size(24.0));
                            ui.add_space(4.0);
                            ui.label(
                                egui::RichText::new(view.label())
                                    .size(10.0)
                                    .color(if is_selected {
                                        DesignSystem::TEXT_PRIMARY
                                    } else {
                                        DesignSystem::TEXT_SECONDARY
                                    }),
                            );
                        })
                        .response
                        .interact(egui::Sense::click())
                        .clicked()
                    {
                        *current_view = view;
                    }
                });

            ui.add_space(15.0);
        }
    });
}
