use crate::interfaces::app::DeskApp;
use crate::interfaces::dashboard_components::{
    render_calculator, render_market_data, render_overview, render_portfolio, render_settings,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui_components::{DashboardView, render_sidebar};
use chrono::Utc;
use eframe::egui;

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // --- Top Status Bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("📈 TradeDesk");
                ui.separator();
                ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .color(DesignSystem::TEXT_MUTED)
                            .small(),
                    );
                });
            });
        });

        // --- Left Sidebar: Navigation ---
        egui::SidePanel::left("nav_panel")
            .exact_width(100.0)
            .resizable(false)
            .frame(egui::Frame::NONE.fill(DesignSystem::BG_PANEL))
            .show(ctx, |ui| {
                render_sidebar(ui, &mut self.current_view);
            });

        // --- Central Panel: Active View ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.current_view {
                        DashboardView::Overview => render_overview(ui),
                        DashboardView::MarketData => render_market_data(ui),
                        DashboardView::Calculator => render_calculator(ui, &mut self.calculator),
                        DashboardView::Portfolio => render_portfolio(ui),
                        DashboardView::Settings => render_settings(ui, &self.config),
                    });
            });

        // Keep the clock in the top bar ticking.
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}
