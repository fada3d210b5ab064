use eframe::egui;
use std::time::Instant;

mod chat_panel;
mod sections;
mod state;
mod style;
mod utils;

use state::AppState;
use style::EguiRoot;
use utils::{load_settings_or_default, save_settings};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let (settings, found) = load_settings_or_default();
    if !found {
        // First run: write the defaults so they can be edited
        save_settings(&settings);
    }
    let state = AppState::from_settings(settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([420.0, 600.0]),
        vsync: true,
        ..Default::default()
    };
    let title = format!("{} | Portfolio", state.portfolio.personal.name);
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            state.theme.apply(&mut EguiRoot(&cc.egui_ctx));
            Box::new(PortfolioApp { state })
        }),
    )
    .map_err(|e| anyhow::anyhow!("window error: {}", e))
}

struct PortfolioApp {
    state: AppState,
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let s = &mut self.state;

        // Finished deliveries and banner expiry
        if let Some(remaining) = s.poll_contact(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(6.0);
            sections::navbar(ui, s);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(860.0);
                        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                            ui.add_space(24.0);
                            sections::hero(ui, s);
                            sections::about(ui, s);
                            sections::skills(ui, s);
                            sections::experience(ui, s);
                            sections::projects(ui, s);
                            sections::contact(ui, s);
                            sections::footer(ui, s);
                        });
                    });
                });
        });

        chat_panel::show(ctx, s);

        if s.contact.is_submitting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
