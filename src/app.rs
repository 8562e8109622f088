use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct InvsqLabApp {
    pub state: AppState,
}

impl Default for InvsqLabApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for InvsqLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column selection + report ----
        egui::SidePanel::left("analysis_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: first rows of the raw dataset ----
        if let Some(dataset) = self.state.dataset.clone() {
            egui::TopBottomPanel::bottom("preview_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    panels::preview_table(ui, &dataset);
                });
        }

        // ---- Central panel: scatter + fitted line ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::fit_plot(ui, &self.state);
        });
    }
}
