use eframe::egui;

use crate::state::{AppState, ViewMode};
use crate::ui::{charts, grid, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SatScopeApp {
    pub state: AppState,
}

impl SatScopeApp {
    pub fn new(endpoint: String) -> Self {
        Self {
            state: AppState::new(endpoint),
        }
    }
}

impl eframe::App for SatScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The one-shot fetch resolves exactly once; poll until it does.
        self.state.poll_fetch();

        // ---- Top panel: sort / search / export / compare ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: records or charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.state.filters_applied {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Set filters and press Apply to browse the catalog");
                });
            } else if self.state.visible.is_empty() {
                // EmptyResult is an explicit UI state, not an error.
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("No matching satellites found.");
                });
            } else {
                match self.state.view_mode {
                    ViewMode::Cards => grid::record_grid(ui, &mut self.state),
                    ViewMode::Charts => charts::charts_view(ui, &self.state),
                }
            }
        });

        // ---- Windows ----
        grid::detail_window(ctx, &mut self.state);
        grid::comparison_window(ctx, &mut self.state);
    }
}
