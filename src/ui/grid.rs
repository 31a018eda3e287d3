use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate;
use crate::data::compare::{comparison_table, MAX_COMPARE};
use crate::data::model::MISSING;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Record table (cards view)
// ---------------------------------------------------------------------------

/// Render the summary strip and the filtered record table.
pub fn record_grid(ui: &mut Ui, state: &mut AppState) {
    let summary = aggregate::summarize(&state.visible_records());
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(format!("{} satellites", summary.total));
        ui.separator();
        ui.label(format!("{} active", summary.active));
        ui.separator();
        match summary.mean_mass {
            Some(mean) => ui.label(format!("avg mass {mean:.1} kg")),
            None => ui.label("avg mass —"),
        };
        ui.separator();
        ui.label(format!("{} shapes", summary.distinct_shapes));
    });
    ui.add_space(6.0);

    let displayed: Vec<i64> = state.displayed_records().iter().map(|r| r.id()).collect();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto()) // compare checkbox
        .column(Column::auto()) // id
        .column(Column::remainder()) // name
        .column(Column::auto()) // mission
        .column(Column::auto()) // mass
        .column(Column::auto()) // active
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Compare");
            });
            header.col(|ui| {
                ui.strong("ID");
            });
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Mission");
            });
            header.col(|ui| {
                ui.strong("Mass (kg)");
            });
            header.col(|ui| {
                ui.strong("Active");
            });
        })
        .body(|mut body| {
            for id in displayed {
                let Some(rec) = state.catalog.by_id(id) else {
                    continue;
                };
                let a = rec.attributes.clone();
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let mut checked = state.comparison.contains(id);
                        let full =
                            !checked && state.comparison.len() == MAX_COMPARE;
                        let response = ui.checkbox(&mut checked, "");
                        if response.changed() {
                            state.comparison.toggle(id);
                        }
                        if full {
                            response.on_hover_text(
                                "Selecting another satellite replaces the oldest selection",
                            );
                        }
                    });
                    row.col(|ui| {
                        ui.label(id.to_string());
                    });
                    row.col(|ui| {
                        if ui.link(&a.name).clicked() {
                            state.detail = Some(id);
                        }
                    });
                    row.col(|ui| {
                        ui.label(a.mission.as_deref().unwrap_or(MISSING));
                    });
                    row.col(|ui| {
                        ui.label(
                            a.mass
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| MISSING.to_string()),
                        );
                    });
                    row.col(|ui| {
                        ui.label(match a.active {
                            Some(true) => "yes",
                            Some(false) => "no",
                            None => MISSING,
                        });
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Detail window
// ---------------------------------------------------------------------------

/// Modal-style window enumerating every attribute of one record, known
/// fields first, then the dynamic extras.
pub fn detail_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(id) = state.detail else {
        return;
    };
    let Some(rec) = state.catalog.by_id(id) else {
        state.detail = None;
        return;
    };
    let entries = rec.attributes.entries();
    let title = format!("Satellite Details — #{id}");

    let mut open = true;
    egui::Window::new(title)
        .open(&mut open)
        .resizable(true)
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                egui::Grid::new("detail_grid")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui: &mut Ui| {
                        for (label, value) in &entries {
                            ui.strong(label);
                            ui.label(value);
                            ui.end_row();
                        }
                    });
            });
        });
    if !open {
        state.detail = None;
    }
}

// ---------------------------------------------------------------------------
// Comparison window
// ---------------------------------------------------------------------------

/// Side-by-side attribute table over the comparison selection. Lookups span
/// the full store, so a compared record stays visible even when the applied
/// filter would hide it.
pub fn comparison_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_comparison {
        return;
    }
    if !state.comparison.is_eligible() {
        state.show_comparison = false;
        return;
    }

    let table = comparison_table(&state.catalog, &state.comparison);

    let mut open = true;
    egui::Window::new("Satellite Comparison")
        .open(&mut open)
        .resizable(true)
        .show(ctx, |ui: &mut Ui| {
            egui::Grid::new("comparison_grid")
                .num_columns(table.columns.len() + 1)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    for column in &table.columns {
                        ui.strong(RichText::new(column));
                    }
                    ui.end_row();
                    for (label, cells) in &table.rows {
                        ui.strong(label);
                        for cell in cells {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
    if !open {
        state.show_comparison = false;
    }
}
