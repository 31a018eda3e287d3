use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};
use std::io::Write;

use crate::data::export;
use crate::state::{AppState, ViewMode};

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel. All widgets edit the draft criteria; nothing
/// reaches the evaluator until Apply snapshots the draft.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.loading {
        ui.horizontal(|ui: &mut Ui| {
            ui.spinner();
            ui.label("Loading catalog…");
        });
        return;
    }

    let missions = state.catalog.missions.clone();
    let classes = state.catalog.object_classes.clone();
    let shapes = state.catalog.shapes.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            category_combo(ui, "Mission", &mut state.draft.mission, &missions);
            category_combo(
                ui,
                "Active",
                &mut state.draft.active,
                &["true".to_string(), "false".to_string()],
            );
            category_combo(ui, "Object Class", &mut state.draft.object_class, &classes);
            category_combo(ui, "Shape", &mut state.draft.shape, &shapes);

            ui.add_space(4.0);
            ui.strong("Launch year");
            ui.add(TextEdit::singleline(&mut state.draft.year).hint_text("e.g. 2021"));

            ui.add_space(4.0);
            range_inputs(ui, "Mass (kg)", &mut state.draft.mass_min, &mut state.draft.mass_max);
            range_inputs(ui, "Depth (m)", &mut state.draft.depth_min, &mut state.draft.depth_max);
            range_inputs(
                ui,
                "Height (m)",
                &mut state.draft.height_min,
                &mut state.draft.height_max,
            );
            range_inputs(ui, "Width (m)", &mut state.draft.width_min, &mut state.draft.width_max);
            range_inputs(ui, "Span (m)", &mut state.draft.span_min, &mut state.draft.span_max);
            range_inputs(
                ui,
                "Cross section (m²)",
                &mut state.draft.x_sect_min,
                &mut state.draft.x_sect_max,
            );

            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Apply").clicked() {
                    state.apply_filters();
                }
                if ui.button("Reset").clicked() {
                    state.reset_filters();
                }
            });

            ui.add_space(8.0);
            ui.strong("View");
            ui.horizontal(|ui: &mut Ui| {
                ui.selectable_value(&mut state.view_mode, ViewMode::Cards, "Cards");
                ui.selectable_value(&mut state.view_mode, ViewMode::Charts, "Charts");
            });
        });
}

/// A combo box over the distinct values of a categorical attribute, with an
/// explicit "(any)" entry mapping to the empty criterion.
fn category_combo(ui: &mut Ui, label: &str, criterion: &mut String, options: &[String]) {
    ui.strong(label);
    let selected = if criterion.is_empty() {
        "(any)".to_string()
    } else {
        criterion.clone()
    };
    egui::ComboBox::from_id_salt(label)
        .selected_text(selected)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(criterion.is_empty(), "(any)").clicked() {
                criterion.clear();
            }
            for option in options {
                if ui
                    .selectable_label(criterion == option, option)
                    .clicked()
                {
                    *criterion = option.clone();
                }
            }
        });
    ui.add_space(2.0);
}

/// Min/max text inputs for one numeric range criterion.
fn range_inputs(ui: &mut Ui, label: &str, min: &mut String, max: &mut String) {
    ui.strong(label);
    ui.horizontal(|ui: &mut Ui| {
        ui.add(TextEdit::singleline(min).hint_text("min").desired_width(70.0));
        ui.add(TextEdit::singleline(max).hint_text("max").desired_width(70.0));
    });
    ui.add_space(2.0);
}

// ---------------------------------------------------------------------------
// Top bar – sort, search, export, compare
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label("Sort by:");
        egui::ComboBox::from_id_salt("sort_by")
            .selected_text(state.sort_option.label())
            .show_ui(ui, |ui: &mut Ui| {
                for option in crate::data::sort::SortOption::ALL {
                    if ui
                        .selectable_label(state.sort_option == option, option.label())
                        .clicked()
                    {
                        state.sort_option = option;
                    }
                }
            });

        ui.separator();

        ui.add(
            TextEdit::singleline(&mut state.search)
                .hint_text("Search by name or ID…")
                .desired_width(220.0),
        );

        ui.separator();

        if state.filters_applied && !state.visible.is_empty() {
            if ui.button("Export as CSV").clicked() {
                export_csv(state);
            }
            if state.comparison.is_eligible()
                && ui
                    .button(format!("Compare {} satellites", state.comparison.len()))
                    .clicked()
            {
                state.show_comparison = true;
            }
        }

        ui.separator();

        if !state.catalog.is_empty() {
            ui.label(format!(
                "{} records loaded, {} matching",
                state.catalog.len(),
                state.visible.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// CSV delivery
// ---------------------------------------------------------------------------

/// Ask where to save, then serialize the filtered, currently-sorted
/// sequence. Delivery failures surface in the status line, not as errors.
fn export_csv(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered records")
        .set_file_name(format!("{}.csv", export::EXPORT_FILENAME))
        .add_filter("CSV", &["csv"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let records = state.sorted_records();
    let row_count = records.len();
    let result = std::fs::File::create(&path)
        .map_err(anyhow::Error::from)
        .and_then(|mut f| {
            export::write_csv(&records, &mut f)?;
            f.flush()?;
            Ok(())
        });
    drop(records);

    match result {
        Ok(()) => {
            log::info!("exported {row_count} rows to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("CSV export failed: {e:#}");
            state.status_message = Some(format!("Export failed: {e:#}"));
        }
    }
}
