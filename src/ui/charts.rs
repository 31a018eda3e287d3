use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::aggregate::{
    cross_section_profile, launch_trend, mission_distribution, shape_class_mass, size_vs_mass,
};
use crate::state::AppState;

const ACTIVE_COLOR: Color32 = Color32::from_rgb(35, 168, 224);
const INACTIVE_COLOR: Color32 = Color32::from_rgb(255, 99, 132);

/// Render the five charts over the filtered sequence.
pub fn charts_view(ui: &mut Ui, state: &AppState) {
    let records = state.visible_records();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            launch_trend_chart(ui, &records);
            ui.separator();
            mission_distribution_chart(ui, &records);
            ui.separator();
            shape_class_mass_chart(ui, &records);
            ui.separator();
            size_vs_mass_chart(ui, &records);
            ui.separator();
            cross_section_chart(ui, &records);
        });
}

// ---------------------------------------------------------------------------
// Launch trend – active vs inactive counts per launch year
// ---------------------------------------------------------------------------

fn launch_trend_chart(ui: &mut Ui, records: &[&crate::data::Record]) {
    let trend = launch_trend(records);
    ui.heading("Launch Trend by Year");

    let labels = trend.labels.clone();
    let to_line = |counts: &[u32]| -> PlotPoints {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| [i as f64, f64::from(c)])
            .collect()
    };
    let active = Line::new(to_line(&trend.active))
        .name("Active Satellites")
        .color(ACTIVE_COLOR)
        .width(1.5);
    let inactive = Line::new(to_line(&trend.inactive))
        .name("Inactive Satellites")
        .color(INACTIVE_COLOR)
        .width(1.5);

    Plot::new("launch_trend")
        .legend(Legend::default())
        .height(240.0)
        .x_axis_label("Launch Year")
        .y_axis_label("Satellite Count")
        .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(active);
            plot_ui.line(inactive);
        });
}

// ---------------------------------------------------------------------------
// Mission distribution – count per mission type
// ---------------------------------------------------------------------------

fn mission_distribution_chart(ui: &mut Ui, records: &[&crate::data::Record]) {
    let dist = mission_distribution(records);
    ui.heading("Mission Type Distribution");

    let colors = ColorMap::new(&dist.labels);
    let bars: Vec<Bar> = dist
        .labels
        .iter()
        .zip(&dist.counts)
        .enumerate()
        .map(|(i, (label, &count))| {
            Bar::new(i as f64, f64::from(count))
                .name(label)
                .fill(colors.color_for(label))
                .width(0.6)
        })
        .collect();

    let labels = dist.labels.clone();
    Plot::new("mission_distribution")
        .legend(Legend::default())
        .height(240.0)
        .y_axis_label("Satellite Count")
        .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Mission Type"));
        });
}

// ---------------------------------------------------------------------------
// Grouped mean – average mass per shape × object class
// ---------------------------------------------------------------------------

fn shape_class_mass_chart(ui: &mut Ui, records: &[&crate::data::Record]) {
    let means = shape_class_mass(records);
    ui.heading("Avg Mass by Shape & Object Class");

    let colors = ColorMap::new(&means.series_names);
    let n_series = means.series_names.len().max(1);
    let group_width = 0.8;
    let bar_width = group_width / n_series as f64;

    let charts: Vec<BarChart> = means
        .series_names
        .iter()
        .enumerate()
        .map(|(s, class)| {
            let bars: Vec<Bar> = means
                .cells
                .iter()
                .enumerate()
                .filter_map(|(row, cells)| {
                    // None cells are absent combinations, not zero means;
                    // skip the bar entirely.
                    let mean = cells[s]?;
                    let x = row as f64 - group_width / 2.0
                        + bar_width * (s as f64 + 0.5);
                    Some(Bar::new(x, mean).width(bar_width * 0.9))
                })
                .collect();
            BarChart::new(bars)
                .name(class)
                .color(colors.color_for(class))
        })
        .collect();

    let labels = means.row_labels.clone();
    Plot::new("shape_class_mass")
        .legend(Legend::default())
        .height(240.0)
        .x_axis_label("Shape")
        .y_axis_label("Avg Mass (kg)")
        .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Size vs mass scatter
// ---------------------------------------------------------------------------

fn size_vs_mass_chart(ui: &mut Ui, records: &[&crate::data::Record]) {
    let points = size_vs_mass(records);
    ui.heading("Mass vs Volume");

    let coords: PlotPoints = points.iter().map(|p| [p.x, p.y]).collect();
    let scatter = Points::new(coords)
        .name("Mass vs Volume")
        .color(ACTIVE_COLOR)
        .radius(3.0);

    Plot::new("size_vs_mass")
        .legend(Legend::default())
        .height(240.0)
        .x_axis_label("Volume (m³)")
        .y_axis_label("Mass (kg)")
        .show(ui, |plot_ui| {
            plot_ui.points(scatter);
        });
}

// ---------------------------------------------------------------------------
// Cross section vs span – three bars per record
// ---------------------------------------------------------------------------

fn cross_section_chart(ui: &mut Ui, records: &[&crate::data::Record]) {
    let profile = cross_section_profile(records);
    ui.heading("Cross Section vs Span");

    let series: [(&str, &[Option<f64>], Color32); 3] = [
        ("Min Cross Section (m²)", &profile.x_sect_min, ACTIVE_COLOR),
        ("Max Cross Section (m²)", &profile.x_sect_max, INACTIVE_COLOR),
        ("Span (m)", &profile.span, Color32::from_rgb(153, 102, 255)),
    ];
    let bar_width = 0.25;

    let charts: Vec<BarChart> = series
        .iter()
        .enumerate()
        .map(|(s, (name, values, color))| {
            let bars: Vec<Bar> = values
                .iter()
                .enumerate()
                .filter_map(|(i, v)| {
                    let v = (*v)?;
                    let x = i as f64 + bar_width * (s as f64 - 1.0);
                    Some(Bar::new(x, v).width(bar_width * 0.9))
                })
                .collect();
            BarChart::new(bars).name(*name).color(*color)
        })
        .collect();

    let labels = profile.labels.clone();
    Plot::new("cross_section")
        .legend(Legend::default())
        .height(240.0)
        .y_axis_label("Meters² or Meters")
        .x_axis_formatter(move |mark, _range| index_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Format an integer axis position as its category label; off-index marks
/// get no label.
fn index_label(labels: &[String], value: f64) -> String {
    if value.fract().abs() > 1e-6 || value < 0.0 {
        return String::new();
    }
    labels
        .get(value as usize)
        .cloned()
        .unwrap_or_default()
}
