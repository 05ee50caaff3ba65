use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotBounds, PlotPoint,
    PlotPoints, Points, Text,
};

use crate::chart::bar::BarChartSpec;
use crate::chart::radar::RadarChartSpec;
use crate::chart::scatter::ScatterChartSpec;
use crate::chart::ChartSet;

const CHART_HEIGHT: f32 = 340.0;
const GRID_COLOR: Color32 = Color32::from_gray(90);

/// Render all three charts stacked in the central panel.
pub fn chart_stack(ui: &mut Ui, charts: &ChartSet) {
    clustered_bar(ui, &charts.bar);
    ui.separator();
    radar(ui, &charts.radar);
    ui.separator();
    scatter(ui, &charts.scatter);
}

// ---------------------------------------------------------------------------
// Clustered bar chart
// ---------------------------------------------------------------------------

fn clustered_bar(ui: &mut Ui, spec: &BarChartSpec) {
    ui.heading(&spec.title);

    let companies = spec.companies.clone();
    let n_series = spec.series.len().max(1);
    let bar_width = 0.8 / n_series as f64;

    Plot::new("clustered_bar")
        .legend(Legend::default())
        .y_axis_label(&spec.y_label)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            companies.get(idx as usize).cloned().unwrap_or_default()
        })
        .height(CHART_HEIGHT)
        .show(ui, |plot_ui| {
            for (series_idx, series) in spec.series.iter().enumerate() {
                // Bars of one category sit side-by-side within each
                // company's cluster.
                let offset = (series_idx as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
                let bars: Vec<Bar> = series
                    .values
                    .iter()
                    .filter_map(|(company, pct)| {
                        let cluster = spec.companies.iter().position(|c| c == company)?;
                        Some(Bar::new(cluster as f64 + offset, *pct).width(bar_width))
                    })
                    .collect();

                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&series.category)
                        .color(series.color),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Radar chart (polar polygons drawn in cartesian space)
// ---------------------------------------------------------------------------

/// Angle of category `i` out of `n`, starting at the top and going
/// clockwise.
fn radar_angle(i: usize, n: usize) -> f64 {
    TAU / 4.0 - TAU * i as f64 / n as f64
}

fn radar(ui: &mut Ui, spec: &RadarChartSpec) {
    ui.heading(&spec.title);

    let n = spec.categories.len();

    Plot::new("radar")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .height(CHART_HEIGHT)
        .show(ui, |plot_ui| {
            if n == 0 || spec.axis_max <= 0.0 {
                return;
            }

            // Spokes and category labels; radial tick labels stay hidden.
            for (i, category) in spec.categories.iter().enumerate() {
                let angle = radar_angle(i, n);
                let spoke = vec![
                    [0.0, 0.0],
                    [spec.axis_max * angle.cos(), spec.axis_max * angle.sin()],
                ];
                plot_ui.line(Line::new(PlotPoints::new(spoke)).color(GRID_COLOR).width(0.5));

                let label_r = spec.axis_max * 1.12;
                plot_ui.text(Text::new(
                    PlotPoint::new(label_r * angle.cos(), label_r * angle.sin()),
                    RichText::new(category).size(12.0),
                ));
            }

            // Outer ring marking the axis maximum.
            let ring: Vec<[f64; 2]> = (0..=64)
                .map(|k| {
                    let a = TAU * k as f64 / 64.0;
                    [spec.axis_max * a.cos(), spec.axis_max * a.sin()]
                })
                .collect();
            plot_ui.line(Line::new(PlotPoints::new(ring)).color(GRID_COLOR).width(0.5));

            // One closed outline per company; fill stays transparent.
            for series in &spec.series {
                let outline: Vec<[f64; 2]> = series
                    .points
                    .iter()
                    .filter_map(|(radius, category)| {
                        let i = spec.categories.iter().position(|c| c == category)?;
                        let angle = radar_angle(i, n);
                        Some([radius * angle.cos(), radius * angle.sin()])
                    })
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::new(outline))
                        .name(&series.company)
                        .color(series.color)
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Max-score scatter chart
// ---------------------------------------------------------------------------

fn scatter(ui: &mut Ui, spec: &ScatterChartSpec) {
    ui.heading(&spec.title);
    if let Some(note) = &spec.note {
        ui.label(note);
    }

    let categories = spec.categories.clone();
    let n_rows = spec.categories.len();
    let (x_min, x_max) = spec.x_range;

    Plot::new("max_score_scatter")
        .legend(Legend::default())
        .x_axis_label(&spec.x_label)
        .x_grid_spacer(uniform_grid_spacer(|_| [6.0, 3.0, 1.0]))
        .x_axis_formatter(|mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            format!("{idx:.0}")
        })
        .y_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            categories.get(idx as usize).cloned().unwrap_or_default()
        })
        .height(CHART_HEIGHT)
        .show(ui, |plot_ui| {
            // The score axis is pinned to its fixed range.
            let y_max = if n_rows == 0 { 1.0 } else { n_rows as f64 - 0.5 };
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [x_min, -0.5],
                [x_max, y_max],
            ));

            for marker in &spec.markers {
                let mut points = Points::new(vec![[marker.x, marker.row as f64]])
                    .color(marker.color)
                    .shape(MarkerShape::Circle)
                    .radius(6.0);
                if marker.show_legend {
                    points = points.name(&marker.company);
                }
                plot_ui.points(points);
            }
        });
}
