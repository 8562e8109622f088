use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Fit plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter of measured points with the fitted line overlaid.
pub fn fit_plot(ui: &mut Ui, state: &AppState) {
    let analysis = match &state.analysis {
        Some(a) => a,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV file to begin  (File → Open CSV…)");
            });
            return;
        }
    };

    let result = match analysis {
        Ok(r) => r,
        Err(e) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new(format!("Error: {e}")).color(Color32::RED).size(16.0));
            });
            return;
        }
    };

    let scatter: PlotPoints = result
        .inverse_square_distance
        .iter()
        .zip(result.count_rate.iter())
        .map(|(&x, &y)| [x, y])
        .collect();

    // Fit line across the observed x range.
    let reg = &result.regression;
    let (x_min, x_max) = result
        .inverse_square_distance
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    let fit: PlotPoints = [x_min, x_max]
        .iter()
        .map(|&x| [x, reg.intercept + reg.slope * x])
        .collect();

    Plot::new("fit_plot")
        .legend(Legend::default())
        .x_axis_label("Inverse Square of Distance (1/m²)")
        .y_axis_label("Count Rate (counts/s)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(scatter)
                    .name("Original data")
                    .color(Color32::LIGHT_BLUE)
                    .radius(5.0),
            );
            plot_ui.line(
                Line::new(fit)
                    .name("Fitted line")
                    .color(Color32::RED)
                    .width(1.5),
            );
        });
}
