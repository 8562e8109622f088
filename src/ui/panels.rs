use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::pipeline::AnalysisResult;
use crate::data::model::Dataset;
use crate::state::AppState;

/// Rows shown in the dataset preview table.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Left side panel – column selection and regression report
// ---------------------------------------------------------------------------

/// Render the left analysis panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Inverse Square Law");
    ui.label(
        "Upload a CSV of radiation counts at varying distances, pick the \
         distance and counts columns, and a linear model of count rate \
         against 1/d² is fitted to check the inverse square law.",
    );
    ui.separator();

    let columns = match &state.dataset {
        Some(ds) => ds.column_names.clone(),
        None => {
            ui.label("Awaiting CSV file to be uploaded for analysis.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Column selectors ----
            ui.strong("Distance column (in meters)");
            column_selector(ui, "distance_col", &columns, state, true);
            ui.add_space(4.0);

            ui.strong("Counts column");
            column_selector(ui, "count_col", &columns, state, false);
            ui.separator();

            // ---- Regression report ----
            match &state.analysis {
                Some(Ok(result)) => regression_report(ui, result),
                Some(Err(e)) => {
                    ui.label(RichText::new(format!("Error: {e}")).color(Color32::RED));
                }
                None => {
                    ui.label("Select both columns to run the analysis.");
                }
            }
        });
}

fn column_selector(
    ui: &mut Ui,
    id: &str,
    columns: &[String],
    state: &mut AppState,
    is_distance: bool,
) {
    let current = if is_distance {
        state.distance_column.clone()
    } else {
        state.count_column.clone()
    }
    .unwrap_or_default();

    egui::ComboBox::from_id_salt(id)
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in columns {
                if ui.selectable_label(current == *col, col).clicked() {
                    if is_distance {
                        state.set_distance_column(col.clone());
                    } else {
                        state.set_count_column(col.clone());
                    }
                }
            }
        });
}

/// The five statistics, each with the interpretive caption, then the
/// threshold verdict.
fn regression_report(ui: &mut Ui, result: &AnalysisResult) {
    let reg = &result.regression;

    ui.heading("Regression Analysis");
    ui.add_space(4.0);

    statistic(
        ui,
        &format!("Slope (proportional to intensity): {:.4}", reg.slope),
        "Change in count rate per unit change in the inverse square of \
         distance. A higher slope indicates a stronger relationship \
         between distance and count rate.",
    );
    statistic(
        ui,
        &format!("Intercept: {:.4}", reg.intercept),
        "Expected count rate when the inverse square distance is zero. \
         Theoretically an extrapolation, since the inverse square \
         distance cannot be zero.",
    );
    statistic(
        ui,
        &format!("R-squared value: {:.4}", reg.r_squared()),
        "Proportion of the variance in count rate predictable from the \
         inverse square distance. Values closer to 1 suggest a stronger \
         relationship.",
    );
    statistic(
        ui,
        &format!("p-value of the regression: {:.4}", reg.p_value),
        "Significance of the slope. A p-value below 0.05 typically \
         indicates strong evidence against the null hypothesis of no \
         relationship.",
    );
    statistic(
        ui,
        &format!("Standard error of the estimate: {:.4}", reg.std_err),
        "Accuracy of the slope estimate. Lower values indicate a model \
         that more accurately fits the data.",
    );

    ui.separator();
    ui.label(RichText::new(result.conclusion.to_string()).strong().size(15.0));
}

fn statistic(ui: &mut Ui, value_line: &str, caption: &str) {
    ui.strong(value_line);
    ui.label(RichText::new(caption).weak().small());
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Bottom panel – dataset preview
// ---------------------------------------------------------------------------

/// Render the first rows of the raw dataset.
pub fn preview_table(ui: &mut Ui, dataset: &Dataset) {
    ui.strong(format!(
        "First rows of your dataset ({} rows total)",
        dataset.len()
    ));

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true).at_least(60.0), dataset.n_columns())
        .header(20.0, |mut header| {
            for name in &dataset.column_names {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for row in dataset.head(PREVIEW_ROWS) {
                body.row(18.0, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows × {} columns loaded",
                ds.len(),
                ds.n_columns()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open measurement data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.column_names
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
